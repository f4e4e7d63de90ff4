//! Built-in listings the admin catalog starts from when no seed file is configured.

use crate::domain::{Category, Product, ProductId, DEFAULT_OWNER};

pub fn mock_products() -> Vec<Product> {
    vec![
        listing(
            1,
            "AK-74M",
            450.0,
            Category::Rifle,
            "https://picsum.photos/id/1/600/400",
            "Standard issue assault rifle, lightly used.",
            DEFAULT_OWNER,
        ),
        listing(
            2,
            "Glock 17",
            320.0,
            Category::Pistol,
            "https://picsum.photos/id/2/600/400",
            "Compact sidearm with two magazines.",
            "Khaled",
        ),
        listing(
            3,
            "Remington 870",
            390.0,
            Category::Shotgun,
            "https://picsum.photos/id/3/600/400",
            "Pump action, 12 gauge.",
            "Omar",
        ),
        listing(
            4,
            "Barrett M82",
            2100.0,
            Category::Sniper,
            "https://picsum.photos/id/4/600/400",
            "Long range platform with scope.",
            DEFAULT_OWNER,
        ),
        listing(
            5,
            "Tactical Vest",
            85.5,
            Category::Gear,
            "https://picsum.photos/id/5/600/400",
            "Plate carrier with MOLLE webbing.",
            "Sara",
        ),
    ]
}

fn listing(
    id: i64,
    name: &str,
    price: f64,
    category: Category,
    image: &str,
    description: &str,
    owner: &str,
) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        price,
        category,
        image: image.to_string(),
        description: description.to_string(),
        owner: owner.to_string(),
    }
}

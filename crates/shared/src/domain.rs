use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

pub const DEFAULT_OWNER: &str = "Admin";
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/id/10/600/400";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(ProductId)
            .map_err(|_| CatalogError::validation(format!("invalid product id '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Rifle,
    Pistol,
    Shotgun,
    Sniper,
    Gear,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Rifle,
        Category::Pistol,
        Category::Shotgun,
        Category::Sniper,
        Category::Gear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Rifle => "Rifle",
            Category::Pistol => "Pistol",
            Category::Shotgun => "Shotgun",
            Category::Sniper => "Sniper",
            Category::Gear => "Gear",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CatalogError::validation(format!(
                    "unknown category '{wanted}'; expected one of Rifle, Pistol, Shotgun, Sniper, Gear"
                ))
            })
    }
}

/// A catalog listing as held by the record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: Category,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_owner")]
    pub owner: String,
}

impl Product {
    /// Owner as shown to the admin; blank owners read as the default owner.
    pub fn display_owner(&self) -> &str {
        if self.owner.trim().is_empty() {
            DEFAULT_OWNER
        } else {
            &self.owner
        }
    }
}

fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_owner() -> String {
    DEFAULT_OWNER.to_string()
}

/// Fields of a product that the edit form exposes. `id` is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Name,
    Price,
    Category,
    Image,
    Description,
    Owner,
}

impl ProductField {
    pub const ALL: [ProductField; 6] = [
        ProductField::Name,
        ProductField::Price,
        ProductField::Category,
        ProductField::Image,
        ProductField::Description,
        ProductField::Owner,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Price => "price",
            ProductField::Category => "category",
            ProductField::Image => "image",
            ProductField::Description => "description",
            ProductField::Owner => "owner",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ProductField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::validation(format!("unknown field '{wanted}'")))
    }
}

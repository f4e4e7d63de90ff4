use super::*;
use crate::labels::Locale;
use shared::{
    domain::{DEFAULT_OWNER, PLACEHOLDER_IMAGE},
    seed::mock_products,
};

fn english() -> &'static Labels {
    Labels::for_locale(Locale::En)
}

#[test]
fn prices_are_dollar_prefixed_without_trailing_zeros() {
    assert_eq!(format_price(500.0), "$500");
    assert_eq!(format_price(85.5), "$85.5");
    assert_eq!(format_price(0.0), "$0");
}

#[test]
fn rows_follow_store_order_with_one_based_index() {
    let records = mock_products();
    let view = render(&records, &EditSession::Closed, english());

    assert_eq!(view.total_listings, 5);
    assert_eq!(view.rows.len(), 5);
    assert!(view.empty_message.is_none());
    assert!(view.form.is_none());

    let second = &view.rows[1];
    assert_eq!(second.index, 2);
    assert_eq!(second.product_id, ProductId(2));
    assert_eq!(second.name, "Glock 17");
    assert_eq!(second.category, "Pistol");
    assert_eq!(second.price, "$320");
    assert_eq!(second.owner, "Khaled");
}

#[test]
fn blank_owner_renders_as_default() {
    let mut records = mock_products();
    records[0].owner.clear();
    let view = render(&records, &EditSession::Closed, english());
    assert_eq!(view.rows[0].owner, DEFAULT_OWNER);
}

#[test]
fn empty_store_renders_placeholder_message() {
    let view = render(&[], &EditSession::Closed, english());
    assert!(view.rows.is_empty());
    assert_eq!(view.empty_message, Some("No listings yet"));
    assert!(render_text(&view).contains("No listings yet"));
}

#[test]
fn create_form_uses_add_title_and_truncated_image_notice() {
    let mut session = EditSession::Closed;
    session.open_create(ProductId(42)).expect("open");
    let view = render(&mock_products(), &session, english());

    let form = view.form.expect("form");
    assert_eq!(form.mode, SessionMode::Create);
    assert_eq!(form.title, "Add new listing");
    assert_eq!(form.category_options, vec!["Rifle", "Pistol", "Shotgun", "Sniper", "Gear"]);

    let expected_preview: String = PLACEHOLDER_IMAGE.chars().take(30).collect();
    assert_eq!(
        form.image_notice,
        format!("A default image will be used: {expected_preview}...")
    );

    let price = form
        .fields
        .iter()
        .find(|f| f.field == ProductField::Price)
        .expect("price field");
    assert_eq!(price.value, "0");
    assert!(price.required);
}

#[test]
fn edit_form_shows_record_values() {
    let records = mock_products();
    let mut session = EditSession::Closed;
    session.open_edit(&records[4]).expect("open");
    let view = render(&records, &session, Labels::for_locale(Locale::Ar));

    let form = view.form.expect("form");
    assert_eq!(form.title, "تعديل الإعلان");
    let values: Vec<_> = form.fields.iter().map(|f| f.value.as_str()).collect();
    assert_eq!(
        values,
        vec![
            "Tactical Vest",
            "85.5",
            "Sara",
            "Gear",
            "Plate carrier with MOLLE webbing."
        ]
    );
}

#[test]
fn text_rendering_lists_every_row() {
    let records = mock_products();
    let text = render_text(&render(&records, &EditSession::Closed, english()));
    assert!(text.contains("Total listings: 5"));
    assert!(text.contains("Barrett M82 (Sniper)"));
    assert!(text.contains("$2100"));
    assert_eq!(text.matches("Edit / Delete").count(), 5);
}

#[test]
fn text_header_and_add_control_follow_locale() {
    let records = mock_products();
    let view = render(&records, &EditSession::Closed, Labels::for_locale(Locale::Ar));
    let text = render_text(&view);
    let header = text
        .lines()
        .find(|line| line.starts_with('#'))
        .expect("table header");
    assert!(header.contains("المعرّف"));
    assert!(header.contains("الصورة"));
    assert!(!header.contains("ID"));
    assert!(text.contains("[+ إضافة إعلان]"));
}

#[test]
fn text_rows_show_image_urls() {
    let mut records = mock_products();
    records[0].image = "https://img.example/ak.png".to_string();
    let view = render(&records, &EditSession::Closed, english());
    assert_eq!(view.add_action, "Add listing");

    let text = render_text(&view);
    let first_row = text
        .lines()
        .find(|line| line.contains("AK-74M"))
        .expect("first row");
    assert!(first_row.contains("https://img.example/ak.png"));
    assert!(text.contains("https://picsum.photos/id/2/600/400"));
}

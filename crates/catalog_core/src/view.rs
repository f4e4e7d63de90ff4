//! View projection of the catalog: a table of listings plus the optional form.
//!
//! [`render`] is a pure function of the store contents and the edit session;
//! [`render_text`] lays the result out for a terminal.

use std::fmt::Write as _;

use shared::domain::{Category, Product, ProductField, ProductId};

use crate::{
    labels::Labels,
    session::{EditSession, SessionMode},
};

const IMAGE_NOTICE_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub stats_label: &'static str,
    pub total_listings: usize,
    /// Label of the control that opens the create form.
    pub add_action: &'static str,
    pub columns: [&'static str; 7],
    /// Labels of the per-row edit and delete controls.
    pub row_actions: [&'static str; 2],
    pub rows: Vec<RowView>,
    /// Set instead of rows when the store is empty.
    pub empty_message: Option<&'static str>,
    pub form: Option<FormView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub index: usize,
    pub product_id: ProductId,
    pub image: String,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field: ProductField,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub mode: SessionMode,
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub category_options: Vec<&'static str>,
    pub image_notice: String,
    pub submit_label: &'static str,
}

/// `$` followed by the price in its shortest decimal form (`500`, `85.5`).
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

pub fn render(records: &[Product], session: &EditSession, labels: &'static Labels) -> CatalogView {
    let rows = records
        .iter()
        .enumerate()
        .map(|(i, product)| RowView {
            index: i + 1,
            product_id: product.id,
            image: product.image.clone(),
            name: product.name.clone(),
            category: product.category.as_str(),
            price: format_price(product.price),
            owner: product.display_owner().to_string(),
        })
        .collect();

    CatalogView {
        title: labels.title,
        subtitle: labels.subtitle,
        stats_label: labels.total_listings,
        total_listings: records.len(),
        add_action: labels.add_new,
        columns: [
            labels.col_index,
            labels.col_id,
            labels.col_image,
            labels.col_name,
            labels.col_price,
            labels.col_owner,
            labels.col_actions,
        ],
        row_actions: [labels.edit, labels.delete],
        rows,
        empty_message: records.is_empty().then_some(labels.empty),
        form: render_form(session, labels),
    }
}

fn render_form(session: &EditSession, labels: &'static Labels) -> Option<FormView> {
    let mode = session.mode()?;
    let draft = session.draft()?;

    let fields = [
        ProductField::Name,
        ProductField::Price,
        ProductField::Owner,
        ProductField::Category,
        ProductField::Description,
    ]
    .into_iter()
    .map(|field| FieldView {
        field,
        label: labels.field(field),
        value: draft.value_of(field),
        required: matches!(field, ProductField::Name | ProductField::Price),
    })
    .collect();

    let image_preview: String = draft.image.chars().take(IMAGE_NOTICE_CHARS).collect();

    Some(FormView {
        mode,
        title: match mode {
            SessionMode::Create => labels.form_create,
            SessionMode::Update => labels.form_update,
        },
        fields,
        category_options: Category::ALL.iter().map(|c| c.as_str()).collect(),
        image_notice: format!("{}: {image_preview}...", labels.image_notice),
        submit_label: labels.save,
    })
}

pub fn render_text(view: &CatalogView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", view.title, view.subtitle);
    let _ = writeln!(out, "{}: {}", view.stats_label, view.total_listings);
    let _ = writeln!(out, "[+ {}]", view.add_action);
    let _ = writeln!(out);

    let [index, id, image, name, price, owner, actions] = view.columns;
    let _ = writeln!(
        out,
        "{index:<4} {id:<16} {image:<40} {name:<28} {price:<12} {owner:<16} {actions}"
    );
    let [edit, delete] = view.row_actions;

    for row in &view.rows {
        let name_cell = format!("{} ({})", row.name, row.category);
        let _ = writeln!(
            out,
            "{:<4} {:<16} {:<40} {:<28} {:<12} {:<16} {edit} / {delete}",
            row.index,
            row.product_id.to_string(),
            row.image,
            name_cell,
            row.price,
            row.owner,
        );
    }

    if let Some(message) = view.empty_message {
        let _ = writeln!(out, "  {message}");
    }

    if let Some(form) = &view.form {
        let _ = writeln!(out);
        let _ = writeln!(out, "== {} ==", form.title);
        for field in &form.fields {
            let marker = if field.required { "*" } else { " " };
            let _ = writeln!(
                out,
                "{marker} {:<12} {:<20} {}",
                field.field.as_str(),
                field.label,
                field.value
            );
        }
        let _ = writeln!(out, "  options: {}", form.category_options.join(" / "));
        let _ = writeln!(out, "  {}", form.image_notice);
        let _ = writeln!(out, "  [{}]", form.submit_label);
    }

    out
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;

//! Edit session: the in-progress create or update behind the listing form.
//!
//! ```text
//! Closed --open_create--> Creating(draft) --take_for_commit/cancel--> Closed
//! Closed --open_edit----> Editing(draft)  --take_for_commit/cancel--> Closed
//! ```
//!
//! The draft is an owned copy, so field edits never reach the record store
//! until the session is committed.

use shared::{
    domain::{Category, Product, ProductField, ProductId, DEFAULT_OWNER, PLACEHOLDER_IMAGE},
    error::CatalogError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub id: ProductId,
    pub name: String,
    /// `None` while the price input is cleared.
    pub price: Option<f64>,
    pub category: Category,
    pub image: String,
    pub description: String,
    pub owner: String,
}

impl Draft {
    pub fn blank(id: ProductId) -> Self {
        Self {
            id,
            name: String::new(),
            price: Some(0.0),
            category: Category::Rifle,
            image: PLACEHOLDER_IMAGE.to_string(),
            description: String::new(),
            owner: DEFAULT_OWNER.to_string(),
        }
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: Some(product.price),
            category: product.category,
            image: product.image.clone(),
            description: product.description.clone(),
            owner: product.owner.clone(),
        }
    }

    /// Current value of `field` as the form shows it.
    pub fn value_of(&self, field: ProductField) -> String {
        match field {
            ProductField::Name => self.name.clone(),
            ProductField::Price => self.price.map(|p| p.to_string()).unwrap_or_default(),
            ProductField::Category => self.category.to_string(),
            ProductField::Image => self.image.clone(),
            ProductField::Description => self.description.clone(),
            ProductField::Owner if self.owner.trim().is_empty() => DEFAULT_OWNER.to_string(),
            ProductField::Owner => self.owner.clone(),
        }
    }

    fn apply(&mut self, field: ProductField, raw: &str) -> Result<(), CatalogError> {
        match field {
            ProductField::Name => self.name = raw.to_string(),
            ProductField::Price => self.price = parse_price(raw)?,
            ProductField::Category => self.category = raw.parse()?,
            ProductField::Image => self.image = raw.to_string(),
            ProductField::Description => self.description = raw.to_string(),
            ProductField::Owner => self.owner = raw.to_string(),
        }
        Ok(())
    }

    /// Checks required fields and produces the record to store.
    pub fn validate(&self) -> Result<Product, CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::validation("name is required"));
        }
        let Some(price) = self.price else {
            return Err(CatalogError::validation("price is required"));
        };

        let owner = if self.owner.trim().is_empty() {
            DEFAULT_OWNER.to_string()
        } else {
            self.owner.clone()
        };
        let image = if self.image.trim().is_empty() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            self.image.clone()
        };

        Ok(Product {
            id: self.id,
            name: self.name.clone(),
            price,
            category: self.category,
            image,
            description: self.description.clone(),
            owner,
        })
    }
}

fn parse_price(raw: &str) -> Result<Option<f64>, CatalogError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(Some(price)),
        _ => Err(CatalogError::validation(format!("price '{raw}' is not a number"))),
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditSession {
    #[default]
    Closed,
    Creating(Draft),
    Editing(Draft),
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    pub fn mode(&self) -> Option<SessionMode> {
        match self {
            EditSession::Closed => None,
            EditSession::Creating(_) => Some(SessionMode::Create),
            EditSession::Editing(_) => Some(SessionMode::Update),
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditSession::Closed => None,
            EditSession::Creating(draft) | EditSession::Editing(draft) => Some(draft),
        }
    }

    fn draft_mut(&mut self) -> Option<&mut Draft> {
        match self {
            EditSession::Closed => None,
            EditSession::Creating(draft) | EditSession::Editing(draft) => Some(draft),
        }
    }

    pub fn open_create(&mut self, id: ProductId) -> Result<(), CatalogError> {
        self.ensure_closed()?;
        *self = EditSession::Creating(Draft::blank(id));
        tracing::debug!(%id, "create session opened");
        Ok(())
    }

    pub fn open_edit(&mut self, product: &Product) -> Result<(), CatalogError> {
        self.ensure_closed()?;
        *self = EditSession::Editing(Draft::from_product(product));
        tracing::debug!(id = %product.id, "edit session opened");
        Ok(())
    }

    /// Replaces one field of the draft. A rejected value leaves the draft as it was.
    pub fn set_field(&mut self, field: ProductField, raw: &str) -> Result<(), CatalogError> {
        let draft = self.draft_mut().ok_or_else(CatalogError::no_session)?;
        draft.apply(field, raw)?;
        tracing::debug!(id = %draft.id, %field, "draft field updated");
        Ok(())
    }

    /// Discards the draft, if any.
    pub fn cancel(&mut self) -> Option<Draft> {
        match std::mem::take(self) {
            EditSession::Closed => None,
            EditSession::Creating(draft) | EditSession::Editing(draft) => {
                tracing::debug!(id = %draft.id, "session discarded");
                Some(draft)
            }
        }
    }

    /// Validates the draft and closes the session. On validation failure the
    /// session stays open so the input can be corrected.
    pub fn take_for_commit(&mut self) -> Result<(SessionMode, Product), CatalogError> {
        let mode = self.mode().ok_or_else(CatalogError::no_session)?;
        let product = self
            .draft()
            .ok_or_else(CatalogError::no_session)?
            .validate()?;
        *self = EditSession::Closed;
        Ok((mode, product))
    }

    fn ensure_closed(&self) -> Result<(), CatalogError> {
        match self.draft() {
            Some(draft) => Err(CatalogError::conflict(format!(
                "listing {} is still open; save or cancel it first",
                draft.id
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;

use shared::{
    domain::{Product, ProductField, ProductId},
    error::CatalogError,
};
use storage::{MemoryStore, RecordStore, UpsertOutcome};
use tracing::{debug, info, warn};

use crate::{
    ids::{Clock, IdAllocator, SystemClock},
    labels::{Labels, Locale},
    session::{EditSession, SessionMode},
    view::{render, CatalogView},
};

/// Blocking yes/no prompt shown before a listing is deleted.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Product),
    /// Confirmed, but no listing had that id.
    Missing,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_listings: usize,
}

pub struct CatalogEditor<S = MemoryStore, C = SystemClock> {
    store: S,
    session: EditSession,
    ids: IdAllocator<C>,
    labels: &'static Labels,
}

impl<S: RecordStore> CatalogEditor<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: RecordStore, C: Clock> CatalogEditor<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            session: EditSession::Closed,
            ids: IdAllocator::with_clock(clock),
            labels: Labels::for_locale(Locale::default()),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.labels = Labels::for_locale(locale);
        self
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    pub fn records(&self) -> &[Product] {
        self.store.list()
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_listings: self.store.len(),
        }
    }

    pub fn view(&self) -> CatalogView {
        render(self.store.list(), &self.session, self.labels)
    }

    /// Opens the form for a new listing with a freshly allocated id.
    pub fn add_new(&mut self) -> Result<ProductId, CatalogError> {
        if self.session.is_open() {
            return Err(CatalogError::conflict(
                "a listing is already open; save or cancel it first",
            ));
        }
        let id = self.ids.next(&self.store)?;
        self.session.open_create(id)?;
        Ok(id)
    }

    pub fn edit(&mut self, id: ProductId) -> Result<(), CatalogError> {
        let product = self
            .store
            .get(id)
            .ok_or_else(|| CatalogError::not_found(format!("no listing with id {id}")))?;
        self.session.open_edit(product)
    }

    pub fn set_field(&mut self, field: ProductField, value: &str) -> Result<(), CatalogError> {
        self.session.set_field(field, value)
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Commits the open draft to the store.
    pub fn save(&mut self) -> Result<UpsertOutcome, CatalogError> {
        let (mode, product) = self.session.take_for_commit()?;
        let id = product.id;
        let outcome = self.store.upsert(product);

        match (mode, outcome) {
            (SessionMode::Update, UpsertOutcome::Inserted) => {
                warn!(%id, "edited listing was no longer in the store; re-inserted at the front");
            }
            (SessionMode::Create, UpsertOutcome::Updated { index }) => {
                warn!(%id, index, "new listing replaced an existing record with the same id");
            }
            _ => info!(%id, ?mode, total = self.store.len(), "listing saved"),
        }

        Ok(outcome)
    }

    pub fn delete(
        &mut self,
        id: ProductId,
        confirm: &mut impl Confirm,
    ) -> Result<DeleteOutcome, CatalogError> {
        if self.session.is_open() {
            return Err(CatalogError::conflict("close the open listing before deleting"));
        }

        if !confirm.confirm(self.labels.confirm_delete) {
            debug!(%id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        Ok(match self.store.delete(id) {
            Some(product) => {
                info!(%id, remaining = self.store.len(), "listing deleted");
                DeleteOutcome::Deleted(product)
            }
            None => {
                debug!(%id, "delete ignored; no such listing");
                DeleteOutcome::Missing
            }
        })
    }
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;

//! Record store for catalog listings.
//!
//! [`RecordStore`] is the List / Delete / Upsert contract the editor works
//! against. [`MemoryStore`] keeps everything in process memory, seeded once at
//! start-up; nothing is ever written back to the seed source.

use shared::domain::{Product, ProductId};

pub mod seed;

pub use seed::{load_seed_file, parse_seed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A record with the same id existed and was overwritten at `index`.
    Updated { index: usize },
    /// No record matched; the record now sits at the front of the list.
    Inserted,
}

pub trait RecordStore {
    /// Full ordered sequence, newest creations first.
    fn list(&self) -> &[Product];

    /// Removes the first record with `id`. Absent ids are a silent no-op.
    fn delete(&mut self, id: ProductId) -> Option<Product>;

    /// Overwrites the record with the same id in place, or prepends it.
    fn upsert(&mut self, record: Product) -> UpsertOutcome;

    fn get(&self, id: ProductId) -> Option<&Product> {
        self.list().iter().find(|p| p.id == id)
    }

    fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }

    fn max_id(&self) -> Option<ProductId> {
        self.list().iter().map(|p| p.id).max()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Product>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: impl IntoIterator<Item = Product>) -> Self {
        let records: Vec<Product> = seed.into_iter().collect();
        tracing::debug!(records = records.len(), "record store seeded");
        Self { records }
    }
}

impl RecordStore for MemoryStore {
    fn list(&self) -> &[Product] {
        &self.records
    }

    fn delete(&mut self, id: ProductId) -> Option<Product> {
        let index = self.records.iter().position(|p| p.id == id)?;
        let removed = self.records.remove(index);
        tracing::debug!(%id, index, remaining = self.records.len(), "record deleted");
        Some(removed)
    }

    fn upsert(&mut self, record: Product) -> UpsertOutcome {
        let id = record.id;
        match self.records.iter().position(|p| p.id == id) {
            Some(index) => {
                self.records[index] = record;
                tracing::debug!(%id, index, "record replaced");
                UpsertOutcome::Updated { index }
            }
            None => {
                self.records.insert(0, record);
                tracing::debug!(%id, total = self.records.len(), "record prepended");
                UpsertOutcome::Inserted
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;

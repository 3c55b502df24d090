//! Persistence contract consumed by the card service.
//!
//! Implementations must provide strongly consistent reads and writes per key.
//! Failures are opaque (`anyhow::Error`); the gateway maps them to an
//! internal-error response without exposing detail.

use anyhow::Result;
use uuid::Uuid;

use crate::card::model::CardRecord;

/// Identifier-keyed record store.
///
/// Object-safe so a concrete backend can be injected into `CardService`
/// at construction instead of living behind a process-wide singleton.
pub trait CardStore: Send + Sync {
    /// Upserts the record keyed by its id. Last write wins; there are no
    /// partial writes. Returns the stored record.
    fn put(&self, record: CardRecord) -> Result<CardRecord>;

    /// Looks up a record by id.
    fn get_by_id(&self, id: &Uuid) -> Result<Option<CardRecord>>;

    /// Full scan. Order is unspecified; every call returns a fresh sequence.
    fn find_all(&self) -> Result<Vec<CardRecord>>;

    /// True iff a record with this id is currently stored.
    fn exists_by_id(&self, id: &Uuid) -> Result<bool>;

    /// Removes the record with this id. True iff a record existed and was
    /// removed (hard delete, no tombstone).
    fn delete_by_id(&self, id: &Uuid) -> Result<bool>;

    /// Number of stored records, derived from a full scan (O(n), not cached).
    fn count(&self) -> Result<usize>;
}

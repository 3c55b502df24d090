//! Card service: validation, id assignment, and orchestration against the
//! injected store.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use uuid::Uuid;

use super::model::{Card, CardRecord};
use crate::storage::CardStore;

/// Upper bound on id-probe attempts. The probe space is 128 bits wide, so
/// hitting this cap means the store or the fingerprint is broken, not that
/// the space is full.
pub const MAX_ID_PROBE_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied no candidate at all.
    #[error("missing card payload")]
    InvalidArgument,

    /// The id probe ran out of attempts without finding an unused identifier.
    #[error("no unused identifier found after {0} probe attempts")]
    IdSpaceExhausted(u32),

    /// Any other failure surfaced by the storage layer.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Orchestrates create/list/delete for cards.
///
/// The store handle is injected at construction; the service holds no other
/// state apart from the mutex that serializes id assignment.
pub struct CardService {
    store: Arc<dyn CardStore>,
    id_assignment: Mutex<()>,
}

impl CardService {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self {
            store,
            id_assignment: Mutex::new(()),
        }
    }

    /// Assigns an id to the candidate and persists it.
    ///
    /// The existence check and the subsequent put are not one atomic store
    /// operation, so the whole probe-then-put sequence runs under the
    /// id-assignment mutex. The returned id therefore never collides with an
    /// id present in the store at the moment of the existence check.
    pub fn create_item(&self, candidate: Option<Card>) -> Result<CardRecord, ServiceError> {
        let candidate = candidate.ok_or(ServiceError::InvalidArgument)?;
        let _guard = self
            .id_assignment
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = self.assign_unique_id(&candidate)?;
        let stored = self.store.put(CardRecord::from_wire(id, candidate))?;
        Ok(stored)
    }

    /// Returns a fresh, independently mutable copy of the full card set.
    pub fn get_all_items(&self) -> Result<Vec<CardRecord>, ServiceError> {
        Ok(self.store.find_all()?)
    }

    /// Removes the card with the given id.
    ///
    /// Returns `false` uniformly for a missing id and for an id with no
    /// stored entity; the gateway alone reinterprets `false` as not-found.
    pub fn delete_item(&self, id: Option<Uuid>) -> Result<bool, ServiceError> {
        match id {
            Some(id) => Ok(self.store.delete_by_id(&id)?),
            None => Ok(false),
        }
    }

    /// Probe loop: perturbs the candidate's fingerprint with an attempt
    /// counter until the store confirms the derived identifier unused.
    fn assign_unique_id(&self, candidate: &Card) -> Result<Uuid, ServiceError> {
        let fingerprint = candidate.fingerprint();
        for attempt in 0..MAX_ID_PROBE_ATTEMPTS {
            let id = derive_candidate_id(fingerprint, attempt);
            if !self.store.exists_by_id(&id)? {
                if attempt > 0 {
                    tracing::debug!("Id probe settled after {} collisions", attempt);
                }
                return Ok(id);
            }
        }
        Err(ServiceError::IdSpaceExhausted(MAX_ID_PROBE_ATTEMPTS))
    }
}

/// Derives the candidate identifier for one probe attempt: a name-based UUID
/// over the fingerprint concatenated with the attempt counter.
pub(crate) fn derive_candidate_id(fingerprint: u64, attempt: u32) -> Uuid {
    Uuid::new_v5(
        &Uuid::NAMESPACE_OID,
        format!("{}:{}", fingerprint, attempt).as_bytes(),
    )
}

use anyhow::Result;
use dashmap::DashMap;
use uuid::Uuid;

use super::client::CardStore;
use crate::card::model::CardRecord;

/// In-memory card store backed by a concurrent map.
///
/// The table name only labels log lines; it mirrors the environment-suffixed
/// naming a managed table would carry.
pub struct MemoryStore {
    table_name: String,
    records: DashMap<Uuid, CardRecord>,
}

impl MemoryStore {
    pub fn new(table_name: impl Into<String>) -> Self {
        let table_name = table_name.into();
        tracing::info!("Successfully initialized card table '{}'", table_name);
        Self {
            table_name,
            records: DashMap::new(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl CardStore for MemoryStore {
    fn put(&self, record: CardRecord) -> Result<CardRecord> {
        self.records.insert(record.id, record.clone());
        tracing::info!("Successfully saved record with id {}", record.id);
        Ok(record)
    }

    fn get_by_id(&self, id: &Uuid) -> Result<Option<CardRecord>> {
        Ok(self.records.get(id).map(|entry| entry.value().clone()))
    }

    fn find_all(&self) -> Result<Vec<CardRecord>> {
        let mut records = Vec::new();
        for entry in self.records.iter() {
            records.push(entry.value().clone());
        }
        Ok(records)
    }

    fn exists_by_id(&self, id: &Uuid) -> Result<bool> {
        Ok(self.get_by_id(id)?.is_some())
    }

    fn delete_by_id(&self, id: &Uuid) -> Result<bool> {
        let deleted = self.records.remove(id).is_some();
        if deleted {
            tracing::info!("Successfully deleted record with id {}", id);
        }
        Ok(deleted)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.iter().count())
    }
}

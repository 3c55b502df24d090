//! Storage Module Tests
//!
//! Validates the `CardStore` contract semantics against the in-memory
//! implementation.
//!
//! ## Test Scopes
//! - **Writes**: upsert keyed by id, last-write-wins.
//! - **Reads**: lookup, existence, full scan freshness, count.
//! - **Deletes**: hard delete with boolean outcome.

#[cfg(test)]
mod tests {
    use crate::card::model::CardRecord;
    use crate::storage::{CardStore, MemoryStore};
    use serde_json::json;
    use uuid::Uuid;

    fn sample_record(id: Uuid) -> CardRecord {
        CardRecord {
            id,
            heading: "Proven experience".to_string(),
            label: "Oracle Corporation".to_string(),
            sublabel: "Member of Technical Staff".to_string(),
            content: json!({
                "startDate": "2024.09",
                "endDate": "2025.08",
                "projects": [
                    "Jersey package uptake for Enterprise Manager REST client",
                    "Performance metrics expansion to Autonomous DB targets"
                ]
            }),
        }
    }

    // ============================================================
    // PUT / GET
    // ============================================================

    #[test]
    fn test_put_then_get_by_id_roundtrip() {
        let store = MemoryStore::new("cards-test");
        let id = Uuid::new_v4();
        let record = sample_record(id);

        let stored = store.put(record.clone()).unwrap();
        assert_eq!(stored, record);

        let retrieved = store.get_by_id(&id).unwrap();
        assert_eq!(retrieved, Some(record));
    }

    #[test]
    fn test_get_by_id_on_unknown_id_returns_none() {
        let store = MemoryStore::new("cards-test");

        let retrieved = store.get_by_id(&Uuid::new_v4()).unwrap();
        assert!(retrieved.is_none());
    }

    #[test]
    fn test_put_overwrites_existing_record() {
        let store = MemoryStore::new("cards-test");
        let id = Uuid::new_v4();

        let mut first = sample_record(id);
        first.heading = "Original heading".to_string();
        store.put(first).unwrap();

        let mut second = sample_record(id);
        second.heading = "Updated heading".to_string();
        store.put(second).unwrap();

        // Last write wins, still a single record under the key
        let retrieved = store.get_by_id(&id).unwrap().unwrap();
        assert_eq!(retrieved.heading, "Updated heading");
        assert_eq!(store.count().unwrap(), 1);
    }

    // ============================================================
    // EXISTS / DELETE
    // ============================================================

    #[test]
    fn test_exists_by_id_reflects_store_state() {
        let store = MemoryStore::new("cards-test");
        let id = Uuid::new_v4();

        assert!(!store.exists_by_id(&id).unwrap());

        store.put(sample_record(id)).unwrap();
        assert!(store.exists_by_id(&id).unwrap());
    }

    #[test]
    fn test_delete_by_id_removes_record() {
        let store = MemoryStore::new("cards-test");
        let id = Uuid::new_v4();
        store.put(sample_record(id)).unwrap();

        let deleted = store.delete_by_id(&id).unwrap();

        assert!(deleted, "Existing record should report deleted");
        assert!(
            !store.exists_by_id(&id).unwrap(),
            "Deleted id should no longer exist"
        );
    }

    #[test]
    fn test_delete_by_id_on_absent_id_returns_false() {
        let store = MemoryStore::new("cards-test");

        let deleted = store.delete_by_id(&Uuid::new_v4()).unwrap();
        assert!(!deleted);
    }

    // ============================================================
    // SCAN / COUNT
    // ============================================================

    #[test]
    fn test_find_all_returns_every_record() {
        let store = MemoryStore::new("cards-test");
        let ids: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            store.put(sample_record(*id)).unwrap();
        }

        let all = store.find_all().unwrap();

        assert_eq!(all.len(), ids.len());
        for id in &ids {
            assert!(
                all.iter().any(|record| record.id == *id),
                "Record {} should be in the scan",
                id
            );
        }
    }

    #[test]
    fn test_find_all_returns_fresh_sequence_per_call() {
        let store = MemoryStore::new("cards-test");
        store.put(sample_record(Uuid::new_v4())).unwrap();

        let mut first = store.find_all().unwrap();
        first.clear();

        // Clearing one scan result must not touch the store or later scans
        let second = store.find_all().unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_count_matches_number_of_records() {
        let store = MemoryStore::new("cards-test");
        assert_eq!(store.count().unwrap(), 0);

        for i in 0..5 {
            store.put(sample_record(Uuid::new_v4())).unwrap();
            assert_eq!(store.count().unwrap(), i + 1);
        }
    }
}

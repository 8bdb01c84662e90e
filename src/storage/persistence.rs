use super::{Storage, StorageError};
use crate::todo::TodoItem;
use log::*;

/// Key under which the item sequence is stored.
///
pub const ITEMS_KEY: &str = "todos";

/// Saves and restores the item sequence through a `Storage` backend.
///
pub struct ItemPersistence {
    storage: Box<dyn Storage>,
    key: String,
}

impl ItemPersistence {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        ItemPersistence {
            storage,
            key: ITEMS_KEY.to_string(),
        }
    }

    /// Load the stored sequence. Missing, unreadable, or unparsable records
    /// yield an empty sequence.
    ///
    pub fn restore(&self) -> Vec<TodoItem> {
        let blob = match self.storage.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("No stored items under '{}', starting empty", self.key);
                return vec![];
            }
            Err(e) => {
                warn!("Failed to read stored items, starting empty: {}", e);
                return vec![];
            }
        };
        match decode(&blob) {
            Ok(items) => {
                info!("Restored {} items", items.len());
                items
            }
            Err(e) => {
                warn!("Stored items are corrupt, starting empty: {}", e);
                vec![]
            }
        }
    }

    /// Serialize the full sequence and overwrite the stored record.
    ///
    pub fn save(&mut self, items: &[TodoItem]) -> Result<(), StorageError> {
        let blob = encode(items)?;
        self.storage.set(&self.key, &blob)
    }
}

/// Serialize the sequence as a JSON array of `{id, text, completed}`.
///
pub fn encode(items: &[TodoItem]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|e| StorageError::SerializationFailed(e.to_string()))
}

pub fn decode(blob: &str) -> serde_json::Result<Vec<TodoItem>> {
    serde_json::from_str(blob)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::todo::ItemId;
    use fake::{Fake, Faker};

    #[test]
    fn round_trips_sequence_in_order() {
        let items: Vec<TodoItem> = (0..8).map(|_| Faker.fake()).collect();
        let store = MemoryStore::new();
        let mut persistence = ItemPersistence::new(Box::new(store.clone()));
        persistence.save(&items).unwrap();
        assert_eq!(persistence.restore(), items);
    }

    #[test]
    fn round_trips_empty_sequence() {
        let store = MemoryStore::new();
        let mut persistence = ItemPersistence::new(Box::new(store.clone()));
        persistence.save(&[]).unwrap();
        assert_eq!(store.get(ITEMS_KEY).unwrap().as_deref(), Some("[]"));
        assert!(persistence.restore().is_empty());
    }

    #[test]
    fn missing_record_restores_empty() {
        let persistence = ItemPersistence::new(Box::new(MemoryStore::new()));
        assert!(persistence.restore().is_empty());
    }

    #[test]
    fn corrupt_record_restores_empty() {
        for blob in ["not json", "{\"id\":1}", "[{\"text\":\"x\"}]", ""] {
            let store = MemoryStore::with_entry(ITEMS_KEY, blob);
            let persistence = ItemPersistence::new(Box::new(store));
            assert!(persistence.restore().is_empty(), "blob {:?}", blob);
        }
    }

    #[test]
    fn reads_existing_layout() {
        let blob = r#"[{"id":"1","text":"buy milk","completed":false},{"id":"2","text":"walk dog","completed":true}]"#;
        let persistence = ItemPersistence::new(Box::new(MemoryStore::with_entry(ITEMS_KEY, blob)));
        let items = persistence.restore();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ItemId::from("1"));
        assert_eq!(items[1].text, "walk dog");
        assert!(items[1].completed);
    }
}

use super::{reorder, DragEnd, Filter, ItemId, TodoItem};
use crate::storage::ItemPersistence;
use log::*;
use std::collections::HashSet;

/// Callback invoked with the full sequence after every successful mutation.
///
pub type Listener = Box<dyn FnMut(&[TodoItem])>;

/// Owns the authoritative item sequence.
///
/// Every mutation that changes the sequence is written through the
/// persistence adapter and then announced to subscribers. Unknown ids and
/// empty text are silently ignored; mutations report whether anything
/// changed.
pub struct ItemStore {
    items: Vec<TodoItem>,
    persistence: ItemPersistence,
    listeners: Vec<Listener>,
}

impl ItemStore {
    /// Build a store, restoring its sequence from `persistence`.
    ///
    pub fn open(persistence: ItemPersistence) -> Self {
        let mut seen = HashSet::new();
        let items: Vec<TodoItem> = persistence
            .restore()
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id.clone());
                if !fresh {
                    warn!("Dropping restored item with duplicate id {}", item.id);
                }
                fresh
            })
            .collect();
        ItemStore {
            items,
            persistence,
            listeners: vec![],
        }
    }

    /// Register a listener for post-mutation notifications.
    ///
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&TodoItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Number of items not yet completed.
    ///
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    /// Items visible under `filter`, in sequence order.
    ///
    pub fn view(&self, filter: Filter) -> Vec<&TodoItem> {
        filter.apply(&self.items)
    }

    /// Append a new item with the trimmed `text`. Blank text is ignored.
    ///
    pub fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let item = TodoItem::new(text);
        debug!("Adding item {} '{}'", item.id, item.text);
        self.items.push(item);
        self.commit();
        true
    }

    /// Flip the completion flag of the item with `id`.
    ///
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                debug!("Toggled item {} to completed={}", id, item.completed);
            }
            None => return false,
        }
        self.commit();
        true
    }

    /// Remove the item with `id`.
    ///
    pub fn delete(&mut self, id: &ItemId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.items.remove(index);
                debug!("Deleted item {}", id);
            }
            None => return false,
        }
        self.commit();
        true
    }

    /// Remove every completed item, keeping the rest in order.
    ///
    pub fn clear_completed(&mut self) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();
        if removed == 0 {
            return false;
        }
        debug!("Cleared {} completed items", removed);
        self.commit();
        true
    }

    /// Relocate `source` to the position currently held by `target`.
    ///
    pub fn move_item(&mut self, source: &ItemId, target: &ItemId) -> bool {
        if !reorder::move_item(&mut self.items, source, target) {
            return false;
        }
        debug!("Moved item {} to position of {}", source, target);
        self.commit();
        true
    }

    /// Apply the result of a drag gesture. A drop in place is a no-op.
    ///
    pub fn apply_drag(&mut self, drag: &DragEnd) -> bool {
        if drag.is_in_place() {
            return false;
        }
        self.move_item(&drag.active, &drag.over)
    }

    /// Resolve a drag made inside the `filter` view from position `from` to
    /// position `to`, then apply it to the full sequence.
    ///
    pub fn reorder_in_view(&mut self, filter: Filter, from: usize, to: usize) -> bool {
        let drag = {
            let view = self.view(filter);
            DragEnd::from_view(&view, from, to)
        };
        match drag {
            Some(drag) => self.apply_drag(&drag),
            None => false,
        }
    }

    fn commit(&mut self) {
        if let Err(e) = self.persistence.save(&self.items) {
            error!("Failed to persist items: {}", e);
        }
        for listener in self.listeners.iter_mut() {
            listener(&self.items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, Storage, StorageError, ITEMS_KEY};
    use fake::{Fake, Faker};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::{cell::Cell, rc::Rc};

    fn open_with(store: &MemoryStore) -> ItemStore {
        ItemStore::open(ItemPersistence::new(Box::new(store.clone())))
    }

    fn empty_store() -> ItemStore {
        open_with(&MemoryStore::new())
    }

    fn store_with(items: &[TodoItem]) -> ItemStore {
        let blob = serde_json::to_string(items).unwrap();
        open_with(&MemoryStore::with_entry(ITEMS_KEY, &blob))
    }

    fn random_items(rng: &mut StdRng) -> Vec<TodoItem> {
        let len = rng.gen_range(1..10);
        (0..len).map(|_| Faker.fake_with_rng(rng)).collect()
    }

    fn texts(store: &ItemStore) -> Vec<&str> {
        store.items().iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn add_appends_trimmed_incomplete_item() {
        let mut store = empty_store();
        assert!(store.add("  first "));
        assert!(store.add("second"));
        assert_eq!(texts(&store), vec!["first", "second"]);
        assert!(store.items().iter().all(|i| !i.completed));
        assert_ne!(store.items()[0].id, store.items()[1].id);
    }

    #[test]
    fn add_blank_text_is_ignored() {
        let mut store = empty_store();
        store.add("keep");
        for blank in ["", "   ", "\t\n"] {
            assert!(!store.add(blank));
            assert_eq!(store.len(), 1);
        }
    }

    #[test]
    fn toggle_flips_only_target() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let items = random_items(&mut rng);
            let mut store = store_with(&items);
            let pick = rng.gen_range(0..items.len());
            let id = items[pick].id.clone();

            assert!(store.toggle(&id));
            for (i, (before, after)) in items.iter().zip(store.items()).enumerate() {
                assert_eq!(before.id, after.id);
                assert_eq!(before.text, after.text);
                if i == pick {
                    assert_eq!(before.completed, !after.completed);
                } else {
                    assert_eq!(before.completed, after.completed);
                }
            }
        }
    }

    #[test]
    fn toggle_unknown_id_is_no_op() {
        let items: Vec<TodoItem> = (0..3).map(|_| Faker.fake()).collect();
        let mut store = store_with(&items);
        assert!(!store.toggle(&ItemId::from("missing")));
        assert_eq!(store.items(), &items[..]);
    }

    #[test]
    fn delete_removes_exactly_one_and_keeps_order() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let items = random_items(&mut rng);
            let mut store = store_with(&items);
            let pick = rng.gen_range(0..items.len());

            assert!(store.delete(&items[pick].id));
            let mut expected = items.clone();
            expected.remove(pick);
            assert_eq!(store.items(), &expected[..]);
        }
    }

    #[test]
    fn delete_unknown_id_is_no_op() {
        let items: Vec<TodoItem> = (0..4).map(|_| Faker.fake()).collect();
        let mut store = store_with(&items);
        assert!(!store.delete(&ItemId::from("missing")));
        assert_eq!(store.items(), &items[..]);
    }

    #[test]
    fn clear_completed_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let items = random_items(&mut rng);
            let mut store = store_with(&items);
            store.clear_completed();
            let once = store.items().to_vec();
            assert!(!store.clear_completed());
            assert_eq!(store.items(), &once[..]);

            let expected: Vec<TodoItem> =
                items.into_iter().filter(|i| !i.completed).collect();
            assert_eq!(once, expected);
        }
    }

    #[test]
    fn move_to_own_position_is_no_op() {
        let items: Vec<TodoItem> = (0..4).map(|_| Faker.fake()).collect();
        let mut store = store_with(&items);
        for item in &items {
            assert!(!store.move_item(&item.id, &item.id));
        }
        assert_eq!(store.items(), &items[..]);
    }

    #[test]
    fn move_last_before_first() {
        let mut store = empty_store();
        store.add("A");
        store.add("B");
        store.add("C");
        let a = store.items()[0].id.clone();
        let c = store.items()[2].id.clone();

        assert!(store.move_item(&c, &a));
        assert_eq!(texts(&store), vec!["C", "A", "B"]);
    }

    #[test]
    fn reorder_in_filtered_view_uses_identifiers() {
        let mut store = empty_store();
        for text in ["A", "B", "C", "D"] {
            store.add(text);
        }
        let b = store.items()[1].id.clone();
        store.toggle(&b);

        // Active view is [A, C, D]; drag D onto A
        assert!(store.reorder_in_view(Filter::Active, 2, 0));
        assert_eq!(texts(&store), vec!["D", "A", "B", "C"]);

        assert!(!store.reorder_in_view(Filter::Active, 1, 1));
        assert!(!store.reorder_in_view(Filter::Active, 0, 9));
        assert_eq!(texts(&store), vec!["D", "A", "B", "C"]);
    }

    #[test]
    fn buy_milk_scenario() {
        let mut store = empty_store();
        store.add("buy milk");
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].text, "buy milk");
        assert!(!store.items()[0].completed);

        store.add("  ");
        assert_eq!(store.len(), 1);

        let id = store.items()[0].id.clone();
        store.toggle(&id);
        assert!(store.items()[0].completed);

        assert!(store.view(Filter::Active).is_empty());
        let completed = store.view(Filter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "buy milk");
        assert!(completed[0].completed);

        store.clear_completed();
        assert!(store.is_empty());
    }

    #[test]
    fn mutations_are_persisted() {
        let backing = MemoryStore::new();
        let mut store = open_with(&backing);
        store.add("one");
        store.add("two");
        let id = store.items()[0].id.clone();
        store.toggle(&id);

        let reopened = open_with(&backing);
        assert_eq!(reopened.items(), store.items());
        assert_eq!(reopened.active_count(), 1);
        assert_eq!(reopened.completed_count(), 1);
    }

    #[test]
    fn no_op_does_not_write() {
        let backing = MemoryStore::new();
        let mut store = open_with(&backing);
        store.add("");
        store.toggle(&ItemId::from("missing"));
        store.clear_completed();
        assert_eq!(backing.get(ITEMS_KEY).unwrap(), None);
    }

    #[test]
    fn listeners_fire_once_per_change() {
        let calls = Rc::new(Cell::new(0));
        let last_len = Rc::new(Cell::new(0));
        let mut store = empty_store();
        {
            let calls = Rc::clone(&calls);
            let last_len = Rc::clone(&last_len);
            store.subscribe(Box::new(move |items| {
                calls.set(calls.get() + 1);
                last_len.set(items.len());
            }));
        }

        store.add("a");
        store.add("b");
        store.add(" ");
        store.delete(&ItemId::from("missing"));
        assert_eq!(calls.get(), 2);
        assert_eq!(last_len.get(), 2);

        let a = store.items()[0].id.clone();
        store.delete(&a);
        assert_eq!(calls.get(), 3);
        assert_eq!(last_len.get(), 1);
    }

    #[test]
    fn duplicate_restored_ids_are_dropped() {
        let blob = r#"[{"id":"x","text":"first","completed":false},{"id":"x","text":"second","completed":true}]"#;
        let store = open_with(&MemoryStore::with_entry(ITEMS_KEY, blob));
        assert_eq!(texts(&store), vec!["first"]);
    }

    #[test]
    fn corrupt_storage_opens_empty() {
        let store = open_with(&MemoryStore::with_entry(ITEMS_KEY, "{{{"));
        assert!(store.is_empty());
    }

    /// Backend whose writes always fail.
    struct ReadOnlyStore;

    impl Storage for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _blob: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                path: format!("{}.json", key).into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn failed_write_keeps_change_and_notifies() {
        let mut store = ItemStore::open(ItemPersistence::new(Box::new(ReadOnlyStore)));
        let calls = Rc::new(Cell::new(0));
        {
            let calls = Rc::clone(&calls);
            store.subscribe(Box::new(move |_| calls.set(calls.get() + 1)));
        }

        assert!(store.add("unsaved"));
        assert_eq!(texts(&store), vec!["unsaved"]);
        assert_eq!(calls.get(), 1);

        let id = store.items()[0].id.clone();
        assert!(store.toggle(&id));
        assert!(store.items()[0].completed);
        assert_eq!(calls.get(), 2);
    }
}

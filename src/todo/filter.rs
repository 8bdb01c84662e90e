use super::TodoItem;

/// Specifying which items are shown in the list.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Return whether the item belongs in this view.
    ///
    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }

    /// Project the sequence onto this filter, keeping order.
    ///
    pub fn apply<'a>(&self, items: &'a [TodoItem]) -> Vec<&'a TodoItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Cycle to the next filter: All -> Active -> Completed -> All.
    ///
    pub fn next(&self) -> Filter {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::ItemId;
    use fake::{Fake, Faker};
    use std::collections::HashSet;

    fn item(id: &str, completed: bool) -> TodoItem {
        TodoItem {
            id: ItemId::from(id),
            text: id.to_string(),
            completed,
        }
    }

    fn ids(view: &[&TodoItem]) -> Vec<String> {
        view.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn all_returns_full_sequence() {
        let items = vec![item("a", false), item("b", true), item("c", false)];
        let view = Filter::All.apply(&items);
        assert_eq!(ids(&view), vec!["a", "b", "c"]);
    }

    #[test]
    fn active_and_completed_keep_order() {
        let items = vec![
            item("a", true),
            item("b", false),
            item("c", true),
            item("d", false),
        ];
        assert_eq!(ids(&Filter::Active.apply(&items)), vec!["b", "d"]);
        assert_eq!(ids(&Filter::Completed.apply(&items)), vec!["a", "c"]);
    }

    #[test]
    fn active_and_completed_partition_sequence() {
        for _ in 0..20 {
            let items: Vec<TodoItem> = (0..(0..12).fake::<usize>())
                .map(|_| Faker.fake::<TodoItem>())
                .collect();

            assert_eq!(Filter::All.apply(&items).len(), items.len());

            let active: HashSet<&ItemId> =
                Filter::Active.apply(&items).iter().map(|i| &i.id).collect();
            let completed: HashSet<&ItemId> = Filter::Completed
                .apply(&items)
                .iter()
                .map(|i| &i.id)
                .collect();
            let all: HashSet<&ItemId> = items.iter().map(|i| &i.id).collect();

            assert!(active.is_disjoint(&completed));
            assert_eq!(active.union(&completed).count(), all.len());
        }
    }

    #[test]
    fn next_cycles_through_modes() {
        let mut filter = Filter::default();
        assert_eq!(filter, Filter::All);
        filter = filter.next();
        assert_eq!(filter, Filter::Active);
        filter = filter.next();
        assert_eq!(filter, Filter::Completed);
        filter = filter.next();
        assert_eq!(filter, Filter::All);
    }

    #[test]
    fn empty_sequence_gives_empty_views() {
        for filter in Filter::ALL {
            assert!(filter.apply(&[]).is_empty());
        }
    }
}

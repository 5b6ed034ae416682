//! Which category is open, and where it sits in the filtered view.
//!
//! The navigator only stores the selected id. Its index is looked up in
//! whatever filtered view the caller passes, so a changed query or a new
//! registry entry is reflected without any extra bookkeeping. A selection
//! that has been filtered out has no index and both directions report
//! unavailable.

use crate::deck::CategoryId;
use crate::search::FilteredView;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionNavigator {
    selected: Option<CategoryId>,
}

impl SelectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<CategoryId> {
        self.selected
    }

    pub fn select(&mut self, id: CategoryId) {
        log::debug!("Selected category {}", id);
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        if let Some(id) = self.selected.take() {
            log::debug!("Closed category {}", id);
        }
    }

    /// Position of the selection in `view`, `None` if nothing is selected
    /// or the selection is filtered out.
    pub fn index(&self, view: &FilteredView<'_>) -> Option<usize> {
        self.selected.and_then(|id| view.position_of(id))
    }

    pub fn has_prev(&self, view: &FilteredView<'_>) -> bool {
        matches!(self.index(view), Some(index) if index > 0)
    }

    pub fn has_next(&self, view: &FilteredView<'_>) -> bool {
        matches!(self.index(view), Some(index) if index + 1 < view.len())
    }

    /// Move to the previous entry. Returns the new id, `None` when unavailable.
    pub fn select_prev(&mut self, view: &FilteredView<'_>) -> Option<CategoryId> {
        if !self.has_prev(view) {
            return None;
        }
        let index = self.index(view)? - 1;
        let id = view.get(index)?.id;
        self.select(id);
        Some(id)
    }

    /// Move to the next entry. Returns the new id, `None` when unavailable.
    pub fn select_next(&mut self, view: &FilteredView<'_>) -> Option<CategoryId> {
        if !self.has_next(view) {
            return None;
        }
        let index = self.index(view)? + 1;
        let id = view.get(index)?.id;
        self.select(id);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::seed::builtin_registry;
    use crate::deck::{Category, CategoryRegistry, NewCategory};
    use crate::search::filter;

    fn id_of(registry: &CategoryRegistry, name: &str) -> CategoryId {
        registry
            .categories()
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
            .unwrap()
    }

    #[test]
    fn test_nothing_selected() {
        let registry = builtin_registry().unwrap();
        let view = filter(&registry, "");
        let mut nav = SelectionNavigator::new();

        assert_eq!(nav.index(&view), None);
        assert!(!nav.has_prev(&view));
        assert!(!nav.has_next(&view));
        assert_eq!(nav.select_next(&view), None);
        assert_eq!(nav.selected(), None);
    }

    #[test]
    fn test_single_match_has_no_neighbours() {
        let registry = builtin_registry().unwrap();
        let view = filter(&registry, "harry");
        let mut nav = SelectionNavigator::new();
        nav.select(id_of(&registry, "Harry Potter"));

        assert_eq!(nav.index(&view), Some(0));
        assert!(!nav.has_prev(&view));
        assert!(!nav.has_next(&view));
    }

    #[test]
    fn test_flags_at_edges() {
        let registry = builtin_registry().unwrap();
        let view = filter(&registry, "");
        let mut nav = SelectionNavigator::new();

        nav.select(id_of(&registry, "Medical"));
        assert!(!nav.has_prev(&view));
        assert!(nav.has_next(&view));

        nav.select(id_of(&registry, "Lawyer"));
        assert!(nav.has_prev(&view));
        assert!(!nav.has_next(&view));
    }

    #[test]
    fn test_flags_match_index_for_every_selection() {
        let registry = builtin_registry().unwrap();
        for query in ["", "e", "n", "harry", "law"] {
            let view = filter(&registry, query);
            for category in registry.categories() {
                let mut nav = SelectionNavigator::new();
                nav.select(category.id);
                let index = nav.index(&view);
                assert_eq!(nav.has_prev(&view), matches!(index, Some(i) if i > 0));
                assert_eq!(
                    nav.has_next(&view),
                    matches!(index, Some(i) if i + 1 < view.len())
                );
            }
        }
    }

    #[test]
    fn test_select_next_and_prev_walk_view() {
        let registry = builtin_registry().unwrap();
        let view = filter(&registry, "");
        let mut nav = SelectionNavigator::new();
        nav.select(id_of(&registry, "Medical"));

        assert_eq!(nav.select_next(&view), Some(id_of(&registry, "Harry Potter")));
        assert_eq!(nav.select_next(&view), Some(id_of(&registry, "Network-Engineer")));
        assert_eq!(nav.select_prev(&view), Some(id_of(&registry, "Harry Potter")));
        assert_eq!(nav.index(&view), Some(1));
    }

    #[test]
    fn test_out_of_range_moves_are_noops() {
        let registry = builtin_registry().unwrap();
        let view = filter(&registry, "");
        let mut nav = SelectionNavigator::new();

        let first = id_of(&registry, "Medical");
        nav.select(first);
        assert_eq!(nav.select_prev(&view), None);
        assert_eq!(nav.selected(), Some(first));

        let last = id_of(&registry, "Lawyer");
        nav.select(last);
        assert_eq!(nav.select_next(&view), None);
        assert_eq!(nav.selected(), Some(last));
    }

    #[test]
    fn test_filtered_out_selection_disables_navigation() {
        let registry = builtin_registry().unwrap();
        let mut nav = SelectionNavigator::new();
        let lawyer = id_of(&registry, "Lawyer");
        nav.select(lawyer);

        let view = filter(&registry, "harry");
        assert_eq!(nav.index(&view), None);
        assert!(!nav.has_prev(&view));
        assert!(!nav.has_next(&view));
        assert_eq!(nav.select_prev(&view), None);
        assert_eq!(nav.selected(), Some(lawyer));

        let view = filter(&registry, "");
        assert_eq!(nav.index(&view), Some(5));
        assert!(nav.has_prev(&view));
    }

    #[test]
    fn test_duplicate_names_navigate_by_id() {
        let mut registry = CategoryRegistry::new();
        let draft = |desc: &str| {
            NewCategory::new("Twin", "Science")
                .with_image("twin.png")
                .with_description(desc)
                .with_card("Q", "A")
        };
        let first = registry.add(draft("first")).unwrap();
        let second = registry.add(draft("second")).unwrap();
        let view = filter(&registry, "twin");

        let mut nav = SelectionNavigator::new();
        nav.select(second);
        assert_eq!(nav.index(&view), Some(1));
        assert_eq!(nav.select_prev(&view), Some(first));
        assert_eq!(nav.index(&view), Some(0));
    }

    #[test]
    fn test_appended_category_enables_next() {
        let mut registry = builtin_registry().unwrap();
        let lawyer = Category::id_for_name("Lawyer");
        let mut nav = SelectionNavigator::new();
        nav.select(lawyer);
        assert!(!nav.has_next(&filter(&registry, "")));

        registry
            .add(
                NewCategory::new("Poetry", "Literature")
                    .with_image("poetry.png")
                    .with_description("Verse")
                    .with_card("Q", "A"),
            )
            .unwrap();
        assert!(nav.has_next(&filter(&registry, "")));
    }

    #[test]
    fn test_close_clears_selection() {
        let mut nav = SelectionNavigator::new();
        nav.select(Category::id_for_name("Medical"));
        nav.close();
        assert_eq!(nav.selected(), None);
    }
}

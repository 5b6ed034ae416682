use crate::deck::{Category, CategoryId, CategoryRegistry};

/// Categories matching a query, in registry order.
///
/// Derived on demand from the registry and never stored, so it can not go
/// stale after an append.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    entries: Vec<&'a Category>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Category> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Category> + '_ {
        self.entries.iter().copied()
    }

    pub fn position_of(&self, id: CategoryId) -> Option<usize> {
        self.entries.iter().position(|c| c.id == id)
    }

    pub fn ids(&self) -> Vec<CategoryId> {
        self.entries.iter().map(|c| c.id).collect()
    }
}

/// Case-insensitive substring match against name or department.
///
/// A blank query matches everything.
pub fn filter<'a>(registry: &'a CategoryRegistry, query: &str) -> FilteredView<'a> {
    let needle = query.trim().to_lowercase();

    let entries = if needle.is_empty() {
        registry.categories().iter().collect()
    } else {
        registry
            .categories()
            .iter()
            .filter(|c| is_match(c, &needle))
            .collect()
    };

    FilteredView { entries }
}

fn is_match(category: &Category, needle: &str) -> bool {
    category.name.to_lowercase().contains(needle)
        || category.department.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::seed::builtin_registry;
    use crate::deck::NewCategory;

    fn names<'a>(view: &FilteredView<'a>) -> Vec<&'a str> {
        view.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_registry_order() {
        let registry = builtin_registry().unwrap();
        let all = filter(&registry, "");
        let blank = filter(&registry, "   \t");

        assert_eq!(all.len(), registry.len());
        assert_eq!(all, blank);
        assert_eq!(names(&all)[0], "Medical");
        assert_eq!(names(&all)[5], "Lawyer");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let registry = builtin_registry().unwrap();
        assert_eq!(names(&filter(&registry, "harry")), vec!["Harry Potter"]);
        assert_eq!(names(&filter(&registry, "HARRY")), vec!["Harry Potter"]);
        assert_eq!(names(&filter(&registry, "  Harry ")), vec!["Harry Potter"]);
    }

    #[test]
    fn test_query_matches_department() {
        let registry = builtin_registry().unwrap();
        assert_eq!(names(&filter(&registry, "btech")), vec!["Network-Engineer"]);
        assert_eq!(names(&filter(&registry, "scien")), vec!["Medical"]);
    }

    #[test]
    fn test_matches_keep_registry_order() {
        let registry = builtin_registry().unwrap();
        let view = filter(&registry, "e");
        let expected: Vec<&str> = registry
            .categories()
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains('e') || c.department.to_lowercase().contains('e')
            })
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names(&view), expected);
    }

    #[test]
    fn test_no_match_is_empty_view() {
        let registry = builtin_registry().unwrap();
        let view = filter(&registry, "zzz-no-such-thing");
        assert!(view.is_empty());
        assert_eq!(view.position_of(registry.categories()[0].id), None);
    }

    #[test]
    fn test_filter_sees_appended_category() {
        let mut registry = builtin_registry().unwrap();
        assert!(filter(&registry, "poetry").is_empty());

        registry
            .add(
                NewCategory::new("Poetry", "Literature")
                    .with_image("poetry.png")
                    .with_description("Verse")
                    .with_card("Q", "A"),
            )
            .unwrap();

        assert_eq!(names(&filter(&registry, "poetry")), vec!["Poetry"]);
        assert_eq!(filter(&registry, "").len(), 7);
    }

    #[test]
    fn test_filter_is_deterministic() {
        let registry = builtin_registry().unwrap();
        assert_eq!(filter(&registry, "er").ids(), filter(&registry, "er").ids());
    }
}

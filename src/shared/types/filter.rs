//! Dynamic filter composition for list endpoints
//!
//! Every list request carries a handful of optional criteria. A [`Filter`]
//! collects one predicate per criterion that is actually present and
//! matches an entity only when all of them hold.

type Predicate<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

/// Conjunction of predicates over `E`. An empty filter matches everything.
pub struct Filter<E> {
    predicates: Vec<Predicate<E>>,
}

impl<E: 'static> Filter<E> {
    pub fn all() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    pub fn and<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&E) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Add `predicate` only when the criterion is present.
    pub fn and_some<V, P>(self, value: Option<V>, predicate: P) -> Self
    where
        V: Send + Sync + 'static,
        P: Fn(&E, &V) -> bool + Send + Sync + 'static,
    {
        match value {
            Some(value) => self.and(move |entity| predicate(entity, &value)),
            None => self,
        }
    }

    /// Free-text criterion. Blank terms are ignored; the predicate receives
    /// the trimmed, lowercased term.
    pub fn and_search<P>(self, term: Option<&str>, predicate: P) -> Self
    where
        P: Fn(&E, &str) -> bool + Send + Sync + 'static,
    {
        let term = term
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);
        self.and_some(term, move |entity, term: &String| predicate(entity, term))
    }

    pub fn matches(&self, entity: &E) -> bool {
        self.predicates.iter().all(|predicate| predicate(entity))
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<E: 'static> Default for Filter<E> {
    fn default() -> Self {
        Self::all()
    }
}

impl<E> std::fmt::Debug for Filter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

/// `needle` must already be lowercase.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive equality for exact-match criteria (city, specialty, ...).
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.trim().to_lowercase() == right.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        name: &'static str,
        active: bool,
        score: i32,
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Alpha", active: true, score: 3 },
            Item { name: "beta", active: false, score: 5 },
            Item { name: "Gamma", active: true, score: 8 },
        ]
    }

    fn names(filter: &Filter<Item>) -> Vec<&'static str> {
        items()
            .into_iter()
            .filter(|item| filter.matches(item))
            .map(|item| item.name)
            .collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = Filter::<Item>::all();
        assert!(filter.is_empty());
        assert_eq!(names(&filter), vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn absent_criteria_add_nothing() {
        let filter = Filter::<Item>::all()
            .and_some(None::<bool>, |item, active| item.active == *active)
            .and_search(None, |item, term| contains_ignore_case(item.name, term))
            .and_search(Some("   "), |item, term| contains_ignore_case(item.name, term));
        assert!(filter.is_empty());
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let filter = Filter::<Item>::all()
            .and_some(Some(true), |item, active| item.active == *active)
            .and(|item| item.score > 4);
        assert_eq!(filter.len(), 2);
        assert_eq!(names(&filter), vec!["Gamma"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let filter = Filter::<Item>::all()
            .and_search(Some(" BET "), |item, term| contains_ignore_case(item.name, term));
        assert_eq!(names(&filter), vec!["beta"]);
    }

    #[test]
    fn exact_match_ignores_case_and_padding() {
        assert!(eq_ignore_case(" Cardiology", "cardiology "));
        assert!(!eq_ignore_case("Cardiology", "Neurology"));
    }
}

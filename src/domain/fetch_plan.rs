//! Deciding which generators need a network fetch.

use std::collections::{BTreeMap, BTreeSet};

use super::GeneratorName;

/// Outcome of planning a sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchPlan {
    /// Names that must be requested from the remote service.
    pub to_fetch: BTreeSet<GeneratorName>,
    /// Requested names left alone because they are already in the store.
    pub skipped: BTreeSet<GeneratorName>,
}

impl FetchPlan {
    pub fn is_empty(&self) -> bool {
        self.to_fetch.is_empty()
    }
}

/// Compute the fetch set.
///
/// `requested` is deduplicated first. With `force` every requested name is fetched;
/// otherwise names already present in `existing` are skipped.
pub fn plan(
    requested: &[GeneratorName],
    existing: &BTreeSet<GeneratorName>,
    force: bool,
) -> FetchPlan {
    let requested: BTreeSet<GeneratorName> = requested.iter().cloned().collect();

    if force {
        return FetchPlan { to_fetch: requested, skipped: BTreeSet::new() };
    }

    let (skipped, to_fetch): (BTreeSet<_>, BTreeSet<_>) =
        requested.into_iter().partition(|name| existing.contains(name));
    FetchPlan { to_fetch, skipped }
}

/// A single batched request to the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub names: BTreeSet<GeneratorName>,
    /// Hint for the server only; forwarded as-is, possibly empty.
    pub last_known_edit_time: BTreeMap<GeneratorName, i64>,
}

impl FetchRequest {
    pub fn new(names: BTreeSet<GeneratorName>) -> Self {
        Self { names, last_known_edit_time: BTreeMap::new() }
    }

    pub fn with_edit_times(mut self, hints: BTreeMap<GeneratorName, i64>) -> Self {
        self.last_known_edit_time = hints;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(list: &[&str]) -> Vec<GeneratorName> {
        list.iter().map(|n| GeneratorName::new(n).unwrap()).collect()
    }

    fn set(list: &[&str]) -> BTreeSet<GeneratorName> {
        names(list).into_iter().collect()
    }

    #[test]
    fn skips_existing_names() {
        let result = plan(&names(&["animal", "country"]), &set(&["animal"]), false);
        assert_eq!(result.to_fetch, set(&["country"]));
        assert_eq!(result.skipped, set(&["animal"]));
    }

    #[test]
    fn force_fetches_everything() {
        let result = plan(&names(&["fruit", "animal"]), &set(&["fruit"]), true);
        assert_eq!(result.to_fetch, set(&["animal", "fruit"]));
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn duplicates_are_collapsed() {
        let result = plan(&names(&["fruit", "fruit", "animal"]), &BTreeSet::new(), false);
        assert_eq!(result.to_fetch.len(), 2);
    }

    #[test]
    fn fully_present_store_yields_empty_plan() {
        let result = plan(&names(&["fruit"]), &set(&["fruit", "animal"]), false);
        assert!(result.is_empty());
    }

    #[test]
    fn empty_request_is_empty_even_when_forced() {
        assert!(plan(&[], &set(&["fruit"]), true).is_empty());
    }

    fn name_strategy() -> impl Strategy<Value = GeneratorName> {
        "[a-z][a-z0-9-]{0,6}".prop_map(|s| GeneratorName::new(&s).unwrap())
    }

    proptest! {
        #[test]
        fn unforced_plan_is_set_difference(
            requested in prop::collection::vec(name_strategy(), 0..12),
            existing in prop::collection::btree_set(name_strategy(), 0..12),
        ) {
            let result = plan(&requested, &existing, false);
            let expected: BTreeSet<GeneratorName> = requested
                .iter()
                .filter(|n| !existing.contains(*n))
                .cloned()
                .collect();
            prop_assert_eq!(&result.to_fetch, &expected);
            prop_assert!(result.to_fetch.is_disjoint(&result.skipped));
        }

        #[test]
        fn forced_plan_is_deduplicated_request(
            requested in prop::collection::vec(name_strategy(), 0..12),
            existing in prop::collection::btree_set(name_strategy(), 0..12),
        ) {
            let result = plan(&requested, &existing, true);
            let expected: BTreeSet<GeneratorName> = requested.iter().cloned().collect();
            prop_assert_eq!(result.to_fetch, expected);
        }
    }
}

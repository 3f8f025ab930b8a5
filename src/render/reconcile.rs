use std::hash::Hash;

use indexmap::IndexSet;

/// Outcome of diffing a retained element set against the desired data set.
///
/// Orderings are deterministic: removals follow existing order, additions and
/// updates follow desired order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePlan<K> {
    pub to_remove: Vec<K>,
    pub to_add: Vec<K>,
    pub to_update: Vec<K>,
}

/// Pure keyed join for retained-mode draw adapters.
///
/// Adapters that mirror persistent elements (DOM nodes, canvas objects)
/// apply the plan instead of appending unboundedly: existing keys update in
/// place, vanished keys are removed, new keys are created. Repeated
/// reconciliation against unchanged data yields an empty add/remove set,
/// which is what makes re-render idempotent for such adapters.
#[must_use]
pub fn reconcile_keyed<K>(existing: &[K], desired: &[K]) -> ReconcilePlan<K>
where
    K: Eq + Hash + Clone,
{
    let existing_set: IndexSet<&K> = existing.iter().collect();
    let desired_set: IndexSet<&K> = desired.iter().collect();

    let to_remove = existing
        .iter()
        .filter(|key| !desired_set.contains(*key))
        .cloned()
        .collect();
    let to_add = desired
        .iter()
        .filter(|key| !existing_set.contains(*key))
        .cloned()
        .collect();
    let to_update = desired
        .iter()
        .filter(|key| existing_set.contains(*key))
        .cloned()
        .collect();

    ReconcilePlan {
        to_remove,
        to_add,
        to_update,
    }
}

#[cfg(test)]
mod tests {
    use super::reconcile_keyed;

    #[test]
    fn plan_partitions_keys_in_deterministic_order() {
        let existing = vec!["a", "b", "c"];
        let desired = vec!["c", "d", "a"];

        let plan = reconcile_keyed(&existing, &desired);
        assert_eq!(plan.to_remove, vec!["b"]);
        assert_eq!(plan.to_add, vec!["d"]);
        assert_eq!(plan.to_update, vec!["c", "a"]);
    }

    #[test]
    fn unchanged_data_yields_update_only_plan() {
        let keys = vec![1, 2, 3];
        let plan = reconcile_keyed(&keys, &keys);
        assert!(plan.to_remove.is_empty());
        assert!(plan.to_add.is_empty());
        assert_eq!(plan.to_update, keys);
    }
}

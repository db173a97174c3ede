#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/nsga2_sort_test.rs"]
mod nsga2_sort_test;

use super::*;
use crate::utils::compare_floats;

/// Selects up to `n` solutions: whole Pareto fronts in rank order while they fit, then members of
/// the first front which does not fit, the most isolated ones (by crowding distance) first.
///
/// Members of a front which fits keep ascending index order. Equal crowding distances are broken
/// by index as well.
pub fn select_and_rank<'a, S: ObjectiveVector>(solutions: &'a [S], n: usize) -> Vec<AssignedCrowdingDistance<'a, S>> {
    let target = n.min(solutions.len());
    let mut selected = Vec::with_capacity(target);
    let mut front = non_dominated_sort(solutions);

    while selected.len() < target && !front.is_empty() {
        let mut assigned = assign_crowding_distance(&front);
        let left = target - selected.len();

        if assigned.len() > left {
            assigned.sort_by(|a, b| {
                compare_floats(b.crowding_distance, a.crowding_distance).then(a.index.cmp(&b.index))
            });
            assigned.truncate(left);
        } else {
            assigned.sort_by_key(|item| item.index);
        }

        selected.extend(assigned);
        front = front.next_front();
    }

    debug_assert_eq!(selected.len(), target);

    selected
}

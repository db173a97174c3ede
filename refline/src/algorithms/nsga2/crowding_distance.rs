#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/crowding_distance_test.rs"]
mod crowding_distance_test;

use super::{Front, ObjectiveVector};
use crate::utils::{Float, compare_floats};

/// Keeps crowding distance assigned to a solution of the front.
pub struct AssignedCrowdingDistance<'a, S>
where
    S: 'a,
{
    /// Index of the solution.
    pub index: usize,
    /// Solution itself.
    pub solution: &'a S,
    /// Rank of the front the solution belongs to.
    pub rank: usize,
    /// Crowding distance, boundary solutions have infinite distance.
    pub crowding_distance: Float,
}

/// Assigns a crowding distance to each solution in `front`.
pub fn assign_crowding_distance<'a, S: ObjectiveVector>(front: &Front<'a, S>) -> Vec<AssignedCrowdingDistance<'a, S>> {
    let mut a: Vec<_> = front
        .iter()
        .map(|(solution, index)| AssignedCrowdingDistance {
            index,
            solution,
            rank: front.rank(),
            crowding_distance: 0.0,
        })
        .collect();

    let objective_count = a.first().map_or(0, |first| first.solution.objectives().len());

    // non-empty here: objective count is taken from the first solution
    let last_idx = a.len().saturating_sub(1);

    (0..objective_count).for_each(|axis| {
        // first, sort according to objective
        a.sort_by(|a, b| compare_floats(a.solution.objectives()[axis], b.solution.objectives()[axis]));

        // assign infinite crowding distance to the extremes
        a[0].crowding_distance = Float::INFINITY;
        a[last_idx].crowding_distance = Float::INFINITY;

        // the distance between the "best" and "worst" solution according to "objective"
        let spread = (a[last_idx].solution.objectives()[axis] - a[0].solution.objectives()[axis]).abs();
        debug_assert!(spread >= 0.0);

        if spread > 0.0 {
            let norm = 1.0 / (spread * (objective_count as Float));
            debug_assert!(norm > 0.0);

            for i in 1..a.len().saturating_sub(1) {
                let distance = (a[i + 1].solution.objectives()[axis] - a[i - 1].solution.objectives()[axis]).abs();
                a[i].crowding_distance += distance * norm;
            }
        }
    });

    a
}

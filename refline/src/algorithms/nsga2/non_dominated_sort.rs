//! Fast non-dominated sorting as introduced by NSGA-II: `O(M * N^2)` comparisons for `N` solutions
//! with `M` objectives, then fronts are peeled off one by one in linear time.
//!
//! A solution belongs to the front `k` when it is dominated only by solutions of fronts `0..k`.
//! Solutions which are better in one objective and worse in another do not dominate each other
//! and can share a front.

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/non_dominated_sort_test.rs"]
mod non_dominated_sort_test;

use super::{ObjectiveVector, dominance_order};
use std::cmp::Ordering;

/// A Pareto front produced by non-dominated sort. Indices of the front are kept in ascending order.
///
/// The front owns the bookkeeping required to produce the next front, so fronts are consumed
/// sequentially via [`Front::next_front`].
#[derive(Clone, Debug)]
pub struct Front<'a, S> {
    solutions: &'a [S],
    dominates: Vec<Vec<usize>>,
    dominators_left: Vec<usize>,
    members: Vec<usize>,
    spare: Vec<usize>,
    rank: usize,
}

impl<'a, S> Front<'a, S> {
    /// Returns rank of the front, zero is the non-dominated one.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Iterates over solutions of the front together with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (&'a S, usize)> + '_ {
        let solutions = self.solutions;
        self.members.iter().map(move |&idx| (&solutions[idx], idx))
    }

    /// Returns indices of solutions which belong to the front.
    pub fn indices(&self) -> &[usize] {
        self.members.as_slice()
    }

    /// Returns amount of solutions in the front.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the front has no solutions.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Peels the current front off and returns the next one.
    pub fn next_front(mut self) -> Self {
        let mut next = std::mem::take(&mut self.spare);
        next.clear();

        for &member in self.members.iter() {
            for &dominated in self.dominates[member].iter() {
                debug_assert!(self.dominators_left[dominated] > 0);

                self.dominators_left[dominated] -= 1;
                if self.dominators_left[dominated] == 0 {
                    next.push(dominated);
                }
            }
        }

        next.sort_unstable();

        self.spare = std::mem::replace(&mut self.members, next);
        self.rank += 1;

        self
    }
}

/// Performs a non-dominated sort of `solutions`. Returns the first Pareto front.
pub fn non_dominated_sort<S: ObjectiveVector>(solutions: &[S]) -> Front<'_, S> {
    let mut dominates = vec![Vec::new(); solutions.len()];
    let mut dominators_left = vec![0_usize; solutions.len()];
    let mut members = Vec::new();

    // every pair is compared once
    for (a_idx, a) in solutions.iter().enumerate() {
        for (b_idx, b) in solutions.iter().enumerate().skip(a_idx + 1) {
            match dominance_order(a.objectives(), b.objectives()) {
                Ordering::Less => {
                    dominates[a_idx].push(b_idx);
                    dominators_left[b_idx] += 1;
                }
                Ordering::Greater => {
                    dominates[b_idx].push(a_idx);
                    dominators_left[a_idx] += 1;
                }
                Ordering::Equal => {}
            }
        }

        // `a` is compared with all others at this point
        if dominators_left[a_idx] == 0 {
            members.push(a_idx);
        }
    }

    Front { solutions, dominates, dominators_left, members, spare: Vec::new(), rank: 0 }
}

/// Splits `solutions` into Pareto fronts: the result is front-major, each front contains ascending
/// indices of its solutions.
pub fn rank_fronts<S: ObjectiveVector>(solutions: &[S]) -> Vec<Vec<usize>> {
    let mut fronts = Vec::new();
    let mut front = non_dominated_sort(solutions);

    while !front.is_empty() {
        fronts.push(front.indices().to_vec());
        front = front.next_front();
    }

    fronts
}

/// Returns a rank (index of Pareto front) for each solution.
pub fn rank_solutions<S: ObjectiveVector>(solutions: &[S]) -> Vec<usize> {
    let mut ranks = vec![0; solutions.len()];

    rank_fronts(solutions).into_iter().enumerate().for_each(|(rank, front)| {
        front.into_iter().for_each(|idx| ranks[idx] = rank);
    });

    ranks
}

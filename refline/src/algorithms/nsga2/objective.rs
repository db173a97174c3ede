#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga2/objective_test.rs"]
mod objective_test;

use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;

/// Provides access to objective values of a solution. All objectives are minimized.
pub trait ObjectiveVector {
    /// Returns objective values.
    fn objectives(&self) -> &[Float];
}

impl ObjectiveVector for [Float] {
    fn objectives(&self) -> &[Float] {
        self
    }
}

impl ObjectiveVector for Vec<Float> {
    fn objectives(&self) -> &[Float] {
        self.as_slice()
    }
}

impl<T: ObjectiveVector + ?Sized> ObjectiveVector for &T {
    fn objectives(&self) -> &[Float] {
        (**self).objectives()
    }
}

/// Calculates dominance order of two objective vectors: `Less` means that `a` dominates `b`,
/// `Greater` means that `b` dominates `a`, `Equal` means that they are mutually non-dominated.
pub fn dominance_order(a: &[Float], b: &[Float]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());

    let mut less_cnt = 0;
    let mut greater_cnt = 0;

    for (a, b) in a.iter().zip(b.iter()) {
        match compare_floats(*a, *b) {
            Ordering::Less => {
                less_cnt += 1;
            }
            Ordering::Greater => {
                greater_cnt += 1;
            }
            Ordering::Equal => {}
        }
    }

    if less_cnt > 0 && greater_cnt == 0 {
        Ordering::Less
    } else if greater_cnt > 0 && less_cnt == 0 {
        Ordering::Greater
    } else {
        debug_assert!((less_cnt > 0 && greater_cnt > 0) || (less_cnt == 0 && greater_cnt == 0));
        Ordering::Equal
    }
}

#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers using a total order where NaN is the greatest value and all
/// NaNs are equal. Signed zeros are equal.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

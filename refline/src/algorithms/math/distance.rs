#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates euclidean norm of the vector.
pub fn euclidean_norm(vector: &[Float]) -> Float {
    vector.iter().map(|value| value * value).sum::<Float>().sqrt()
}

/// Returns a vector of unit length pointing in the same direction or `None` if the vector has zero
/// length or contains non-finite values.
pub fn unit_vector(vector: &[Float]) -> Option<Vec<Float>> {
    let norm = euclidean_norm(vector);

    if norm > 0. && norm.is_finite() { Some(vector.iter().map(|value| value / norm).collect()) } else { None }
}

/// Calculates distance from the `point` to the line which goes through origin along `unit_direction`.
/// The direction is expected to have unit length.
pub fn perpendicular_distance(point: &[Float], unit_direction: &[Float]) -> Float {
    debug_assert_eq!(point.len(), unit_direction.len());

    let projection = point.iter().zip(unit_direction.iter()).map(|(p, u)| p * u).sum::<Float>();

    point
        .iter()
        .zip(unit_direction.iter())
        .map(|(p, u)| {
            let residual = p - projection * u;
            residual * residual
        })
        .sum::<Float>()
        .sqrt()
}

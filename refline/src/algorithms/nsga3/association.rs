#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/association_test.rs"]
mod association_test;

use super::{ReferenceDirections, apply_normalization};
use crate::algorithms::math::perpendicular_distance;
use crate::algorithms::nsga2::ObjectiveVector;
use crate::utils::Float;

/// Keeps the closest reference line (niche) and the distance to it for each solution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NicheAssociation {
    /// Index of the closest reference direction per solution.
    pub niches: Vec<usize>,
    /// Perpendicular distance to the closest reference line per solution.
    pub distances: Vec<Float>,
}

impl NicheAssociation {
    /// Returns amount of associated solutions.
    pub fn len(&self) -> usize {
        self.niches.len()
    }

    /// Returns true if there are no associated solutions.
    pub fn is_empty(&self) -> bool {
        self.niches.is_empty()
    }
}

/// Associates every solution with the closest reference line in normalized objective space.
/// The first direction wins when distances are equal.
pub fn associate_to_niches<S: ObjectiveVector>(
    solutions: &[S],
    directions: &ReferenceDirections,
    ideal_point: &[Float],
    intercepts: &[Float],
) -> NicheAssociation {
    let (niches, distances) = solutions
        .iter()
        .map(|solution| {
            let normalized = apply_normalization(solution.objectives(), ideal_point, intercepts);

            closest_direction(normalized.as_slice(), directions)
        })
        .unzip();

    NicheAssociation { niches, distances }
}

/// Returns index of the closest reference line and perpendicular distance to it.
pub fn closest_direction(normalized: &[Float], directions: &ReferenceDirections) -> (usize, Float) {
    directions
        .units()
        .map(|unit| perpendicular_distance(normalized, unit))
        .enumerate()
        .fold((0, Float::INFINITY), |best, (idx, distance)| if distance < best.1 { (idx, distance) } else { best })
}

#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/directions_test.rs"]
mod directions_test;

use crate::algorithms::math::unit_vector;
use crate::utils::{Float, SelectionError, SelectionResult};

/// A fixed ordered set of reference directions. Each direction defines a reference line which goes
/// through the origin of the normalized objective space.
///
/// Directions are usually points of the unit simplex (e.g. Das-Dennis), but any non-zero vectors
/// are accepted: unit vectors are precomputed once and used for all distance calculations.
#[derive(Clone, Debug)]
pub struct ReferenceDirections {
    directions: Vec<Vec<Float>>,
    units: Vec<Vec<Float>>,
}

impl ReferenceDirections {
    /// Creates a new instance of `ReferenceDirections`.
    pub fn new(directions: Vec<Vec<Float>>) -> SelectionResult<Self> {
        let dimension = directions
            .first()
            .map(|direction| direction.len())
            .ok_or_else(|| SelectionError::InvalidConfiguration("reference directions are empty".to_string()))?;

        if dimension == 0 {
            return Err(SelectionError::InvalidConfiguration("reference directions have zero dimension".to_string()));
        }

        let units = directions
            .iter()
            .enumerate()
            .map(|(index, direction)| {
                if direction.len() != dimension {
                    let actual = direction.len();
                    return Err(SelectionError::InvalidDimension { index, expected: dimension, actual });
                }

                unit_vector(direction).ok_or_else(|| {
                    SelectionError::InvalidConfiguration(format!(
                        "reference direction {index} has zero length or non-finite values"
                    ))
                })
            })
            .collect::<SelectionResult<Vec<_>>>()?;

        Ok(Self { directions, units })
    }

    /// Returns amount of objectives.
    pub fn dimension(&self) -> usize {
        self.units[0].len()
    }

    /// Returns amount of directions.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Returns true if there are no directions. Never true for a constructed instance.
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Returns direction as it was supplied.
    pub fn get(&self, index: usize) -> Option<&[Float]> {
        self.directions.get(index).map(|direction| direction.as_slice())
    }

    /// Returns unit vector of the direction.
    pub fn unit(&self, index: usize) -> Option<&[Float]> {
        self.units.get(index).map(|unit| unit.as_slice())
    }

    /// Iterates over unit vectors in the supplied order.
    pub fn units(&self) -> impl Iterator<Item = &[Float]> + '_ {
        self.units.iter().map(|unit| unit.as_slice())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/population_test.rs"]
mod population_test;

use crate::algorithms::nsga2::ObjectiveVector;
use crate::utils::{Float, SelectionError, SelectionResult};
use std::ops::Index;

/// An evaluated solution: decision vector and objective vector. All objectives are minimized.
#[derive(Clone, Debug, PartialEq)]
pub struct Individual {
    decision: Vec<Float>,
    objectives: Vec<Float>,
}

impl Individual {
    /// Creates a new instance of `Individual`.
    pub fn new(decision: Vec<Float>, objectives: Vec<Float>) -> Self {
        Self { decision, objectives }
    }

    /// Returns decision vector.
    pub fn decision(&self) -> &[Float] {
        self.decision.as_slice()
    }
}

impl ObjectiveVector for Individual {
    fn objectives(&self) -> &[Float] {
        self.objectives.as_slice()
    }
}

/// An ordered collection of individuals which share dimensionality.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates a new instance of `Population`.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Creates a population from parallel lists of decision and objective vectors, checking that
    /// all vectors of the same kind have the same dimension.
    pub fn from_parts(decisions: Vec<Vec<Float>>, objectives: Vec<Vec<Float>>) -> SelectionResult<Self> {
        if decisions.len() != objectives.len() {
            return Err(SelectionError::MismatchedParts { decisions: decisions.len(), objectives: objectives.len() });
        }

        let population = decisions.into_iter().zip(objectives).map(|(d, o)| Individual::new(d, o)).collect::<Self>();

        if let Some(first) = population.individuals.first() {
            let decision_dimension = first.decision.len();
            let mismatch = population
                .individuals
                .iter()
                .enumerate()
                .find(|(_, individual)| individual.decision.len() != decision_dimension);

            if let Some((index, individual)) = mismatch {
                return Err(SelectionError::InvalidDimension {
                    index,
                    expected: decision_dimension,
                    actual: individual.decision.len(),
                });
            }

            population.validate(first.objectives.len())?;
        }

        Ok(population)
    }

    /// Checks that every objective vector has `dimension` finite values.
    pub fn validate(&self, dimension: usize) -> SelectionResult<()> {
        self.individuals.iter().enumerate().try_for_each(|(index, individual)| {
            if individual.objectives.len() != dimension {
                let actual = individual.objectives.len();
                return Err(SelectionError::InvalidDimension { index, expected: dimension, actual });
            }

            match individual.objectives.iter().position(|value| !value.is_finite()) {
                Some(axis) => Err(SelectionError::NonFiniteObjective { index, axis }),
                None => Ok(()),
            }
        })
    }

    /// Returns amount of individuals.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Returns true if population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Returns individual at given index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Iterates over individuals in their order.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> + '_ {
        self.individuals.iter()
    }

    /// Returns individuals as a slice.
    pub fn as_slice(&self) -> &[Individual] {
        self.individuals.as_slice()
    }

    /// Returns objective dimension of the first individual, if any.
    pub fn objective_dimension(&self) -> Option<usize> {
        self.individuals.first().map(|individual| individual.objectives.len())
    }

    /// Appends individuals of the other population preserving their order.
    pub fn merge(&mut self, other: Population) {
        self.individuals.extend(other.individuals);
    }

    /// Returns a new population with individuals at given indices, in the order of indices.
    /// Indices outside of population are skipped.
    pub fn select(&self, indices: &[usize]) -> Population {
        Population::new(indices.iter().filter_map(|&idx| self.individuals.get(idx)).cloned().collect())
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<T: IntoIterator<Item = Individual>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

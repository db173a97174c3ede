#[cfg(test)]
#[path = "../../../tests/unit/algorithms/nsga3/normalization_test.rs"]
mod normalization_test;

use crate::algorithms::math::solve_linear_system;
use crate::algorithms::nsga2::ObjectiveVector;
use crate::utils::Float;

/// A default weight of achievement scalarizing function put on all axes except the target one.
pub const DEFAULT_ASF_WEIGHT: Float = 1E6;

/// Keeps state of objective space normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct Normalization {
    /// Per-objective best observed value.
    pub ideal_point: Vec<Float>,
    /// One objective vector per axis, as it was observed (not translated).
    pub extreme_points: Vec<Vec<Float>>,
    /// Per-axis scale of translated objectives, always positive and finite.
    pub intercepts: Vec<Float>,
    /// Axes where intercepts are taken from the max translated value instead of the hyperplane.
    pub fallback_axes: Vec<usize>,
}

impl Normalization {
    /// Returns true if hyperplane intercepts were not used for at least one axis.
    pub fn is_degenerate(&self) -> bool {
        !self.fallback_axes.is_empty()
    }

    /// Translates objectives by the ideal point and scales them by intercepts.
    pub fn apply(&self, objectives: &[Float]) -> Vec<Float> {
        apply_normalization(objectives, self.ideal_point.as_slice(), self.intercepts.as_slice())
    }
}

/// Updates ideal point, finds extreme points and intercepts using given solutions.
/// `ideal_point` is a previously known ideal point: it is never regressed.
pub fn normalize<S: ObjectiveVector>(
    ideal_point: Option<&[Float]>,
    solutions: &[S],
    asf_weight: Float,
) -> Normalization {
    let ideal_point = update_ideal_point(ideal_point, solutions);
    let extreme_points = find_extreme_points(solutions, ideal_point.as_slice(), asf_weight);
    let (intercepts, fallback_axes) = find_intercepts(solutions, extreme_points.as_slice(), ideal_point.as_slice());

    if !fallback_axes.is_empty() {
        log::debug!("degenerate normalization, max translated values are used for axes {fallback_axes:?}");
    }

    Normalization { ideal_point, extreme_points, intercepts, fallback_axes }
}

/// Returns coordinate-wise minimum of the previous ideal point (if any) and given solutions.
pub fn update_ideal_point<S: ObjectiveVector>(ideal_point: Option<&[Float]>, solutions: &[S]) -> Vec<Float> {
    let initial = match (ideal_point, solutions.first()) {
        (Some(ideal_point), _) => ideal_point.to_vec(),
        (None, Some(first)) => first.objectives().to_vec(),
        (None, None) => return Vec::new(),
    };

    solutions.iter().fold(initial, |mut ideal, solution| {
        ideal.iter_mut().zip(solution.objectives().iter()).for_each(|(ideal, &value)| {
            if value < *ideal {
                *ideal = value;
            }
        });
        ideal
    })
}

/// Calculates achievement scalarizing function of translated objectives for the given axis.
pub fn achievement_scalarizing(objectives: &[Float], ideal_point: &[Float], axis: usize, asf_weight: Float) -> Float {
    objectives
        .iter()
        .zip(ideal_point.iter())
        .enumerate()
        .map(|(idx, (value, ideal))| (value - ideal) * if idx == axis { 1. } else { asf_weight })
        .fold(Float::NEG_INFINITY, Float::max)
}

/// Finds an extreme point for each axis: a solution with minimal achievement scalarizing function
/// which puts `asf_weight` on every other axis. The first minimizer wins.
pub fn find_extreme_points<S: ObjectiveVector>(
    solutions: &[S],
    ideal_point: &[Float],
    asf_weight: Float,
) -> Vec<Vec<Float>> {
    (0..ideal_point.len())
        .filter_map(|axis| {
            solutions
                .iter()
                .map(|solution| {
                    (solution, achievement_scalarizing(solution.objectives(), ideal_point, axis, asf_weight))
                })
                .fold(None, |best: Option<(&S, Float)>, (solution, asf)| match best {
                    Some((_, best_asf)) if best_asf <= asf => best,
                    _ => Some((solution, asf)),
                })
                .map(|(solution, _)| solution.objectives().to_vec())
        })
        .collect()
}

/// Finds intercepts of the hyperplane which goes through extreme points. Falls back per axis to
/// the max translated value observed among solutions when the hyperplane cannot be used.
/// Returns intercepts and axes where fallback is used.
pub fn find_intercepts<S: ObjectiveVector>(
    solutions: &[S],
    extreme_points: &[Vec<Float>],
    ideal_point: &[Float],
) -> (Vec<Float>, Vec<usize>) {
    let dimension = ideal_point.len();
    let nadir = translated_max(solutions, ideal_point);

    let matrix = extreme_points
        .iter()
        .map(|point| point.iter().zip(ideal_point.iter()).map(|(value, ideal)| value - ideal).collect())
        .collect::<Vec<Vec<_>>>();

    let hyperplane =
        if matrix.len() == dimension { solve_linear_system(matrix.as_slice(), &vec![1.; dimension]) } else { None };

    let mut fallback_axes = Vec::new();
    let intercepts = (0..dimension)
        .map(|axis| {
            let intercept = hyperplane.as_ref().map(|coefficients| 1. / coefficients[axis]);

            match intercept {
                Some(intercept) if intercept.is_finite() && intercept > 0. => intercept,
                _ => {
                    fallback_axes.push(axis);
                    // all solutions are at the ideal point on this axis: any positive scale works
                    if nadir[axis] > 0. && nadir[axis].is_finite() { nadir[axis] } else { 1. }
                }
            }
        })
        .collect();

    (intercepts, fallback_axes)
}

/// Translates objectives by the ideal point and scales them by intercepts.
pub fn apply_normalization(objectives: &[Float], ideal_point: &[Float], intercepts: &[Float]) -> Vec<Float> {
    objectives
        .iter()
        .zip(ideal_point.iter().zip(intercepts.iter()))
        .map(|(value, (ideal, intercept))| (value - ideal) / intercept)
        .collect()
}

fn translated_max<S: ObjectiveVector>(solutions: &[S], ideal_point: &[Float]) -> Vec<Float> {
    solutions.iter().fold(vec![Float::NEG_INFINITY; ideal_point.len()], |mut nadir, solution| {
        nadir.iter_mut().zip(solution.objectives().iter().zip(ideal_point.iter())).for_each(|(nadir, (value, ideal))| {
            *nadir = nadir.max(value - ideal);
        });
        nadir
    })
}

#[cfg(test)]
#[path = "../../tests/unit/survival/reference_line_test.rs"]
mod reference_line_test;

use super::{Survival, SurvivalOutcome};
use crate::algorithms::nsga2::rank_fronts;
use crate::algorithms::nsga3::*;
use crate::models::{Individual, Population};
use crate::utils::{Float, InfoLogger, Random, SelectionError, SelectionResult};

/// A survival used by NSGA-III: whole fronts first, then the last front which does not fit is
/// processed by niching around reference lines in normalized objective space.
///
/// The instance owns normalization state (ideal point, extreme points and intercepts) which evolves
/// from generation to generation, so one instance should be used by exactly one optimization loop.
pub struct ReferenceLineSurvival {
    directions: ReferenceDirections,
    asf_weight: Float,
    ideal_point: Option<Vec<Float>>,
    extreme_points: Option<Vec<Vec<Float>>>,
    intercepts: Option<Vec<Float>>,
    logger: Option<InfoLogger>,
}

impl ReferenceLineSurvival {
    /// Creates a new instance of `ReferenceLineSurvival` with default settings.
    pub fn new(directions: ReferenceDirections) -> Self {
        Self {
            directions,
            asf_weight: DEFAULT_ASF_WEIGHT,
            ideal_point: None,
            extreme_points: None,
            intercepts: None,
            logger: None,
        }
    }

    /// Returns reference directions.
    pub fn reference_directions(&self) -> &ReferenceDirections {
        &self.directions
    }

    /// Returns the best observed value per objective, if any population was seen.
    pub fn ideal_point(&self) -> Option<&[Float]> {
        self.ideal_point.as_deref()
    }

    /// Returns extreme points found by the last selection.
    pub fn extreme_points(&self) -> Option<&[Vec<Float>]> {
        self.extreme_points.as_deref()
    }

    /// Returns intercepts found by the last selection.
    pub fn intercepts(&self) -> Option<&[Float]> {
        self.intercepts.as_deref()
    }

    /// Folds objectives of given population into the ideal point without selecting anything.
    pub fn observe(&mut self, population: &Population) -> SelectionResult<()> {
        population.validate(self.directions.dimension())?;

        if !population.is_empty() {
            self.ideal_point = Some(update_ideal_point(self.ideal_point.as_deref(), population.as_slice()));
        }

        Ok(())
    }

    /// Associates individuals with reference lines using the current normalization state.
    /// Returns `None` if there was no selection yet.
    pub fn associate(&self, population: &Population) -> Option<NicheAssociation> {
        match (self.ideal_point.as_deref(), self.intercepts.as_deref()) {
            (Some(ideal_point), Some(intercepts)) => {
                Some(associate_to_niches(population.as_slice(), &self.directions, ideal_point, intercepts))
            }
            _ => None,
        }
    }
}

impl Survival for ReferenceLineSurvival {
    fn select(
        &mut self,
        candidates: &Population,
        n_survive: usize,
        random: &dyn Random,
    ) -> SelectionResult<SurvivalOutcome> {
        candidates.validate(self.directions.dimension())?;

        if candidates.is_empty() {
            return Ok(SurvivalOutcome::new(candidates, Vec::new(), n_survive));
        }

        let fronts = rank_fronts(candidates.as_slice());
        let total_fronts = fronts.len();
        let (mut survivors, last_front) = split_fronts(fronts, n_survive);

        // normalization follows the current frontier: accepted individuals and the last front
        let considered =
            survivors.iter().chain(last_front.iter()).map(|&idx| &candidates[idx]).collect::<Vec<&Individual>>();

        let normalization = normalize(self.ideal_point.as_deref(), considered.as_slice(), self.asf_weight);

        let remaining = n_survive.min(candidates.size()) - survivors.len();

        let picked = if remaining > 0 {
            let association = associate_to_niches(
                considered.as_slice(),
                &self.directions,
                normalization.ideal_point.as_slice(),
                normalization.intercepts.as_slice(),
            );

            let (accepted_niches, last_niches) = association.niches.split_at(survivors.len());
            let last_distances = &association.distances[survivors.len()..];

            let mut counts = niche_counts(self.directions.len(), accepted_niches.iter().copied());
            let positions = fill_niches(remaining, counts.as_mut_slice(), last_niches, last_distances, random)?;

            let picked = positions.len();
            survivors.extend(positions.into_iter().map(|position| last_front[position]));

            picked
        } else {
            0
        };

        let summary = format!(
            "selected {} of {} candidates ({} fronts), {} by niching{}",
            survivors.len(),
            candidates.size(),
            total_fronts,
            picked,
            if normalization.is_degenerate() { ", degenerate normalization" } else { "" }
        );
        log::debug!("{summary}");
        if let Some(logger) = self.logger.as_ref() {
            (logger)(summary.as_str());
        }

        let Normalization { ideal_point, extreme_points, intercepts, .. } = normalization;
        self.ideal_point = Some(ideal_point);
        self.extreme_points = Some(extreme_points);
        self.intercepts = Some(intercepts);

        Ok(SurvivalOutcome::new(candidates, survivors, n_survive))
    }
}

/// Accepts whole fronts while they fit into `n_survive`. Returns accepted indices and the first
/// front which does not fit (empty if all fronts fit).
fn split_fronts(fronts: Vec<Vec<usize>>, n_survive: usize) -> (Vec<usize>, Vec<usize>) {
    let total = fronts.iter().map(Vec::len).sum::<usize>();
    let mut accepted = Vec::with_capacity(n_survive.min(total));

    for front in fronts {
        if accepted.len() + front.len() > n_survive {
            return (accepted, front);
        }

        accepted.extend(front);
    }

    (accepted, Vec::new())
}

/// Provides configurable way to build reference line survival using fluent interface style.
#[derive(Default)]
pub struct ReferenceLineSurvivalBuilder {
    directions: Option<Vec<Vec<Float>>>,
    ideal_point: Option<Vec<Float>>,
    asf_weight: Option<Float>,
    logger: Option<InfoLogger>,
}

impl ReferenceLineSurvivalBuilder {
    /// Sets reference directions. Required.
    pub fn with_reference_directions(mut self, directions: Vec<Vec<Float>>) -> Self {
        self.directions = Some(directions);
        self
    }

    /// Sets an initially known ideal point.
    pub fn with_ideal_point(mut self, ideal_point: Vec<Float>) -> Self {
        self.ideal_point = Some(ideal_point);
        self
    }

    /// Sets a weight of achievement scalarizing function put on non target axes when extreme points
    /// are searched. Default is [`DEFAULT_ASF_WEIGHT`].
    pub fn with_asf_weight(mut self, asf_weight: Float) -> Self {
        self.asf_weight = Some(asf_weight);
        self
    }

    /// Sets a logger which receives a summary of each selection.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds reference line survival.
    pub fn build(self) -> SelectionResult<ReferenceLineSurvival> {
        let directions = self
            .directions
            .ok_or_else(|| SelectionError::InvalidConfiguration("reference directions are not set".to_string()))
            .and_then(ReferenceDirections::new)?;

        let asf_weight = self.asf_weight.unwrap_or(DEFAULT_ASF_WEIGHT);
        if !asf_weight.is_finite() || asf_weight <= 1. {
            let message = format!("asf weight should be finite and > 1, got {asf_weight}");
            return Err(SelectionError::InvalidConfiguration(message));
        }

        if let Some(ideal_point) = self.ideal_point.as_ref() {
            if ideal_point.len() != directions.dimension() {
                return Err(SelectionError::InvalidConfiguration(format!(
                    "ideal point has dimension {}, expected {}",
                    ideal_point.len(),
                    directions.dimension()
                )));
            }

            if ideal_point.iter().any(|value| !value.is_finite()) {
                return Err(SelectionError::InvalidConfiguration("ideal point has non-finite values".to_string()));
            }
        }

        Ok(ReferenceLineSurvival {
            directions,
            asf_weight,
            ideal_point: self.ideal_point,
            extreme_points: None,
            intercepts: None,
            logger: self.logger,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/survival/rank_and_crowding_test.rs"]
mod rank_and_crowding_test;

use super::{Survival, SurvivalOutcome};
use crate::algorithms::nsga2::select_and_rank;
use crate::models::Population;
use crate::utils::{Random, SelectionResult};

/// A survival used by NSGA-II: whole fronts first, then the most isolated solutions of the last
/// front by crowding distance. Deterministic, no random draws are consumed.
#[derive(Clone, Debug, Default)]
pub struct RankAndCrowdingSurvival {}

impl Survival for RankAndCrowdingSurvival {
    fn select(
        &mut self,
        candidates: &Population,
        n_survive: usize,
        _: &dyn Random,
    ) -> SelectionResult<SurvivalOutcome> {
        if let Some(dimension) = candidates.objective_dimension() {
            candidates.validate(dimension)?;
        }

        let indices =
            select_and_rank(candidates.as_slice(), n_survive).into_iter().map(|assigned| assigned.index).collect();

        Ok(SurvivalOutcome::new(candidates, indices, n_survive))
    }
}

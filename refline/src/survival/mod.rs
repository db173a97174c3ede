//! This module contains survival strategies: they decide which candidates are kept when there are
//! more candidates than slots in the next generation.

mod rank_and_crowding;
pub use self::rank_and_crowding::RankAndCrowdingSurvival;

mod reference_line;
pub use self::reference_line::{ReferenceLineSurvival, ReferenceLineSurvivalBuilder};

use crate::models::Population;
use crate::utils::{Random, SelectionResult};

/// Specifies a survival strategy shared by algorithm variants.
pub trait Survival {
    /// Selects up to `n_survive` individuals from `candidates`.
    ///
    /// When there are fewer candidates than `n_survive`, all of them are returned and the
    /// difference is reported via [`SurvivalOutcome::shortage`]: nothing is duplicated.
    fn select(
        &mut self,
        candidates: &Population,
        n_survive: usize,
        random: &dyn Random,
    ) -> SelectionResult<SurvivalOutcome>;
}

/// A result of the selection.
#[derive(Clone, Debug)]
pub struct SurvivalOutcome {
    /// Selected individuals, front rank is non-decreasing.
    pub survivors: Population,
    /// Indices of selected individuals in candidates population.
    pub indices: Vec<usize>,
    /// Amount of requested individuals which could not be selected due to lack of candidates.
    pub shortage: usize,
}

impl SurvivalOutcome {
    /// Creates an outcome from candidates and indices of survivors.
    pub fn new(candidates: &Population, indices: Vec<usize>, n_survive: usize) -> Self {
        let survivors = candidates.select(indices.as_slice());
        let shortage = n_survive.saturating_sub(indices.len());

        if shortage > 0 {
            let total = candidates.size();
            log::warn!("cannot select {n_survive} individuals from {total} candidates: {shortage} missing");
        }

        Self { survivors, indices, shortage }
    }

    /// Returns true if fewer individuals than requested were selected.
    pub fn is_underfilled(&self) -> bool {
        self.shortage > 0
    }
}

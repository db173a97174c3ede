//! This module reimports a common used types.

pub use crate::algorithms::nsga2::ObjectiveVector;
pub use crate::algorithms::nsga3::ReferenceDirections;

pub use crate::models::Individual;
pub use crate::models::Population;

pub use crate::survival::RankAndCrowdingSurvival;
pub use crate::survival::ReferenceLineSurvival;
pub use crate::survival::ReferenceLineSurvivalBuilder;
pub use crate::survival::Survival;
pub use crate::survival::SurvivalOutcome;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::ReplayRandom;
pub use crate::utils::{Random, SelectionError, SelectionResult};

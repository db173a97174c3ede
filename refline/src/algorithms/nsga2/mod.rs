//! This module contains a logic for ranking solutions by Pareto dominance as introduced by
//! `Non Dominated Sorting Genetic Algorithm II`.
//!
//! For more details regarding NSGA-II algorithm details, check original paper "A fast and elitist
//! multiobjective genetic algorithm: NSGA-II", Kalyanmoy Deb et al. DOI: `10.1109/4235.996017`
//!
//! The non-dominated sort and the crowding distance are shared by survival strategies: the
//! reference line survival uses fronts only, rank and crowding survival uses both.

mod crowding_distance;
pub use self::crowding_distance::*;

mod non_dominated_sort;
pub use self::non_dominated_sort::*;

mod nsga2_sort;
pub use self::nsga2_sort::select_and_rank;

mod objective;
pub use self::objective::*;

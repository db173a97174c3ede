//! This crate implements an environmental selection used by reference-direction based
//! many-objective evolutionary algorithms (NSGA-III family): given more candidates than slots, it
//! decides which of them survive into the next generation.
//!
//! The selection combines:
//!
//! - non-dominated ranking of candidates into Pareto fronts
//! - adaptive normalization of objectives using an ideal point and hyperplane intercepts
//! - association of candidates with reference lines
//! - niche preserving selection from the last front which does not fit completely
//!
//! Orchestration (variation operators, termination, evaluation) is left to the caller: a survival
//! strategy consumes a population of already evaluated individuals and a source of randomness.
//!
//! # Examples
//!
//! ```
//! use refline::prelude::*;
//!
//! let survival = ReferenceLineSurvivalBuilder::default()
//!     .with_reference_directions(vec![vec![1., 0.], vec![0.5, 0.5], vec![0., 1.]])
//!     .build();
//! let mut survival = survival.expect("valid reference directions");
//!
//! let candidates = Population::new(vec![
//!     Individual::new(vec![0.], vec![0., 1.]),
//!     Individual::new(vec![1.], vec![1., 0.]),
//!     Individual::new(vec![2.], vec![0.5, 0.5]),
//!     Individual::new(vec![3.], vec![1., 1.]),
//! ]);
//!
//! let random = DefaultRandom::new_repeatable(0);
//! let outcome = survival.select(&candidates, 3, &random).expect("valid candidates");
//!
//! assert_eq!(outcome.survivors.size(), 3);
//! assert!(!outcome.is_underfilled());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/property/mod.rs"]
mod property;

#[cfg(test)]
#[path = "../tests/regression/mod.rs"]
mod regression;

pub mod algorithms;
pub mod format;
pub mod models;
pub mod prelude;
pub mod survival;
pub mod utils;

//! This module contains building blocks of the reference line based selection used by NSGA-III.
//!
//! For more details, check the original paper "An Evolutionary Many-Objective Optimization
//! Algorithm Using Reference-Point-Based Nondominated Sorting Approach, Part I: Solving Problems
//! With Box Constraints", Kalyanmoy Deb, Himanshu Jain. DOI: `10.1109/TEVC.2013.2281535`
//!
//! The pipeline is:
//!
//! - [`normalize`]: maintains ideal point, finds extreme points and hyperplane intercepts
//! - [`associate_to_niches`]: finds the closest reference line for every normalized solution
//! - [`fill_niches`]: picks solutions of the last front preferring under-represented niches

mod association;
pub use self::association::*;

mod directions;
pub use self::directions::*;

mod niching;
pub use self::niching::*;

mod normalization;
pub use self::normalization::*;

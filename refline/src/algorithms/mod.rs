//! This module contains algorithms used by survival strategies.

pub mod math;
pub mod nsga2;
pub mod nsga3;

//! This module contains population models consumed by survival strategies.

mod population;
pub use self::population::*;

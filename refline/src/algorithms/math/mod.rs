//! This module contains some vector and linear algebra related functionality.

mod distance;
pub use self::distance::*;

mod linear;
pub use self::linear::*;

use std::sync::Arc;

/// Alias to a scalar floating type.
///
/// NOTE: keep `f64`: intercepts are compared against recorded values with a tight tolerance.
pub type Float = f64;

/// A logger type which is called with a short summary of each selection.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

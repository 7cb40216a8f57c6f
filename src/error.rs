use thiserror::Error;

/// Configuration errors raised while building a [Grid](crate::Grid).
///
/// Failing to find a path is not an error: searches signal it with an absent path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// The cell radius is zero, negative or not finite, giving a degenerate diameter.
    #[error("invalid node radius {0}: must be positive and finite")]
    InvalidRadius(f32),
    /// The world extent is negative or not finite.
    #[error("invalid grid extent {width} x {height}: must be non-negative and finite")]
    InvalidExtent { width: f32, height: f32 },
    /// The extent rounds to zero cells along an axis.
    #[error("grid of {size_x} x {size_y} cells cannot hold any cell")]
    EmptyGrid { size_x: usize, size_y: usize },
    /// The cell count does not fit in memory addressing.
    #[error("grid extent {width} x {height} yields too many cells")]
    TooLarge { width: f32, height: f32 },
}

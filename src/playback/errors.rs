//! Playback error types

use thiserror::Error;

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Errors reported by the playback controller
///
/// Most controller operations cannot fail: stepping without an algorithm
/// and selecting an unknown algorithm are no-ops, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Speed must be at least 1 step per tick unit
    #[error("invalid speed {0}: speed must be positive")]
    InvalidSpeed(u32),
}

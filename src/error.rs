//! Error types for lanekit.
//!
//! The core vector operations are total: an unsupported (element, width)
//! combination or an out-of-range constant lane index fails at compile time,
//! never at runtime. The only runtime failures live at the slice boundary and
//! at the checked dynamic lane accessor, and both are routine outcomes a
//! caller is expected to handle, so they are plain error values rather than
//! panics.

use thiserror::Error;

/// Error type for the fallible edges of the vector API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaneError {
    /// A slice was too short to fill or drain a whole vector.
    #[error("slice of length {got} is too short for a {lanes}-lane vector")]
    SliceTooShort {
        /// Lane count of the vector involved.
        lanes: usize,
        /// Length of the slice that was provided.
        got: usize,
    },

    /// A runtime lane index was outside `[0, LANES)`.
    #[error("lane index {index} is out of range for a {lanes}-lane vector")]
    LaneOutOfRange {
        /// Lane count of the vector involved.
        lanes: usize,
        /// The offending index.
        index: usize,
    },
}

/// Result type alias for lanekit operations.
pub type Result<T> = std::result::Result<T, LaneError>;

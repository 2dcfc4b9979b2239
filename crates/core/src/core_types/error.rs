//! Error types for the few fallible conversions in the core crate.
//!
//! Arithmetic never fails: degenerate results surface as `NaN` components
//! and are detected with [`V3d::is_valid`](super::V3d::is_valid).

use std::fmt;

/// A slice handed to `V3d::try_from` did not hold exactly three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceLengthError {
    len: usize,
}

impl SliceLengthError {
    pub(crate) fn new(len: usize) -> Self {
        Self { len }
    }

    /// Length of the rejected slice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the rejected slice was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for SliceLengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected 3 vector components, got {}", self.len)
    }
}

impl std::error::Error for SliceLengthError {}

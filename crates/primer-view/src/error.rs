//! View-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur when constructing a sub-view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The requested window is malformed or exceeds the view's capacity.
    InvalidRange {
        /// Requested start position (inclusive).
        start: usize,
        /// Requested end position (exclusive).
        end: usize,
        /// Largest position the window may extend to.
        bound: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end, bound } => {
                write!(
                    f,
                    "invalid sub-view range [{start}, {end}): bound is {bound}"
                )
            }
        }
    }
}

impl Error for ViewError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_range() {
        let err = ViewError::InvalidRange {
            start: 3,
            end: 9,
            bound: 8,
        };
        assert_eq!(err.to_string(), "invalid sub-view range [3, 9): bound is 8");
    }
}

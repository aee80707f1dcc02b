//! Error types reported by the views and cursors.

use core::fmt;
use core::panic::Location;

/// What went wrong when a view or cursor was misused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// A cursor without a parent, or positioned outside `[0, len)`, was
    /// dereferenced or moved.
    #[error("cursor is not dereferenceable (index {index}, len {len})")]
    InvalidCursor { index: isize, len: usize },

    /// Two cursors from different views were compared or subtracted.
    #[error("cursors belong to different views")]
    CrossContainer,

    /// An element index was outside `[0, len)`.
    #[error("index {index} is out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },

    /// A sub-view would extend past the end of its source view.
    #[error("slice at offset {offset} with {count} element(s) is out of range (len {len})")]
    SliceOutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },

    /// The view has a null base address (or, for flat views, no elements).
    #[error("view is null or empty")]
    NullView,
}

/// A [`ViewError`] together with the operation that detected it and the
/// caller's source location.
///
/// This is what the [violation hook](crate::set_violation_hook) receives. With
/// [`Strategy::Panic`](crate::Strategy::Panic) it is also the panic payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub error: ViewError,
    pub operation: &'static str,
    pub location: &'static Location<'static>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): {}: {}",
            self.location.file(),
            self.location.line(),
            self.operation,
            self.error
        )
    }
}

impl core::error::Error for Violation {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

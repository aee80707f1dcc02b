//! array-view - non-owning views over contiguous memory
//!
//! # Overview
//!
//! Two kinds of view, both two words wide and free to copy around:
//!
//! - [`ArrayView`] / [`ArrayViewMut`]: a base pointer and an element count,
//!   like `&[T]` / `&mut [T]` but with a null state, random-access
//!   [cursors](cursor), and configurable violation reporting.
//! - [`StridedView`] / [`StridedViewMut`]: one field of an array of records,
//!   seen as an array of that field. The field offset and record stride are
//!   const generic parameters.
//!
//! Views never allocate and never free. The memory they look at belongs to
//! someone else and the lifetime parameter `'a` keeps it alive and in place.
//!
//! # Quick Start
//!
//! ```
//! use array_view::{ArrayView, ArrayViewMut, strided_view};
//!
//! let mut scores = vec![10, 20, 30, 40];
//!
//! let mut writable = ArrayViewMut::from(&mut scores);
//! writable[1] += 5;
//! *writable.back_mut() = 0;
//!
//! let view = ArrayView::from(writable);
//! assert_eq!(view.as_slice(), &[10, 25, 30, 0]);
//! assert_eq!(view.slice_from(2).len(), 2);
//!
//! #[derive(Clone, Copy)]
//! struct Sample {
//!     time: u64,
//!     value: f32,
//! }
//!
//! let samples = [Sample { time: 1, value: 0.5 }, Sample { time: 2, value: 0.25 }];
//! let values = strided_view!(&samples, Sample, value);
//! assert_eq!(values[1], 0.25);
//! ```
//!
//! # Checked and unchecked builds
//!
//! Indexed access and cursor movement validate their arguments only when
//! [`CHECKED`] is true, which by default follows `debug_assertions`. `at()` and
//! slicing are validated in every build. See [`config`] for the Cargo
//! features that override the default.
//!
//! # Violations
//!
//! A failed check builds a [`Violation`] (the [`ViewError`], the operation
//! name and the caller's location) and passes it to the installed
//! [`ViolationHook`]. The default hook aborts; [`set_strategy`] with
//! [`Strategy::Panic`] turns violations into catchable panics. Every checked
//! accessor has a `try_*` twin that returns `Result<_, ViewError>` instead.

extern crate alloc;

pub mod array_view;
pub mod config;
pub mod contiguous;
pub mod cursor;
pub mod error;
mod hook;
pub mod strided;

#[cfg(test)]
mod testing;

pub use array_view::{AddressKey, ArrayView, ArrayViewMut, make_array_view};
pub use config::CHECKED;
pub use contiguous::{Contiguous, ContiguousMut};
pub use cursor::{Cursor, CursorMut, Indexed, IndexedMut, Iter, ReverseCursor};
pub use error::{ViewError, Violation};
pub use hook::{
    Strategy, ViolationHook, abort_on_violation, panic_on_violation, set_strategy,
    set_violation_hook, violation_hook,
};
pub use strided::{StridedView, StridedViewMut};

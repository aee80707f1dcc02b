//! Pluggable reporting of contract violations.
//!
//! Every failed check in this crate ends up in [`report`], which hands a
//! [`Violation`] to the currently installed [`ViolationHook`]. The default hook
//! logs the violation, prints it to stderr and aborts the process. Embedders
//! that want to recover install [`panic_on_violation`] (or their own hook) and
//! catch the panic, or call the `try_*` accessors which return a
//! [`ViewError`] instead of reporting.

use core::fmt;
use core::panic::Location;
use std::sync::{PoisonError, RwLock};

use crate::error::{ViewError, Violation};

/// Receives a violation and never returns.
pub type ViolationHook = fn(&Violation) -> !;

static HOOK: RwLock<ViolationHook> = RwLock::new(abort_on_violation);

/// Built-in reporting strategies.
#[derive(Clone, Copy)]
pub enum Strategy {
    /// Log, print a diagnostic and abort. This is the default.
    Abort,
    /// Panic with the [`Violation`] as payload.
    Panic,
    /// Call a user-supplied hook.
    Custom(ViolationHook),
}

impl Strategy {
    pub fn hook(self) -> ViolationHook {
        match self {
            Strategy::Abort => abort_on_violation,
            Strategy::Panic => panic_on_violation,
            Strategy::Custom(hook) => hook,
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Abort => f.write_str("Abort"),
            Strategy::Panic => f.write_str("Panic"),
            Strategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Installs `hook` for all subsequent violations and returns the previous one.
pub fn set_violation_hook(hook: ViolationHook) -> ViolationHook {
    let mut slot = HOOK.write().unwrap_or_else(PoisonError::into_inner);
    core::mem::replace(&mut *slot, hook)
}

/// Installs the hook for `strategy` and returns the previous one.
pub fn set_strategy(strategy: Strategy) -> ViolationHook {
    set_violation_hook(strategy.hook())
}

/// Returns the currently installed hook.
pub fn violation_hook() -> ViolationHook {
    *HOOK.read().unwrap_or_else(PoisonError::into_inner)
}

/// The default hook.
pub fn abort_on_violation(violation: &Violation) -> ! {
    tracing::error!(
        operation = violation.operation,
        file = violation.location.file(),
        line = violation.location.line(),
        "{}",
        violation.error
    );
    eprintln!("{violation}");
    std::process::abort()
}

/// Raises the violation as a panic payload, recoverable with
/// [`std::panic::catch_unwind`].
pub fn panic_on_violation(violation: &Violation) -> ! {
    tracing::debug!(%violation, "raising violation as panic");
    std::panic::panic_any(*violation)
}

/// Sends a violation detected by `operation` to the installed hook.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn report(operation: &'static str, error: ViewError) -> ! {
    let violation = Violation {
        error,
        operation,
        location: Location::caller(),
    };
    let hook = violation_hook();
    hook(&violation)
}

/// Unchecked-mode fallback for accessors that cannot lean on slice indexing.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn out_of_bounds(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

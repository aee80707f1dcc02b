//! Helpers shared by the unit tests.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::{Strategy, Violation, set_strategy};

static INSTALL: Once = Once::new();

/// Runs `f`, which must trigger a violation, and returns it.
///
/// The first call switches the process to [`Strategy::Panic`] so violations
/// unwind instead of aborting the test binary.
pub(crate) fn catch_violation<R>(f: impl FnOnce() -> R) -> Violation {
    INSTALL.call_once(|| {
        set_strategy(Strategy::Panic);
    });
    let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected a violation, but the call returned"),
        Err(payload) => payload,
    };
    match payload.downcast::<Violation>() {
        Ok(violation) => *violation,
        Err(_) => panic!("panicked without a violation payload"),
    }
}

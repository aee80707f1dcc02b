//! Build-time validation switch.
//!
//! Views run in one of two modes, chosen when the crate is compiled:
//!
//! - **checked**: indexed access, `front`/`back` and cursor operations validate
//!   their arguments and send failures to the installed
//!   [violation hook](crate::set_violation_hook).
//! - **unchecked**: those paths skip validation and the hook entirely. Safe
//!   accessors still rely on core's own bounds checks, so misuse panics rather
//!   than reading out of bounds. Use `get_unchecked` when even that is too much.
//!
//! `at()` and slicing are validated in both modes.
//!
//! | Cargo features         | debug profile | release profile |
//! |------------------------|---------------|-----------------|
//! | (none)                 | checked       | unchecked       |
//! | `checked`              | checked       | checked         |
//! | `unchecked`            | unchecked     | unchecked       |
//! | `checked, unchecked`   | checked       | checked         |

/// `true` when the crate was built in checked mode.
pub const CHECKED: bool = cfg!(any(
    feature = "checked",
    all(debug_assertions, not(feature = "unchecked"))
));

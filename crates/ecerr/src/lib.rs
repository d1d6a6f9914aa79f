//! # ecerr - last-error tracking for an elliptic-curve cryptography library
//!
//! Records the most recent failure a computation ran into, exposes a
//! consumable status code, and renders human-readable diagnostics,
//! without any exception-style control flow. Propagating the condition up
//! the call chain stays the caller's job; this crate only keeps state and
//! prints.
//!
//! ## Flow
//!
//! ```text
//!  detecting frame          frames above            consuming frame
//!  ───────────────          ────────────            ───────────────
//!  capture(kind)        →   report!(f, Caught)  →   get_code()       (cheap)
//!  report!(f, Fault(k))                             get_message()    (detailed)
//! ```
//!
//! Both reads consume what they return: a captured code or message is
//! observed at most once, and `get_message` with nothing captured fails
//! with [`NothingCaptured`] instead of handing back stale data.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ecerr::{capture, get_code, get_message, report, ErrorKind, Raised, Status};
//!
//! fn ep_param_set(bits: usize) {
//!     if bits > 512 {
//!         capture(ErrorKind::NoCurve);
//!         report!("ep_param_set", Raised::Fault(ErrorKind::NoCurve));
//!     }
//! }
//!
//! fn caller() {
//!     ep_param_set(1024);
//!     match get_code() {
//!         Status::Ok => {}
//!         Status::Fault(kind) => {
//!             report!("caller", Raised::Caught);
//!             eprintln!("giving up on {}", kind);
//!         }
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Flag              | Effect |
//! |-------------------|--------|
//! | `thread-isolated` | One error context per OS thread instead of one per process |
//! | `verbose`         | Compiles the full report form (location + best-effort call stack) |
//!
//! The default (shared) mode is single-threaded by contract; see
//! `ecerr_runtime::domain`.

// Re-export core types
pub use ecerr_core::{ErrContext, ErrorKind, NothingCaptured, Raised, Status, KIND_COUNT};

// Re-export the diagnostic-stream controls and the ddebug macro
pub use ecerr_core::ddebug;
pub use ecerr_core::diag::{init as init_diag, set_debug_enabled, set_flush_enabled};

// Re-export env utilities
pub use ecerr_core::{env_get, env_get_bool};

// Re-export runtime entry points
pub use ecerr_runtime::report;
#[cfg(feature = "verbose")]
pub use ecerr_runtime::{format_full, report_full};
pub use ecerr_runtime::{format_simple, init_default, report_auto, report_simple, with_active};

/// Record a failure in the active context.
///
/// One capture event sets the status register and the last-captured slot
/// together.
pub fn capture(kind: ErrorKind) {
    with_active(|ctx| ctx.capture(kind));
}

/// Consume the active context's status register.
///
/// Returns the status and resets the register to [`Status::Ok`]; a second
/// immediate call reads `Ok`. Does not touch the last-captured slot.
#[must_use]
pub fn get_code() -> Status {
    with_active(|ctx| ctx.take_code())
}

/// Consume the active context's last captured failure as
/// `(kind, message)`.
///
/// Requires a prior [`capture`]; otherwise fails with
/// [`NothingCaptured`]. Does not touch the status register.
pub fn get_message() -> Result<(ErrorKind, &'static str), NothingCaptured> {
    with_active(|ctx| ctx.take_message())
}

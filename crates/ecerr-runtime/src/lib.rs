//! # ecerr-runtime
//!
//! Mode- and platform-specific half of the ecerr subsystem:
//!
//! - `domain` - the context accessor; one process-wide context by
//!   default, one per thread with the `thread-isolated` feature, chosen
//!   at compile time
//! - `trace` - the per-target stack-capture capability
//! - `reporter` - the simple and full report forms
//!
//! The data model itself lives in `ecerr-core`.

pub mod domain;
pub mod reporter;
pub mod trace;

// Re-exports
pub use domain::{init_default, with_active};
#[cfg(feature = "verbose")]
pub use reporter::{format_full, report_full};
pub use reporter::{format_simple, report_auto, report_simple};
pub use trace::{CurrentTracer, NoTracer, StackTracer};

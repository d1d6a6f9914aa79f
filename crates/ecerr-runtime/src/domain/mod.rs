//! Context accessor: resolves the error context of the calling execution
//! unit.
//!
//! The concurrency mode is fixed at build time by the `thread-isolated`
//! feature. Both implementations expose the same two functions, so the
//! selection costs nothing at runtime:
//!
//! - default (shared): one process-wide context, single logical thread of
//!   control by contract
//! - `thread-isolated`: one context per OS thread, created lazily on the
//!   thread's first access
//!
//! Nested [`with_active`] calls on the same thread are not supported.

use ecerr_core::ErrContext;

cfg_if::cfg_if! {
    if #[cfg(feature = "thread-isolated")] {
        mod isolated;
        use self::isolated as imp;
    } else {
        mod shared;
        use self::shared as imp;
    }
}

/// Run `f` against the calling execution unit's error context.
///
/// The context is created and initialized on first access, so `f` always
/// sees a populated message table.
#[inline]
pub fn with_active<R>(f: impl FnOnce(&mut ErrContext) -> R) -> R {
    imp::with_active(f)
}

/// Prepare the default context for the calling execution unit.
///
/// Selection and initialization happen exactly once per domain; later
/// calls are safe no-ops.
#[inline]
pub fn init_default() {
    imp::init_default()
}

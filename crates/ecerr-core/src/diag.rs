//! Diagnostic-stream writes.
//!
//! All report output goes to stderr through a locked handle so lines from
//! different threads never interleave. Behavior is read once from the
//! environment:
//!
//! - `ECERR_FLUSH_STDERR=1` - flush stderr after each line (useful when
//!   debugging crashes)
//! - `ECERR_DEBUG=1` - enable the subsystem's own debug chatter
//!
//! Report lines themselves are never gated: rendering a captured error is
//! the subsystem's job, not logging. The gate applies only to [`ddebug!`]
//! chatter.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::env::env_get_bool;

static FLUSH_ENABLED: AtomicBool = AtomicBool::new(false);
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize diagnostics from environment variables.
///
/// Called automatically on first use; calling it explicitly gives
/// deterministic initialization.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    FLUSH_ENABLED.store(env_get_bool("ECERR_FLUSH_STDERR", false), Ordering::Relaxed);
    DEBUG_ENABLED.store(env_get_bool("ECERR_DEBUG", false), Ordering::Relaxed);
}

/// Whether each line is followed by a flush.
#[inline]
pub fn flush_enabled() -> bool {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    FLUSH_ENABLED.load(Ordering::Relaxed)
}

/// Whether debug chatter is emitted.
#[inline]
pub fn debug_enabled() -> bool {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Override the flush setting programmatically.
pub fn set_flush_enabled(enabled: bool) {
    INITIALIZED.store(true, Ordering::SeqCst);
    FLUSH_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Override the debug-chatter setting programmatically.
pub fn set_debug_enabled(enabled: bool) {
    INITIALIZED.store(true, Ordering::SeqCst);
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Write one line to the diagnostic stream.
///
/// The stderr handle is locked for the duration of the write so the line
/// comes out atomically.
pub fn write_line(args: std::fmt::Arguments<'_>) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if flush_enabled() {
        let _ = handle.flush();
    }
}

/// Internal: debug-chatter writer behind the `ECERR_DEBUG` gate.
#[doc(hidden)]
pub fn _debug_impl(args: std::fmt::Arguments<'_>) {
    if !debug_enabled() {
        return;
    }
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = write!(handle, "[ecerr] ");
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if flush_enabled() {
        let _ = handle.flush();
    }
}

/// Debug chatter, enabled with `ECERR_DEBUG=1`.
///
/// Like `eprintln!` with an `[ecerr] ` prefix, mutex-protected output and
/// optional auto-flush.
#[macro_export]
macro_rules! ddebug {
    ($($arg:tt)*) => {{
        $crate::diag::_debug_impl(format_args!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_stick() {
        set_debug_enabled(false);
        assert!(!debug_enabled());
        set_flush_enabled(true);
        assert!(flush_enabled());
        set_flush_enabled(false);
        assert!(!flush_enabled());
    }

    #[test]
    fn macros_compile() {
        // Output itself is exercised by the demos; keep chatter off here.
        set_debug_enabled(false);
        ddebug!("quiet {}", 42);
        write_line(format_args!(""));
    }
}

//! Rendering of captured errors to the diagnostic stream.
//!
//! Two forms. The simple form is always available; the full form (source
//! location plus a best-effort call stack) exists only in `verbose`
//! builds. [`report_auto`] picks whichever form this build compiled in,
//! which is what the [`report!`] macro expands to.
//!
//! Reporting never mutates context state: message lookups go through the
//! active context's table read-only, and nothing is consumed.

use ecerr_core::diag;
use ecerr_core::Raised;

use crate::domain::with_active;
#[cfg(feature = "verbose")]
use crate::trace::{CurrentTracer, StackTracer};

/// Render the simple form.
///
/// A propagation marker renders nothing: the frame that recorded the
/// failure already reported it.
pub fn format_simple(raised: Raised) -> Option<String> {
    match raised {
        Raised::Caught => None,
        Raised::Fault(kind) => {
            let msg = with_active(|ctx| ctx.message_for(kind));
            Some(format!("ERROR: {}.", msg))
        }
    }
}

/// Write the simple report form: one line for a fault, nothing for a
/// propagation marker.
pub fn report_simple(raised: Raised) {
    if let Some(line) = format_simple(raised) {
        diag::write_line(format_args!("{}", line));
    }
}

/// Render the full form's leading line.
///
/// The marker case performs no catalog lookup; it only names the frame
/// the error is passing through.
#[cfg(feature = "verbose")]
pub fn format_full(function: &str, file: &str, line: u32, raised: Raised) -> String {
    match raised {
        Raised::Caught => {
            format!("CAUGHT in {}() at {},{}.", function, file, line)
        }
        Raised::Fault(kind) => {
            let msg = with_active(|ctx| ctx.message_for(kind));
            format!("ERROR in {}() at {},{}: {}.", function, file, line, msg)
        }
    }
}

/// Write the full report form.
///
/// For a fault, a call-stack listing follows when the target's tracer
/// provides one; absence of the capability degrades silently to the
/// message line alone.
#[cfg(feature = "verbose")]
pub fn report_full(function: &str, file: &str, line: u32, raised: Raised) {
    diag::write_line(format_args!("{}", format_full(function, file, line, raised)));
    if raised.is_caught() {
        return;
    }
    if let Some(frames) = CurrentTracer::capture() {
        diag::write_line(format_args!("\tCall stack:"));
        for (index, symbol) in frames.iter().enumerate() {
            diag::write_line(format_args!("\t\t#{} {}", index, symbol));
        }
    }
}

/// Report with whichever form this build compiled in.
///
/// The decision follows *this* crate's `verbose` feature, so callers of
/// the [`report!`] macro get the right form regardless of their own
/// feature set.
pub fn report_auto(function: &str, file: &str, line: u32, raised: Raised) {
    #[cfg(feature = "verbose")]
    report_full(function, file, line, raised);

    #[cfg(not(feature = "verbose"))]
    {
        let _ = (function, file, line);
        report_simple(raised);
    }
}

/// Report a failure from the current source location.
///
/// Captures `file!()` and `line!()` at the call site; the function name
/// is supplied by the caller.
///
/// ```ignore
/// use ecerr_core::{ErrorKind, Raised};
///
/// report!("ep_mul", Raised::Fault(ErrorKind::NoCurve));
/// report!("ep_mul", Raised::Caught);
/// ```
#[macro_export]
macro_rules! report {
    ($function:expr, $raised:expr) => {
        $crate::reporter::report_auto($function, file!(), line!(), $raised)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecerr_core::ErrorKind;

    #[test]
    fn simple_caught_renders_nothing() {
        assert_eq!(format_simple(Raised::Caught), None);
    }

    #[test]
    fn simple_fault_is_one_line_with_catalog_text() {
        let line = format_simple(Raised::Fault(ErrorKind::NoBuffer)).expect("fault renders");
        assert_eq!(line, format!("ERROR: {}.", ErrorKind::NoBuffer.message()));
        assert!(!line.contains('\n'));
    }

    #[cfg(feature = "verbose")]
    #[test]
    fn full_caught_names_the_frame_only() {
        let line = format_full("ep_add", "ep.rs", 217, Raised::Caught);
        assert_eq!(line, "CAUGHT in ep_add() at ep.rs,217.");
        for kind in ErrorKind::ALL {
            assert!(!line.contains(kind.message()));
        }
    }

    #[cfg(feature = "verbose")]
    #[test]
    fn full_fault_carries_location_and_text() {
        let line = format_full("fp_inv", "fp.rs", 98, Raised::Fault(ErrorKind::NoValid));
        assert_eq!(
            line,
            format!("ERROR in fp_inv() at fp.rs,98: {}.", ErrorKind::NoValid.message())
        );
    }

    #[test]
    fn reporting_does_not_consume_state() {
        let _guard = crate::test_sync::lock();
        with_active(|ctx| ctx.reset());
        with_active(|ctx| ctx.capture(ErrorKind::NoFile));
        report_simple(Raised::Fault(ErrorKind::NoMemory));
        report_simple(Raised::Caught);
        with_active(|ctx| {
            assert!(ctx.has_capture());
            assert!(!ctx.code().is_ok());
            ctx.reset();
        });
    }
}

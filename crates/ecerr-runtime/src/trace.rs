//! Best-effort call-stack capture.
//!
//! Whether a symbolized trace exists is a property of the target, decided
//! at compile time. Targets without the capability get [`NoTracer`],
//! whose capture is a constant `None` the optimizer removes; nothing ever
//! probes for missing symbols at runtime.

/// Innermost frames dropped from a raw capture: the capture routine
/// itself.
const SKIP_INNERMOST: usize = 1;

/// Outermost frames dropped: the entry trampoline and runtime startup.
const SKIP_OUTERMOST: usize = 2;

/// Build-time capability interface for call-stack capture.
pub trait StackTracer {
    /// Capture the current call stack, innermost frame first, already
    /// trimmed and re-indexed.
    ///
    /// `None` when the capability is absent or nothing useful remains
    /// after trimming.
    fn capture() -> Option<Vec<String>>;
}

/// Absence of the capability: a compile-time-known no-op.
pub struct NoTracer;

impl StackTracer for NoTracer {
    #[inline]
    fn capture() -> Option<Vec<String>> {
        None
    }
}

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))] {
        /// Symbolized capture via `std::backtrace`.
        pub struct BacktraceTracer;

        impl StackTracer for BacktraceTracer {
            fn capture() -> Option<Vec<String>> {
                let raw = std::backtrace::Backtrace::force_capture().to_string();
                let frames = trim_frames(parse_symbols(&raw));
                if frames.is_empty() {
                    None
                } else {
                    Some(frames)
                }
            }
        }

        pub use self::BacktraceTracer as CurrentTracer;
    } else {
        pub use self::NoTracer as CurrentTracer;
    }
}

/// Pull the symbol of each frame out of a rendered backtrace.
///
/// Frame lines look like `   3: core::ops::function::FnOnce::call_once`;
/// the `at file:line` continuation lines are skipped.
fn parse_symbols(raw: &str) -> Vec<String> {
    let mut frames = Vec::new();
    for line in raw.lines() {
        let line = line.trim_start();
        if let Some((index, symbol)) = line.split_once(": ") {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                frames.push(symbol.trim_end().to_string());
            }
        }
    }
    frames
}

/// Apply the frame policy: drop the innermost frame and the outermost
/// two, keeping the rest in order for zero-based re-indexing.
fn trim_frames(mut frames: Vec<String>) -> Vec<String> {
    if frames.len() <= SKIP_INNERMOST + SKIP_OUTERMOST {
        return Vec::new();
    }
    frames.truncate(frames.len() - SKIP_OUTERMOST);
    frames.drain(..SKIP_INNERMOST);
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tracer_is_silent() {
        assert_eq!(NoTracer::capture(), None);
    }

    #[test]
    fn parse_skips_location_lines() {
        let raw = "   0: ecerr_runtime::trace::capture\n             \
                   at /src/trace.rs:40:9\n   \
                   1: my_crate::ep_mul\n   \
                   2: main\n";
        let symbols = parse_symbols(raw);
        assert_eq!(
            symbols,
            vec!["ecerr_runtime::trace::capture", "my_crate::ep_mul", "main"]
        );
    }

    #[test]
    fn trim_drops_first_and_last_two() {
        let frames: Vec<String> = ["capture", "detect", "compute", "entry", "start"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(trim_frames(frames), vec!["detect", "compute"]);
    }

    #[test]
    fn trim_of_shallow_stack_is_empty() {
        for n in 0..=3 {
            let frames: Vec<String> = (0..n).map(|i| format!("f{}", i)).collect();
            assert!(trim_frames(frames).is_empty());
        }
    }

    #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
    #[test]
    fn current_tracer_sees_nested_calls() {
        #[inline(never)]
        fn inner() -> Option<Vec<String>> {
            CurrentTracer::capture()
        }
        #[inline(never)]
        fn outer() -> Option<Vec<String>> {
            inner()
        }
        let frames = outer().expect("capture on a symbolized target");
        assert!(!frames.is_empty());
    }
}

//! The per-domain error context record.
//!
//! One `ErrContext` exists per concurrency domain: the whole process in
//! shared builds, each thread in isolated builds (the split lives in
//! `ecerr-runtime`; this record knows nothing about it). The record has
//! no teardown of its own; it is reclaimed with its owning domain.

use std::error::Error;
use std::fmt;

use crate::kinds::{ErrorKind, KIND_COUNT};
use crate::status::Status;

/// Returned by [`ErrContext::take_message`] when no failure is currently
/// captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NothingCaptured;

impl fmt::Display for NothingCaptured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no error captured")
    }
}

impl Error for NothingCaptured {}

/// Mutable error state for one concurrency domain.
///
/// Three registers: a private copy of the message catalog (so a context
/// is self-contained and independently resettable), the most recently
/// captured kind, and the consumable status code.
#[derive(Debug, Clone)]
pub struct ErrContext {
    /// Catalog copy, repopulated on every [`reset`](ErrContext::reset).
    messages: [&'static str; KIND_COUNT],
    /// Most recently captured kind; `None` means nothing captured.
    last: Option<ErrorKind>,
    /// Status register, consumed by [`take_code`](ErrContext::take_code).
    code: Status,
}

impl ErrContext {
    /// A fully initialized context.
    pub fn new() -> Self {
        let mut ctx = ErrContext {
            messages: [""; KIND_COUNT],
            last: None,
            code: Status::Ok,
        };
        ctx.reset();
        ctx
    }

    /// Clear all registers and repopulate the message table.
    ///
    /// Idempotent. Calling this on a live context discards any captured
    /// error: re-initialization means "forget everything".
    pub fn reset(&mut self) {
        self.last = None;
        self.code = Status::Ok;
        for kind in ErrorKind::ALL {
            self.messages[kind.index()] = kind.message();
        }
    }

    /// Record a failure.
    ///
    /// A capture is one event: the status register and the last-captured
    /// slot are always written together, never separately.
    pub fn capture(&mut self, kind: ErrorKind) {
        self.code = Status::Fault(kind);
        self.last = Some(kind);
    }

    /// Consume the status register.
    ///
    /// Returns the current status and resets the register to [`Status::Ok`],
    /// so a captured fault is observed at most once. The last-captured
    /// slot is untouched.
    #[must_use]
    pub fn take_code(&mut self) -> Status {
        std::mem::take(&mut self.code)
    }

    /// Consume the last captured failure as `(kind, message)`.
    ///
    /// Clears the last-captured slot on success; the status register is
    /// untouched. With nothing captured the call fails with
    /// [`NothingCaptured`]; stale data is never returned.
    pub fn take_message(&mut self) -> Result<(ErrorKind, &'static str), NothingCaptured> {
        let kind = self.last.take().ok_or(NothingCaptured)?;
        Ok((kind, self.messages[kind.index()]))
    }

    /// Look up a kind's message in this context's own table. Read-only.
    #[inline]
    pub fn message_for(&self, kind: ErrorKind) -> &'static str {
        self.messages[kind.index()]
    }

    /// Peek at the status register without consuming it.
    #[inline]
    pub fn code(&self) -> Status {
        self.code
    }

    /// True when a captured failure is waiting to be read.
    #[inline]
    pub fn has_capture(&self) -> bool {
        self.last.is_some()
    }
}

impl Default for ErrContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_context_reads_ok() {
        // Scenario A
        let mut ctx = ErrContext::new();
        assert_eq!(ctx.take_code(), Status::Ok);
        assert!(!ctx.has_capture());
    }

    #[test]
    fn code_is_consumed_exactly_once() {
        // Scenario B
        let mut ctx = ErrContext::new();
        ctx.capture(ErrorKind::NoMemory);
        assert_eq!(ctx.take_code(), Status::Fault(ErrorKind::NoMemory));
        assert_eq!(ctx.take_code(), Status::Ok);
    }

    #[test]
    fn message_is_consumed_exactly_once() {
        // Scenario C
        let mut ctx = ErrContext::new();
        ctx.capture(ErrorKind::NoFile);
        assert_eq!(
            ctx.take_message(),
            Ok((ErrorKind::NoFile, ErrorKind::NoFile.message()))
        );
        assert_eq!(ctx.take_message(), Err(NothingCaptured));
    }

    #[test]
    fn take_code_leaves_last_alone() {
        let mut ctx = ErrContext::new();
        ctx.capture(ErrorKind::NoValid);
        let _ = ctx.take_code();
        assert!(ctx.has_capture());
        assert!(ctx.take_message().is_ok());
    }

    #[test]
    fn take_message_leaves_code_alone() {
        let mut ctx = ErrContext::new();
        ctx.capture(ErrorKind::NoCurve);
        assert!(ctx.take_message().is_ok());
        assert_eq!(ctx.take_code(), Status::Fault(ErrorKind::NoCurve));
    }

    #[test]
    fn reset_discards_captured_state() {
        let mut ctx = ErrContext::new();
        ctx.capture(ErrorKind::NoBuffer);
        ctx.reset();
        assert_eq!(ctx.take_code(), Status::Ok);
        assert_eq!(ctx.take_message(), Err(NothingCaptured));
    }

    #[test]
    fn table_is_populated_after_reset() {
        let mut ctx = ErrContext::new();
        ctx.reset();
        for kind in ErrorKind::ALL {
            assert_eq!(ctx.message_for(kind), kind.message());
            assert!(!ctx.message_for(kind).is_empty());
        }
    }

    #[test]
    fn capture_overwrites_previous_capture() {
        let mut ctx = ErrContext::new();
        ctx.capture(ErrorKind::NoMemory);
        ctx.capture(ErrorKind::NoConfig);
        assert_eq!(ctx.take_code(), Status::Fault(ErrorKind::NoConfig));
        assert_eq!(
            ctx.take_message(),
            Ok((ErrorKind::NoConfig, ErrorKind::NoConfig.message()))
        );
    }

    #[test]
    fn nothing_captured_is_an_error_type() {
        let err: Box<dyn std::error::Error> = Box::new(NothingCaptured);
        assert_eq!(err.to_string(), "no error captured");
    }
}

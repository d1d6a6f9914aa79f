//! The status-code register value.

use core::fmt;

use crate::kinds::ErrorKind;

/// Value held by the single-slot status register of an error context.
///
/// This is the cheap-path signal for callers in hot loops that only need
/// a ternary outcome and cannot afford a message-table lookup. The
/// register is consume-on-read: see
/// [`ErrContext::take_code`](crate::ErrContext::take_code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// No failure captured since the last consuming read.
    #[default]
    Ok,
    /// A failure of the given kind was captured.
    Fault(ErrorKind),
}

impl Status {
    /// True when no failure is pending.
    #[inline]
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }

    /// The captured kind, if any.
    #[inline]
    pub const fn kind(self) -> Option<ErrorKind> {
        match self {
            Status::Ok => None,
            Status::Fault(kind) => Some(kind),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Fault(kind) => write!(f, "fault:{}", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ok() {
        assert!(Status::default().is_ok());
        assert_eq!(Status::default().kind(), None);
    }

    #[test]
    fn fault_exposes_kind() {
        let s = Status::Fault(ErrorKind::NoBuffer);
        assert!(!s.is_ok());
        assert_eq!(s.kind(), Some(ErrorKind::NoBuffer));
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", Status::Ok), "ok");
        assert_eq!(format!("{}", Status::Fault(ErrorKind::NoRead)), "fault:no-read");
    }
}

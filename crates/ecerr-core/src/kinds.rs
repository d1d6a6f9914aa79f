//! Failure kinds and their message catalog.
//!
//! The failure categories the library can record form a closed set, and
//! every one of them maps to a non-empty static message. A frame that is
//! merely on the call path of a failure recorded deeper down is *not* a
//! category of its own: it is the [`Raised::Caught`] marker, a separate
//! type with no catalog entry, so a message lookup on it does not compile.

use core::fmt;

/// Number of failure categories (the length of [`ErrorKind::ALL`]).
pub const KIND_COUNT: usize = 9;

/// Failure categories recognized by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Heap or pool allocation failed.
    NoMemory,
    /// Requested arithmetic precision is not available.
    NoPrecision,
    /// Configuration or curve-data file is missing.
    NoFile,
    /// Reading from an opened file failed.
    NoRead,
    /// Input failed validation.
    NoValid,
    /// Destination buffer capacity is too small.
    NoBuffer,
    /// No finite field configured at this security level.
    NoField,
    /// No curve configured at this security level.
    NoCurve,
    /// Library configuration is inconsistent.
    NoConfig,
}

impl ErrorKind {
    /// Every kind, in catalog order.
    pub const ALL: [ErrorKind; KIND_COUNT] = [
        ErrorKind::NoMemory,
        ErrorKind::NoPrecision,
        ErrorKind::NoFile,
        ErrorKind::NoRead,
        ErrorKind::NoValid,
        ErrorKind::NoBuffer,
        ErrorKind::NoField,
        ErrorKind::NoCurve,
        ErrorKind::NoConfig,
    ];

    /// Stable position of this kind in catalog-ordered tables.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The catalog message for this kind. Total over the enum, so every
    /// kind is guaranteed an entry.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::NoMemory => "not enough memory",
            ErrorKind::NoPrecision => "insufficient precision",
            ErrorKind::NoFile => "file not found",
            ErrorKind::NoRead => "could not read from file",
            ErrorKind::NoValid => "invalid value passed as input",
            ErrorKind::NoBuffer => "buffer capacity too small",
            ErrorKind::NoField => "no finite field configured at this security level",
            ErrorKind::NoCurve => "no curve configured at this security level",
            ErrorKind::NoConfig => "invalid library configuration",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ErrorKind::NoMemory => "no-memory",
            ErrorKind::NoPrecision => "no-precision",
            ErrorKind::NoFile => "no-file",
            ErrorKind::NoRead => "no-read",
            ErrorKind::NoValid => "no-valid",
            ErrorKind::NoBuffer => "no-buffer",
            ErrorKind::NoField => "no-field",
            ErrorKind::NoCurve => "no-curve",
            ErrorKind::NoConfig => "no-config",
        };
        write!(f, "{}", tag)
    }
}

/// What a frame hands to the reporter: a fresh fault, or a marker that a
/// deeper frame already recorded (and reported) the failure.
///
/// The marker carries no kind on purpose: with the variant split, a
/// catalog lookup on a propagation marker is unrepresentable instead of
/// merely forbidden by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Raised {
    /// A failure of the given kind, reported by the frame that detected it.
    Fault(ErrorKind),
    /// This frame is on the call path of an already-reported failure.
    Caught,
}

impl Raised {
    /// True for the propagation marker.
    #[inline]
    pub const fn is_caught(self) -> bool {
        matches!(self, Raised::Caught)
    }

    /// The fault kind, if this is not the propagation marker.
    #[inline]
    pub const fn kind(self) -> Option<ErrorKind> {
        match self {
            Raised::Fault(kind) => Some(kind),
            Raised::Caught => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_nonempty_message() {
        for kind in ErrorKind::ALL {
            assert!(!kind.message().is_empty(), "empty message for {}", kind);
        }
    }

    #[test]
    fn all_table_matches_indices() {
        assert_eq!(ErrorKind::ALL.len(), KIND_COUNT);
        for (i, kind) in ErrorKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn display_tags() {
        assert_eq!(format!("{}", ErrorKind::NoMemory), "no-memory");
        assert_eq!(format!("{}", ErrorKind::NoConfig), "no-config");
    }

    #[test]
    fn raised_fault_carries_kind() {
        let r = Raised::Fault(ErrorKind::NoCurve);
        assert!(!r.is_caught());
        assert_eq!(r.kind(), Some(ErrorKind::NoCurve));
    }

    #[test]
    fn raised_caught_has_no_kind() {
        assert!(Raised::Caught.is_caught());
        assert_eq!(Raised::Caught.kind(), None);
    }
}

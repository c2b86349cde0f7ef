//! Error types returned by [`crate::Engine`].

use std::fmt;

/// Errors that can occur while configuring or using an [`crate::Engine`].
///
/// Both variants are programmer errors rather than recoverable runtime
/// conditions: a fixed-point format is either valid or it isn't, and an
/// operand is either within a function's documented domain or it isn't.
/// Neither is silently clamped or corrected; the engine always reports
/// the violation back to the caller instead of guessing at intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A construction parameter (`int_w`, `frac_w`, or an iteration
    /// count) is outside the range the engine can represent.
    OutOfRange {
        /// Name of the parameter or quantity that was out of range.
        what: &'static str,
        /// Human-readable description of the valid range.
        expected: &'static str,
    },

    /// An operand violated a function's documented precondition (for
    /// example, a negative argument to a function that requires
    /// non-negative inputs, or `do_reduce` being enabled for a function
    /// that does not support argument reduction).
    PreconditionViolation {
        /// Name of the function whose precondition was violated.
        function: &'static str,
        /// Human-readable description of the precondition.
        expected: &'static str,
    },
}

impl Error {
    /// Creates an [`Error::OutOfRange`] for the given parameter.
    #[must_use]
    pub const fn out_of_range(what: &'static str, expected: &'static str) -> Self {
        Self::OutOfRange { what, expected }
    }

    /// Creates an [`Error::PreconditionViolation`] for the given function.
    #[must_use]
    pub const fn precondition(function: &'static str, expected: &'static str) -> Self {
        Self::PreconditionViolation { function, expected }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { what, expected } => {
                write!(f, "{what}: out of range, expected {expected}")
            }
            Self::PreconditionViolation { function, expected } => {
                write!(f, "{function}: precondition violated, expected {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A specialized [`Result`](core::result::Result) type for engine operations.
pub type Result<T> = core::result::Result<T, Error>;

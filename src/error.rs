//! Error types for quadrature operations.

use std::fmt;

/// Result type for quadrature operations.
pub type QuadResult<T> = Result<T, QuadError>;

/// Errors that can occur during numerical quadrature.
///
/// These cover input validation only. Numerical degeneracy (a divergent
/// integral, an integrand that is non-finite everywhere it is sampled) is
/// never an error: the engine returns whatever floating-point value the
/// arithmetic produces, and a NaN or infinite result is the caller's signal
/// to distrust the output.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadError {
    /// Invalid interval provided (e.g., a NaN bound).
    InvalidInterval { a: f64, b: f64, context: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { a, b, context } => {
                write!(
                    f,
                    "Invalid interval [{}, {}] in {}: bounds must not be NaN",
                    a, b, context
                )
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
        }
    }
}

impl std::error::Error for QuadError {}

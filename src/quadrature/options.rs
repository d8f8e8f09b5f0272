//! Options and result types for double-exponential quadrature.

use crate::error::{QuadError, QuadResult};

/// Tolerance-scaling profile for the refinement loop.
///
/// The profile fixes the two fudge factors relating the user tolerance
/// `eps` to the outer-loop stopping test and to the reported error
/// estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionProfile {
    /// Default profile: full accuracy.
    Precise,
    /// Looser outer tolerance: fewer refinement levels at a modest
    /// accuracy cost.
    Fast,
}

impl PrecisionProfile {
    /// Returns `(fudge1, fudge2)`: the outer tolerance is `fudge1 * eps`
    /// and the error estimate denominator is scaled by `fudge2`.
    pub(crate) fn fudge(self) -> (f64, f64) {
        match self {
            Self::Precise => (10.0, 1.0),
            Self::Fast => (160.0, 16.0),
        }
    }
}

/// Options for double-exponential quadrature.
#[derive(Debug, Clone)]
pub struct DeOptions {
    /// Maximum number of refinement levels (default: 6).
    ///
    /// Values from 2 to 7 are the practical range; each level roughly
    /// doubles the number of sample points.
    pub max_levels: usize,
    /// Relative tolerance (default: 1e-9). Must be finite and > 0.
    pub eps: f64,
    /// Tolerance-scaling profile (default: [`PrecisionProfile::Precise`]).
    pub profile: PrecisionProfile,
    /// Optimize the exp-sinh transform offset near the finite endpoint of
    /// a semi-infinite interval (default: true).
    ///
    /// Disabling this keeps the default unit offset; useful to diagnose
    /// the optimizer's effect on a stiff integrand.
    pub optimize_offset: bool,
    /// Safety cap on sample points per refinement level (default: 4096).
    ///
    /// The per-level sweep normally terminates when its contributions
    /// fall below `eps` relative to the level sum; the cap bounds the
    /// sweep for integrands where that never happens.
    pub max_inner_iter: usize,
}

impl Default for DeOptions {
    fn default() -> Self {
        Self {
            max_levels: 6,
            eps: 1e-9,
            profile: PrecisionProfile::Precise,
            optimize_offset: true,
            max_inner_iter: 4096,
        }
    }
}

impl DeOptions {
    /// Create options with the given relative tolerance.
    pub fn with_tolerance(eps: f64) -> Self {
        Self {
            eps,
            ..Self::default()
        }
    }

    /// Create options with the given tolerance and level cap.
    pub fn with_levels(eps: f64, max_levels: usize) -> Self {
        Self {
            eps,
            max_levels,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> QuadResult<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(QuadError::InvalidParameter {
                parameter: "eps".to_string(),
                message: "must be finite and > 0".to_string(),
            });
        }
        if self.max_inner_iter == 0 {
            return Err(QuadError::InvalidParameter {
                parameter: "max_inner_iter".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Result of double-exponential quadrature.
#[derive(Debug, Clone)]
pub struct DeResult {
    /// Computed integral value.
    ///
    /// May be NaN or infinite if the integral is divergent or the
    /// integrand is badly behaved everywhere it was sampled.
    pub integral: f64,
    /// Estimated relative error.
    pub error: f64,
    /// Number of integrand evaluations.
    pub neval: usize,
    /// Whether the refinement loop met the tolerance before exhausting
    /// `max_levels`.
    pub converged: bool,
}

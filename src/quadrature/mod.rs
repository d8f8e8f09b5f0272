//! Double-exponential quadrature methods.
//!
//! The public entry point is [`quad_de`], which classifies the interval,
//! picks the matching variable transform, and refines a trapezoidal sum of
//! the transformed integrand by halving the step size level by level:
//!
//! | Transform | Bounds | Substitution |
//! |-----------|--------|--------------|
//! | Tanh-Sinh | both finite | `x = c + d·tanh(sinh(t))` |
//! | Exp-Sinh | one infinite | `x = c + d·exp(sinh(t))` |
//! | Sinh-Sinh | both infinite | `x = c + d·sinh(sinh(t))` |
//!
//! The double-exponential decay of the transformed integrand makes the
//! trapezoidal rule converge near-optimally for smooth integrands, including
//! those with integrable endpoint singularities.

mod double_exp;
mod mode;
mod offset;
mod options;

// Re-export all public items
pub use double_exp::quad_de;
pub use options::{DeOptions, DeResult, PrecisionProfile};

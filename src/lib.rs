//! quadde — double-exponential quadrature for definite integrals.
//!
//! This crate computes definite integrals of scalar functions over finite,
//! semi-infinite, and doubly-infinite intervals using double-exponential
//! (DE) variable transformations:
//!
//! | Transform | Interval | Typical use |
//! |-----------|----------|-------------|
//! | Tanh-Sinh | `[a, b]` finite | Smooth integrands, endpoint singularities |
//! | Exp-Sinh | `[a, ∞)` or `(−∞, b]` | Exponentially decaying tails |
//! | Sinh-Sinh | `(−∞, ∞)` | Rapidly decaying integrands on the whole line |
//!
//! The transform is chosen automatically from the bounds; the caller only
//! supplies the integrand, the interval, and a relative tolerance. The
//! estimate is refined by halving the trapezoidal step size level by level
//! until successive levels agree to the requested tolerance.
//!
//! # Example
//!
//! ```
//! use quadde::{quad_de, DeOptions};
//!
//! // Integrate acos(x) from 0 to 1, exact value 1
//! let result = quad_de(|x| x.acos(), 0.0, 1.0, &DeOptions::default()).unwrap();
//! assert!((result.integral - 1.0).abs() < 1e-9);
//! assert!(result.converged);
//!
//! // Infinite bounds are handled by the exp-sinh transform
//! let result = quad_de(|x| (-x / 5.0).exp(), 0.0, f64::INFINITY, &DeOptions::default()).unwrap();
//! assert!((result.integral - 5.0).abs() < 1e-8);
//! ```

pub mod error;
pub mod quadrature;

pub use error::{QuadError, QuadResult};
pub use quadrature::{quad_de, DeOptions, DeResult, PrecisionProfile};

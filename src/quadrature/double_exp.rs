//! Double-exponential quadrature engine.
//!
//! The integral estimate is a trapezoidal sum of the transformed integrand,
//! refined by halving the step size. Each level starts its sweep at the
//! current step offset and advances by the squared step ratio, so it visits
//! only the sample positions the previous levels have not; the running sum
//! accumulates across levels. Refinement stops when two successive levels
//! agree to the requested relative tolerance, or after `max_levels`
//! halvings.

use crate::error::{QuadError, QuadResult};

use super::mode::{Mode, Transform};
use super::options::{DeOptions, DeResult};

/// Integrate `f` over `[a, b]` by double-exponential quadrature.
///
/// The transform is selected from the bounds: tanh-sinh when both are
/// finite, exp-sinh when exactly one is infinite, sinh-sinh when both are.
/// `a > b` is allowed and negates the result. The integrand may return
/// NaN or ±infinity at isolated points; such samples are discarded in
/// favor of the most recent finite sample at that position (or zero if
/// none exists yet) and never cause an error.
///
/// A genuinely divergent integral is not an error either: the returned
/// value is whatever the floating-point arithmetic produces (typically
/// NaN or ±infinity) with `converged == false`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound (may be ±infinity)
/// * `b` - Upper bound (may be ±infinity)
/// * `options` - Quadrature options
///
/// # Returns
///
/// A [`DeResult`] containing the integral, the estimated relative error,
/// and diagnostics.
///
/// # Example
///
/// ```
/// use quadde::{quad_de, DeOptions};
///
/// // Integrate 1/cosh²(x) over the whole real line, exact value 2
/// let result = quad_de(
///     |x| 1.0 / x.cosh().powi(2),
///     f64::NEG_INFINITY,
///     f64::INFINITY,
///     &DeOptions::default(),
/// )
/// .unwrap();
/// assert!((result.integral - 2.0).abs() < 1e-8);
/// ```
pub fn quad_de<F>(f: F, a: f64, b: f64, options: &DeOptions) -> QuadResult<DeResult>
where
    F: Fn(f64) -> f64,
{
    options.validate()?;
    if a.is_nan() || b.is_nan() {
        return Err(QuadError::InvalidInterval {
            a,
            b,
            context: "quad_de".to_string(),
        });
    }

    let eps = options.eps;
    let (fudge1, fudge2) = options.profile.fudge();
    let tol = fudge1 * eps;

    let mut neval = 0;
    let tf = Transform::select(&f, a, b, eps, options.optimize_offset, &mut neval);

    // Seed sample; the discard policy applies here too, so a non-finite
    // value at the initial abscissa starts the sum at zero instead of
    // poisoning it.
    let seed = f(tf.v0);
    neval += 1;
    let mut s = if seed.is_finite() { seed } else { 0.0 };
    let mut h = 2.0_f64;
    let mut k = 0;
    let mut v;
    loop {
        h /= 2.0;
        let t = h.exp();
        let mut eh = t;
        if k > 0 {
            eh *= eh;
        }
        let p = match tf.mode {
            Mode::TanhSinh => {
                sweep_tanh_sinh(&f, &tf, t, eh, eps, options.max_inner_iter, &mut neval)
            }
            Mode::ExpSinh => {
                sweep_exp_sinh(&f, &tf, t / 2.0, eh, eps, options.max_inner_iter, &mut neval)
            }
            Mode::SinhSinh => {
                sweep_sinh_sinh(&f, &tf, t / 2.0, eh, eps, options.max_inner_iter, &mut neval)
            }
        };
        v = s - p;
        s += p;
        k += 1;
        // negated comparison so a NaN delta or sum also stops refinement
        if !(v.abs() > tol * s.abs()) || k > options.max_levels {
            break;
        }
    }

    let converged = v.is_finite() && s.is_finite() && v.abs() <= tol * s.abs();
    Ok(DeResult {
        integral: tf.sign * tf.d * s * h,
        error: v.abs() / (fudge2 * s.abs() + eps),
        neval,
        converged,
    })
}

/// Per-level sweep for the tanh-sinh transform (finite interval).
///
/// Samples approach both endpoints symmetrically. Once the offset from an
/// endpoint vanishes to machine precision the previous sample at that end
/// is reused, as it is for any non-finite sample.
fn sweep_tanh_sinh<F>(
    f: &F,
    tf: &Transform,
    mut t: f64,
    eh: f64,
    eps: f64,
    max_iter: usize,
    neval: &mut usize,
) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut p = 0.0;
    let mut fp = 0.0;
    let mut fm = 0.0;
    for _ in 0..max_iter {
        let u = (1.0 / t - t).exp(); // = 1/exp(sinh(j*h))^2
        let r = 2.0 * u / (1.0 + u); // = 1 - tanh(sinh(j*h))
        let w = (t + 1.0 / t) * r / (1.0 + u); // = cosh(j*h)/cosh(sinh(j*h))^2
        let x = tf.d * r;
        if tf.lo + x > tf.lo {
            let y = f(tf.lo + x);
            *neval += 1;
            if y.is_finite() {
                fp = y;
            }
        }
        if tf.hi - x < tf.hi {
            let y = f(tf.hi - x);
            *neval += 1;
            if y.is_finite() {
                fm = y;
            }
        }
        let q = w * (fp + fm);
        p += q;
        t *= eh;
        if !(q.abs() > eps * p.abs()) {
            break;
        }
    }
    p
}

/// Per-level sweep for the exp-sinh transform (semi-infinite interval).
///
/// The sweep walks toward the finite endpoint `c` on one side and toward
/// the infinite bound on the other; it stops early once the abscissa
/// reaches `c` to machine precision.
fn sweep_exp_sinh<F>(
    f: &F,
    tf: &Transform,
    mut t: f64,
    eh: f64,
    eps: f64,
    max_iter: usize,
    neval: &mut usize,
) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut p = 0.0;
    for _ in 0..max_iter {
        let r = (t - 0.25 / t).exp(); // = exp(sinh(j*h))
        let w = r;
        let mut q = 0.0;
        let x = tf.c + tf.d / r;
        if x == tf.c {
            break;
        }
        let y = f(x);
        *neval += 1;
        if y.is_finite() {
            q += y / w;
        }
        let y = f(tf.c + tf.d * r);
        *neval += 1;
        if y.is_finite() {
            q += y * w;
        }
        q *= t + 0.25 / t; // cosh(j*h) Jacobian factor
        p += q;
        t *= eh;
        if !(q.abs() > eps * p.abs()) {
            break;
        }
    }
    p
}

/// Per-level sweep for the sinh-sinh transform (doubly-infinite interval).
///
/// Both directions are genuine sample points; there is no endpoint to hit.
fn sweep_sinh_sinh<F>(
    f: &F,
    tf: &Transform,
    mut t: f64,
    eh: f64,
    eps: f64,
    max_iter: usize,
    neval: &mut usize,
) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut p = 0.0;
    for _ in 0..max_iter {
        let u = (t - 0.25 / t).exp();
        let r = (u - 1.0 / u) / 2.0; // = sinh(sinh(j*h))
        let w = (u + 1.0 / u) / 2.0; // = cosh(sinh(j*h))
        let mut q = 0.0;
        let y = f(tf.c - tf.d * r);
        *neval += 1;
        if y.is_finite() {
            q += y * w;
        }
        let y = f(tf.c + tf.d * r);
        *neval += 1;
        if y.is_finite() {
            q += y * w;
        }
        q *= t + 0.25 / t;
        p += q;
        t *= eh;
        if !(q.abs() > eps * p.abs()) {
            break;
        }
    }
    p
}

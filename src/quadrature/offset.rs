//! Exp-sinh endpoint offset optimization.
//!
//! The exp-sinh transform `x = a + d·exp(sinh(t))` samples a semi-infinite
//! interval at geometric distances from the finite endpoint `a`, at the
//! scale set by `d`. When the integrand varies on a very different scale,
//! a unit offset wastes levels resolving the mismatch, or loses the
//! feature entirely to cancellation/overflow. This module probes the
//! integrand at power-of-two multiples of `d` and rescales `d` toward the
//! scale where the integrand's behavior changes.

/// Sign as an integer: 1, -1, or 0 (NaN maps to 0).
fn sgn(x: f64) -> i32 {
    (x > 0.0) as i32 - (x < 0.0) as i32
}

/// Choose a scale `d` for the exp-sinh transform at finite endpoint `a`.
///
/// `d` carries the orientation of the interval: positive when the infinite
/// bound lies above `a`, negative when below. The returned value keeps the
/// same sign. This never fails; when no better scale can be detected the
/// input `d` is returned unchanged.
///
/// The search compares `f` close to the endpoint against `f` far from it
/// (weighted by the transform's Jacobian growth `r²`) at `r = 2^(i+j)`,
/// looking for the exponent where the difference changes sign relative to
/// an initial probe. A binary search narrows `j` from 32 down to 1;
/// non-finite differences shrink the exponent until the samples are
/// representable.
pub(crate) fn exp_sinh_opt_d<F>(f: &F, a: f64, eps: f64, mut d: f64, neval: &mut usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let h2 = f(a + d / 2.0) - 4.0 * f(a + d * 2.0);
    *neval += 2;
    // |h2| <= 1e-5: the integrand is already flat at this scale
    if !h2.is_finite() || h2.abs() <= 1e-5 {
        return d;
    }

    let mut i = 1u32;
    let mut j = 32u32;
    let (mut r, mut fl, mut fr, mut h);
    // find max j such that fl and fr are finite
    loop {
        j /= 2;
        r = (1u64 << (i + j)) as f64;
        fl = f(a + d / r);
        fr = f(a + d * r) * r * r;
        *neval += 2;
        h = fl - fr;
        if j <= 1 || h.is_finite() {
            break;
        }
    }
    if j > 1 && h.is_finite() && sgn(h) != sgn(h2) {
        let mut s = 0.0;
        let mut lfl = fl; // last fl = f(a + d/r)
        let mut lfr = fr; // last fr = f(a + d*r)*r*r
        let mut lr = 2.0; // last r before the sign change
        // bisect in 4 iterations
        loop {
            j /= 2;
            r = (1u64 << (i + j)) as f64;
            fl = f(a + d / r);
            fr = f(a + d * r) * r * r;
            *neval += 2;
            h = fl - fr;
            if h.is_finite() {
                s += h.abs(); // sum |h| to remove noisy cases
                if sgn(h) == sgn(h2) {
                    i += j; // search right half
                } else {
                    lfl = fl;
                    lfr = fr;
                    lr = r;
                }
            }
            if j <= 1 {
                break;
            }
        }
        if s > eps {
            h = lfl - lfr;
            r = lr;
            // if the last difference was nonzero, back r up by one step
            if h != 0.0 {
                r /= 2.0;
            }
            if lfl.abs() < lfr.abs() {
                d /= r; // move d closer to the finite endpoint
            } else {
                d *= r; // move d closer to the infinite endpoint
            }
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanishing_probe_keeps_d() {
        // Integrand already negligible at unit scale: the probe difference
        // underflows below the engagement threshold, d comes back unchanged
        // after only the two probe evaluations.
        let mut neval = 0;
        let f = |x: f64| (-x * 1e6).exp();
        let d = exp_sinh_opt_d(&f, 0.0, 1e-9, 1.0, &mut neval);
        assert_eq!(d, 1.0);
        assert_eq!(neval, 2);
    }

    #[test]
    fn test_no_sign_change_keeps_d() {
        // Constant integrand: h and h2 never change sign, so the search
        // is abandoned and d is unchanged.
        let mut neval = 0;
        let f = |_: f64| 1.0;
        let d = exp_sinh_opt_d(&f, 0.0, 1e-9, 1.0, &mut neval);
        assert_eq!(d, 1.0);
    }

    #[test]
    fn test_unit_scale_decay_keeps_d() {
        // exp(-x) already matches the unit offset; no sign change found.
        let mut neval = 0;
        let f = |x: f64| (-x).exp();
        let d = exp_sinh_opt_d(&f, 0.0, 1e-9, 1.0, &mut neval);
        assert_eq!(d, 1.0);
    }

    #[test]
    fn test_large_scale_decay_grows_d() {
        // exp(-x/1000) varies at scale 1000: d must move far away from
        // the endpoint to match it.
        let mut neval = 0;
        let f = |x: f64| (-x / 1000.0).exp();
        let d = exp_sinh_opt_d(&f, 0.0, 1e-9, 1.0, &mut neval);
        assert!(d > 100.0 && d.is_finite(), "d = {}", d);
    }

    #[test]
    fn test_negative_d_keeps_orientation() {
        // Lower-infinite interval: d is negative and must stay negative.
        let mut neval = 0;
        let f = |x: f64| (x / 1000.0).exp();
        let d = exp_sinh_opt_d(&f, 0.0, 1e-9, -1.0, &mut neval);
        assert!(d < 0.0, "d = {}", d);
    }
}

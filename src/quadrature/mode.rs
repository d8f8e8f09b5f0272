//! Interval classification and transform parameters.

use super::offset::exp_sinh_opt_d;

/// Variable transform selected from the interval bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Both bounds finite: `x = c + d·tanh(sinh(t))`.
    TanhSinh,
    /// Exactly one bound infinite: `x = c + d·exp(sinh(t))`.
    ExpSinh,
    /// Both bounds infinite: `x = c + d·sinh(sinh(t))`.
    SinhSinh,
}

/// Parameters of the selected transform.
///
/// `lo`/`hi` are the bounds after an orientation swap; the tanh-sinh sweep
/// samples relative to them so the endpoint-proximity tests compare against
/// the exact caller-supplied values rather than values reconstructed from
/// `c` and `d`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Transform {
    pub mode: Mode,
    /// Center (finite endpoint for exp-sinh).
    pub c: f64,
    /// Scale/offset; carries the direction of the infinite bound for
    /// exp-sinh.
    pub d: f64,
    /// Orientation: -1.0 when the caller's bounds were swapped.
    pub sign: f64,
    /// Initial abscissa seeding the level-0 sum.
    pub v0: f64,
    pub lo: f64,
    pub hi: f64,
}

impl Transform {
    /// Classify the interval `[a, b]` and derive transform parameters.
    ///
    /// `a > b` is handled by swapping the bounds and flipping the
    /// orientation sign; the final integral is multiplied by it. For
    /// semi-infinite intervals the exp-sinh offset is tuned to the
    /// integrand's scale near the finite endpoint unless `optimize` is
    /// false.
    pub fn select<F>(f: &F, a: f64, b: f64, eps: f64, optimize: bool, neval: &mut usize) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let (a, b, mut sign) = if b < a { (b, a, -1.0) } else { (a, b, 1.0) };

        if a.is_finite() && b.is_finite() {
            let c = (a + b) / 2.0;
            let d = (b - a) / 2.0;
            Transform {
                mode: Mode::TanhSinh,
                c,
                d,
                sign,
                v0: c,
                lo: a,
                hi: b,
            }
        } else if a.is_finite() {
            let d = if optimize {
                exp_sinh_opt_d(f, a, eps, 1.0, neval)
            } else {
                1.0
            };
            Transform {
                mode: Mode::ExpSinh,
                c: a,
                d,
                sign,
                v0: a + d,
                lo: a,
                hi: b,
            }
        } else if b.is_finite() {
            let d = if optimize {
                exp_sinh_opt_d(f, b, eps, -1.0, neval)
            } else {
                -1.0
            };
            sign = -sign;
            Transform {
                mode: Mode::ExpSinh,
                c: b,
                d,
                sign,
                v0: b + d,
                lo: a,
                hi: b,
            }
        } else {
            Transform {
                mode: Mode::SinhSinh,
                c: 0.0,
                d: 1.0,
                sign,
                v0: 0.0,
                lo: a,
                hi: b,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_finite_bounds_select_tanh_sinh() {
        let mut neval = 0;
        let t = Transform::select(&|x: f64| x, 1.0, 3.0, EPS, true, &mut neval);
        assert_eq!(t.mode, Mode::TanhSinh);
        assert_eq!(t.c, 2.0);
        assert_eq!(t.d, 1.0);
        assert_eq!(t.sign, 1.0);
        assert_eq!(t.v0, 2.0);
        assert_eq!((t.lo, t.hi), (1.0, 3.0));
        assert_eq!(neval, 0);
    }

    #[test]
    fn test_swapped_bounds_flip_sign() {
        let mut neval = 0;
        let t = Transform::select(&|x: f64| x, 3.0, 1.0, EPS, true, &mut neval);
        assert_eq!(t.mode, Mode::TanhSinh);
        assert_eq!(t.sign, -1.0);
        assert_eq!((t.lo, t.hi), (1.0, 3.0));
    }

    #[test]
    fn test_upper_infinite_selects_exp_sinh() {
        let mut neval = 0;
        let t = Transform::select(&|_| 1.0, 2.0, f64::INFINITY, EPS, true, &mut neval);
        assert_eq!(t.mode, Mode::ExpSinh);
        assert_eq!(t.c, 2.0);
        assert!(t.d > 0.0);
        assert_eq!(t.sign, 1.0);
        assert_eq!(t.v0, t.c + t.d);
    }

    #[test]
    fn test_lower_infinite_flips_orientation() {
        let mut neval = 0;
        let t = Transform::select(&|_| 1.0, f64::NEG_INFINITY, 2.0, EPS, true, &mut neval);
        assert_eq!(t.mode, Mode::ExpSinh);
        assert_eq!(t.c, 2.0);
        assert!(t.d < 0.0);
        assert_eq!(t.sign, -1.0);
        assert_eq!(t.v0, t.c + t.d);
    }

    #[test]
    fn test_both_infinite_selects_sinh_sinh() {
        let mut neval = 0;
        let t = Transform::select(
            &|_| 1.0,
            f64::NEG_INFINITY,
            f64::INFINITY,
            EPS,
            true,
            &mut neval,
        );
        assert_eq!(t.mode, Mode::SinhSinh);
        assert_eq!(t.c, 0.0);
        assert_eq!(t.d, 1.0);
        assert_eq!(t.sign, 1.0);
        assert_eq!(t.v0, 0.0);
    }

    #[test]
    fn test_swapped_infinite_bounds() {
        // integrate(f, inf, 0) must mirror integrate(f, 0, inf) with the
        // orientation flipped.
        let mut neval = 0;
        let t = Transform::select(&|_| 1.0, f64::INFINITY, 0.0, EPS, false, &mut neval);
        assert_eq!(t.mode, Mode::ExpSinh);
        assert_eq!(t.c, 0.0);
        assert_eq!(t.d, 1.0);
        assert_eq!(t.sign, -1.0);
    }

    #[test]
    fn test_optimize_disabled_keeps_unit_offset() {
        let mut neval = 0;
        let f = |x: f64| (-x / 1000.0).exp();
        let t = Transform::select(&f, 0.0, f64::INFINITY, EPS, false, &mut neval);
        assert_eq!(t.d, 1.0);
        assert_eq!(neval, 0);
        let t = Transform::select(&f, 0.0, f64::INFINITY, EPS, true, &mut neval);
        assert!(t.d > 1.0);
        assert!(neval > 0);
    }
}

use std::f64::consts::FRAC_PI_2;

/// Shape of an interpolation, mapping `[0, 1]` onto `[0, 1]`.
///
/// Every curve has `f(0) = 0` and `f(1) = 1`. The named curves in
/// [`Curve::ALL`] are monotonically increasing; a [`Curve::Bezier`] may leave
/// the unit range in between (see [`Curve::BACK_OUT`]). Inputs outside the
/// unit range are evaluated as-is.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum Curve {
    /// `p`
    #[default]
    Linear,
    /// `p^2`
    Square,
    /// `p^3`
    Cubic,
    /// `p^4`
    Quartic,
    /// `p^5`
    Quintic,
    /// `p^6`
    Sextic,
    /// `p^10`
    Expo,
    /// Quarter sine wave, `sin(p * pi/2)`
    Sine,
    /// CSS-style cubic bezier through `(0, 0)`, `(x1, y1)`, `(x2, y2)`,
    /// `(1, 1)`. `x1` and `x2` must lie in `[0, 1]`; `y1` and `y2` are free.
    Bezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Curve {
    pub const ALL: [Curve; 8] = [
        Curve::Linear,
        Curve::Square,
        Curve::Cubic,
        Curve::Quartic,
        Curve::Quintic,
        Curve::Sextic,
        Curve::Expo,
        Curve::Sine,
    ];

    /// Pulls back below 0 before taking off.
    pub const BACK_IN: Curve = Curve::bezier(0.69, -0.53, 0.06, 0.99);
    /// Overshoots past 1, then settles.
    pub const BACK_OUT: Curve = Curve::bezier(0.42, 1.5, 0.35, 1.0);
    /// Pulls back at the start and overshoots at the end.
    pub const BACK_IN_OUT: Curve = Curve::bezier(0.84, -0.43, 0.11, 1.29);

    pub const fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Curve {
        Curve::Bezier { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn apply(self, p: f64) -> f64 {
        match self {
            Curve::Linear => p,
            Curve::Square => p * p,
            Curve::Cubic => p * p * p,
            Curve::Quartic => p.powi(4),
            Curve::Quintic => p.powi(5),
            Curve::Sextic => p.powi(6),
            Curve::Expo => p.powi(10),
            Curve::Sine => (p * FRAC_PI_2).sin(),
            Curve::Bezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, p),
        }
    }
}

// Polynomial coefficients of one bezier axis with end points 0 and 1.
fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    (1.0 - c - b, b, c)
}

#[inline]
fn sample((a, b, c): (f64, f64, f64), t: f64) -> f64 {
    ((a * t + b) * t + c) * t
}

#[inline]
fn slope((a, b, c): (f64, f64, f64), t: f64) -> f64 {
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Solves `x(t) = p` for the curve parameter, then returns `y(t)`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, p: f64) -> f64 {
    if p == 0.0 || p == 1.0 {
        return p;
    }

    let x = coefficients(x1, x2);
    let y = coefficients(y1, y2);

    // Outside the unit range there is no x to solve against; extrapolate.
    if !(0.0..=1.0).contains(&p) {
        return sample(y, p);
    }

    let mut t = p;
    let mut solved = false;
    for _ in 0..8 {
        let err = sample(x, t) - p;
        if err.abs() < 1e-9 {
            solved = true;
            break;
        }
        let dx = slope(x, t);
        if dx.abs() < 1e-9 {
            break;
        }
        t = (t - err / dx).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0, 1.0);
        t = p;
        for _ in 0..48 {
            let err = sample(x, t) - p;
            if err.abs() < 1e-9 {
                break;
            }
            if err > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(y, t)
}

/// Which end of a [`Curve`] gets the slow part.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Easing {
    /// Mirrored curve: `1 - f(1 - p)`.
    In,
    /// Curve as-is: `f(p)`.
    #[default]
    Out,
}

impl Easing {
    #[inline]
    pub fn apply(self, curve: Curve, p: f64) -> f64 {
        match self {
            Easing::In => 1.0 - curve.apply(1.0 - p),
            Easing::Out => curve.apply(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    // ── curves ────────────────────────────────────────────────────────────

    #[test]
    fn curves_fix_endpoints() {
        for curve in Curve::ALL {
            assert!(approx(curve.apply(0.0), 0.0), "{curve:?} at 0");
            assert!(approx(curve.apply(1.0), 1.0), "{curve:?} at 1");
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for curve in Curve::ALL {
            let mut last = curve.apply(0.0);
            for i in 1..=100 {
                let v = curve.apply(i as f64 / 100.0);
                assert!(v >= last, "{curve:?} decreased at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn power_curves_at_half() {
        assert_eq!(Curve::Linear.apply(0.5), 0.5);
        assert_eq!(Curve::Square.apply(0.5), 0.25);
        assert_eq!(Curve::Cubic.apply(0.5), 0.125);
        assert_eq!(Curve::Quartic.apply(0.5), 0.0625);
        assert_eq!(Curve::Quintic.apply(0.5), 0.03125);
        assert_eq!(Curve::Sextic.apply(0.5), 0.015625);
        assert_eq!(Curve::Expo.apply(0.5), 1.0 / 1024.0);
    }

    #[test]
    fn sine_at_half() {
        assert!(approx(Curve::Sine.apply(0.5), std::f64::consts::FRAC_1_SQRT_2));
    }

    // ── bezier ────────────────────────────────────────────────────────────

    fn samples(curve: Curve) -> impl Iterator<Item = f64> {
        (0..=200).map(move |i| curve.apply(i as f64 / 200.0))
    }

    #[test]
    fn diagonal_bezier_is_linear() {
        let curve = Curve::bezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            assert!((curve.apply(p) - p).abs() < 1e-6, "at {p}");
        }
    }

    #[test]
    fn back_presets_fix_endpoints() {
        for curve in [Curve::BACK_IN, Curve::BACK_OUT, Curve::BACK_IN_OUT] {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?} at 0");
            assert_eq!(curve.apply(1.0), 1.0, "{curve:?} at 1");
            for easing in [Easing::In, Easing::Out] {
                assert!(approx(easing.apply(curve, 0.0), 0.0));
                assert!(approx(easing.apply(curve, 1.0), 1.0));
            }
        }
    }

    #[test]
    fn back_out_overshoots_one() {
        let max = samples(Curve::BACK_OUT).fold(f64::MIN, f64::max);
        assert!(max > 1.0, "max {max}");
        assert!(samples(Curve::BACK_OUT).all(|v| v >= 0.0));
    }

    #[test]
    fn back_in_dips_below_zero() {
        let min = samples(Curve::BACK_IN).fold(f64::MAX, f64::min);
        assert!(min < 0.0, "min {min}");
        assert!(samples(Curve::BACK_IN).all(|v| v <= 1.0));
    }

    #[test]
    fn back_in_out_leaves_unit_range_on_both_sides() {
        let min = samples(Curve::BACK_IN_OUT).fold(f64::MAX, f64::min);
        let max = samples(Curve::BACK_IN_OUT).fold(f64::MIN, f64::max);
        assert!(min < 0.0, "min {min}");
        assert!(max > 1.0, "max {max}");
    }

    #[test]
    fn eased_in_back_out_dips_below_zero() {
        // Mirroring turns the overshoot at the end into a pull-back at the start.
        let min = (0..=200)
            .map(|i| Easing::In.apply(Curve::BACK_OUT, i as f64 / 200.0))
            .fold(f64::MAX, f64::min);
        assert!(min < 0.0, "min {min}");
    }

    // ── easing ────────────────────────────────────────────────────────────

    #[test]
    fn ease_in_and_out_of_square() {
        assert_eq!(Easing::In.apply(Curve::Square, 0.5), 0.75);
        assert_eq!(Easing::Out.apply(Curve::Square, 0.5), 0.25);
    }

    #[test]
    fn easings_fix_endpoints() {
        for curve in Curve::ALL {
            for easing in [Easing::In, Easing::Out] {
                assert!(approx(easing.apply(curve, 0.0), 0.0));
                assert!(approx(easing.apply(curve, 1.0), 1.0));
            }
        }
    }

    #[test]
    fn nan_propagates() {
        assert!(Easing::Out.apply(Curve::Cubic, f64::NAN).is_nan());
        assert!(Easing::In.apply(Curve::Sine, f64::NAN).is_nan());
        assert!(Curve::BACK_OUT.apply(f64::NAN).is_nan());
    }
}

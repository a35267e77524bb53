use super::integrand::{
    Integrand,
    PiIntegrand
};

// ─────────────────────────────────────────────────────────────────────────────
// Composite trapezoidal rule on a uniform grid over [0, 1]
// ─────────────────────────────────────────────────────────────────────────────
//
// The grid has `total_intervals` steps of width h = 1 / total_intervals.
// Step i spans [i·h, (i+1)·h] and contributes
//
//   (f(i·h) + f((i+1)·h)) · h / 2
//
// A caller may sum only the steps in [start, end); summing disjoint ranges and
// adding the results reproduces the full integral up to rounding.

/// Trapezoidal partial sum of `integrand` over the steps `[start, end)`.
///
/// Steps are accumulated in increasing index order. An empty or inverted range
/// yields `0.0`.
pub fn integrate_with<I>(integrand: &I, start: u64, end: u64, total_intervals: u64) -> f64
    where I: Integrand + ?Sized {
    let step = 1.0 / total_intervals as f64;
    let mut sum = 0.0;
    for i in start..end {
        let x0 = i as f64 * step;
        let x1 = (i + 1) as f64 * step;
        sum += (integrand.value(x0) + integrand.value(x1)) * step / 2.0;
    }
    sum
}

/// Partial sum of 4 / (1 + x²) over the steps `[start, end)`.
pub fn integrate(start: u64, end: u64, total_intervals: u64) -> f64 {
    integrate_with(&PiIntegrand, start, end, total_intervals)
}


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    struct Square;

    impl Integrand for Square {
        fn value(&self, x: f64) -> f64 {
            x * x
        }
    }

    #[test]
    fn four_steps_match_hand_computed_trapezoids() {
        let f_quarter = 4.0 / 1.0625;
        let first = (4.0 + f_quarter) * 0.125 + (f_quarter + 3.2) * 0.125;
        let second = (3.2 + 2.56) * 0.125 + (2.56 + 2.0) * 0.125;

        assert_relative_eq!(integrate(0, 2, 4), first, epsilon = 1e-15);
        assert_relative_eq!(integrate(2, 4, 4), second, epsilon = 1e-15);
        assert_relative_eq!(integrate(0, 2, 4), 1.8411764705882352, epsilon = 1e-12);
        assert_relative_eq!(integrate(2, 4, 4), 1.29, epsilon = 1e-12);
    }

    #[test]
    fn empty_and_inverted_ranges_are_zero() {
        assert_eq!(integrate(3, 3, 10), 0.0);
        assert_eq!(integrate(7, 2, 10), 0.0);
    }

    #[test]
    fn single_step_is_one_trapezoid() {
        assert_relative_eq!(integrate(0, 1, 1), (4.0 + 2.0) / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn generic_integrand_uses_same_grid() {
        // ∫₀¹ x² dx = 1/3, trapezoid overestimates by h²/6 for a convex quadratic.
        let n = 1_000;
        let h = 1.0 / n as f64;
        let expected = 1.0 / 3.0 + h * h / 6.0;
        assert_relative_eq!(integrate_with(&Square, 0, n, n), expected, epsilon = 1e-12);
    }

    #[test]
    fn split_ranges_add_up_to_full_range() {
        let n = 10_000;
        let whole = integrate(0, n, n);
        let split = integrate(0, 1_234, n) + integrate(1_234, 8_000, n) + integrate(8_000, n, n);
        assert_relative_eq!(whole, split, epsilon = 1e-12);
    }

    #[test]
    fn full_range_approaches_pi() {
        let n = 100_000;
        assert_relative_eq!(integrate(0, n, n), std::f64::consts::PI, epsilon = 1e-9);
    }
}

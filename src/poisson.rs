use crate::factorial::Factorial;

/// Probability of observing exactly `k` events under a Poisson process with
/// rate `lambda`, evaluated as `λ^k · e^(−λ) / k!` in `f64`. The floating
/// semantics are part of the contract: a zero rate yields 1 at `k = 0` and 0
/// for `k > 0`, while a NaN or infinite rate propagates into the result
/// rather than raising an error.
#[inline]
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial.get(k) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorial::Calculator;
    use assert_float_eq::*;

    #[test]
    fn univariate_unit_rate() {
        assert_float_relative_eq!(0.36787944117144233, univariate(0, 1.0, &Calculator));
        assert_float_relative_eq!(0.36787944117144233, univariate(1, 1.0, &Calculator));
        assert_float_relative_eq!(0.18393972058572117, univariate(2, 1.0, &Calculator));
    }

    #[test]
    fn univariate_fractional_rate() {
        assert_float_relative_eq!(0.0820849986238988, univariate(0, 2.5, &Calculator));
        assert_float_relative_eq!(0.205212496559747, univariate(1, 2.5, &Calculator));
        assert_float_relative_eq!(0.25651562069968376, univariate(2, 2.5, &Calculator));
    }

    #[test]
    fn univariate_zero_rate_is_a_point_mass() {
        assert_eq!(1.0, univariate(0, 0.0, &Calculator));
        assert_eq!(0.0, univariate(1, 0.0, &Calculator));
        assert_eq!(0.0, univariate(4, 0.0, &Calculator));
    }

    #[test]
    fn univariate_degenerate_rates_propagate() {
        assert!(univariate(0, f64::NAN, &Calculator).is_nan());
        assert!(univariate(3, f64::NAN, &Calculator).is_nan());
        assert!(univariate(1, f64::INFINITY, &Calculator).is_nan());
    }
}

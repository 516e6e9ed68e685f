use std::cmp::Ordering;

/// Decide whether the artificial delay step ends in a failure.
///
/// The step lets the request through only when the sample is strictly
/// greater than `failure_rate`, so a sample equal to the rate fails.
///
/// # Arguments
///
/// * `sample` - A draw in `[0, 1)`
/// * `failure_rate` - Probability of failure in `[0, 1]`
///
/// # Examples
///
/// ```
/// use postboard_api::should_fail;
///
/// assert!(should_fail(0.1, 0.3));
/// assert!(should_fail(0.3, 0.3));
/// assert!(!should_fail(0.31, 0.3));
/// ```
pub fn should_fail(sample: f64, failure_rate: f64) -> bool {
    // NaN samples fail too
    sample.partial_cmp(&failure_rate) != Some(Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_fails() {
        assert!(should_fail(0.3, 0.3));
        assert!(!should_fail(0.300_001, 0.3));
    }

    #[test]
    fn zero_rate_only_fails_on_zero_sample() {
        assert!(should_fail(0.0, 0.0));
        assert!(!should_fail(f64::MIN_POSITIVE, 0.0));
        assert!(!should_fail(0.999, 0.0));
    }

    #[test]
    fn full_rate_always_fails() {
        for sample in [0.0, 0.25, 0.5, 0.75, 0.999_999] {
            assert!(should_fail(sample, 1.0), "sample {sample} should fail");
        }
    }

    #[test]
    fn nan_sample_fails() {
        assert!(should_fail(f64::NAN, 0.3));
    }
}

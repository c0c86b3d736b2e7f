//! Size-change tolerance model.
//!
//! Decides how much a backup may grow or shrink between two consecutive
//! runs before the change is flagged. Small baselines tolerate much larger
//! relative swings than large ones: a 200 kB dump tripling overnight is
//! noise, a 2 GB dataset tripling is not.

use crate::utils::errors::{MonitorError, Result};

/// Floor for the allowed change, in percent. Applies no matter how large
/// the baseline gets.
const MINIMUM_PERCENTAGE: u64 = 2;

// Curve parameters, tuned by hand against historical backup sizes.
const SCALE: f64 = 4000.0;
const QUAD: f64 = 4.0;
const DIV: f64 = 2.0;
const INC: f64 = 2.5;
const DEC: f64 = 2.0;

/// Percentage the backup size changed between two runs, truncated to an
/// integer.
///
/// Direction-agnostic: shrinkage and growth of the same magnitude report
/// the same percentage. `previous` is the denominator and must be
/// non-zero.
pub fn relative_size_change(current: u64, previous: u64) -> Result<u64> {
    if previous == 0 {
        return Err(MonitorError::InvalidInput(
            "previous size must be non-zero to compute a relative change".into(),
        ));
    }
    let delta = current.abs_diff(previous) as f64;
    Ok((delta / previous as f64 * 100.0) as u64)
}

/// Maximum allowed change percentage for a baseline of `bytesize` bytes.
///
/// The bound follows `exp(dec - sqrt(a * m^2 + inc) / div) * n` where `m`
/// is the order of magnitude of the baseline, floored at
/// [`MINIMUM_PERCENTAGE`]. The curve falls smoothly from five-digit
/// percentages for byte-sized baselines down to the floor around a
/// terabyte.
pub fn allowed_size_change(bytesize: u64) -> Result<u64> {
    if bytesize == 0 {
        return Err(MonitorError::InvalidInput(
            "cannot compute an allowed change for an empty baseline".into(),
        ));
    }

    let order_of_magnitude = (bytesize as f64).log10();
    let raw = (DEC - (QUAD * order_of_magnitude.powi(2) + INC).sqrt() / DIV).exp() * SCALE;

    Ok((raw as u64).max(MINIMUM_PERCENTAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_allowance_for_small_files() {
        assert_eq!(allowed_size_change(1).unwrap(), 13406);
        assert_eq!(allowed_size_change(100).unwrap(), 3440);
    }

    #[test]
    fn small_allowance_for_large_files() {
        assert_eq!(allowed_size_change(1_000_000).unwrap(), 69);
        assert_eq!(allowed_size_change(1_000_000_000).unwrap(), 3);
    }

    #[test]
    fn floor_holds_for_huge_files() {
        assert_eq!(allowed_size_change(1_000_000_000_000).unwrap(), 2);
    }

    #[test]
    fn allowance_never_increases_with_scale() {
        let mut previous_bound = u64::MAX;
        for exponent in 0..=12u32 {
            let bound = allowed_size_change(10u64.pow(exponent)).unwrap();
            assert!(bound <= previous_bound, "bound grew at 1e{exponent}");
            assert!(bound >= MINIMUM_PERCENTAGE);
            previous_bound = bound;
        }
    }

    #[test]
    fn relative_change_counts_growth() {
        assert_eq!(relative_size_change(2, 1).unwrap(), 100);
        assert_eq!(relative_size_change(145, 100).unwrap(), 45);
    }

    #[test]
    fn relative_change_counts_shrinkage() {
        assert_eq!(relative_size_change(100, 145).unwrap(), 31);
    }

    #[test]
    fn identical_sizes_have_zero_change() {
        assert_eq!(relative_size_change(12345, 12345).unwrap(), 0);
    }

    #[test]
    fn change_is_symmetric_around_the_baseline() {
        assert_eq!(
            relative_size_change(1100, 1000).unwrap(),
            relative_size_change(900, 1000).unwrap()
        );
    }

    #[test]
    fn zero_inputs_are_rejected() {
        assert!(relative_size_change(10, 0).is_err());
        assert!(allowed_size_change(0).is_err());
    }
}

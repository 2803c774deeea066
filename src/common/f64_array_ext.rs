//! `[f64]` extensions.

use num_traits::Float;

/// `[f64]` extensions.
pub trait F64ArrayExt {
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f64;
    /// Returns the mean of the squared values.
    fn total_power(&self) -> f64;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level.
    fn rms_level(&self) -> f64;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level in dB relative to 1, i.e 0 dB corresponds to a level of 1.
    fn rms_level_db(&self) -> f64;
}

impl F64ArrayExt for [f64] {
    fn peak_level(&self) -> f64 {
        self.iter()
            .fold(0.0_f64, |max, sample| Float::max(max, Float::abs(*sample)))
    }

    fn total_power(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let sum = self
            .iter()
            .fold(0.0_f64, |acc, sample| Float::mul_add(*sample, *sample, acc));
        sum / (self.len() as f64)
    }

    fn rms_level(&self) -> f64 {
        Float::sqrt(self.total_power())
    }

    fn rms_level_db(&self) -> f64 {
        20. * Float::log10(self.rms_level())
    }
}

#[cfg(test)]
mod tests {
    use super::F64ArrayExt;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_window() {
        let window: [f64; 0] = [];
        assert!(window.rms_level() == 0.0);
        assert!(window.peak_level() == 0.0);
        assert!(window.total_power() == 0.0);
    }

    #[test]
    fn test_constant_signal() {
        let signal = [2.0; 10];
        assert_eq!(signal.total_power(), 4.0);
        assert_eq!(signal.rms_level(), 2.0);
        assert_abs_diff_eq!(signal.rms_level_db(), 6.0206, epsilon = 1e-4);
    }

    #[test]
    fn test_peak_level() {
        let signal = [0.5, -3.0, 2.0];
        assert_eq!(signal.peak_level(), 3.0);
    }
}

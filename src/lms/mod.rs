//! Multi-channel [least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! and [normalized least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter#Normalized_least_mean_squares_filter_(NLMS))
//! adaptive linear prediction.
//!
//! For each step, with regressors x, coefficients h and target d:
//!
//! ```text
//! y  = Σ_c Σ_f x[c][f] h[c][f]
//! e  = d - y
//! h += 2 μ e x / Σ x²     (NLMS)
//! h += 2 μ e x            (LMS)
//! ```
//!
//! followed by optional clipping of every coefficient to `[-clip, clip]`.
//!
//! # Examples
//! ## Identity prediction
//!
//! This example uses the same noise signal as the only regressor and as the
//! target. The expected result is convergence to a filter with a 1 at the tap
//! holding the current sample and zeros elsewhere.
//!
//! ```
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//! use micro_lms::common::F64ArrayExt;
//! use micro_lms::lms::{FilterConfig, LmsFilter};
//!
//! // Generate noise signal
//! let sample_count = 10000;
//! let mut signal = vec![0.0_f64; sample_count];
//! let mut rng = StdRng::seed_from_u64(123);
//! for i in 0..sample_count {
//!     signal[i] = rng.gen_range(-1.0..=1.0);
//! }
//!
//! // Create filter instance, 10 taps of a single channel which is also
//! // the target channel
//! const TAPS: usize = 10;
//! let config = FilterConfig::new(TAPS, 0, 1, 0.25);
//! let mut filter = LmsFilter::from_config(config).unwrap();
//! assert_eq!(filter.target_channel_index(), 0);
//!
//! // Perform filtering. The newest sample is the last tap.
//! for (i, window) in signal.windows(TAPS).enumerate() {
//!     let mut x = [[0.0; TAPS]];
//!     x[0].copy_from_slice(window);
//!     let d = window[TAPS - 1];
//!     let y = filter.step(&x, d).unwrap();
//!
//!     // Give the filter time to converge
//!     if i > 400 {
//!         // The signal should be almost completely predicted
//!         assert!((d - y).abs() < 0.001);
//!         let h = filter.coefficients();
//!         assert!((h[TAPS - 1] - 1.0).abs() < 1e-5);
//!         assert!(h[..TAPS - 1].peak_level() < 1e-5);
//!     }
//! }
//! ```

mod filter_config;
mod lms_filter;

pub use filter_config::{FilterConfig, DEFAULT_STEP_SCALE};
pub use lms_filter::LmsFilter;

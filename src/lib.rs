//! A multi-channel [least mean squares](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
//! adaptive linear predictor, with an optional
//! [normalized](https://en.wikipedia.org/wiki/Least_mean_squares_filter#Normalized_least_mean_squares_filter_(NLMS))
//! update.
//!
//! Any number of input channels share one scalar target signal and one global
//! prediction error. Each call to [`LmsFilter::step`] predicts the target from
//! the current tap inputs of every channel, then adapts the coefficients.
//!
//! Features
//! * Fused multiply-add accumulation, giving bit-reproducible predictions.
//! * No allocations when stepping, suitable for real time use.
//! * `no_std` compatible (disable the default `std` feature).
//!
//! # Examples
//!
//! ```
//! use micro_lms::{FilterConfig, LmsFilter};
//!
//! let config = FilterConfig::new(2, 0, 1, 0.1).normalized(false);
//! let mut filter = LmsFilter::from_config(config).unwrap();
//!
//! let regressors = [[1.0, 2.0]];
//! assert_eq!(filter.step(&regressors, 5.0).unwrap(), 0.0);
//! assert_eq!(filter.coefficients(), &[1.0, 2.0]);
//! assert_eq!(filter.step(&regressors, 5.0).unwrap(), 5.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod common;
mod error;
pub mod lms;

pub use common::{DataType, Element, MatrixView, Regressors};
pub use error::LmsError;
pub use lms::{FilterConfig, LmsFilter};

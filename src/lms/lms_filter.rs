use alloc::{vec, vec::Vec};
use num_traits::Float;
use tracing::{debug, warn};

use super::filter_config::{FilterConfig, DEFAULT_STEP_SCALE};
use crate::common::{DataType, Regressors};
use crate::LmsError;

/// A multi-channel adaptive [least mean squares filter](https://en.wikipedia.org/wiki/Least_mean_squares_filter)
/// predicting one scalar target from the current tap inputs of all channels.
///
/// The coefficients are stored as a flat `channel_count * tap_count` buffer,
/// the coefficient of tap `f` of channel `c` is at index `c * tap_count + f`.
///
/// The filter does no internal synchronization. [`LmsFilter::step`] and
/// [`LmsFilter::reset`] take `&mut self`, so sharing one instance between
/// threads requires the caller to serialize access, e.g using a mutex.
#[derive(Debug, Clone)]
pub struct LmsFilter {
    config: FilterConfig,
    /// FIR filter coefficients, row major by channel.
    coefficients: Vec<f64>,
}

impl LmsFilter {
    /// Creates a normalized filter with the default step scale and no clipping.
    pub fn new(
        tap_count: usize,
        target_channel_index: usize,
        channel_count: usize,
    ) -> Result<Self, LmsError> {
        LmsFilter::from_config(FilterConfig::new(
            tap_count,
            target_channel_index,
            channel_count,
            DEFAULT_STEP_SCALE,
        ))
    }

    pub fn from_options(
        tap_count: usize,
        target_channel_index: usize,
        channel_count: usize,
        step_scale: f64,
        normalized: bool,
        coefficient_clip: Option<f64>,
    ) -> Result<Self, LmsError> {
        LmsFilter::from_config(
            FilterConfig::new(tap_count, target_channel_index, channel_count, step_scale)
                .normalized(normalized)
                .coefficient_clip(coefficient_clip),
        )
    }

    pub fn from_config(config: FilterConfig) -> Result<Self, LmsError> {
        config.validate()?;
        debug!(
            tap_count = config.tap_count,
            channel_count = config.channel_count,
            target_channel_index = config.target_channel_index,
            step_scale = config.step_scale,
            normalized = config.normalized,
            coefficient_clip = ?config.coefficient_clip,
            "created lms filter"
        );
        Ok(LmsFilter {
            coefficients: vec![0.0; config.coefficient_count()],
            config,
        })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn tap_count(&self) -> usize {
        self.config.tap_count
    }

    pub fn channel_count(&self) -> usize {
        self.config.channel_count
    }

    pub fn target_channel_index(&self) -> usize {
        self.config.target_channel_index
    }

    pub fn step_scale(&self) -> f64 {
        self.config.step_scale
    }

    pub fn is_normalized(&self) -> bool {
        self.config.normalized
    }

    pub fn coefficient_clip(&self) -> Option<f64> {
        self.config.coefficient_clip
    }

    /// All coefficients, row major by channel.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The coefficients of one channel, or `None` if `channel` is out of range.
    pub fn channel_coefficients(&self, channel: usize) -> Option<&[f64]> {
        self.coefficients.chunks_exact(self.config.tap_count).nth(channel)
    }

    /// Sets all coefficients to zero.
    pub fn reset(&mut self) {
        debug!("resetting lms filter coefficients");
        for h in self.coefficients.iter_mut() {
            *h = 0.0;
        }
    }

    /// Predicts `target` from `regressors` using the current coefficients,
    /// then adapts the coefficients to the prediction error.
    ///
    /// Returns the prediction made before the update. On error the
    /// coefficients are left untouched.
    ///
    /// In normalized mode, an all zero regressor matrix gives zero input
    /// energy and the update divides by zero. The coefficients then become
    /// non-finite. This is not guarded against; callers that may feed silent
    /// input should check the coefficients or use plain LMS.
    pub fn step<R: Regressors + ?Sized>(
        &mut self,
        regressors: &R,
        target: f64,
    ) -> Result<f64, LmsError> {
        self.validate(regressors)?;

        let channel_count = self.config.channel_count;
        let tap_count = self.config.tap_count;
        let normalized = self.config.normalized;

        // Compute the prediction y = Σ h x and, for NLMS, the input energy Σ x².
        let mut prediction = 0.0;
        let mut energy = 0.0;
        for c in 0..channel_count {
            let h = &self.coefficients[c * tap_count..(c + 1) * tap_count];
            for (f, h) in h.iter().enumerate() {
                let x = regressors.element_at(c, f);
                prediction = Float::mul_add(x, *h, prediction);
                if normalized {
                    energy = Float::mul_add(x, x, energy);
                }
            }
        }

        let error = target - prediction;
        let denominator = if normalized {
            if energy == 0.0 {
                warn!("zero input energy in normalized lms step, coefficients will become non-finite");
            }
            energy
        } else {
            1.0
        };

        let delta_scale = 2.0 * self.config.step_scale * error;
        let clip = self.config.coefficient_clip;
        for c in 0..channel_count {
            let h = &mut self.coefficients[c * tap_count..(c + 1) * tap_count];
            for (f, h) in h.iter_mut().enumerate() {
                let x = regressors.element_at(c, f);
                *h += delta_scale * x / denominator;
                if let Some(clip) = clip {
                    *h = h.clamp(-clip, clip);
                }
            }
        }

        Ok(prediction)
    }

    fn validate<R: Regressors + ?Sized>(&self, regressors: &R) -> Result<(), LmsError> {
        let data_type = regressors.data_type();
        if data_type != DataType::F64 {
            return Err(LmsError::UnsupportedDataType(data_type));
        }
        let (rows, cols) = regressors.dimensions();
        if rows == 0 || cols == 0 {
            return Err(LmsError::EmptyInput { rows, cols });
        }
        let expected = (self.config.channel_count, self.config.tap_count);
        if (rows, cols) != expected {
            return Err(LmsError::ShapeMismatch {
                expected,
                got: (rows, cols),
            });
        }
        Ok(())
    }
}

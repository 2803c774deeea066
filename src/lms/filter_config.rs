use crate::LmsError;

/// Step scale used by [`LmsFilter::new`](crate::LmsFilter::new).
pub const DEFAULT_STEP_SCALE: f64 = 0.1;

/// Filter configuration. Immutable once a filter has been created from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    /// Number of taps per channel.
    pub tap_count: usize,
    /// Caller metadata naming the channel the target belongs to. It is
    /// neither validated nor used by the update law.
    pub target_channel_index: usize,
    /// Number of input channels.
    pub channel_count: usize,
    /// Learning rate μ. Each update is scaled by `2μ`.
    pub step_scale: f64,
    /// NLMS if true, plain LMS otherwise.
    #[cfg_attr(feature = "serde", serde(default = "default_normalized"))]
    pub normalized: bool,
    /// Symmetric bound applied to every coefficient after each update.
    #[cfg_attr(feature = "serde", serde(default))]
    pub coefficient_clip: Option<f64>,
}

#[cfg(feature = "serde")]
fn default_normalized() -> bool {
    true
}

impl FilterConfig {
    /// Creates a normalized configuration without coefficient clipping.
    pub fn new(
        tap_count: usize,
        target_channel_index: usize,
        channel_count: usize,
        step_scale: f64,
    ) -> Self {
        FilterConfig {
            tap_count,
            target_channel_index,
            channel_count,
            step_scale,
            normalized: true,
            coefficient_clip: None,
        }
    }

    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    pub fn coefficient_clip(mut self, coefficient_clip: Option<f64>) -> Self {
        self.coefficient_clip = coefficient_clip;
        self
    }

    /// Number of coefficients, `channel_count * tap_count`.
    pub fn coefficient_count(&self) -> usize {
        self.channel_count * self.tap_count
    }

    pub fn validate(&self) -> Result<(), LmsError> {
        if self.tap_count == 0 {
            return Err(LmsError::InvalidConfiguration(
                "tap count must be greater than 0",
            ));
        }
        if self.channel_count == 0 {
            return Err(LmsError::InvalidConfiguration(
                "channel count must be greater than 0",
            ));
        }
        if self.tap_count.checked_mul(self.channel_count).is_none() {
            return Err(LmsError::InvalidConfiguration(
                "channel count times tap count overflows",
            ));
        }
        if !(self.step_scale.is_finite() && self.step_scale > 0.0) {
            return Err(LmsError::InvalidConfiguration(
                "step scale must be positive and finite",
            ));
        }
        if let Some(clip) = self.coefficient_clip {
            // Also rejects NaN.
            if !(clip > 0.0) {
                return Err(LmsError::InvalidConfiguration(
                    "coefficient clip must be positive",
                ));
            }
        }
        Ok(())
    }
}

use crate::error::{Error, Result};

/// Environment variable overriding the default frame rate.
pub const FRAME_RATE_ENV: &str = "VYDE_FRAME_RATE";

/// Frames per second used when nothing else is configured.
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Clock configuration.
///
/// Values are validated when the clock is built, not here, so a config can be
/// assembled field by field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockConfig {
    /// Frames per second; converts seconds into frame spans.
    pub rate: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { rate: DEFAULT_FRAME_RATE }
    }
}

impl ClockConfig {
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Reads [`FRAME_RATE_ENV`], falling back to the default when unset.
    pub fn from_env() -> Result<Self> {
        Self::from_rate_var(std::env::var(FRAME_RATE_ENV).ok())
    }

    fn from_rate_var(value: Option<String>) -> Result<Self> {
        let Some(value) = value else {
            return Ok(Self::default());
        };

        let rate: f64 = value.trim().parse().map_err(|_| Error::InvalidEnv {
            var: FRAME_RATE_ENV,
            value: value.clone(),
        })?;

        let config = Self::default().with_rate(rate);
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_rate(self.rate)
    }
}

pub(crate) fn validate_rate(rate: f64) -> Result<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidRate(rate))
    }
}

use serde::{Deserialize, Serialize};

use crate::core::linear_scale::LinearScale;
use crate::core::log_scale::LogScale;
use crate::core::ticks::{DEFAULT_TICK_COUNT, Ticks};
use crate::error::{ChartError, ChartResult};

/// `[min, max]` pair in data space.
pub type Domain = (f64, f64);

/// Concrete scale selected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScaleType {
    #[default]
    Linear,
    Log,
}

/// Tuning shared by every scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Fraction of the (possibly log-space) spread added on each side by
    /// `nice_domain`.
    #[serde(default = "default_pad_proportion")]
    pub pad_proportion: f64,
    /// Drop values outside the 5th..95th percentile band when computing extents.
    #[serde(default)]
    pub ignore_outlier: bool,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            pad_proportion: default_pad_proportion(),
            ignore_outlier: false,
        }
    }
}

impl ScaleConfig {
    #[must_use]
    pub fn with_pad_proportion(mut self, pad_proportion: f64) -> Self {
        self.pad_proportion = pad_proportion;
        self
    }

    #[must_use]
    pub fn with_ignore_outlier(mut self, ignore_outlier: bool) -> Self {
        self.ignore_outlier = ignore_outlier;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.pad_proportion.is_finite() || self.pad_proportion < 0.0 {
            return Err(ChartError::InvalidConfig(
                "scale pad proportion must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_pad_proportion() -> f64 {
    0.2
}

/// Capability set shared by the scale family.
///
/// Numeric operations never fail: values a scale cannot represent map to NaN
/// and unusable datasets yield an empty (`None`) extent.
pub trait Scale: std::fmt::Debug {
    fn scale_type(&self) -> ScaleType;

    fn config(&self) -> ScaleConfig;

    fn set_config(&mut self, config: ScaleConfig) -> ChartResult<()>;

    /// Domain as requested by the last `set_domain` call.
    fn domain(&self) -> Domain;

    /// Domain the mapping actually uses.
    fn effective_domain(&self) -> Domain;

    fn set_domain(&mut self, domain: Domain);

    fn range(&self) -> Domain;

    fn set_range(&mut self, range: Domain);

    /// Maps a domain value onto the range; NaN when not representable.
    fn scale(&self, value: f64) -> f64;

    /// Maps a range value back onto the domain.
    fn invert(&self, value: f64) -> f64;

    /// Pads `domain` for display.
    fn nice_domain(&self, domain: Domain, count: usize) -> Domain;

    /// Domain shown when no usable data exists.
    fn default_extent(&self) -> Domain;

    /// Usable `[min, max]` of `values`, or `None` when no legal value remains.
    fn extent_of_values(&self, values: &[f64]) -> Option<Domain>;

    fn ticks_with_count(&self, count: usize) -> Ticks;

    fn ticks(&self) -> Ticks {
        self.ticks_with_count(DEFAULT_TICK_COUNT)
    }

    fn default_ticks(&self) -> Ticks {
        self.ticks_with_count(1)
    }

    fn pad_proportion(&self) -> f64 {
        self.config().pad_proportion
    }

    fn set_pad_proportion(&mut self, pad_proportion: f64) -> ChartResult<()> {
        self.set_config(self.config().with_pad_proportion(pad_proportion))
    }

    fn ignore_outlier(&self) -> bool {
        self.config().ignore_outlier
    }

    fn set_ignore_outlier(&mut self, ignore_outlier: bool) -> ChartResult<()> {
        self.set_config(self.config().with_ignore_outlier(ignore_outlier))
    }

    /// Display domain for `values`: the padded extent, or the default extent
    /// when `values` holds nothing usable.
    fn auto_domain(&self, values: &[f64]) -> Domain {
        match self.extent_of_values(values) {
            Some(extent) => self.nice_domain(extent, DEFAULT_TICK_COUNT),
            None => self.default_extent(),
        }
    }

    fn set_auto_domain(&mut self, values: &[f64]) {
        let domain = self.auto_domain(values);
        self.set_domain(domain);
    }
}

/// Builds the scale selected by `scale_type`.
pub fn create_scale(scale_type: ScaleType, config: ScaleConfig) -> ChartResult<Box<dyn Scale>> {
    let config = config.validate()?;
    Ok(match scale_type {
        ScaleType::Linear => Box::new(LinearScale::with_config(config)?),
        ScaleType::Log => Box::new(LogScale::with_config(config)?),
    })
}

/// Linear map of `value` from `domain` onto `range`; a collapsed domain maps to
/// the first range bound.
pub(crate) fn interpolate(domain: Domain, range: Domain, value: f64) -> f64 {
    let span = domain.1 - domain.0;
    if span == 0.0 {
        return range.0;
    }
    range.0 + (value - domain.0) / span * (range.1 - range.0)
}

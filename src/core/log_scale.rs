use ordered_float::OrderedFloat;

use crate::core::linear_scale::min_max;
use crate::core::scale::{Domain, Scale, ScaleConfig, ScaleType, interpolate};
use crate::core::ticks::{Ticks, log_ticks, pow10, quantile_sorted};
use crate::error::ChartResult;

/// Smallest positive value distinguishable from zero in `f64` (`2^-1074`).
///
/// Note this is the smallest subnormal, not `f64::MIN_POSITIVE`.
pub const MIN_POSITIVE_VALUE: f64 = f64::from_bits(1);

fn log_min_positive() -> f64 {
    MIN_POSITIVE_VALUE.log10()
}

/// Base-10 logarithmic scale that returns NaN for non-positive input.
///
/// The domain is kept twice: the raw value passed to `set_domain` (reported by
/// `domain()` for axis labelling) and an effective copy whose lower bound is
/// clamped to [`MIN_POSITIVE_VALUE`], which is all the mapping ever sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    untransformed_domain: Domain,
    effective_domain: Domain,
    range: Domain,
    config: ScaleConfig,
}

impl Default for LogScale {
    fn default() -> Self {
        let mut scale = Self {
            untransformed_domain: (1.0, 10.0),
            effective_domain: (1.0, 10.0),
            range: (0.0, 1.0),
            config: ScaleConfig::default(),
        };
        scale.set_domain(scale.default_extent());
        scale
    }
}

impl LogScale {
    #[must_use]
    pub fn new(domain: Domain, range: Domain) -> Self {
        let mut scale = Self {
            range,
            ..Self::default()
        };
        scale.set_domain(domain);
        scale
    }

    pub fn with_config(config: ScaleConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }

    fn log_domain(&self) -> Domain {
        (
            self.effective_domain.0.log10(),
            self.effective_domain.1.log10(),
        )
    }
}

impl Scale for LogScale {
    fn scale_type(&self) -> ScaleType {
        ScaleType::Log
    }

    fn config(&self) -> ScaleConfig {
        self.config
    }

    fn set_config(&mut self, config: ScaleConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    fn domain(&self) -> Domain {
        self.untransformed_domain
    }

    fn effective_domain(&self) -> Domain {
        self.effective_domain
    }

    fn set_domain(&mut self, domain: Domain) {
        self.untransformed_domain = domain;
        self.effective_domain = (MIN_POSITIVE_VALUE.max(domain.0), domain.1);
    }

    fn range(&self) -> Domain {
        self.range
    }

    fn set_range(&mut self, range: Domain) {
        self.range = range;
    }

    fn scale(&self, value: f64) -> f64 {
        if value <= 0.0 {
            return f64::NAN;
        }
        interpolate(self.log_domain(), self.range, value.log10())
    }

    fn invert(&self, value: f64) -> f64 {
        if self.range.0 == self.range.1 {
            return self.effective_domain.0;
        }
        pow10(interpolate(self.range, self.log_domain(), value))
    }

    /// Pads `pad_proportion` of the log-space spread on both sides, or one
    /// decade when the spread is zero. The lower bound never drops below
    /// [`MIN_POSITIVE_VALUE`].
    fn nice_domain(&self, domain: Domain, _count: usize) -> Domain {
        let (low, high) = domain;
        let log_floor = log_min_positive();
        let adjusted_log_low = log_floor.max(low.log10());
        let log_high = high.log10();
        let spread = log_high - adjusted_log_low;
        let pad = if spread != 0.0 {
            spread * self.config.pad_proportion
        } else {
            1.0
        };
        (
            pow10(log_floor.max(adjusted_log_low - pad)),
            pow10(log_high + pad),
        )
    }

    fn default_extent(&self) -> Domain {
        (1.0, 10.0)
    }

    /// Extent of the finite, strictly positive values. With outlier trimming,
    /// only values whose log lies within the 5th..95th percentile of the logs
    /// are kept.
    fn extent_of_values(&self, values: &[f64]) -> Option<Domain> {
        let legal: Vec<f64> = values
            .iter()
            .copied()
            .filter(|v| v.is_finite() && *v > 0.0)
            .collect();

        if !self.config.ignore_outlier {
            return min_max(&legal);
        }

        let mut logs: Vec<f64> = legal.iter().map(|v| v.log10()).collect();
        logs.sort_by_key(|v| OrderedFloat(*v));
        let low = quantile_sorted(&logs, 0.05)?;
        let high = quantile_sorted(&logs, 0.95)?;
        let kept: Vec<f64> = legal
            .into_iter()
            .filter(|v| {
                let log = v.log10();
                log >= low && log <= high
            })
            .collect();
        min_max(&kept)
    }

    fn ticks_with_count(&self, count: usize) -> Ticks {
        Ticks::from_vec(log_ticks(
            self.effective_domain.0,
            self.effective_domain.1,
            count,
        ))
    }
}

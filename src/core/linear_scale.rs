use ordered_float::OrderedFloat;

use crate::core::scale::{Domain, Scale, ScaleConfig, ScaleType, interpolate};
use crate::core::ticks::{Ticks, linear_ticks, nice_linear_domain, quantile_sorted};
use crate::error::ChartResult;

/// Linear mapping from a data-space domain to a numeric range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: Domain,
    range: Domain,
    config: ScaleConfig,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            config: ScaleConfig::default(),
        }
    }
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: Domain, range: Domain) -> Self {
        Self {
            domain,
            range,
            ..Self::default()
        }
    }

    pub fn with_config(config: ScaleConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }
}

impl Scale for LinearScale {
    fn scale_type(&self) -> ScaleType {
        ScaleType::Linear
    }

    fn config(&self) -> ScaleConfig {
        self.config
    }

    fn set_config(&mut self, config: ScaleConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn effective_domain(&self) -> Domain {
        self.domain
    }

    fn set_domain(&mut self, domain: Domain) {
        self.domain = domain;
    }

    fn range(&self) -> Domain {
        self.range
    }

    fn set_range(&mut self, range: Domain) {
        self.range = range;
    }

    fn scale(&self, value: f64) -> f64 {
        interpolate(self.domain, self.range, value)
    }

    fn invert(&self, value: f64) -> f64 {
        interpolate(self.range, self.domain, value)
    }

    /// Pads by `pad_proportion` of the span, then rounds outward to ticks.
    ///
    /// A zero-span domain is widened by `1.1 * |v| + 1.1`. A non-negative lower
    /// bound closer to zero than the span is replaced by `-0.1 * high` so the
    /// zero intercept stays on screen.
    fn nice_domain(&self, domain: Domain, count: usize) -> Domain {
        let (low, high) = domain;
        let span = high - low;
        let padding = if span == 0.0 {
            low.abs() * 1.1 + 1.1
        } else {
            span * self.config.pad_proportion
        };
        let lower = if low >= 0.0 && low < span {
            -0.1 * high
        } else {
            low - padding
        };
        nice_linear_domain(lower, high + padding, count)
    }

    fn default_extent(&self) -> Domain {
        (0.0, 1.0)
    }

    fn extent_of_values(&self, values: &[f64]) -> Option<Domain> {
        let mut legal: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if self.config.ignore_outlier {
            legal.sort_by_key(|v| OrderedFloat(*v));
            let low = quantile_sorted(&legal, 0.05)?;
            let high = quantile_sorted(&legal, 0.95)?;
            legal.retain(|v| *v >= low && *v <= high);
        }
        min_max(&legal)
    }

    fn ticks_with_count(&self, count: usize) -> Ticks {
        Ticks::from_vec(linear_ticks(self.domain.0, self.domain.1, count))
    }
}

pub(crate) fn min_max(values: &[f64]) -> Option<Domain> {
    let (first, rest) = values.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v))),
    )
}

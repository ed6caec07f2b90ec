//! Tick generation and order statistics shared by the scale family.
//!
//! Tick placement follows the usual 1/2/5 step ladder: a linear step is the
//! power of ten closest to `span / count`, widened by 2, 5 or 10 when the raw
//! step is far from it.

use std::iter::FusedIterator;

/// Default number of ticks requested by `Scale::ticks`.
pub const DEFAULT_TICK_COUNT: usize = 10;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Finite, restartable sequence of tick values.
///
/// Cloning a `Ticks` yields an independent iterator positioned at the same
/// tick, so axis code can walk the sequence more than once.
#[derive(Debug, Clone)]
pub struct Ticks {
    inner: std::vec::IntoIter<f64>,
}

impl Ticks {
    #[must_use]
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            inner: values.into_iter(),
        }
    }

    /// Remaining ticks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.inner.as_slice()
    }
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Ticks {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Ticks {}

impl FusedIterator for Ticks {}

/// Rounds half-way cases toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Returns `(first_index, last_index, increment)`. A negative increment means
/// ticks are `index / -increment` (sub-unit steps kept exact).
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inverse = 10_f64.powf(-power) / factor;
        first = round_half_up(start * inverse);
        last = round_half_up(stop * inverse);
        if first / inverse < start {
            first += 1.0;
        }
        if last / inverse > stop {
            last -= 1.0;
        }
        increment = -inverse;
    } else {
        let step = 10_f64.powf(power) * factor;
        first = round_half_up(start / step);
        last = round_half_up(stop / step);
        if first * step < start {
            first += 1.0;
        }
        if last * step > stop {
            last -= 1.0;
        }
        increment = step;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (first, last, increment)
}

/// Signed tick increment for `[start, stop]`; negative values encode `1 / -step`.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Uniformly spaced "nice" ticks covering `[start, stop]` (either order).
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (first, last, increment) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(last >= first) || !increment.is_finite() || increment == 0.0 {
        return Vec::new();
    }

    let n = (last - first + 1.0) as usize;
    (0..n)
        .map(|offset| {
            let offset = offset as f64;
            let index = if reverse { last - offset } else { first + offset };
            if increment < 0.0 {
                index / -increment
            } else {
                index * increment
            }
        })
        .collect()
}

/// Extends `[start, stop]` outward so both ends land on tick boundaries.
#[must_use]
pub fn nice_linear_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop || count == 0 {
        return (start, stop);
    }

    let reverse = stop < start;
    let (mut low, mut high) = if reverse { (stop, start) } else { (start, stop) };
    let mut previous_step: Option<f64> = None;

    for _ in 0..10 {
        let step = tick_increment(low, high, count);
        if previous_step == Some(step) {
            break;
        }
        if step > 0.0 {
            low = (low / step).floor() * step;
            high = (high / step).ceil() * step;
        } else if step < 0.0 {
            low = (low * step).ceil() / step;
            high = (high * step).floor() / step;
        } else {
            break;
        }
        previous_step = Some(step);
    }

    if reverse { (high, low) } else { (low, high) }
}

/// Base-10 logarithmic ticks for a strictly positive domain (either order).
///
/// When the domain spans fewer decades than `count`, every `k * 10^i`
/// (`k` in 1..=9) inside the domain is returned, falling back to linear ticks
/// if that yields too few. Wider domains get linear ticks on the exponents.
#[must_use]
pub fn log_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    if count == 0 || !low.is_finite() || !high.is_finite() || low <= 0.0 {
        return Vec::new();
    }

    let log_low = low.log10();
    let log_high = high.log10();
    let mut ticks = Vec::new();

    if log_high - log_low < count as f64 {
        let first_exponent = log_low.floor() as i32;
        let last_exponent = log_high.ceil() as i32;
        'decades: for exponent in first_exponent..=last_exponent {
            for multiplier in 1_u8..10 {
                let multiplier = f64::from(multiplier);
                let tick = if exponent < 0 {
                    multiplier / 10_f64.powi(-exponent)
                } else {
                    multiplier * 10_f64.powi(exponent)
                };
                if tick < low {
                    continue;
                }
                if tick > high {
                    break 'decades;
                }
                ticks.push(tick);
            }
        }
        if ticks.len() * 2 < count {
            ticks = linear_ticks(low, high, count);
        }
    } else {
        ticks = linear_ticks(log_low, log_high, count)
            .into_iter()
            .map(pow10)
            .collect();
    }

    if reverse {
        ticks.reverse();
    }
    ticks
}

/// `10^exponent`, exact to the nearest double for integral exponents.
#[must_use]
pub fn pow10(exponent: f64) -> f64 {
    if exponent.fract() == 0.0 && exponent.abs() <= 308.0 {
        let exponent = exponent as i32;
        if exponent < 0 {
            1.0 / 10_f64.powi(-exponent)
        } else {
            10_f64.powi(exponent)
        }
    } else {
        10_f64.powf(exponent)
    }
}

/// Linear-interpolated quantile of an ascending slice, `p` in `[0, 1]`.
#[must_use]
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return None;
    }
    if p <= 0.0 || n < 2 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }

    let position = (n - 1) as f64 * p;
    let lower_index = position.floor() as usize;
    let lower = sorted[lower_index];
    let upper = sorted[lower_index + 1];
    Some(lower + (upper - lower) * (position - lower_index as f64))
}

#[cfg(test)]
mod tests {
    use super::{Ticks, linear_ticks, log_ticks, nice_linear_domain, quantile_sorted};

    #[test]
    fn linear_ticks_use_unit_ladder() {
        assert_eq!(
            linear_ticks(0.0, 10.0, 10),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
        assert_eq!(linear_ticks(0.0, 100.0, 5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn linear_ticks_keep_sub_unit_steps_exact() {
        assert_eq!(linear_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn linear_ticks_follow_reversed_domain() {
        assert_eq!(linear_ticks(10.0, 0.0, 2), vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn linear_ticks_degenerate_inputs() {
        assert_eq!(linear_ticks(3.0, 3.0, 10), vec![3.0]);
        assert!(linear_ticks(0.0, 1.0, 0).is_empty());
        assert!(linear_ticks(f64::NAN, 1.0, 10).is_empty());
    }

    #[test]
    fn nice_domain_expands_to_tick_boundaries() {
        assert_eq!(nice_linear_domain(0.3, 9.7, 10), (0.0, 10.0));
        assert_eq!(nice_linear_domain(-12.0, 87.0, 10), (-20.0, 90.0));
        assert_eq!(nice_linear_domain(9.7, 0.3, 10), (10.0, 0.0));
    }

    #[test]
    fn log_ticks_within_one_decade() {
        assert_eq!(
            log_ticks(1.0, 10.0, 10),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
    }

    #[test]
    fn log_ticks_wide_domain_lands_on_powers_of_ten() {
        assert_eq!(
            log_ticks(1e-21, 1e21, 10),
            vec![1e-20, 1e-15, 1e-10, 1e-5, 1.0, 1e5, 1e10, 1e15, 1e20]
        );
    }

    #[test]
    fn log_ticks_reject_non_positive_domain() {
        assert!(log_ticks(0.0, 10.0, 10).is_empty());
        assert!(log_ticks(-1.0, 10.0, 10).is_empty());
    }

    #[test]
    fn quantile_interpolates_between_neighbours() {
        let sorted = [0.0, 10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(20.0));
        assert_eq!(quantile_sorted(&sorted, 0.05), Some(2.0));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(40.0));
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn ticks_clone_restarts_from_same_position() {
        let mut ticks = Ticks::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(ticks.next(), Some(1.0));
        let replay = ticks.clone();
        assert_eq!(replay.as_slice(), &[2.0, 3.0]);
        assert_eq!(ticks.collect::<Vec<_>>(), vec![2.0, 3.0]);
        assert_eq!(replay.len(), 2);
    }
}

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Attribute, Dataset};

pub const DEFAULT_DOMAIN_MIN_FACTOR: f64 = 0.8;
pub const DEFAULT_DOMAIN_MAX_FACTOR: f64 = 1.2;
/// Upper bound on the tick count requested from [`LinearScale::ticks`].
pub const MAX_TICK_COUNT: usize = 1_000;

const NICE_E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const NICE_E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const NICE_E2: f64 = std::f64::consts::SQRT_2;

/// Linear mapping from a numeric domain onto a pixel range.
///
/// Values are never clamped. A NaN input (or a NaN domain) maps to NaN, and a
/// collapsed domain maps every value onto the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let t = normalize(self.domain_start, self.domain_end, value);
        self.range_start + t * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let t = normalize(self.range_start, self.range_end, pixel);
        self.domain_start + t * (self.domain_end - self.domain_start)
    }

    /// Evenly spaced "nice" values (multiples of 1, 2 or 5 × 10^k) inside the
    /// domain, approximately `count` of them, in domain order.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (mut start, mut stop) = self.domain();
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }

        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        let count = count.min(MAX_TICK_COUNT);
        let Some(spec) = TickSpec::resolve(start, stop, count as f64) else {
            return Vec::new();
        };
        if spec.last < spec.first {
            return Vec::new();
        }

        let mut ticks: Vec<f64> = (spec.first..=spec.last)
            .map(|index| spec.value_at(index))
            .collect();
        if reverse {
            ticks.reverse();
        }
        ticks
    }

    /// Spacing between consecutive values returned by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> Option<f64> {
        let (start, stop) = self.domain();
        if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
            return None;
        }
        let (start, stop) = if stop < start {
            (stop, start)
        } else {
            (start, stop)
        };
        TickSpec::resolve(start, stop, count.min(MAX_TICK_COUNT) as f64).map(TickSpec::step)
    }
}

fn normalize(start: f64, end: f64, value: f64) -> f64 {
    let span = end - start;
    if span.is_nan() {
        return f64::NAN;
    }
    if span == 0.0 {
        return if value.is_nan() { f64::NAN } else { 0.5 };
    }
    (value - start) / span
}

/// Integer tick indices plus increment. A negative increment encodes the
/// reciprocal so sub-unit steps stay exact (`index / -inc`).
#[derive(Debug, Clone, Copy)]
struct TickSpec {
    first: i64,
    last: i64,
    inc: f64,
}

impl TickSpec {
    fn resolve(start: f64, stop: f64, count: f64) -> Option<Self> {
        let step = (stop - start) / count.max(0.0);
        if !step.is_finite() || step <= 0.0 {
            return None;
        }
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= NICE_E10 {
            10.0
        } else if error >= NICE_E5 {
            5.0
        } else if error >= NICE_E2 {
            2.0
        } else {
            1.0
        };

        let (first, last, inc) = if power < 0.0 {
            let inc = 10f64.powf(-power) / factor;
            let mut first = (start * inc).round();
            let mut last = (stop * inc).round();
            if first / inc < start {
                first += 1.0;
            }
            if last / inc > stop {
                last -= 1.0;
            }
            (first, last, -inc)
        } else {
            let inc = 10f64.powf(power) * factor;
            let mut first = (start / inc).round();
            let mut last = (stop / inc).round();
            if first * inc < start {
                first += 1.0;
            }
            if last * inc > stop {
                last -= 1.0;
            }
            (first, last, inc)
        };
        // Subnormal spans overflow the increment.
        if !inc.is_finite() || !first.is_finite() || !last.is_finite() {
            return None;
        }
        if last - first > count * 10.0 + 1.0 {
            return None;
        }
        let spec = Self {
            first: first as i64,
            last: last as i64,
            inc,
        };

        if spec.last < spec.first && (0.5..2.0).contains(&count) {
            return Self::resolve(start, stop, count * 2.0);
        }
        Some(spec)
    }

    fn value_at(self, index: i64) -> f64 {
        if self.inc < 0.0 {
            index as f64 / -self.inc
        } else {
            index as f64 * self.inc
        }
    }

    fn step(self) -> f64 {
        if self.inc < 0.0 {
            1.0 / -self.inc
        } else {
            self.inc
        }
    }
}

/// Builds the scale for `attribute` using the default 0.8/1.2 domain padding.
///
/// When `invert` is set the pixel range is reversed, so larger values land
/// closer to the top of a vertical axis.
#[must_use]
pub fn build_scale(
    dataset: &Dataset,
    attribute: Attribute,
    pixel_range: (f64, f64),
    invert: bool,
) -> LinearScale {
    build_scale_with_padding(
        dataset,
        attribute,
        pixel_range,
        invert,
        (DEFAULT_DOMAIN_MIN_FACTOR, DEFAULT_DOMAIN_MAX_FACTOR),
    )
}

/// Builds a scale whose domain is `[min * padding.0, max * padding.1]`.
///
/// Pure: no state is consulted beyond the arguments. A column without any
/// comparable value yields a NaN domain, which propagates into every mapped
/// coordinate. A column where every value is zero collapses to `[0, 0]`.
#[must_use]
pub fn build_scale_with_padding(
    dataset: &Dataset,
    attribute: Attribute,
    pixel_range: (f64, f64),
    invert: bool,
    padding: (f64, f64),
) -> LinearScale {
    let domain = dataset
        .extent(attribute)
        .map_or((f64::NAN, f64::NAN), |(min, max)| {
            (min * padding.0, max * padding.1)
        });
    let range = if invert {
        (pixel_range.1, pixel_range.0)
    } else {
        pixel_range
    };
    trace!(
        %attribute,
        domain_start = domain.0,
        domain_end = domain.1,
        range_start = range.0,
        range_end = range.1,
        "build scale"
    );
    LinearScale::new(domain, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_follow_one_two_five_steps() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(
            scale.ticks(10),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
        assert_eq!(scale.tick_step(10), Some(1.0));

        let scale = LinearScale::new((7.36, 26.64), (0.0, 610.0));
        assert_eq!(scale.tick_step(10), Some(2.0));
        assert_eq!(scale.ticks(10).first().copied(), Some(8.0));
        assert_eq!(scale.ticks(10).last().copied(), Some(26.0));
    }

    #[test]
    fn sub_unit_ticks_stay_exact() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0));
        let ticks = scale.ticks(5);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn reversed_domain_returns_reversed_ticks() {
        let scale = LinearScale::new((10.0, 0.0), (0.0, 100.0));
        let ticks = scale.ticks(2);
        assert_eq!(ticks, vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn collapsed_domain_maps_to_range_midpoint() {
        let scale = LinearScale::new((0.0, 0.0), (0.0, 400.0));
        assert_eq!(scale.map(0.0), 200.0);
        assert_eq!(scale.map(17.0), 200.0);
        assert!(scale.map(f64::NAN).is_nan());
        assert_eq!(scale.ticks(10), vec![0.0]);
    }

    #[test]
    fn subnormal_domain_yields_no_ticks() {
        let scale = LinearScale::new((0.0, 1.2e-310), (0.0, 610.0));
        assert!(scale.ticks(10).is_empty());
        assert_eq!(scale.tick_step(10), None);
        assert!(scale.map(6.0e-311).is_finite());
    }

    #[test]
    fn oversized_tick_count_is_capped() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        let ticks = scale.ticks(usize::MAX);
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= MAX_TICK_COUNT * 2);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(10.0));
    }

    #[test]
    fn invert_undoes_map() {
        let scale = LinearScale::new((8.0, 30.0), (400.0, 0.0));
        let pixel = scale.map(12.5);
        assert!((scale.invert(pixel) - 12.5).abs() < 1e-9);
    }
}

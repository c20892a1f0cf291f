// File: crates/charted-core/src/axis.rs
// Summary: Y axis tick layout with "nice" interval selection and label strings.

use crate::format::{log10_floor, round_to_decimal_order};
use crate::params::Rounding;

/// Limits for tick density on the value axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickOptions {
    /// Minimum pixel distance between two ticks.
    pub min_distance_px: f64,
    /// Upper bound on tick count regardless of height.
    pub max_ticks: usize,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self { min_distance_px: 40.0, max_ticks: 5 }
    }
}

/// One labelled tick on the value axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Label used when rounding is on.
    pub display: String,
    /// Label used when rounding is off.
    pub raw: String,
}

impl Tick {
    pub fn label(&self, rounding: Rounding) -> &str {
        match rounding {
            Rounding::On => &self.display,
            Rounding::Off => &self.raw,
        }
    }
}

/// Candidate divisors of the next power of ten above the minimum step.
const DIVISORS: [f64; 4] = [2.0, 4.0, 5.0, 10.0];

/// Ticks for `range` on an axis `height_px` tall, with default density limits.
pub fn nice_intervals(range: (f64, f64), height_px: f64) -> Vec<Tick> {
    nice_intervals_with(range, height_px, &TickOptions::default())
}

/// Ticks covering `range` (extended to include zero) at a "nice" step.
///
/// Steps come from `{1, 2, 2.5, 4, 5, 10} x 10^n`. A degenerate range
/// (zero width or non-finite) yields no ticks.
pub fn nice_intervals_with(range: (f64, f64), height_px: f64, opts: &TickOptions) -> Vec<Tick> {
    let with_zero = (range.0.min(0.0), range.1.max(0.0));
    let full_range = with_zero.1 - with_zero.0;
    if !(full_range.is_finite() && full_range > 0.0) {
        return Vec::new();
    }

    let by_height = (height_px / opts.min_distance_px).min(opts.max_ticks as f64).floor();
    let max_ticks = by_height.max(1.0);

    // smallest nice interval that still yields no more than max_ticks
    let min_interval = full_range / max_ticks;
    let multiple_of_10 = 10f64.powf(log10_floor(min_interval) + 1.0);
    let mut interval = multiple_of_10;
    for divisor in DIVISORS {
        let candidate = multiple_of_10 / divisor;
        if candidate >= min_interval {
            interval = candidate;
        }
    }

    let interval_orders = log10_floor(interval.abs());
    let max_orders = log10_floor(with_zero.0.abs().max(with_zero.1.abs()));
    let extra_digit = if interval / 10f64.powf(interval_orders) == 2.5 { 1.0 } else { 0.0 };
    let digits = (1.0 + max_orders - interval_orders + extra_digit) as i32;
    let max_orders = max_orders as i32;

    let mut ticks = Vec::new();
    let mut current = (with_zero.0 / interval).ceil() * interval;
    while current < range.1 + interval {
        let (display, raw) = if current == 0.0 {
            ("0".to_string(), "0".to_string())
        } else {
            (
                round_to_decimal_order(current, max_orders, digits),
                round_to_decimal_order(current, max_orders.min(0), 0),
            )
        };
        ticks.push(Tick { value: current, display, raw });
        current += interval;
    }
    ticks
}

/// Labels for `ticks` as shown under the given rounding mode.
pub fn axis_labels(ticks: &[Tick], rounding: Rounding) -> Vec<&str> {
    ticks.iter().map(|t| t.label(rounding)).collect()
}

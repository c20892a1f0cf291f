// File: crates/charted-core/src/format.rs
// Summary: Numeric coercion, magnitude-aware rounding and trimmed extents for raw cell text.

const UNITS: [&str; 4] = ["K", "M", "B", "T"];

/// Digits kept visible by [`rounded_value`].
pub const DIGITS_VISIBLE: i32 = 3;

/// Orders of magnitude within which a whole range shares one rounding.
const MAX_ORDERS_DIFF: f64 = 2.0;

/// Coerce formatted cell text ("$1,234.50", "12%") into a number.
///
/// Every character other than ASCII digits, `.` and `-` is dropped. An empty
/// remainder, or one that still is not a number ("1.2.3", "-"), yields `0.0`.
pub fn string_to_number(s: &str) -> f64 {
    let kept: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if kept.is_empty() {
        return 0.0;
    }
    kept.parse::<f64>().unwrap_or(0.0)
}

/// `floor(log10(v))`, kept as float so zero maps to negative infinity.
#[inline]
pub fn log10_floor(v: f64) -> f64 {
    v.log10().floor()
}

/// Shortest text for `value`, switching to exponent form (`1e-7`, `1e+21`)
/// outside `[1e-6, 1e21)` the way JavaScript numbers print.
pub fn number_to_string(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }
    let exp = format!("{:e}", value);
    if magnitude >= 1e21 { exp.replacen('e', "e+", 1) } else { exp }
}

/// Fixed-point formatting where exact halves round away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let scaled = value.abs() * scale;
    if scaled.is_finite() && scaled - scaled.floor() == 0.5 {
        let bumped = (scaled.floor() + 1.0) / scale;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{:.*}", sign, digits, bumped);
    }
    format!("{:.*}", digits, value)
}

/// Insert `,` every three digits in the integer part of a formatted number.
pub fn add_comma_separator(formatted: &str) -> String {
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match rest.find('.') {
        Some(dot) => rest.split_at(dot),
        None => (rest, ""),
    };
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(formatted.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    format!("{sign}{grouped}{frac_part}")
}

/// Format `value` for display given the order of magnitude it should be read at.
///
/// - below `-3`: full precision, no rounding
/// - `-3..3`: fixed point with `max(digits_visible - order - 1, 0)` decimals
/// - `3..`: scaled to K/M/B/T with grouped thousands
pub fn round_to_decimal_order(value: f64, decimal_order: i32, digits_visible: i32) -> String {
    if decimal_order < -3 {
        return number_to_string(value);
    }
    if decimal_order < 3 {
        let decimals = (digits_visible - decimal_order - 1).max(0) as usize;
        return to_fixed(value, decimals);
    }
    let commas = (decimal_order / 3).min(UNITS.len() as i32);
    let divisor = 1000f64.powi(commas);
    let decimals = (commas * 3 - decimal_order + digits_visible - 1).max(0) as usize;
    let unit = UNITS[(commas - 1) as usize];
    format!("{}{}", add_comma_separator(&to_fixed(value / divisor, decimals)), unit)
}

/// Round `value` consistently with the range it is displayed in.
///
/// When both ends of `extent` are within two orders of magnitude the larger
/// order is used for every value; otherwise each value uses its own order.
pub fn rounded_value(value: f64, extent: (f64, f64)) -> String {
    let orders_low = log10_floor(extent.1.abs());
    let orders_high = log10_floor(extent.0.abs());
    let orders_diff = (orders_low - orders_high).abs();
    let orders_max = orders_low.max(orders_high);
    let orders = if orders_diff <= MAX_ORDERS_DIFF {
        orders_max
    } else {
        log10_floor(value.abs())
    };
    // -inf (a zero bound or value) saturates to i32::MIN: printed unrounded.
    round_to_decimal_order(value, orders as i32, DIGITS_VISIBLE)
}

/// True for cells that count as missing: empty, or the literal `null` in any case.
#[inline]
pub fn is_empty_cell(raw: &str) -> bool {
    raw.is_empty() || raw.to_lowercase() == "null"
}

/// `(first, last)` positions of non-empty cells, ignoring leading and trailing blanks.
///
/// Blanks in between are kept. When every cell is blank, `first` ends past the
/// end and `last` stays at 0.
pub fn trimmed_extent<S: AsRef<str>>(values: &[S]) -> (usize, usize) {
    let mut first = 0usize;
    let mut last = 0usize;
    for (i, value) in values.iter().enumerate() {
        let empty = is_empty_cell(value.as_ref());
        if empty && i == first {
            first = i + 1;
        } else if !empty {
            last = i;
        }
    }
    (first, last)
}

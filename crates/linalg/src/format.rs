//! Text rendering of augmented matrices.

use crate::{Matrix, Vector};

/// Number of decimals used when the caller has no preference.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest supported number of decimals; larger requests are clamped.
pub const MAX_PRECISION: usize = 10;

/// Renders the augmented matrix `[A | b]`, one line per row of `a`.
///
/// Every value is printed with `precision` decimals and right-aligned to a
/// common width, so rows line up for any matrix size. Values that round to
/// zero at the requested precision are printed as an unsigned zero.
///
/// A row of `a` without a matching entry in `b` gets a blank right-hand side.
/// A 0×0 matrix renders as an empty string.
///
/// The layout can be read back with [`parse_augmented`](crate::parse_augmented).
#[must_use]
pub fn format_augmented(a: &Matrix, b: &Vector, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);

    let left: Vec<Vec<String>> = a
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|&v| fixed(v, precision)).collect())
        .collect();
    let right: Vec<String> = b.iter().map(|&v| fixed(v, precision)).collect();

    let left_width = left.iter().flatten().map(String::len).max().unwrap_or(0);
    let right_width = right.iter().map(String::len).max().unwrap_or(0);

    left.iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = row
                .iter()
                .map(|cell| format!("{cell:>left_width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            let rhs = right.get(i).map_or("", String::as_str);
            format!("[ {cells} | {rhs:>right_width$} ]")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats with a fixed number of decimals, suppressing near-zero noise.
fn fixed(value: f64, precision: usize) -> String {
    let threshold = 0.5 * 10_f64.powi(-(precision as i32));
    let value = if value.abs() < threshold { 0.0 } else { value };
    format!("{value:.precision$}")
}

/// Formats with `digits` significant digits, trimming trailing zeros.
///
/// Switches to scientific notation for very small or very large magnitudes,
/// much like C's `%g`.
pub(crate) fn general(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let digits = digits.max(1);
    // The exponent is read after rounding, so 999999.7 becomes `1e6`.
    let scientific = format!("{value:.prec$e}", prec = digits - 1);
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exp.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        return format!("{}e{exp}", trim_zeros(mantissa));
    }

    let decimals = usize::try_from(digits as i32 - 1 - exponent).unwrap_or(0);
    trim_zeros(&format!("{value:.decimals$}")).to_owned()
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

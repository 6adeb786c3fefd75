//! Text formatting for chart labels and table cells.

/// Escape text for inclusion in SVG/HTML markup.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Group the digits of an integer with commas: `1234567` → `1,234,567`.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Axis tick label: fractional part truncated, thousands separated.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_thousands(value: f64) -> String {
    group_thousands(value.trunc() as i64)
}

/// Table cell: rounded to a whole number, thousands separated; `n/a` when missing.
///
/// Halves round to the even neighbour, so `2.5` reads `2` and `3.5` reads `4`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_count(value: Option<f64>) -> String {
    value.map_or_else(
        || "n/a".to_string(),
        |v| group_thousands(v.round_ties_even() as i64),
    )
}

/// Ratio rendered as a percentage: `0.0523` with 2 decimals → `5.23%`.
#[must_use]
pub fn format_percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

/// Fewest decimals that keep percentage ticks `step` apart distinguishable.
#[must_use]
pub fn percent_decimals(step: f64) -> usize {
    let mut scaled = (step * 100.0).abs();
    let mut decimals = 0;
    while decimals < 4 && (scaled - scaled.round()).abs() > 1e-6 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

/// Round a coordinate to two decimals so the markup stays compact.
#[must_use]
pub fn coord(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;

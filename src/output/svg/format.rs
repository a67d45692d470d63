//! Text and number formatting shared by the SVG charts.

/// Escape HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Compact count for axis labels: `9999`, `10.0K`, `2.5M`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(n: i64) -> String {
    if n.abs() >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n.abs() >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// SVG coordinate rounded to two decimals, without trailing zeros.
#[must_use]
pub fn coord(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded.abs() < f64::EPSILON {
        // Avoid "-0"
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;

//! SVG styling primitives: colors, color ramps and text anchoring.

use std::fmt;

/// Chart color, either a CSS variable for theming or a literal hex value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#3b82f6")
    Hex(String),
    /// CSS variable reference (e.g., "positive" → "var(--color-positive)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }
}

impl From<Rgb> for ChartColor {
    fn from(rgb: Rgb) -> Self {
        Self::Hex(rgb.to_hex())
    }
}

/// An sRGB color used for interpolated fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Linear blend towards `other`; `t` is clamped to [0, 1].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(b) - f64::from(a)).mul_add(t, f64::from(a)).round() as u8;
        Self(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// Relative luminance (WCAG), used to pick readable annotation text.
    #[must_use]
    pub fn luminance(self) -> f64 {
        let channel = |c: u8| {
            let c = f64::from(c) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.0722f64.mul_add(
            channel(self.2),
            0.2126f64.mul_add(channel(self.0), 0.7152 * channel(self.1)),
        )
    }
}

/// Monotonic color ramp through evenly spaced stops.
#[derive(Debug, Clone, Copy)]
pub struct ColorRamp {
    stops: &'static [Rgb],
}

/// Single-hue sequential blue ramp (light → dark).
pub const BLUES: ColorRamp = ColorRamp {
    stops: &[
        Rgb(0xf7, 0xfb, 0xff),
        Rgb(0xc6, 0xdb, 0xef),
        Rgb(0x6b, 0xae, 0xd6),
        Rgb(0x21, 0x71, 0xb5),
        Rgb(0x08, 0x30, 0x6b),
    ],
};

/// Perceptually uniform viridis ramp (dark purple → yellow).
pub const VIRIDIS: ColorRamp = ColorRamp {
    stops: &[
        Rgb(0x44, 0x01, 0x54),
        Rgb(0x3b, 0x52, 0x8b),
        Rgb(0x21, 0x91, 0x8c),
        Rgb(0x5e, 0xc9, 0x62),
        Rgb(0xfd, 0xe7, 0x25),
    ],
};

impl ColorRamp {
    /// Color at position `t` in [0, 1] (clamped).
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn sample(&self, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f64;
        let idx = (scaled.floor() as usize).min(segments - 1);
        self.stops[idx].lerp(self.stops[idx + 1], scaled - idx as f64)
    }

    /// `count` colors spread evenly across the ramp.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn spread(&self, count: usize) -> Vec<Rgb> {
        match count {
            0 => Vec::new(),
            1 => vec![self.sample(0.5)],
            n => (0..n)
                .map(|i| self.sample(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }
}

/// Number of categorical series colors defined by the report stylesheet.
pub const SERIES_COLORS: usize = 6;

/// Categorical color for the `index`-th series, cycling through the stylesheet palette.
#[must_use]
pub fn series_color(index: usize) -> ChartColor {
    ChartColor::CssVar(format!("series-{}", index % SERIES_COLORS + 1))
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;

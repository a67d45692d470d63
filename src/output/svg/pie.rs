//! Pie chart of a category distribution.
//!
//! Angles are in degrees, measured counter-clockwise from the positive x axis.

use super::builder::SvgBuilder;
use super::element::{Label, SvgElement};
use super::format::{coord, html_escape};
use super::style::{ChartColor, TextAnchor, series_color};
use crate::transform::CategoryDistribution;

pub const DEFAULT_START_ANGLE: f64 = 10.0;

/// Percent labels sit at this fraction of the radius.
const PERCENT_RADIUS: f64 = 0.6;
/// Category labels sit just outside the disc.
const LABEL_RADIUS: f64 = 1.1;

/// One wedge of the pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieWedge {
    pub label: String,
    pub count: u64,
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieWedge {
    /// Percent label, one decimal place.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.percent)
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

#[derive(Debug)]
pub struct PieChart {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub start_angle: f64,
    wedges: Vec<PieWedge>,
}

impl PieChart {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_distribution(title: impl Into<String>, distribution: &CategoryDistribution) -> Self {
        let total = distribution.total();
        let mut wedges = Vec::with_capacity(distribution.len());
        if total > 0 {
            let mut cumulative = 0u64;
            for entry in distribution.iter().filter(|e| e.count > 0) {
                let start = cumulative as f64 / total as f64 * 360.0;
                cumulative += entry.count;
                let end = cumulative as f64 / total as f64 * 360.0;
                wedges.push(PieWedge {
                    label: entry.label.clone(),
                    count: entry.count,
                    percent: distribution.percent_of_total(entry.count),
                    start_angle: start,
                    end_angle: end,
                });
            }
        }

        Self {
            title: title.into(),
            width: 420.0,
            height: 340.0,
            radius: 120.0,
            start_angle: DEFAULT_START_ANGLE,
            wedges,
        }
    }

    #[must_use]
    pub const fn with_start_angle(mut self, degrees: f64) -> Self {
        self.start_angle = degrees;
        self
    }

    /// Wedges with the start angle applied, in distribution order.
    #[must_use]
    pub fn wedges(&self) -> Vec<PieWedge> {
        self.wedges
            .iter()
            .map(|w| PieWedge {
                start_angle: w.start_angle + self.start_angle,
                end_angle: w.end_angle + self.start_angle,
                ..w.clone()
            })
            .collect()
    }

    fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    fn point_at(&self, angle: f64, distance: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        let rad = angle.to_radians();
        (distance.mul_add(rad.cos(), cx), distance.mul_add(-rad.sin(), cy))
    }

    fn wedge_shape(&self, wedge: &PieWedge, color: &ChartColor) -> String {
        let title = format!(
            "{}: {} ({})",
            html_escape(&wedge.label),
            wedge.count,
            wedge.percent_label()
        );
        let fill = color.to_css();
        let (cx, cy) = self.center();

        if wedge.sweep() >= 360.0 - f64::EPSILON {
            return format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}" stroke="var(--color-card)" stroke-width="1">
    <title>{title}</title>
</circle>"#,
                coord(cx),
                coord(cy),
                coord(self.radius)
            );
        }

        let (x1, y1) = self.point_at(wedge.start_angle, self.radius);
        let (x2, y2) = self.point_at(wedge.end_angle, self.radius);
        let large_arc = u8::from(wedge.sweep() > 180.0);
        // sweep-flag 0 runs counter-clockwise on screen
        format!(
            r#"<path d="M{},{} L{},{} A{r},{r} 0 {large_arc} 0 {},{} Z" fill="{fill}" stroke="var(--color-card)" stroke-width="1">
    <title>{title}</title>
</path>"#,
            coord(cx),
            coord(cy),
            coord(x1),
            coord(y1),
            coord(x2),
            coord(y2),
            r = coord(self.radius)
        )
    }

    fn wedge_labels(&self, wedge: &PieWedge) -> [Label; 2] {
        let mid = wedge.mid_angle();
        let (px, py) = self.point_at(mid, self.radius * PERCENT_RADIUS);
        let (lx, ly) = self.point_at(mid, self.radius * LABEL_RADIUS);
        let cos = mid.to_radians().cos();
        let anchor = if cos > 0.1 {
            TextAnchor::Start
        } else if cos < -0.1 {
            TextAnchor::End
        } else {
            TextAnchor::Middle
        };

        [
            Label::new(px, py + 4.0, wedge.percent_label())
                .with_font_size(12.0)
                .with_color(ChartColor::hex("#ffffff"))
                .bold(),
            Label::new(lx, ly + 4.0, &wedge.label)
                .with_anchor(anchor)
                .with_font_size(12.0),
        ]
    }
}

impl SvgElement for PieChart {
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height).with_title(&self.title);
        let wedges = self.wedges();
        if wedges.is_empty() {
            return builder.empty_state("No data available");
        }

        let mut builder = builder;
        for (i, wedge) in wedges.iter().enumerate() {
            builder = builder.push_raw(self.wedge_shape(wedge, &series_color(i)));
        }
        for wedge in &wedges {
            for label in &self.wedge_labels(wedge) {
                builder.push(label);
            }
        }
        builder.build()
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;

//! Vertical category bar chart.

use super::builder::SvgBuilder;
use super::data::DataPoint;
use super::element::{Axis, Bar, Label, SvgElement};
use super::format::format_number;
use super::style::{ChartColor, TextAnchor, series_color};
use crate::transform::CategoryDistribution;

/// Resolved position of one bar in SVG coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Vertical bar chart with a zero-based y axis.
#[derive(Debug)]
pub struct BarChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub x_title: String,
    pub y_title: String,
    pub show_values: bool,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            data: Vec::new(),
            width: 480.0,
            height: 300.0,
            margin_left: 60.0,
            margin_right: 20.0,
            margin_top: 30.0,
            margin_bottom: 50.0,
            x_title: String::new(),
            y_title: String::new(),
            show_values: true,
        }
    }
}

impl BarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            ..Default::default()
        }
    }

    /// One bar per category in distribution order, annotated with the exact count.
    #[must_use]
    pub fn from_distribution(title: impl Into<String>, distribution: &CategoryDistribution) -> Self {
        let data = distribution
            .iter()
            .enumerate()
            .map(|(i, entry)| DataPoint::from(entry).with_color(series_color(i)))
            .collect();
        Self::new(title, data).with_axis_titles("Sentiment", "Count")
    }

    #[must_use]
    pub fn with_axis_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    /// Y scale as (top, tick step): the data maximum rounded up to a whole tick.
    fn scale(&self) -> (f64, f64) {
        let max = self.data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
        let step = nice_step(max);
        (((max / step).ceil() * step).max(step), step)
    }

    /// Bar positions in data order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bars(&self) -> Vec<BarGeometry> {
        if self.data.is_empty() {
            return Vec::new();
        }
        let (scale_max, _) = self.scale();
        let slot = self.plot_width() / self.data.len() as f64;
        let bar_width = slot * 0.7;

        self.data
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let height = point.value.max(0.0) / scale_max * self.plot_height();
                BarGeometry {
                    label: point.label.clone(),
                    value: point.value,
                    x: slot.mul_add(i as f64, self.margin_left) + (slot - bar_width) / 2.0,
                    y: self.plot_bottom() - height,
                    width: bar_width,
                    height,
                }
            })
            .collect()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn y_axis(&self) -> Axis {
        let (scale_max, step) = self.scale();
        let mut labels = Vec::new();
        let mut tick = 0.0;
        while tick <= scale_max + step / 2.0 {
            labels.push((tick / scale_max, format_number(tick.round() as i64)));
            tick += step;
        }
        Axis::vertical(self.margin_left, self.plot_bottom(), self.plot_height()).with_labels(labels)
    }

    fn x_axis(&self, bars: &[BarGeometry]) -> Axis {
        let labels = bars
            .iter()
            .map(|bar| {
                let center = bar.x + bar.width / 2.0;
                ((center - self.margin_left) / self.plot_width(), bar.label.clone())
            })
            .collect();
        Axis::horizontal(self.margin_left, self.plot_bottom(), self.plot_width())
            .with_labels(labels)
    }

    fn push_axis_titles(&self, builder: &mut SvgBuilder) {
        if !self.x_title.is_empty() {
            builder.push(
                &Label::new(
                    self.plot_width().mul_add(0.5, self.margin_left),
                    self.height - 8.0,
                    &self.x_title,
                )
                .with_font_size(12.0)
                .bold(),
            );
        }
        if !self.y_title.is_empty() {
            let y = self.plot_height().mul_add(0.5, self.margin_top);
            builder.push(
                &Label::new(14.0, y, &self.y_title)
                    .with_font_size(12.0)
                    .bold()
                    .with_rotation(-90.0),
            );
        }
    }
}

impl SvgElement for BarChart {
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height).with_title(&self.title);
        if self.data.is_empty() {
            return builder.empty_state("No data available");
        }

        let bars = self.bars();
        let mut builder = builder
            .push_element(&self.y_axis())
            .push_element(&self.x_axis(&bars));

        for (point, geometry) in self.data.iter().zip(&bars) {
            let color = point
                .color
                .clone()
                .unwrap_or_else(|| ChartColor::css_var("chart-primary"));
            builder.push(&Bar {
                x: geometry.x,
                y: geometry.y,
                width: geometry.width,
                height: geometry.height,
                color,
                label: point.label.clone(),
                value: point.annotation_text(),
            });

            if self.show_values {
                builder.push(
                    &Label::new(
                        geometry.x + geometry.width / 2.0,
                        geometry.y - 4.0,
                        point.annotation_text(),
                    )
                    .with_anchor(TextAnchor::Middle),
                );
            }
        }

        self.push_axis_titles(&mut builder);
        builder.build()
    }
}

/// Tick step of 1, 2 or 5 × 10^k giving at most about five intervals.
fn nice_step(max: f64) -> f64 {
    if max <= 5.0 {
        return 1.0;
    }
    let raw = max / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;

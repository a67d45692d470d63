//! Annotated bar chart of averaged evaluation metrics on a fixed percent window.

use super::builder::SvgBuilder;
use super::element::{Axis, Bar, Label, SvgElement};
use super::format::coord;
use super::style::{TextAnchor, VIRIDIS};
use crate::artifact::MetricScores;

pub const DEFAULT_AXIS_MIN: f64 = 70.0;
pub const DEFAULT_AXIS_MAX: f64 = 80.0;
pub const DEFAULT_AXIS_STEP: f64 = 1.0;
pub const DEFAULT_ANNOTATION_OFFSET: f64 = 0.3;
pub const DEFAULT_LABEL_ROTATION: f64 = 45.0;

/// Upper bound on y ticks for one window.
pub const MAX_AXIS_TICKS: usize = 1000;

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 380.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 110.0;

/// Number of tick intervals in the window.
///
/// `None` unless the window is non-empty with a positive step and fewer than
/// [`MAX_AXIS_TICKS`] intervals.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn axis_intervals(min: f64, max: f64, step: f64) -> Option<usize> {
    if step <= 0.0 || max <= min {
        return None;
    }
    let intervals = ((max - min) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_AXIS_TICKS as f64 {
        return None;
    }
    Some(intervals as usize)
}

/// Percent text placed above one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricAnnotation {
    pub metric: String,
    pub text: String,
    /// Anchor height in axis units (score plus offset)
    pub position: f64,
}

#[derive(Debug)]
pub struct MetricBarChart {
    pub title: String,
    pub axis_min: f64,
    pub axis_max: f64,
    pub axis_step: f64,
    pub annotation_offset: f64,
    pub label_rotation: f64,
    scores: MetricScores,
}

impl MetricBarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, scores: MetricScores) -> Self {
        Self {
            title: title.into(),
            axis_min: DEFAULT_AXIS_MIN,
            axis_max: DEFAULT_AXIS_MAX,
            axis_step: DEFAULT_AXIS_STEP,
            annotation_offset: DEFAULT_ANNOTATION_OFFSET,
            label_rotation: DEFAULT_LABEL_ROTATION,
            scores,
        }
    }

    /// Fixed y window; never derived from the data.
    #[must_use]
    pub const fn with_window(mut self, min: f64, max: f64, step: f64) -> Self {
        self.axis_min = min;
        self.axis_max = max;
        self.axis_step = step;
        self
    }

    #[must_use]
    pub const fn with_annotation_offset(mut self, offset: f64) -> Self {
        self.annotation_offset = offset;
        self
    }

    #[must_use]
    pub const fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    /// Y tick values from the window minimum to its maximum, inclusive.
    ///
    /// Empty when the window has no valid tick layout (see [`axis_intervals`]).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn y_ticks(&self) -> Vec<f64> {
        let Some(count) = axis_intervals(self.axis_min, self.axis_max, self.axis_step) else {
            return Vec::new();
        };
        (0..=count)
            .map(|i| self.axis_step.mul_add(i as f64, self.axis_min))
            .collect()
    }

    /// Annotations in artifact row order.
    #[must_use]
    pub fn annotations(&self) -> Vec<MetricAnnotation> {
        self.scores
            .iter()
            .map(|score| MetricAnnotation {
                metric: score.metric.clone(),
                text: format!("{:.2}%", score.percent),
                position: score.percent + self.annotation_offset,
            })
            .collect()
    }

    const fn plot_width() -> f64 {
        WIDTH - MARGIN_LEFT - MARGIN_RIGHT
    }

    const fn plot_height() -> f64 {
        HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
    }

    const fn plot_bottom() -> f64 {
        HEIGHT - MARGIN_BOTTOM
    }

    /// SVG y coordinate for `value`, clipped to the window.
    fn y_for(&self, value: f64) -> f64 {
        let clipped = value.clamp(self.axis_min, self.axis_max);
        let fraction = (clipped - self.axis_min) / (self.axis_max - self.axis_min);
        fraction.mul_add(-Self::plot_height(), Self::plot_bottom())
    }

    fn y_axis(&self) -> Axis {
        let span = self.axis_max - self.axis_min;
        let labels = self
            .y_ticks()
            .into_iter()
            .map(|tick| ((tick - self.axis_min) / span, coord(tick)))
            .collect();
        Axis::vertical(MARGIN_LEFT, Self::plot_bottom(), Self::plot_height()).with_labels(labels)
    }

    #[allow(clippy::cast_precision_loss)]
    fn push_bars(&self, builder: &mut SvgBuilder) {
        let count = self.scores.len();
        let slot = Self::plot_width() / count as f64;
        let bar_width = slot * 0.7;
        let colors = VIRIDIS.spread(count);

        let mut tick_labels = Vec::with_capacity(count);
        for (i, (score, annotation)) in self.scores.iter().zip(self.annotations()).enumerate() {
            let x = slot.mul_add(i as f64, MARGIN_LEFT) + (slot - bar_width) / 2.0;
            let top = self.y_for(score.percent);
            builder.push(&Bar {
                x,
                y: top,
                width: bar_width,
                height: Self::plot_bottom() - top,
                color: colors[i].into(),
                label: score.metric.clone(),
                value: annotation.text.clone(),
            });
            builder.push(
                &Label::new(x + bar_width / 2.0, self.y_for(annotation.position), &annotation.text)
                    .with_font_size(9.0),
            );
            tick_labels.push((slot.mul_add(i as f64, slot / 2.0) / Self::plot_width(), score.metric.clone()));
        }

        builder.push(
            &Axis::horizontal(MARGIN_LEFT, Self::plot_bottom(), Self::plot_width())
                .with_labels(tick_labels)
                .with_label_rotation(self.label_rotation),
        );
    }

    fn push_titles(&self, builder: &mut SvgBuilder) {
        let center_x = Self::plot_width().mul_add(0.5, MARGIN_LEFT);
        builder.push(&Label::new(center_x, 22.0, &self.title).with_font_size(13.0).bold());
        builder.push(
            &Label::new(center_x, HEIGHT - 10.0, "Metric")
                .with_font_size(12.0)
                .bold(),
        );
        builder.push(
            &Label::new(18.0, Self::plot_height().mul_add(0.5, MARGIN_TOP), "Average Score (%)")
                .with_anchor(TextAnchor::Middle)
                .with_font_size(12.0)
                .bold()
                .with_rotation(-90.0),
        );
    }
}

impl SvgElement for MetricBarChart {
    fn render(&self) -> String {
        let builder = SvgBuilder::new(WIDTH, HEIGHT).with_title(&self.title);
        if self.scores.is_empty() {
            return builder.empty_state("No metrics available");
        }

        let mut builder = builder.push_element(&self.y_axis());
        self.push_bars(&mut builder);
        self.push_titles(&mut builder);
        builder.build()
    }
}

#[cfg(test)]
#[path = "metric_bar_tests.rs"]
mod tests;

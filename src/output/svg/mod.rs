//! SVG chart generation for HTML reports.
//!
//! Charts are built on a few shared primitives:
//! - viewBox-based scaling (renders at any size)
//! - CSS variable integration (`var(--color-*)`) for theming
//! - Accessibility: `<title>` elements for screen readers, no static ids

mod bar;
mod builder;
mod data;
mod element;
mod format;
mod heatmap;
mod metric_bar;
mod pie;
mod style;

pub use bar::{BarChart, BarGeometry};
pub use builder::SvgBuilder;
pub use data::DataPoint;
pub use element::{Axis, AxisOrientation, Bar, Label, SvgElement};
pub use format::{format_number, html_escape};
pub use heatmap::{CellAnnotation, ConfusionHeatmap};
pub use metric_bar::{
    DEFAULT_ANNOTATION_OFFSET, DEFAULT_AXIS_MAX, DEFAULT_AXIS_MIN, DEFAULT_AXIS_STEP,
    DEFAULT_LABEL_ROTATION, MAX_AXIS_TICKS, MetricAnnotation, MetricBarChart, axis_intervals,
};
pub use pie::{DEFAULT_START_ANGLE, PieChart, PieWedge};
pub use style::{BLUES, ChartColor, ColorRamp, Rgb, TextAnchor, VIRIDIS, series_color};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

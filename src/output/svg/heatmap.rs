//! Confusion-matrix heatmap.

use super::builder::SvgBuilder;
use super::element::{Bar, Label, SvgElement};
use super::format::coord;
use super::style::{BLUES, ChartColor, Rgb, TextAnchor};
use crate::artifact::{COLUMN_LABELS, ConfusionMatrix, ROW_LABELS};

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 130.0;
const MARGIN_TOP: f64 = 50.0;
const CELL: f64 = 130.0;
const COLOR_BAR_STEPS: usize = 5;

/// Cells darker than this luminance get white annotation text.
const DARK_LUMINANCE: f64 = 0.35;

/// Annotation for one matrix cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAnnotation {
    pub row: usize,
    pub column: usize,
    pub value: u64,
    pub fill: Rgb,
    pub text_color: Rgb,
}

#[derive(Debug)]
pub struct ConfusionHeatmap {
    pub title: String,
    matrix: ConfusionMatrix,
}

impl ConfusionHeatmap {
    #[must_use]
    pub fn new(matrix: ConfusionMatrix) -> Self {
        Self {
            title: "Confusion Matrix".to_string(),
            matrix,
        }
    }

    /// Position of `value` on the color scale, normalized over the matrix range.
    #[allow(clippy::cast_precision_loss)]
    fn scale_position(&self, value: u64) -> f64 {
        let (min, max) = (self.matrix.min(), self.matrix.max());
        if max == min {
            return 0.0;
        }
        (value - min) as f64 / (max - min) as f64
    }

    /// Cell annotations in row-major order.
    #[must_use]
    pub fn annotations(&self) -> Vec<CellAnnotation> {
        let white = Rgb(0xff, 0xff, 0xff);
        let dark = Rgb(0x1e, 0x29, 0x3b);
        (0..2)
            .flat_map(|row| (0..2).map(move |column| (row, column)))
            .map(|(row, column)| {
                let value = self.matrix.get(row, column);
                let fill = BLUES.sample(self.scale_position(value));
                let text_color = if fill.luminance() < DARK_LUMINANCE {
                    white
                } else {
                    dark
                };
                CellAnnotation {
                    row,
                    column,
                    value,
                    fill,
                    text_color,
                }
            })
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn push_cells(&self, builder: &mut SvgBuilder) {
        for cell in self.annotations() {
            let x = CELL.mul_add(cell.column as f64, MARGIN_LEFT);
            let y = CELL.mul_add(cell.row as f64, MARGIN_TOP);
            builder.push(&Bar {
                x,
                y,
                width: CELL,
                height: CELL,
                color: cell.fill.into(),
                label: format!("{} / {}", ROW_LABELS[cell.row], COLUMN_LABELS[cell.column]),
                value: cell.value.to_string(),
            });
            builder.push(
                &Label::new(x + CELL / 2.0, y + CELL / 2.0 + 6.0, cell.value.to_string())
                    .with_font_size(18.0)
                    .with_color(cell.text_color.into())
                    .bold(),
            );
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn push_ticks_and_titles(&self, builder: &mut SvgBuilder) {
        let grid_bottom = 2.0f64.mul_add(CELL, MARGIN_TOP);
        let grid_center_x = MARGIN_LEFT + CELL;
        let grid_center_y = MARGIN_TOP + CELL;

        for (i, label) in COLUMN_LABELS.iter().enumerate() {
            let x = CELL.mul_add(i as f64 + 0.5, MARGIN_LEFT);
            builder.push(&Label::new(x, grid_bottom + 18.0, *label).with_font_size(11.0));
        }
        for (i, label) in ROW_LABELS.iter().enumerate() {
            let y = CELL.mul_add(i as f64 + 0.5, MARGIN_TOP);
            builder.push(
                &Label::new(MARGIN_LEFT - 8.0, y + 4.0, *label)
                    .with_anchor(TextAnchor::End)
                    .with_font_size(11.0),
            );
        }

        builder.push(
            &Label::new(grid_center_x, grid_bottom + 44.0, "Predicted Label")
                .with_font_size(12.0)
                .bold(),
        );
        builder.push(
            &Label::new(16.0, grid_center_y, "Actual Label")
                .with_font_size(12.0)
                .bold()
                .with_rotation(-90.0),
        );
        builder.push(
            &Label::new(grid_center_x, 28.0, &self.title)
                .with_font_size(14.0)
                .bold(),
        );
    }

    /// Stepped legend from the matrix maximum (top) to minimum (bottom).
    #[allow(clippy::cast_precision_loss)]
    fn push_color_bar(&self, builder: &mut SvgBuilder) {
        let x = 2.0f64.mul_add(CELL, MARGIN_LEFT) + 20.0;
        let step_height = 2.0 * CELL / COLOR_BAR_STEPS as f64;
        let (min, max) = (self.matrix.min(), self.matrix.max());

        for step in 0..COLOR_BAR_STEPS {
            let t = 1.0 - step as f64 / (COLOR_BAR_STEPS - 1) as f64;
            let fill = BLUES.sample(t).to_hex();
            builder.push_svg(format!(
                r#"<rect x="{}" y="{}" width="16" height="{}" fill="{fill}"/>"#,
                coord(x),
                coord(step_height.mul_add(step as f64, MARGIN_TOP)),
                coord(step_height)
            ));
        }

        for (value, y) in [(max, MARGIN_TOP + 4.0), (min, 2.0f64.mul_add(CELL, MARGIN_TOP))] {
            builder.push(
                &Label::new(x + 22.0, y, value.to_string())
                    .with_anchor(TextAnchor::Start)
                    .with_color(ChartColor::css_var("text-muted")),
            );
        }
    }
}

impl SvgElement for ConfusionHeatmap {
    fn render(&self) -> String {
        let mut builder = SvgBuilder::new(WIDTH, HEIGHT)
            .with_title(&self.title)
            .with_description(format!(
                "Rows: {}, {}. Columns: {}, {}.",
                ROW_LABELS[0], ROW_LABELS[1], COLUMN_LABELS[0], COLUMN_LABELS[1]
            ));
        self.push_cells(&mut builder);
        self.push_ticks_and_titles(&mut builder);
        self.push_color_bar(&mut builder);
        builder.build()
    }
}

#[cfg(test)]
#[path = "heatmap_tests.rs"]
mod tests;

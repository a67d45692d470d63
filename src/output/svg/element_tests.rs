//! Tests for primitive SVG elements.

use super::*;

mod axis_tests {
    use super::*;

    #[test]
    fn horizontal_axis_renders() {
        let axis = Axis::horizontal(10.0, 100.0, 200.0).with_labels(vec![
            (0.0, "Negative".to_string()),
            (1.0, "Positive".to_string()),
        ]);

        let svg = axis.render();
        assert!(svg.contains("<line"));
        assert!(svg.contains(">Negative</text>"));
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(!svg.contains("rotate("));
    }

    #[test]
    fn vertical_axis_places_ticks_from_bottom() {
        let axis = Axis::vertical(50.0, 150.0, 100.0)
            .with_labels(vec![(0.0, "70".to_string()), (1.0, "80".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("text-anchor=\"end\""));
        // pos 1.0 sits at y - length
        assert!(svg.contains(r#"x1="50" y1="50" x2="45" y2="50""#));
    }

    #[test]
    fn rotated_labels_are_end_anchored() {
        let axis = Axis::horizontal(0.0, 100.0, 100.0)
            .with_label_rotation(45.0)
            .with_labels(vec![(0.5, "Accuracy".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("text-anchor=\"end\""));
        assert!(svg.contains("transform=\"rotate(-45, 50, 117)\""));
    }

    #[test]
    fn axis_with_custom_font_size() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0)
            .with_font_size(14.0)
            .with_labels(vec![(0.5, "mid".to_string())]);

        assert!(axis.render().contains("font-size=\"14\""));
    }
}

mod bar_tests {
    use super::*;

    fn bar(label: &str) -> Bar {
        Bar {
            x: 10.0,
            y: 20.0,
            width: 50.0,
            height: 80.0,
            color: ChartColor::hex("#22c55e"),
            label: label.to_string(),
            value: "120".to_string(),
        }
    }

    #[test]
    fn bar_renders_with_title() {
        let svg = bar("Positive").render();
        assert!(svg.contains("<rect"));
        assert!(svg.contains("<title>Positive: 120</title>"));
        assert!(svg.contains("height=\"80\""));
        assert!(svg.contains("fill=\"#22c55e\""));
    }

    #[test]
    fn bar_escapes_special_characters() {
        let svg = bar("Test <script>").render();
        assert!(svg.contains("&lt;script&gt;"));
        assert!(!svg.contains("<script>"));
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn plain_label() {
        let svg = Label::new(10.0, 20.5, "72.00%").render();
        assert!(svg.starts_with(r#"<text x="10" y="20.5" text-anchor="middle""#));
        assert!(svg.contains(">72.00%</text>"));
        assert!(!svg.contains("font-weight"));
    }

    #[test]
    fn bold_rotated_label() {
        let svg = Label::new(5.0, 100.0, "Actual Label")
            .bold()
            .with_rotation(-90.0)
            .render();
        assert!(svg.contains(r#"font-weight="600""#));
        assert!(svg.contains(r#"transform="rotate(-90, 5, 100)""#));
    }

    #[test]
    fn label_is_escaped() {
        let svg = Label::new(0.0, 0.0, "a & b").render();
        assert!(svg.contains("a &amp; b"));
    }
}

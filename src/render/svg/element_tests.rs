//! Tests for primitive SVG elements.

use super::*;

mod axis_tests {
    use super::*;

    #[test]
    fn horizontal_axis_renders() {
        let axis = Axis::horizontal(10.0, 100.0, 200.0).with_labels(vec![
            (0.0, "0".to_string()),
            (0.5, "50".to_string()),
            (1.0, "100".to_string()),
        ]);

        let svg = axis.render();
        assert!(svg.contains("<line"));
        assert!(svg.contains("<text"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn vertical_axis_renders() {
        let axis = Axis::vertical(50.0, 150.0, 100.0)
            .with_labels(vec![(0.0, "0".to_string()), (1.0, "100".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("<line"));
        assert!(svg.contains("text-anchor=\"end\""));
    }

    #[test]
    fn axis_with_custom_font_size() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0)
            .with_font_size(14.0)
            .with_labels(vec![(0.5, "mid".to_string())]);

        let svg = axis.render();
        assert!(svg.contains("font-size=\"14\""));
    }

    #[test]
    fn empty_labels_draw_tick_only() {
        let axis = Axis::horizontal(0.0, 0.0, 100.0)
            .with_labels(vec![(0.0, String::new()), (1.0, "end".to_string())]);

        let svg = axis.render();
        assert_eq!(svg.matches("<text").count(), 1);
        assert_eq!(svg.matches("<line").count(), 3);
    }

    #[test]
    fn vertical_labels_are_rotated() {
        let axis = Axis::horizontal(0.0, 100.0, 100.0)
            .with_vertical_labels(true)
            .with_labels(vec![(0.5, "2021-03-01".to_string())]);

        assert!(axis.render().contains("rotate(-90"));
    }
}

mod bar_tests {
    use super::*;

    #[test]
    fn bar_renders_with_title() {
        let bar = Bar {
            x: 10.0,
            y: 20.0,
            width: 50.0,
            height: 80.0,
            color: ChartColor::hex("#22c55e"),
            label: "2021-03-01".to_string(),
            value: 100.0,
        };

        let svg = bar.render();
        assert!(svg.contains("<rect"));
        assert!(svg.contains("<title>2021-03-01: 100</title>"));
        assert!(svg.contains("fill=\"#22c55e\""));
    }
}

mod line_tests {
    use super::*;

    #[test]
    fn line_renders_path() {
        let line = Line::new(vec![(0.0, 0.0), (10.0, 5.0)], ChartColor::hex("#f00"));
        let svg = line.render();
        assert!(svg.contains("d=\"M0,0 L10,5\""));
        assert!(svg.contains("stroke=\"#f00\""));
    }

    #[test]
    fn empty_line_renders_nothing() {
        let line = Line::new(vec![], ChartColor::hex("#f00"));
        assert!(line.render().is_empty());
    }

    #[test]
    fn gaps_split_into_segments() {
        let points = vec![
            Some((0.0, 0.0)),
            Some((1.0, 1.0)),
            None,
            None,
            Some((4.0, 4.0)),
        ];
        let lines = Line::segments(&points, &ChartColor::hex("#000"));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].points.len(), 2);
        assert_eq!(lines[1].points, vec![(4.0, 4.0)]);
    }

    #[test]
    fn all_missing_gives_no_segments() {
        let lines = Line::segments(&[None, None], &ChartColor::hex("#000"));
        assert!(lines.is_empty());
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn bold_label() {
        let svg = Label::new(5.0, 10.0, "Total Cases").bold().with_size(15.0).render();
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.contains("font-size=\"15\""));
        assert!(svg.contains(">Total Cases</text>"));
    }

    #[test]
    fn label_escapes_text() {
        let svg = Label::new(0.0, 0.0, "Cases < Deaths").render();
        assert!(svg.contains("Cases &lt; Deaths"));
    }
}

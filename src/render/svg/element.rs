//! Primitive SVG elements: axes, bars, lines and text.

use std::fmt::Write;

use super::format::{coord, html_escape};
use super::style::{ChartColor, FontWeight, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis line with ticks and labels. Label positions are fractions of the axis
/// length, measured from its origin.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
    /// Rotate horizontal-axis labels to read bottom-to-top.
    pub vertical_labels: bool,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::muted(),
            tick_length: 4.0,
            font_size: 9.0,
            vertical_labels: false,
        }
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Vertical,
            ..Self::horizontal(x, y, length)
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_vertical_labels(mut self, vertical: bool) -> Self {
        self.vertical_labels = vertical;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 3.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }

    fn label(&self, tick: &TickInfo, text: &str) -> Label {
        let label = if self.vertical_labels {
            // Hangs below the tick, reading bottom-to-top.
            Label::new(
                tick.label_x + self.font_size / 3.0,
                self.y + self.tick_length + 3.0,
                text,
            )
            .with_anchor(TextAnchor::End)
            .with_rotation(-90.0)
        } else {
            Label::new(tick.label_x, tick.label_y, text).with_anchor(tick.anchor)
        };
        label
            .with_size(self.font_size)
            .with_color(self.color.clone())
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        // Main axis line
        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
            coord(self.x),
            coord(self.y),
            coord(end_x),
            coord(end_y)
        );

        // Ticks and labels
        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                coord(tick.start_x),
                coord(tick.start_y),
                coord(tick.end_x),
                coord(tick.end_y)
            );

            if !label.is_empty() {
                output.push_str(&self.label(&tick, label).render());
            }
        }

        output
    }
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        // Title element doubles as hover tooltip
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}">
    <title>{escaped_label}: {}</title>
</rect>
"#,
            coord(self.x),
            coord(self.y),
            coord(self.width),
            coord(self.height),
            self.value
        )
    }
}

/// A polyline through chart coordinates.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 1.5,
        }
    }

    /// Split a series with missing values into one line per unbroken run.
    #[must_use]
    pub fn segments(points: &[Option<(f64, f64)>], color: &ChartColor) -> Vec<Self> {
        points
            .split(Option::is_none)
            .filter(|run| !run.is_empty())
            .map(|run| Self::new(run.iter().flatten().copied().collect(), color.clone()))
            .collect()
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let (x, y) = (coord(*x), coord(*y));
            if i == 0 {
                let _ = write!(path, "M{x},{y}");
            } else {
                let _ = write!(path, " L{x},{y}");
            }
        }

        // A lone point still shows as a dot thanks to the round cap.
        format!(
            r#"<path d="{path}" fill="none" stroke="{color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>
"#,
            self.stroke_width
        )
    }
}

/// A text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub anchor: TextAnchor,
    pub weight: FontWeight,
    pub color: ChartColor,
    /// Rotation in degrees around the anchor point.
    pub rotation: Option<f64>,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size: 9.0,
            anchor: TextAnchor::Start,
            weight: FontWeight::Normal,
            color: ChartColor::text(),
            rotation: None,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let (x, y) = (coord(self.x), coord(self.y));
        let transform = self
            .rotation
            .map(|deg| format!(r#" transform="rotate({deg} {x} {y})""#))
            .unwrap_or_default();
        let weight = match self.weight {
            FontWeight::Normal => String::new(),
            FontWeight::Bold => r#" font-weight="bold""#.to_string(),
        };

        format!(
            r#"<text x="{x}" y="{y}" text-anchor="{}" fill="{}" font-size="{}"{weight}{transform}>{}</text>
"#,
            self.anchor,
            self.color.to_css(),
            self.size,
            html_escape(&self.text)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;

//! SVG chart generation for report artifacts.
//!
//! Artifacts are standalone files with a physical size: the viewBox is in
//! points and the intrinsic pixel size follows the run's resolution.

mod builder;
mod daily_chart;
mod element;
mod format;
mod frame;
mod line_chart;
mod scale;
mod style;
mod table;

pub use builder::{Canvas, POINTS_PER_INCH, SvgBuilder};
pub use daily_chart::DailyBarChart;
pub use element::{Axis, AxisOrientation, Bar, Label, Line, SvgElement};
pub use format::{
    coord, format_count, format_percent, format_thousands, group_thousands, html_escape,
    percent_decimals,
};
pub use frame::{LegendMark, Margins, PlotFrame, YFormat};
pub use line_chart::{DatedSeries, TimeLineChart};
pub use scale::{LinearScale, Ticks, date_ticks};
pub use style::{ChartColor, FontWeight, TextAnchor};
pub use table::TableChart;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

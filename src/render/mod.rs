//! Chart rendering: requests in, PNG artifacts out.

mod raster;
mod renderer;
mod request;
pub mod svg;

pub use raster::{Chart, Rasterizer};
pub use renderer::ChartRenderer;
pub use request::{ChartRequest, RenderSettings, SMOOTHED_LEGEND};

use super::*;
use crate::dataset::{SeriesSelector, columns};
use crate::error::ReportError;
use crate::render::{ChartRenderer, RenderSettings};
use crate::test_support::{country_set, png_size, synthetic_dataset};

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

fn overlay_at(dpi: u32, rasterizer: &Rasterizer) -> Artifact {
    let dataset = synthetic_dataset(&["Austria", "Spain"], 30);
    let countries = country_set(&["Austria", "Spain"]);
    let settings = RenderSettings {
        dpi,
        ..RenderSettings::default()
    };
    let renderer = ChartRenderer::new(
        SeriesSelector::new(&dataset),
        &countries,
        settings,
        rasterizer,
    );
    let chart = renderer
        .overlay(columns::TOTAL_CASES, "Total COVID Cases", "Total Cases by Country")
        .unwrap();
    rasterizer.rasterize(&chart).unwrap()
}

#[test]
fn overlay_at_300_dpi_is_3300_by_1500() {
    let artifact = overlay_at(300, &Rasterizer::new());

    assert!(artifact.png.starts_with(PNG_SIGNATURE));
    assert_eq!(png_size(&artifact.png), (3300, 1500));
    assert_eq!(artifact.id, ArtifactId::chart("Total Cases by Country"));
}

#[test]
fn dpi_changes_the_pixels_not_just_the_header() {
    let rasterizer = Rasterizer::new();
    let low = overlay_at(72, &rasterizer);
    let high = overlay_at(150, &rasterizer);

    assert_eq!(png_size(&low.png), (792, 360));
    assert_eq!(png_size(&high.png), (1650, 750));
    assert_ne!(low.digest(), high.digest());
}

#[test]
fn rasterizing_twice_gives_identical_bytes() {
    let rasterizer = Rasterizer::new();
    assert_eq!(overlay_at(50, &rasterizer), overlay_at(50, &rasterizer));
}

#[test]
fn pixels_are_painted() {
    let chart = Chart {
        id: ArtifactId::chart("Solid"),
        svg: r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 40 20"><rect width="40" height="20" fill="#ff0000"/></svg>"##
            .to_string(),
        canvas: Canvas::new(2.0, 1.0, 10),
    };
    let artifact = Rasterizer::with_fonts(fontdb::Database::new())
        .rasterize(&chart)
        .unwrap();

    let mut reader = png::Decoder::new(std::io::Cursor::new(&artifact.png))
        .read_info()
        .unwrap();
    let mut pixels = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut pixels).unwrap();

    assert_eq!((frame.width, frame.height), (20, 10));
    assert!(
        pixels[..frame.buffer_size()]
            .chunks(4)
            .all(|px| px == [255, 0, 0, 255])
    );
}

#[test]
fn unparseable_markup_is_a_raster_error() {
    let chart = Chart {
        id: ArtifactId::for_country("Daily New Cases", "Peru"),
        svg: "<svg".to_string(),
        canvas: Canvas::new(1.0, 1.0, 10),
    };

    let err = Rasterizer::with_fonts(fontdb::Database::new())
        .rasterize(&chart)
        .unwrap_err();

    match err {
        ReportError::Raster { id, message } => {
            assert_eq!(id, ArtifactId::for_country("Daily New Cases", "Peru"));
            assert!(message.starts_with("SVG parse failed"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

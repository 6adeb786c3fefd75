use super::*;
use crate::artifact::{Artifact, ArtifactId, MemoryArtifactStore};
use crate::compose::{PageComposer, Rect};

fn document(store: &MemoryArtifactStore, id: &ArtifactId) -> ReportDocument {
    let mut composer = PageComposer::new(store)
        .with_title("COVID-19 Report <draft>")
        .with_footer("Retrieved on: 2021-03-01");
    composer.add_page().unwrap();
    composer
        .place_text(
            Rect::new(10.0, 10.0, 190.0, 10.0),
            "Spain COVID-19 Statistics",
            TextStyle::bold(18.0),
            Align::Center,
        )
        .unwrap();
    composer
        .place_artifact(id, Rect::new(10.0, 20.0, 190.0, 89.0))
        .unwrap();
    composer.add_page().unwrap();
    composer.seal().unwrap()
}

fn store(id: &ArtifactId) -> MemoryArtifactStore {
    let mut store = MemoryArtifactStore::new();
    store
        .put(Artifact::new(id.clone(), b"\x89PNG\r\n\x1a\n".to_vec()))
        .unwrap();
    store
}

#[test]
fn one_section_per_page() {
    let id = ArtifactId::for_country("Daily New Cases", "Spain");
    let store = store(&id);
    let html = HtmlFormatter.format(&document(&store, &id), &store).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("<section class=\"page\"").count(), 2);
    assert!(html.contains("width: 210mm; height: 297mm;"));
    assert!(html.contains("page-break-after: always"));
}

#[test]
fn artifacts_are_embedded_at_their_rectangle() {
    let id = ArtifactId::for_country("Daily New Cases", "Spain");
    let store = store(&id);
    let html = HtmlFormatter.format(&document(&store, &id), &store).unwrap();

    assert!(html.contains("left: 10mm; top: 20mm; width: 190mm; height: 89mm;"));
    assert!(html.contains("data-artifact=\"Daily New Cases in Spain\""));
    assert!(html.contains(
        "<img src=\"data:image/png;base64,iVBORw0KGgo=\" alt=\"Daily New Cases in Spain\">"
    ));
    assert!(!html.contains("<svg"));
}

#[test]
fn text_carries_style_and_is_escaped() {
    let id = ArtifactId::for_country("Daily New Cases", "Spain");
    let store = store(&id);
    let html = HtmlFormatter.format(&document(&store, &id), &store).unwrap();

    assert!(html.contains("<title>COVID-19 Report &lt;draft&gt;</title>"));
    assert!(html.contains(
        "font-size: 18pt; font-weight: bold; font-style: normal; text-align: center;\">Spain COVID-19 Statistics</p>"
    ));
    assert!(html.contains("font-style: italic; text-align: right;\">Page 2</p>"));
    assert!(html.contains(">Retrieved on: 2021-03-01</p>"));
}

#[test]
fn artifact_missing_from_store_fails() {
    let id = ArtifactId::for_country("Daily New Cases", "Spain");
    let placed_store = store(&id);
    let document = document(&placed_store, &id);

    let empty = MemoryArtifactStore::new();
    let err = HtmlFormatter.format(&document, &empty).unwrap_err();
    assert!(matches!(err, crate::error::ReportError::ArtifactNotFound(_)));
}

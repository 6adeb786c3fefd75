use super::*;

fn table() -> TableChart {
    TableChart::new(
        "Daily Change",
        vec!["Date", "Cases", "Tests", "Deaths"]
            .into_iter()
            .map(String::from)
            .collect(),
        vec![
            vec!["2021-01-01", "1,234,567", "n/a", "12"]
                .into_iter()
                .map(String::from)
                .collect(),
        ],
        Canvas::new(5.0, 5.0, 300),
    )
}

#[test]
fn headers_are_bold_on_header_fill() {
    let svg = table().render();

    assert!(svg.contains("font-weight=\"bold\">Date</text>"));
    assert!(svg.contains("font-weight=\"bold\">Deaths</text>"));
    assert_eq!(svg.matches("fill=\"#00bfbf\"").count(), 4);
}

#[test]
fn cells_are_printed_verbatim() {
    let svg = table().render();

    assert!(svg.contains(">1,234,567</text>"));
    assert!(svg.contains(">n/a</text>"));
    assert!(svg.contains("width=\"1500\" height=\"1500\""));
}

#[test]
fn title_is_drawn_above() {
    let svg = table().render();
    let title = svg.find(">Daily Change</text>").unwrap();
    let header = svg.find(">Date</text>").unwrap();
    assert!(title < header);
}

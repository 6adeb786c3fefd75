use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_from_str_invalid() {
    let err = "pdf".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("Unknown output format"));
}

#[test]
fn output_format_default_is_html() {
    assert_eq!(OutputFormat::default(), OutputFormat::Html);
}

#[test]
fn output_format_extension() {
    assert_eq!(OutputFormat::Html.extension(), "html");
    assert_eq!(OutputFormat::Json.extension(), "json");
}

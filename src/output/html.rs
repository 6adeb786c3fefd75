use std::fmt::Write;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::artifact::ArtifactStore;
use crate::compose::{Align, Directive, Page, ReportDocument, TextStyle};
use crate::error::Result;
use crate::render::svg::html_escape;

use super::DocumentFormatter;

const HTML_STYLE: &str = r"        @page { size: A4; margin: 0; }
        * { box-sizing: border-box; }
        body {
            margin: 0;
            background: #e5e7eb;
            font-family: Arial, Helvetica, sans-serif;
            color: #000000;
        }
        .page {
            position: relative;
            overflow: hidden;
            margin: 8mm auto;
            background: #ffffff;
            box-shadow: 0 1px 4px rgba(0, 0, 0, 0.25);
            break-after: page;
            page-break-after: always;
        }
        .page:last-child { break-after: auto; page-break-after: auto; }
        .text { position: absolute; margin: 0; white-space: pre-wrap; }
        .artifact { position: absolute; }
        .artifact img { display: block; width: 100%; height: 100%; object-fit: contain; }
        @media print {
            body { background: none; }
            .page { margin: 0; box-shadow: none; }
        }
";

/// Paginated HTML with absolutely positioned text and embedded PNG artifacts.
///
/// Each page is a fixed-size box in millimetres; print CSS breaks after
/// every page, so printing to PDF reproduces the layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    fn write_page(
        output: &mut String,
        document: &ReportDocument,
        page: &Page,
        store: &dyn ArtifactStore,
    ) -> Result<()> {
        let _ = writeln!(
            output,
            r#"    <section class="page" data-page="{}" style="width: {}mm; height: {}mm;">"#,
            page.number, document.page_size.width, document.page_size.height
        );

        for directive in &page.directives {
            match directive {
                Directive::Text {
                    rect,
                    text,
                    style,
                    align,
                } => {
                    let _ = writeln!(
                        output,
                        r#"        <p class="text" style="left: {}mm; top: {}mm; width: {}mm; line-height: {}mm; {}">{}</p>"#,
                        rect.x,
                        rect.y,
                        rect.w,
                        rect.h,
                        Self::text_css(style, *align),
                        html_escape(text)
                    );
                }
                Directive::Artifact { rect, id, .. } => {
                    let artifact = store.get(id)?;
                    let _ = writeln!(
                        output,
                        r#"        <figure class="artifact" style="left: {}mm; top: {}mm; width: {}mm; height: {}mm; margin: 0;" data-artifact="{}">"#,
                        rect.x,
                        rect.y,
                        rect.w,
                        rect.h,
                        html_escape(&id.to_string())
                    );
                    let _ = writeln!(
                        output,
                        r#"            <img src="data:image/png;base64,{}" alt="{}">"#,
                        STANDARD.encode(&artifact.png),
                        html_escape(&id.to_string())
                    );
                    output.push_str("        </figure>\n");
                }
            }
        }

        output.push_str("    </section>\n");
        Ok(())
    }

    fn text_css(style: &TextStyle, align: Align) -> String {
        let align = match align {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        };
        let weight = if style.bold { "bold" } else { "normal" };
        let font_style = if style.italic { "italic" } else { "normal" };
        format!(
            "font-size: {}pt; font-weight: {weight}; font-style: {font_style}; text-align: {align};",
            style.size
        )
    }
}

impl DocumentFormatter for HtmlFormatter {
    fn format(&self, document: &ReportDocument, store: &dyn ArtifactStore) -> Result<String> {
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("    <meta charset=\"UTF-8\">\n");
        let _ = writeln!(output, "    <title>{}</title>", html_escape(&document.title));
        output.push_str("    <style>\n");
        output.push_str(HTML_STYLE);
        output.push_str("    </style>\n</head>\n<body>\n");

        for page in &document.pages {
            Self::write_page(&mut output, document, page, store)?;
        }

        output.push_str("</body>\n</html>\n");
        Ok(output)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;

use serde::Serialize;

use crate::artifact::{ArtifactId, ArtifactStore};
use crate::compose::{Directive, Page, PageSize, ReportDocument};
use crate::error::Result;

use super::DocumentFormatter;

/// Page layout as JSON: every directive with its rectangle, plus a manifest
/// of referenced artifacts. Image bodies are left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    title: &'a str,
    page_size: PageSize,
    page_count: usize,
    pages: &'a [Page],
    artifacts: Vec<ManifestEntry<'a>>,
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    id: &'a ArtifactId,
    file_name: &'a str,
    sha256: &'a str,
    pages: Vec<usize>,
}

impl DocumentFormatter for JsonFormatter {
    fn format(&self, document: &ReportDocument, _store: &dyn ArtifactStore) -> Result<String> {
        let output = JsonOutput {
            title: &document.title,
            page_size: document.page_size,
            page_count: document.page_count(),
            pages: &document.pages,
            artifacts: manifest(document),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn manifest(document: &ReportDocument) -> Vec<ManifestEntry<'_>> {
    let mut entries: Vec<ManifestEntry<'_>> = Vec::new();
    for page in &document.pages {
        for directive in &page.directives {
            let Directive::Artifact {
                id,
                file_name,
                sha256,
                ..
            } = directive
            else {
                continue;
            };
            match entries.iter_mut().find(|e| e.id == id) {
                Some(entry) if !entry.pages.contains(&page.number) => {
                    entry.pages.push(page.number);
                }
                Some(_) => {}
                None => entries.push(ManifestEntry {
                    id,
                    file_name: file_name.as_str(),
                    sha256: sha256.as_str(),
                    pages: vec![page.number],
                }),
            }
        }
    }
    entries
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

// Adapters layer: parse boundary between on-disk formats and the typed model.

pub mod csv_source;
pub mod xml_source;

use crate::core::serialize::parse_collection;
use crate::domain::model::ProjectCollection;
use crate::utils::error::{AidError, Result};
use std::path::Path;

/// Parses a project source, picking the format from the file extension.
pub fn parse_projects(path: &str, data: &[u8]) -> Result<ProjectCollection> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    let text = std::str::from_utf8(data).map_err(|e| AidError::MalformedRecord {
        source_name: path.to_string(),
        message: format!("not valid UTF-8: {}", e),
    })?;

    match extension.as_deref() {
        Some("xml") => xml_source::parse_projects_xml(path, text),
        Some("json") => parse_collection(text),
        _ => Err(AidError::UnsupportedSource {
            path: path.to_string(),
        }),
    }
}

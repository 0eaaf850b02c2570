use std::path::Path;

use super::kinds::{Heading, Tags};
use crate::models::Metadata;

/// Number of leading lines searched for a title heading and a tags line.
pub const HEADER_SCAN_LINES: usize = 10;

/// Extracts title and tags from the first [`HEADER_SCAN_LINES`] lines.
///
/// Daily notes are titled after their file name and never carry tags. For
/// other notes each `# ` line in the window replaces the title found so far,
/// so the last one wins; without any, the file stem is used. A later tags
/// line replaces an earlier one the same way.
pub fn extract_metadata<S: AsRef<str>>(lines: &[S], file_name: &str, is_daily: bool) -> Metadata {
    let stem = file_stem(file_name);
    if is_daily {
        return Metadata::new(stem);
    }

    let mut metadata = Metadata::new(stem);
    for line in lines.iter().take(HEADER_SCAN_LINES) {
        let line: &str = line.as_ref();
        if let Some(title) = Heading::title_text(line) {
            metadata.title = title.to_string();
        }
        if let Some(tags) = Tags::parse(line) {
            metadata.tags = tags;
        }
    }

    log::debug!(
        "header of {file_name}: title={:?} tags={:?}",
        metadata.title,
        metadata.tags
    );
    metadata
}

fn file_stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string())
}

//! # Line Converter
//!
//! Turns the lines of one Obsidian markdown note into org lines in a single
//! pass:
//!
//! 1. **Header**: title and tags from the first lines become `#+TITLE:` and
//!    `#+ROAM_TAGS:` keywords ([`header`]).
//! 2. **Dispatch**: every input line is dropped (front matter), toggles the
//!    code block state (fences), passes through verbatim (inside a code
//!    block), or goes through the prose rewrites.
//! 3. **Prose rewrites**: outline bullets, links ([`links`]), then the inline
//!    rewrites ([`inline`]) in a fixed order.
//!
//! Nothing here fails: unexpected markup is passed through mostly unchanged.

pub mod header;
pub mod inline;
pub mod kinds;
pub mod links;

use std::borrow::Cow;

use crate::models::{ConvertOptions, Metadata};
use header::{HEADER_SCAN_LINES, extract_metadata};
use kinds::{CodeFence, Heading, Tags};

/// Leading lines of a daily note that hold its template front matter.
pub const DAILY_FRONT_MATTER_LINES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    #[default]
    Prose,
    CodeBlock,
}

impl BlockState {
    pub fn toggled(self) -> Self {
        match self {
            BlockState::Prose => BlockState::CodeBlock,
            BlockState::CodeBlock => BlockState::Prose,
        }
    }
}

/// Converts documents with one fixed set of options.
#[derive(Debug, Clone)]
pub struct LineConverter<'a> {
    options: &'a ConvertOptions,
}

impl<'a> LineConverter<'a> {
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self { options }
    }

    /// Converts all lines of a document, header keywords included.
    pub fn convert<S: AsRef<str>>(&self, lines: &[S], file_name: &str) -> Vec<String> {
        let metadata = extract_metadata(lines, file_name, self.options.is_daily);
        let mut output = metadata.header_lines();
        let body_start = output.len();

        let mut state = BlockState::default();
        for (index, line) in lines.iter().enumerate() {
            if let Some(converted) = self.convert_line(index, line.as_ref(), &mut state) {
                output.push(converted);
            }
        }

        if state == BlockState::CodeBlock {
            log::warn!("{file_name}: code block is not closed at end of document");
        }
        log::debug!(
            "{file_name}: {} input lines, {} body lines written",
            lines.len(),
            output.len() - body_start
        );
        output
    }

    /// Converts one line; `None` means the line is dropped.
    pub fn convert_line(&self, index: usize, line: &str, state: &mut BlockState) -> Option<String> {
        if self.options.is_daily && index < DAILY_FRONT_MATTER_LINES {
            return None;
        }
        if Heading::is_title(line) {
            return None;
        }
        if index < HEADER_SCAN_LINES && Tags::is_tag_line(line) {
            return None;
        }

        if CodeFence::is_delimiter(line) {
            *state = state.toggled();
            return Some(match state {
                BlockState::CodeBlock => CodeFence::open(line),
                BlockState::Prose => CodeFence::close(line),
            });
        }

        match state {
            BlockState::CodeBlock => Some(line.to_string()),
            BlockState::Prose => Some(self.convert_prose(line)),
        }
    }

    /// All prose rewrites, in order.
    pub fn convert_prose(&self, line: &str) -> String {
        let line: Cow<'_, str> = match Heading::to_outline(line) {
            Some(outline) => Cow::Owned(outline),
            None => Cow::Borrowed(line),
        };
        let line = links::convert_links(&line, self.options);

        let (prefix, body) = inline::split_structural_prefix(&line);
        let body = inline::convert_emphasis(body);
        let body = inline::convert_strikethrough(&body);
        let body = inline::convert_inline_code(&body);
        let body = inline::normalize_rules(&body);
        let body = inline::convert_footnotes(&body);

        format!("{prefix}{body}")
    }
}

/// Converts the lines of a document.
pub fn convert_lines<S: AsRef<str>>(
    lines: &[S],
    file_name: &str,
    options: &ConvertOptions,
) -> Vec<String> {
    LineConverter::new(options).convert(lines, file_name)
}

/// Converts a whole document, returning the text to write.
///
/// Every output line ends with a newline and one extra blank line closes the file.
pub fn convert_document(text: &str, file_name: &str, options: &ConvertOptions) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let output = convert_lines(&lines, file_name, options);

    let mut document = String::with_capacity(text.len() + 64);
    for line in &output {
        document.push_str(line);
        document.push('\n');
    }
    document.push('\n');
    document
}

/// Metadata the converter would emit for `text`, without converting the body.
pub fn document_metadata(text: &str, file_name: &str, options: &ConvertOptions) -> Metadata {
    let lines: Vec<&str> = text.lines().collect();
    extract_metadata(&lines, file_name, options.is_daily)
}

pub mod convert;
pub mod io;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{
    BlockState, LineConverter, convert_document, convert_lines, document_metadata,
    inline::convert_footnotes, links::convert_links,
};
pub use io::*;
pub use models::{ConvertOptions, Metadata, options::DEFAULT_PATH};

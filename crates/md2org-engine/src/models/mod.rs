pub mod metadata;
pub mod options;

pub use metadata::Metadata;
pub use options::ConvertOptions;

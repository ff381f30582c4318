pub mod document;
pub mod placeholder;
pub mod traits;

// Re-export
pub use document::Document;
pub use placeholder::{PlaceholderExtractor, PlaceholderFigures};
pub use traits::PayslipExtractor;

//! dataconv - delimited-text conversion core
//!
//! Takes a block of delimited text (CSV-like), infers its dialect, headers,
//! and per-column types, and renders the rows into one of ~24 target text
//! formats: language literals, JSON, XML/HTML, SQL, YAML, and table markup.
//!
//! The core is host-agnostic: an editor plugin (or the bundled CLI) supplies
//! the selected text and a format key, and gets back the replacement string
//! plus a target-syntax identifier for highlighting. Everything is
//! conversion-scoped; nothing persists between calls.

pub mod cli;
pub mod convert;
pub mod logging;
pub mod settings;

// Re-export commonly used types
pub use convert::{
    convert, Conversion, ConversionOptions, ConvertError, Dialect, DialectSource, Format,
    HeaderPolicy,
};
pub use settings::Settings;

//! Delimited-text conversion pipeline
//!
//! Everything here is conversion-scoped: a `ConversionOptions` bundle is
//! assembled once, then `convert` runs sample → dialect → headers → types →
//! rows → renderer and discards all intermediate state. No caching, no
//! shared mutability.
//!
//! ```text
//! raw text
//! ├── sniff dialect        (skipped when an explicit dialect is set)
//! ├── resolve headers      (Always | Never | Auto)
//! ├── infer column types   (typed formats only; independent reader pass)
//! └── read rows ──► renderer ──► output string + syntax label
//! ```

pub mod dialect;
pub mod error;
pub mod format;
pub mod headers;
pub mod render;
pub mod rows;
pub mod types;

use crate::settings::Settings;

pub use dialect::{Dialect, Quoting, Sniffed};
pub use error::ConvertError;
pub use format::{Format, ALL_FORMATS};
pub use headers::HeaderPolicy;
pub use types::ColumnType;

use render::RenderContext;
use rows::RowReader;

/// Where the conversion's dialect comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialectSource {
    /// A named or user-supplied dialect; sniffing is bypassed entirely.
    Explicit(Dialect),
    /// Sniff from the sample, falling back to `default_delimiter`, then comma.
    Sniff { default_delimiter: Option<String> },
}

/// Read-only options bundle for one conversion.
///
/// Built once from user settings plus per-invocation overrides; renderers
/// never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub dialect: DialectSource,
    pub header_policy: HeaderPolicy,
    /// Joiner substituted for spaces in header names, for formats whose
    /// target syntax forbids them.
    pub header_joiner: String,
    pub strip_quotes: bool,
    /// One level of indentation in the output.
    pub indent: String,
    /// Line separator in the output.
    pub newline: String,
    /// When false, markup renderers emit non-ASCII characters as numeric
    /// character references.
    pub html_utf8: bool,
    /// Variable/table name used by literal and SQL renderers.
    pub variable: String,
    /// Delimiter written by the dsv renderer.
    pub output_delimiter: char,
    /// Quoting policy applied by the dsv renderer.
    pub quoting: Quoting,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            dialect: DialectSource::Sniff {
                default_delimiter: None,
            },
            header_policy: HeaderPolicy::default(),
            header_joiner: "_".to_string(),
            strip_quotes: false,
            indent: " ".repeat(4),
            newline: default_newline().to_string(),
            html_utf8: true,
            variable: "data_converter".to_string(),
            output_delimiter: ',',
            quoting: Quoting::Minimal,
        }
    }
}

/// OS-default line separator, used when no `line_sep` setting is given.
fn default_newline() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}

impl ConversionOptions {
    /// Assemble the options bundle from user settings.
    ///
    /// Fails only when the settings explicitly request a named dialect that
    /// is missing or unusable; every other setting has a working default.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConvertError> {
        let dialect = match &settings.use_dialect {
            Some(name) => DialectSource::Explicit(settings.resolve_dialect(name)?),
            None => DialectSource::Sniff {
                default_delimiter: settings.delimiter.clone(),
            },
        };

        let indent = if settings.translate_tabs_to_spaces {
            " ".repeat(settings.tab_size)
        } else {
            "\t".to_string()
        };

        Ok(Self {
            dialect,
            header_policy: settings.headers,
            header_joiner: settings.header_joiner.clone(),
            strip_quotes: settings.strip_quotes,
            indent,
            newline: settings
                .line_sep
                .clone()
                .unwrap_or_else(|| default_newline().to_string()),
            html_utf8: settings.html_utf8,
            variable: settings.default_variable.clone(),
            output_delimiter: settings.output_delimiter.unwrap_or(','),
            quoting: settings.quoting,
        })
    }
}

/// The result of one conversion: the replacement text and the target-syntax
/// identifier for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub syntax: &'static str,
}

/// Convert a block of delimited text into `format`.
///
/// Fails on input with no parseable columns, and on formats whose structural
/// preconditions the input cannot meet (ASP needs at least one data row).
/// Sniffing and ragged rows never fail; they fall back or normalize.
pub fn convert(
    text: &str,
    format: Format,
    opts: &ConversionOptions,
) -> Result<Conversion, ConvertError> {
    tracing::debug!(format = %format, bytes = text.len(), "converting selection");

    let dialect = match &opts.dialect {
        DialectSource::Explicit(d) => *d,
        DialectSource::Sniff { default_delimiter } => {
            dialect::sniff(text, default_delimiter.as_deref()).dialect()
        }
    };

    let joiner = format
        .merges_headers()
        .then_some(opts.header_joiner.as_str());
    let resolved = headers::resolve(text, &dialect, opts.header_policy, joiner, opts.strip_quotes);
    if resolved.names.is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    let columns = resolved.names.len();

    // Typed formats take an independent pass over the text for inference;
    // the reader has no rewind contract.
    let types = if format.typed() {
        types::infer(
            RowReader::new(text, &dialect, columns, resolved.has_header),
            columns,
        )
    } else {
        vec![ColumnType::Str; columns]
    };

    let reader = RowReader::new(text, &dialect, columns, resolved.has_header);
    let ctx = RenderContext {
        headers: &resolved.names,
        types: &types,
        opts,
    };
    let output = render::render(format, reader, &ctx)?;

    Ok(Conversion {
        output,
        syntax: format.syntax(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_empty_input() {
        let opts = ConversionOptions::default();
        let err = convert("", Format::Json, &opts).unwrap_err();
        assert_eq!(err, ConvertError::EmptyInput);
    }

    #[test]
    fn test_conversion_carries_syntax_label() {
        let opts = ConversionOptions::default();
        let conv = convert("a,b\n1,2", Format::Json, &opts).unwrap();
        assert_eq!(conv.syntax, "source.json");
    }

    #[test]
    fn test_explicit_dialect_bypasses_sniffing() {
        let opts = ConversionOptions {
            dialect: DialectSource::Explicit(Dialect {
                delimiter: ';',
                quote: '\'',
                ..Dialect::default()
            }),
            ..ConversionOptions::default()
        };
        // Commas everywhere, but the explicit dialect says semicolons.
        let conv = convert("a;b,c\n'1;2';3\n", Format::JsonRows, &opts).unwrap();
        assert_eq!(conv.output, r#"[["1;2","3"]]"#);
    }
}

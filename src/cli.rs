//! Command-line argument parsing
//!
//! The binary stands in for a host editor: it supplies the raw text (a file
//! argument or stdin, playing the part of the selection), picks the target
//! format, and prints the rendered replacement text.

use clap::Parser;
use std::path::PathBuf;

use crate::convert::{ConversionOptions, ConvertError, DialectSource, Format, HeaderPolicy};
use crate::settings::Settings;

/// Convert delimited text into code, markup, SQL, and table formats
#[derive(Parser, Debug)]
#[command(name = "dataconv", version, about)]
pub struct CliArgs {
    /// Target format key (see --list-formats)
    #[arg(value_name = "FORMAT", required_unless_present = "list_formats")]
    pub format: Option<String>,

    /// Input file; reads stdin when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Header detection: always, never, or auto
    #[arg(long, value_name = "POLICY")]
    pub headers: Option<HeaderPolicyArg>,

    /// Fallback delimiter when sniffing fails
    #[arg(short = 'd', long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Delimiter written by the dsv format
    #[arg(long, value_name = "CHAR")]
    pub output_delimiter: Option<char>,

    /// Variable/table name used by literal and SQL formats
    #[arg(long, value_name = "NAME")]
    pub variable: Option<String>,

    /// Indent with N spaces
    #[arg(long, value_name = "N", conflicts_with = "tabs")]
    pub indent: Option<usize>,

    /// Indent with tabs instead of spaces
    #[arg(long)]
    pub tabs: bool,

    /// Print the target-syntax identifier to stderr
    #[arg(long)]
    pub syntax: bool,

    /// List supported format keys and exit
    #[arg(long)]
    pub list_formats: bool,
}

/// clap-facing mirror of `HeaderPolicy`.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum HeaderPolicyArg {
    Always,
    Never,
    Auto,
}

impl From<HeaderPolicyArg> for HeaderPolicy {
    fn from(arg: HeaderPolicyArg) -> Self {
        match arg {
            HeaderPolicyArg::Always => HeaderPolicy::Always,
            HeaderPolicyArg::Never => HeaderPolicy::Never,
            HeaderPolicyArg::Auto => HeaderPolicy::Auto,
        }
    }
}

impl CliArgs {
    /// Merge CLI overrides into the options assembled from user settings.
    pub fn into_options(&self, settings: &Settings) -> Result<ConversionOptions, ConvertError> {
        let mut opts = ConversionOptions::from_settings(settings)?;

        if let Some(policy) = self.headers {
            opts.header_policy = policy.into();
        }
        if let Some(d) = self.delimiter {
            opts.dialect = DialectSource::Sniff {
                default_delimiter: Some(d.to_string()),
            };
        }
        if let Some(d) = self.output_delimiter {
            opts.output_delimiter = d;
        }
        if let Some(name) = &self.variable {
            opts.variable = name.clone();
        }
        if self.tabs {
            opts.indent = "\t".to_string();
        } else if let Some(n) = self.indent {
            opts.indent = " ".repeat(n);
        }

        Ok(opts)
    }

    /// Parse the format key, failing on unknown keys.
    pub fn parse_format(&self) -> Result<Format, ConvertError> {
        match &self.format {
            Some(key) => key.parse(),
            None => Err(ConvertError::UnknownFormat(String::new())),
        }
    }
}

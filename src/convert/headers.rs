//! Header resolution
//!
//! Decides whether the first record is a header row and produces the ordered
//! header set, applying the space-joiner and quote-stripping transforms.
//! Duplicate names after transformation are passed through untouched; keyed
//! renderers let the last duplicate win. Known limitation, kept deliberately.

use serde::{Deserialize, Serialize};

use super::dialect::Dialect;
use super::rows::read_records;
use super::types::{classify, ColumnType};

/// Number of data records inspected by the `Auto` heuristic.
const AUTO_SAMPLE: usize = 5;

/// Whether the first record is treated as a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderPolicy {
    Always,
    Never,
    #[default]
    Auto,
}

impl std::str::FromStr for HeaderPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(HeaderPolicy::Always),
            "never" => Ok(HeaderPolicy::Never),
            "auto" => Ok(HeaderPolicy::Auto),
            other => Err(format!("unknown header policy: {other:?}")),
        }
    }
}

/// The resolved header set for one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedHeaders {
    /// Ordered field names; length is the column count.
    pub names: Vec<String>,
    /// True when the first record of the input is a header and must be
    /// skipped by the row reader.
    pub has_header: bool,
}

/// Resolve headers for `text` under `policy`.
///
/// `joiner` replaces spaces in header names (only passed for formats whose
/// target syntax forbids spaces in identifiers); `strip_quotes` trims
/// leading/trailing quote characters from each name. Synthesized names
/// (`val1..valN`) never need either transform.
pub fn resolve(
    text: &str,
    dialect: &Dialect,
    policy: HeaderPolicy,
    joiner: Option<&str>,
    strip_quotes: bool,
) -> ResolvedHeaders {
    let records = read_records(text, dialect, AUTO_SAMPLE + 1);
    let Some(first) = records.first() else {
        return ResolvedHeaders {
            names: Vec::new(),
            has_header: false,
        };
    };

    let has_header = match policy {
        HeaderPolicy::Always => true,
        HeaderPolicy::Never => false,
        HeaderPolicy::Auto => looks_like_header(first, &records[1..]),
    };

    let names = if has_header {
        first
            .iter()
            .map(|name| transform(name, joiner, strip_quotes))
            .collect()
    } else {
        (1..=first.len()).map(|n| format!("val{n}")).collect()
    };

    ResolvedHeaders { names, has_header }
}

/// Header heuristic: an all-string first record above data containing
/// numeric fields is a header, as is a first record whose type signature
/// differs from a uniform data signature. A numeric first record matching
/// uniform numeric data is not. Ambiguous samples (no data records, or
/// all-string throughout) resolve to "has header", since most input does.
fn looks_like_header(first: &[String], data: &[Vec<String>]) -> bool {
    if data.is_empty() {
        return true;
    }

    let first_sig = signature(first);
    let data_sigs: Vec<Vec<ColumnType>> = data.iter().map(|r| signature(r)).collect();

    let first_all_str = first_sig.iter().all(|t| *t == ColumnType::Str);
    let data_has_numeric = data_sigs
        .iter()
        .any(|sig| sig.iter().any(|t| t.is_numeric()));

    if first_all_str && data_has_numeric {
        return true;
    }

    let uniform = data_sigs.windows(2).all(|w| w[0] == w[1]);
    if uniform && first_sig != data_sigs[0] {
        return true;
    }
    if uniform && first_sig == data_sigs[0] && data_has_numeric {
        return false;
    }

    true
}

fn signature(record: &[String]) -> Vec<ColumnType> {
    record.iter().map(|f| classify(f)).collect()
}

fn transform(name: &str, joiner: Option<&str>, strip_quotes: bool) -> String {
    let mut out = match joiner {
        Some(j) => name.replace(' ', j),
        None => name.to_string(),
    };
    if strip_quotes {
        out = out.trim_matches(|c| c == '"' || c == '\'').to_string();
    }
    out
}

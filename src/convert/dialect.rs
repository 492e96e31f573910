//! Dialect model and delimiter sniffing
//!
//! A `Dialect` describes how a block of delimited text is split into fields:
//! delimiter, quote character, optional escape character, and quoting policy.
//! `sniff` guesses a dialect from a text sample, falling back through a chain
//! of named steps so callers (and tests) can see which one fired.

use serde::{Deserialize, Serialize};

/// Candidate delimiters tried by the sniffer, in tie-break order.
const CANDIDATES: [char; 5] = [',', '\t', ';', '|', ':'];

/// Maximum number of sample bytes inspected while sniffing.
const SAMPLE_CAP: usize = 1024;

/// Quoting policy for writing delimited output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    /// Quote only fields that contain the delimiter, quote, or a newline.
    #[default]
    Minimal,
    /// Quote every field.
    All,
    /// Never quote.
    None,
}

/// How a block of delimited text is split into fields.
///
/// Immutable once resolved for a conversion. The delimiter is always exactly
/// one ASCII character (the parser works on bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: char,
    pub quote: char,
    pub escape: Option<char>,
    pub quoting: Quoting,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
            escape: None,
            quoting: Quoting::Minimal,
        }
    }
}

impl Dialect {
    /// Comma-delimited, double-quoted dialect. The end of every fallback chain.
    pub fn fallback() -> Self {
        Self::default()
    }

    /// A dialect differing from the default only in its delimiter.
    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            delimiter,
            ..Self::default()
        }
    }
}

/// Result of dialect resolution, tagged with the step that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sniffed {
    /// The per-line consistency heuristic found a delimiter.
    Detected(Dialect),
    /// The heuristic failed; the user-configured default delimiter was used.
    ConfiguredDefault(Dialect),
    /// Nothing else applied; hard-coded comma dialect.
    Fallback(Dialect),
}

impl Sniffed {
    pub fn dialect(&self) -> Dialect {
        match *self {
            Sniffed::Detected(d) | Sniffed::ConfiguredDefault(d) | Sniffed::Fallback(d) => d,
        }
    }
}

/// Guess a dialect from a text sample.
///
/// Tries the consistency heuristic first, then the configured default
/// delimiter (if it is exactly one ASCII character), then the comma fallback.
/// Never fails.
pub fn sniff(sample: &str, default_delimiter: Option<&str>) -> Sniffed {
    let sample = truncate_at_boundary(sample, SAMPLE_CAP);

    if let Some(delimiter) = detect_delimiter(sample) {
        tracing::debug!(%delimiter, "sniffed delimiter");
        return Sniffed::Detected(Dialect::with_delimiter(delimiter));
    }

    if let Some(d) = default_delimiter {
        let mut chars = d.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii() {
                tracing::debug!(delimiter = %c, "sniffing failed, using configured default");
                return Sniffed::ConfiguredDefault(Dialect::with_delimiter(c));
            }
        }
        tracing::warn!(configured = %d, "configured delimiter is not a single ASCII character");
    }

    tracing::debug!("sniffing failed, using comma fallback");
    Sniffed::Fallback(Dialect::fallback())
}

/// Per-line consistency heuristic: a candidate wins when every non-empty
/// sample line contains it the same nonzero number of times (counted outside
/// double quotes). Ties go to the higher count, then candidate order.
fn detect_delimiter(sample: &str) -> Option<char> {
    let lines: Vec<&str> = sample.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return None;
    }

    let mut best: Option<(char, usize)> = None;
    for &candidate in &CANDIDATES {
        let first = count_unquoted(lines[0], candidate);
        if first == 0 {
            continue;
        }
        if lines
            .iter()
            .all(|line| count_unquoted(line, candidate) == first)
        {
            match best {
                Some((_, count)) if count >= first => {}
                _ => best = Some((candidate, first)),
            }
        }
    }

    best.map(|(c, _)| c)
}

/// Count occurrences of `target` outside double-quoted regions.
fn count_unquoted(line: &str, target: char) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == target && !in_quotes {
            count += 1;
        }
    }
    count
}

/// Truncate to at most `max` bytes without splitting a UTF-8 sequence.
fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

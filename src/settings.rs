//! User settings persistence
//!
//! Stores conversion preferences in `~/.config/dataconv/config.yaml`.
//! Every field has a working default, so a missing or broken file never
//! blocks a conversion.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::convert::{ConvertError, Dialect, HeaderPolicy, Quoting};

/// A named dialect definition in the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialectDef {
    /// Field delimiter; must be exactly one ASCII character.
    pub delimiter: String,
    #[serde(default)]
    pub quote: Option<char>,
    #[serde(default)]
    pub escape: Option<char>,
    #[serde(default)]
    pub quoting: Option<Quoting>,
}

/// User settings that persist across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Header detection policy: always, never, or auto.
    #[serde(default)]
    pub headers: HeaderPolicy,
    /// Output line separator; OS default when absent.
    #[serde(default)]
    pub line_sep: Option<String>,
    #[serde(default = "default_true")]
    pub translate_tabs_to_spaces: bool,
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
    /// Fallback delimiter when sniffing fails.
    #[serde(default)]
    pub delimiter: Option<String>,
    /// Name of a dialect from `dialects` to use instead of sniffing.
    #[serde(default)]
    pub use_dialect: Option<String>,
    /// Named custom dialect definitions.
    #[serde(default)]
    pub dialects: HashMap<String, DialectDef>,
    /// When false, markup formats escape non-ASCII characters as numeric
    /// character references.
    #[serde(default = "default_true")]
    pub html_utf8: bool,
    /// Replacement for spaces in header names, for formats that need it.
    #[serde(default = "default_header_joiner")]
    pub header_joiner: String,
    #[serde(default)]
    pub strip_quotes: bool,
    /// Variable/table name used by literal and SQL formats.
    #[serde(default = "default_variable")]
    pub default_variable: String,
    /// Delimiter written by the dsv format.
    #[serde(default)]
    pub output_delimiter: Option<char>,
    /// Quoting policy for the dsv format.
    #[serde(default)]
    pub quoting: Quoting,
}

fn default_true() -> bool {
    true
}

fn default_tab_size() -> usize {
    4
}

fn default_header_joiner() -> String {
    "_".to_string()
}

fn default_variable() -> String {
    "data_converter".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            headers: HeaderPolicy::default(),
            line_sep: None,
            translate_tabs_to_spaces: true,
            tab_size: default_tab_size(),
            delimiter: None,
            use_dialect: None,
            dialects: HashMap::new(),
            html_utf8: true,
            header_joiner: default_header_joiner(),
            strip_quotes: false,
            default_variable: default_variable(),
            output_delimiter: None,
            quoting: Quoting::default(),
        }
    }
}

/// Location of the settings file, if a config directory exists.
pub fn settings_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dataconv").join("config.yaml"))
}

impl Settings {
    /// Load settings from the default location, or return defaults.
    pub fn load() -> Self {
        let Some(path) = settings_file() else {
            tracing::debug!("no config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, or return defaults if missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("settings file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("failed to parse settings at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Resolve a named dialect from the `dialects` table.
    ///
    /// This path is an explicit user request, so unlike sniffing it fails
    /// loudly: a missing name or a delimiter that is not exactly one ASCII
    /// character is an error, not a fallback.
    pub fn resolve_dialect(&self, name: &str) -> Result<Dialect, ConvertError> {
        let def = self
            .dialects
            .get(name)
            .ok_or_else(|| ConvertError::BadDialect(format!("no dialect named {name:?}")))?;

        let mut chars = def.delimiter.chars();
        let delimiter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => c,
            _ => {
                return Err(ConvertError::BadDialect(format!(
                    "dialect {name:?} delimiter must be one ASCII character, got {:?}",
                    def.delimiter
                )))
            }
        };

        // The reader works on bytes, so quote and escape get the same
        // single-ASCII check as the delimiter.
        if let Some(q) = def.quote {
            if !q.is_ascii() {
                return Err(ConvertError::BadDialect(format!(
                    "dialect {name:?} quote must be an ASCII character, got {q:?}"
                )));
            }
        }
        if let Some(e) = def.escape {
            if !e.is_ascii() {
                return Err(ConvertError::BadDialect(format!(
                    "dialect {name:?} escape must be an ASCII character, got {e:?}"
                )));
            }
        }

        Ok(Dialect {
            delimiter,
            quote: def.quote.unwrap_or('"'),
            escape: def.escape,
            quoting: def.quoting.unwrap_or_default(),
        })
    }
}

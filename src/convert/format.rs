//! Output format registry
//!
//! Every target format is a variant of `Format`, so the key-to-renderer
//! mapping is checked at compile time. A format carries three facts used by
//! the pipeline: its stable string key, the syntax identifier handed back to
//! the host for highlighting, and whether it merges header spaces or applies
//! column typing.

use super::error::ConvertError;

/// A supported output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    ActionScript,
    Asp,
    Dsv,
    Gherkin,
    Html,
    JavaScript,
    Jira,
    Json,
    JsonColumns,
    JsonRows,
    Markdown,
    Mysql,
    Perl,
    Php,
    Postgres,
    PythonDict,
    PythonList,
    Ruby,
    Sqlite,
    TextTable,
    Wiki,
    Xml,
    XmlProperties,
    Yaml,
}

/// All formats, in key order. Drives `FromStr` and `--list-formats`.
pub const ALL_FORMATS: [Format; 24] = [
    Format::ActionScript,
    Format::Asp,
    Format::Dsv,
    Format::Gherkin,
    Format::Html,
    Format::JavaScript,
    Format::Jira,
    Format::Json,
    Format::JsonColumns,
    Format::JsonRows,
    Format::Markdown,
    Format::Mysql,
    Format::Perl,
    Format::Php,
    Format::Postgres,
    Format::PythonDict,
    Format::PythonList,
    Format::Ruby,
    Format::Sqlite,
    Format::TextTable,
    Format::Wiki,
    Format::Xml,
    Format::XmlProperties,
    Format::Yaml,
];

impl Format {
    /// Stable string key used by hosts and the CLI.
    pub fn key(self) -> &'static str {
        match self {
            Format::ActionScript => "actionscript",
            Format::Asp => "asp",
            Format::Dsv => "dsv",
            Format::Gherkin => "gherkin",
            Format::Html => "html",
            Format::JavaScript => "javascript",
            Format::Jira => "jira",
            Format::Json => "json",
            Format::JsonColumns => "json_columns",
            Format::JsonRows => "json_rows",
            Format::Markdown => "markdown",
            Format::Mysql => "mysql",
            Format::Perl => "perl",
            Format::Php => "php",
            Format::Postgres => "postgres",
            Format::PythonDict => "python_dict",
            Format::PythonList => "python_list",
            Format::Ruby => "ruby",
            Format::Sqlite => "sqlite",
            Format::TextTable => "text_table",
            Format::Wiki => "wiki",
            Format::Xml => "xml",
            Format::XmlProperties => "xml_properties",
            Format::Yaml => "yaml",
        }
    }

    /// Target-syntax identifier handed back to the host editor. Pass-through
    /// label only; the core never interprets it.
    pub fn syntax(self) -> &'static str {
        match self {
            Format::ActionScript => "source.actionscript",
            Format::Asp => "source.asp",
            Format::Dsv => "text.plain",
            Format::Gherkin => "text.gherkin.feature",
            Format::Html => "text.html.basic",
            Format::JavaScript => "source.js",
            Format::Jira => "text.plain",
            Format::Json | Format::JsonColumns | Format::JsonRows => "source.json",
            Format::Markdown => "text.html.markdown",
            Format::Mysql | Format::Postgres | Format::Sqlite => "source.sql",
            Format::Perl => "source.perl",
            Format::Php => "source.php",
            Format::PythonDict | Format::PythonList => "source.python",
            Format::Ruby => "source.ruby",
            Format::TextTable => "text.plain",
            Format::Wiki => "text.html.mediawiki",
            Format::Xml | Format::XmlProperties => "text.xml",
            Format::Yaml => "source.yaml",
        }
    }

    /// Formats whose target syntax forbids spaces in identifiers; their
    /// header names get the space-joiner substitution.
    pub fn merges_headers(self) -> bool {
        matches!(
            self,
            Format::ActionScript
                | Format::JavaScript
                | Format::Mysql
                | Format::Postgres
                | Format::Sqlite
                | Format::Xml
                | Format::XmlProperties
        )
    }

    /// Formats that apply the inferred column types (strings quoted,
    /// numerics bare). Untyped formats render every column as a string.
    pub fn typed(self) -> bool {
        matches!(
            self,
            Format::ActionScript
                | Format::Asp
                | Format::JavaScript
                | Format::Json
                | Format::Mysql
                | Format::Perl
                | Format::Php
                | Format::Postgres
                | Format::Ruby
                | Format::Sqlite
        )
    }
}

impl std::str::FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FORMATS
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| ConvertError::UnknownFormat(s.to_string()))
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

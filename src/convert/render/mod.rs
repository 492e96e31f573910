//! Format renderer family
//!
//! One renderer per `Format` variant, each a pure function of
//! (rows, headers, types, options) producing the output string. Renderers are
//! total over ragged input; the row reader has already normalized every row
//! to the column count. The only renderer-level failure is the ASP array
//! form, which needs at least one data row.

mod dsv;
mod json;
mod literal;
mod markup;
mod sql;
mod table;
mod yaml;

use super::error::ConvertError;
use super::format::Format;
use super::rows::{Field, Row};
use super::types::ColumnType;
use super::ConversionOptions;

/// Read-only inputs shared by every renderer.
pub struct RenderContext<'a> {
    pub headers: &'a [String],
    pub types: &'a [ColumnType],
    pub opts: &'a ConversionOptions,
}

/// Render `rows` in `format`.
pub fn render(
    format: Format,
    rows: impl Iterator<Item = Row>,
    ctx: &RenderContext,
) -> Result<String, ConvertError> {
    match format {
        Format::ActionScript => Ok(literal::actionscript(rows, ctx)),
        Format::Asp => literal::asp(rows, ctx),
        Format::Dsv => Ok(dsv::dsv(rows, ctx)),
        Format::Gherkin => Ok(table::gherkin(rows, ctx)),
        Format::Html => Ok(markup::html(rows, ctx)),
        Format::JavaScript => Ok(literal::javascript(rows, ctx)),
        Format::Jira => Ok(table::jira(rows, ctx)),
        Format::Json => Ok(json::keyed(rows, ctx)),
        Format::JsonColumns => Ok(json::columns(rows, ctx)),
        Format::JsonRows => Ok(json::rows(rows, ctx)),
        Format::Markdown => Ok(table::markdown(rows, ctx)),
        Format::Mysql => Ok(sql::mysql(rows, ctx)),
        Format::Perl => Ok(literal::perl(rows, ctx)),
        Format::Php => Ok(literal::php(rows, ctx)),
        Format::Postgres => Ok(sql::postgres(rows, ctx)),
        Format::PythonDict => Ok(literal::python_dict(rows, ctx)),
        Format::PythonList => Ok(literal::python_list(rows, ctx)),
        Format::Ruby => Ok(literal::ruby(rows, ctx)),
        Format::Sqlite => Ok(sql::sqlite(rows, ctx)),
        Format::TextTable => Ok(table::text_table(rows, ctx)),
        Format::Wiki => Ok(table::wiki(rows, ctx)),
        Format::Xml => Ok(markup::xml(rows, ctx)),
        Format::XmlProperties => Ok(markup::xml_properties(rows, ctx)),
        Format::Yaml => Ok(yaml::sequence(rows, ctx)),
    }
}

/// Quote `value`, escaping backslashes and the quote character with a
/// backslash. The convention shared by the C-family literal renderers.
pub(crate) fn quote_backslash(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        if ch == '\\' || ch == quote {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push(quote);
    out
}

/// Render one field as a code literal: null literal for missing fields,
/// quoted text for string columns, raw text for numeric columns.
pub(crate) fn literal_field(
    field: &Field,
    ty: ColumnType,
    quote: char,
    null: &'static str,
) -> String {
    match field {
        None => null.to_string(),
        Some(value) if ty == ColumnType::Str => quote_backslash(value, quote),
        Some(value) => value.clone(),
    }
}

/// The field's text, or the empty string for missing fields. Used by
/// renderers whose null representation is an absent/empty cell.
pub(crate) fn field_or_empty(field: &Field) -> &str {
    field.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_field_quotes_strings() {
        let field = Some("hello".to_string());
        assert_eq!(
            literal_field(&field, ColumnType::Str, '"', "null"),
            "\"hello\""
        );
    }

    #[test]
    fn test_literal_field_numeric_passthrough() {
        let field = Some("3.5".to_string());
        assert_eq!(literal_field(&field, ColumnType::Float, '"', "null"), "3.5");
    }

    #[test]
    fn test_literal_field_null() {
        assert_eq!(literal_field(&None, ColumnType::Str, '"', "nil"), "nil");
    }

    #[test]
    fn test_quote_backslash_escapes() {
        assert_eq!(quote_backslash(r#"a"b\c"#, '"'), r#""a\"b\\c""#);
        assert_eq!(quote_backslash("it's", '\''), r"'it\'s'");
    }
}

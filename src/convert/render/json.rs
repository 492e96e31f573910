//! JSON renderers
//!
//! Three shapes: keyed objects, column arrays, and row arrays. All output is
//! built as `serde_json::Value` and serialized, so it always parses back as
//! valid JSON, including `[]`/`{}` shells for zero rows. The keyed form is
//! typed: fields in numeric columns are emitted as JSON numbers when the raw
//! text parses, falling back to strings when it does not.

use serde_json::{Map, Value};

use super::RenderContext;
use crate::convert::rows::{Field, Row};
use crate::convert::types::ColumnType;

fn string_value(field: &Field) -> Value {
    match field {
        None => Value::Null,
        Some(v) => Value::String(v.clone()),
    }
}

fn typed_value(field: &Field, ty: ColumnType) -> Value {
    let Some(raw) = field else {
        return Value::Null;
    };
    let trimmed = raw.trim();
    match ty {
        ColumnType::Int => trimmed
            .parse::<i64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::String(raw.clone())),
        ColumnType::Float => trimmed
            .parse::<f64>()
            .ok()
            .and_then(|f| serde_json::Number::from_f64(f).map(Value::Number))
            .unwrap_or_else(|| Value::String(raw.clone())),
        ColumnType::Str => Value::String(raw.clone()),
    }
}

/// `[{"k": v, ...}, ...]` — array of keyed objects.
pub fn keyed(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let array: Vec<Value> = rows
        .map(|row| {
            let mut object = Map::new();
            for ((key, ty), field) in ctx.headers.iter().zip(ctx.types).zip(&row) {
                object.insert(key.clone(), typed_value(field, *ty));
            }
            Value::Object(object)
        })
        .collect();
    Value::Array(array).to_string()
}

/// `{"k": [v, v, ...], ...}` — object of column arrays. Columns are
/// collected by position first, so under duplicate header names the last
/// duplicate's column survives the keyed insert.
pub fn columns(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let mut column_values: Vec<Vec<Value>> = vec![Vec::new(); ctx.headers.len()];
    for row in rows {
        for (col, field) in row.iter().take(ctx.headers.len()).enumerate() {
            column_values[col].push(string_value(field));
        }
    }
    let mut object = Map::new();
    for (key, values) in ctx.headers.iter().zip(column_values) {
        object.insert(key.clone(), Value::Array(values));
    }
    Value::Object(object).to_string()
}

/// `[[v, v, ...], ...]` — array of row arrays.
pub fn rows(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let array: Vec<Value> = rows
        .map(|row| {
            Value::Array(
                row.iter()
                    .take(ctx.headers.len())
                    .map(string_value)
                    .collect(),
            )
        })
        .collect();
    Value::Array(array).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConversionOptions;

    fn sample() -> (Vec<String>, Vec<ColumnType>, Vec<Row>) {
        (
            vec!["name".to_string(), "age".to_string()],
            vec![ColumnType::Str, ColumnType::Int],
            vec![
                vec![Some("Ada".to_string()), Some("36".to_string())],
                vec![Some("Linus".to_string()), Some("54".to_string())],
            ],
        )
    }

    #[test]
    fn test_keyed_emits_numbers_for_numeric_columns() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        let out = keyed(rows.into_iter(), &ctx);
        assert_eq!(
            out,
            r#"[{"name":"Ada","age":36},{"name":"Linus","age":54}]"#
        );
    }

    #[test]
    fn test_rows_are_all_strings() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        let out = super::rows(rows.into_iter(), &ctx);
        assert_eq!(out, r#"[["Ada","36"],["Linus","54"]]"#);
    }

    #[test]
    fn test_columns_keep_header_order() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        let out = columns(rows.into_iter(), &ctx);
        assert_eq!(out, r#"{"name":["Ada","Linus"],"age":["36","54"]}"#);
    }

    #[test]
    fn test_columns_duplicate_headers_last_wins() {
        let headers = vec!["x".to_string(), "x".to_string()];
        let types = vec![ColumnType::Str, ColumnType::Str];
        let opts = ConversionOptions::default();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        let rows = vec![
            vec![Some("1".to_string()), Some("2".to_string())],
            vec![Some("3".to_string()), Some("4".to_string())],
        ];
        let out = columns(rows.into_iter(), &ctx);
        // One entry, holding only the second column's values.
        assert_eq!(out, r#"{"x":["2","4"]}"#);
    }

    #[test]
    fn test_zero_rows_still_valid_json() {
        let (headers, types, _) = sample();
        let opts = ConversionOptions::default();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        assert_eq!(keyed(std::iter::empty(), &ctx), "[]");
        assert_eq!(super::rows(std::iter::empty(), &ctx), "[]");
        let cols = columns(std::iter::empty(), &ctx);
        let parsed: serde_json::Value = serde_json::from_str(&cols).unwrap();
        assert!(parsed.is_object());
    }

    #[test]
    fn test_unparseable_numeric_falls_back_to_string() {
        // Column voted Int from the sample, but a later row disagrees.
        let field = Some("not-a-number".to_string());
        assert_eq!(
            typed_value(&field, ColumnType::Int),
            Value::String("not-a-number".to_string())
        );
    }
}

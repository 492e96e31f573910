//! YAML renderer
//!
//! Sequence of mappings, one per row, built with serde_yaml so the output is
//! always parseable YAML. Untyped: values stay strings, missing fields
//! become YAML nulls.

use serde_yaml::{Mapping, Value};

use super::RenderContext;
use crate::convert::rows::Row;

pub fn sequence(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let seq: Vec<Value> = rows
        .map(|row| {
            let mut mapping = Mapping::new();
            for (key, field) in ctx.headers.iter().zip(&row) {
                let value = match field {
                    None => Value::Null,
                    Some(v) => Value::String(v.clone()),
                };
                mapping.insert(Value::String(key.clone()), value);
            }
            Value::Mapping(mapping)
        })
        .collect();

    serde_yaml::to_string(&seq).unwrap_or_else(|_| "[]".to_string())
}

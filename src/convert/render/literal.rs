//! Language literal renderers
//!
//! Object/array literals for ActionScript, JavaScript, PHP, Perl, Ruby, and
//! Python, plus the VBScript/ASP array-assignment form. Each joins per-row
//! key/value literal strings with the target language's separators and
//! enclosing brackets.

use super::{literal_field, quote_backslash, RenderContext};
use crate::convert::error::ConvertError;
use crate::convert::rows::Row;
use crate::convert::types::ColumnType;

/// `[{k:v,...},\n{...}];`
pub fn actionscript(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let body: Vec<String> = rows
        .map(|row| {
            let entries: Vec<String> = ctx
                .headers
                .iter()
                .zip(ctx.types)
                .zip(&row)
                .map(|((key, ty), field)| {
                    format!("{key}:{}", literal_field(field, *ty, '"', "null"))
                })
                .collect();
            format!("{{{}}}", entries.join(","))
        })
        .collect();
    format!("[{}];", body.join(&format!(",{}", ctx.opts.newline)))
}

/// `var <name> = [\n<indent>{k: v, ...},\n...\n];`
pub fn javascript(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let body: Vec<String> = rows
        .map(|row| {
            let entries: Vec<String> = ctx
                .headers
                .iter()
                .zip(ctx.types)
                .zip(&row)
                .map(|((key, ty), field)| {
                    format!("{key}: {}", literal_field(field, *ty, '"', "null"))
                })
                .collect();
            format!("{}{{{}}}", ctx.opts.indent, entries.join(", "))
        })
        .collect();
    format!(
        "var {} = [{nl}{}{nl}];",
        ctx.opts.variable,
        body.join(&format!(",{nl}"))
    )
}

/// `$<name> = array(\n<indent>array("k"=>v, ...),\n...\n);`
pub fn php(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let body: Vec<String> = rows
        .map(|row| {
            let entries: Vec<String> = ctx
                .headers
                .iter()
                .zip(ctx.types)
                .zip(&row)
                .map(|((key, ty), field)| {
                    format!("\"{key}\"=>{}", literal_field(field, *ty, '"', "null"))
                })
                .collect();
            format!("{}array({})", ctx.opts.indent, entries.join(", "))
        })
        .collect();
    format!(
        "${} = array({nl}{}{nl});",
        ctx.opts.variable,
        body.join(&format!(",{nl}"))
    )
}

/// `my $<name> = [\n<indent>{"k"=>v, ...},\n...\n];` with `undef` nulls.
pub fn perl(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let body: Vec<String> = rows
        .map(|row| {
            let entries: Vec<String> = ctx
                .headers
                .iter()
                .zip(ctx.types)
                .zip(&row)
                .map(|((key, ty), field)| {
                    format!("\"{key}\"=>{}", literal_field(field, *ty, '"', "undef"))
                })
                .collect();
            format!("{}{{{}}}", ctx.opts.indent, entries.join(", "))
        })
        .collect();
    format!(
        "my ${} = [{nl}{}{nl}];",
        ctx.opts.variable,
        body.join(&format!(",{nl}"))
    )
}

/// `[{"k"=>v, ...},\n{...}];` with `nil` nulls.
pub fn ruby(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let body: Vec<String> = rows
        .map(|row| {
            let entries: Vec<String> = ctx
                .headers
                .iter()
                .zip(ctx.types)
                .zip(&row)
                .map(|((key, ty), field)| {
                    format!("\"{key}\"=>{}", literal_field(field, *ty, '"', "nil"))
                })
                .collect();
            format!("{{{}}}", entries.join(", "))
        })
        .collect();
    format!("[{}];", body.join(&format!(",{}", ctx.opts.newline)))
}

/// `[{'k': 'v', ...}, ...]` with `None` nulls. Untyped: every value quoted.
pub fn python_dict(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let body: Vec<String> = rows
        .map(|row| {
            let entries: Vec<String> = ctx
                .headers
                .iter()
                .zip(ctx.types)
                .zip(&row)
                .map(|((key, ty), field)| {
                    format!(
                        "{}: {}",
                        quote_backslash(key, '\''),
                        literal_field(field, *ty, '\'', "None")
                    )
                })
                .collect();
            format!("{{{}}}", entries.join(", "))
        })
        .collect();
    format!("[{}]", body.join(", "))
}

/// `[['h1', 'h2'], ['v', ...], ...]`: header list first, then row lists.
pub fn python_list(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let header: Vec<String> = ctx
        .headers
        .iter()
        .map(|h| quote_backslash(h, '\''))
        .collect();
    let mut body = vec![format!("[{}]", header.join(", "))];
    for row in rows {
        let values: Vec<String> = ctx
            .types
            .iter()
            .zip(&row)
            .map(|(ty, field)| literal_field(field, *ty, '\'', "None"))
            .collect();
        body.push(format!("[{}]", values.join(", ")));
    }
    format!("[{}]", body.join(", "))
}

/// VBScript two-dimensional array: `Dim <name>(C,R)` then one assignment per
/// cell. Needs at least one data row to size the array.
pub fn asp(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> Result<String, ConvertError> {
    let rows: Vec<Row> = rows.collect();
    if rows.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let nl = &ctx.opts.newline;
    let name = &ctx.opts.variable;
    let mut out = format!(
        "Dim {name}({},{}){nl}",
        ctx.headers.len().saturating_sub(1),
        rows.len() - 1
    );
    for (r, row) in rows.iter().enumerate() {
        for (c, (ty, field)) in ctx.types.iter().zip(row).enumerate() {
            let value = match field {
                None => "Null".to_string(),
                Some(v) if *ty == ColumnType::Str => vb_quote(v),
                Some(v) => v.clone(),
            };
            out.push_str(&format!("{name}({c},{r}) = {value}{nl}"));
        }
    }
    if out.ends_with(nl.as_str()) {
        out.truncate(out.len() - nl.len());
    }
    Ok(out)
}

/// VBScript quotes strings with `"` and escapes embedded quotes by doubling.
fn vb_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConversionOptions;

    fn ctx<'a>(
        headers: &'a [String],
        types: &'a [ColumnType],
        opts: &'a ConversionOptions,
    ) -> RenderContext<'a> {
        RenderContext {
            headers,
            types,
            opts,
        }
    }

    fn sample() -> (Vec<String>, Vec<ColumnType>, Vec<Row>) {
        (
            vec!["name".to_string(), "age".to_string()],
            vec![ColumnType::Str, ColumnType::Int],
            vec![
                vec![Some("Ada".to_string()), Some("36".to_string())],
                vec![Some("Linus".to_string()), None],
            ],
        )
    }

    #[test]
    fn test_javascript_shape() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = javascript(rows.into_iter(), &ctx(&headers, &types, &opts));
        assert!(out.starts_with("var data_converter = ["));
        assert!(out.contains("{name: \"Ada\", age: 36}"));
        assert!(out.contains("{name: \"Linus\", age: null}"));
        assert!(out.ends_with("];"));
    }

    #[test]
    fn test_ruby_uses_nil() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = ruby(rows.into_iter(), &ctx(&headers, &types, &opts));
        assert!(out.contains("{\"name\"=>\"Linus\", \"age\"=>nil}"));
    }

    #[test]
    fn test_perl_uses_undef() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = perl(rows.into_iter(), &ctx(&headers, &types, &opts));
        assert!(out.starts_with("my $data_converter = ["));
        assert!(out.contains("\"age\"=>undef"));
    }

    #[test]
    fn test_python_dict_quotes_everything() {
        let (headers, _, rows) = sample();
        let types = vec![ColumnType::Str, ColumnType::Str];
        let opts = ConversionOptions::default();
        let out = python_dict(rows.into_iter(), &ctx(&headers, &types, &opts));
        assert!(out.contains("{'name': 'Ada', 'age': '36'}"));
        assert!(out.contains("'age': None"));
    }

    #[test]
    fn test_python_list_header_first() {
        let (headers, _, rows) = sample();
        let types = vec![ColumnType::Str, ColumnType::Str];
        let opts = ConversionOptions::default();
        let out = python_list(rows.into_iter(), &ctx(&headers, &types, &opts));
        assert!(out.starts_with("[['name', 'age'], ['Ada', '36'],"));
    }

    #[test]
    fn test_asp_layout_and_quote_doubling() {
        let (headers, types, _) = sample();
        let rows = vec![vec![
            Some("say \"hi\"".to_string()),
            Some("7".to_string()),
        ]];
        let opts = ConversionOptions::default();
        let out = asp(rows.into_iter(), &ctx(&headers, &types, &opts)).unwrap();
        assert!(out.starts_with("Dim data_converter(1,0)"));
        assert!(out.contains("data_converter(0,0) = \"say \"\"hi\"\"\""));
        assert!(out.contains("data_converter(1,0) = 7"));
    }

    #[test]
    fn test_asp_rejects_empty_input() {
        let (headers, types, _) = sample();
        let opts = ConversionOptions::default();
        let err = asp(std::iter::empty(), &ctx(&headers, &types, &opts)).unwrap_err();
        assert_eq!(err, ConvertError::EmptyInput);
    }

    #[test]
    fn test_actionscript_empty_rows_shell() {
        let (headers, types, _) = sample();
        let opts = ConversionOptions::default();
        let out = actionscript(std::iter::empty(), &ctx(&headers, &types, &opts));
        assert_eq!(out, "[];");
    }
}

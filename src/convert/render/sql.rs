//! SQL statement renderers
//!
//! One engine, three flavors: MySQL, PostgreSQL, SQLite. Output is a
//! `CREATE TABLE` derived from headers and inferred types, followed by a
//! multi-row `INSERT`. Strings are single-quoted with embedded quotes
//! doubled; missing fields become `NULL`. With zero data rows only the
//! `CREATE TABLE` statement is emitted.

use super::RenderContext;
use crate::convert::rows::Row;
use crate::convert::types::ColumnType;

struct Flavor {
    id_column: &'static str,
    text_type: &'static str,
    float_type: &'static str,
    int_type: &'static str,
}

const MYSQL: Flavor = Flavor {
    id_column: "id INT NOT NULL AUTO_INCREMENT PRIMARY KEY",
    text_type: "VARCHAR(255)",
    float_type: "FLOAT",
    int_type: "INT",
};

const POSTGRES: Flavor = Flavor {
    id_column: "id serial PRIMARY KEY",
    text_type: "varchar(255)",
    float_type: "double precision",
    int_type: "integer",
};

const SQLITE: Flavor = Flavor {
    id_column: "id INTEGER PRIMARY KEY AUTOINCREMENT",
    text_type: "TEXT",
    float_type: "REAL",
    int_type: "INTEGER",
};

pub fn mysql(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    statements(rows, ctx, &MYSQL)
}

pub fn postgres(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    statements(rows, ctx, &POSTGRES)
}

pub fn sqlite(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    statements(rows, ctx, &SQLITE)
}

fn statements(rows: impl Iterator<Item = Row>, ctx: &RenderContext, flavor: &Flavor) -> String {
    let nl = &ctx.opts.newline;
    let ind = &ctx.opts.indent;
    let table = &ctx.opts.variable;

    let mut columns = vec![format!("{ind}{}", flavor.id_column)];
    for (header, ty) in ctx.headers.iter().zip(ctx.types) {
        let sql_type = match ty {
            ColumnType::Str => flavor.text_type,
            ColumnType::Float => flavor.float_type,
            ColumnType::Int => flavor.int_type,
        };
        columns.push(format!("{ind}{header} {sql_type}"));
    }
    let create = format!(
        "CREATE TABLE {table}({nl}{}{nl});{nl}",
        columns.join(&format!(",{nl}"))
    );

    let tuples: Vec<String> = rows
        .map(|row| {
            let values: Vec<String> = ctx
                .types
                .iter()
                .zip(&row)
                .map(|(ty, field)| match field {
                    None => "NULL".to_string(),
                    Some(v) if *ty == ColumnType::Str => sql_quote(v),
                    Some(v) => v.clone(),
                })
                .collect();
            format!("{ind}({})", values.join(","))
        })
        .collect();

    if tuples.is_empty() {
        return create;
    }

    format!(
        "{create}INSERT INTO {table}{nl}{ind}({}){nl}VALUES{nl}{};",
        ctx.headers.join(","),
        tuples.join(&format!(",{nl}"))
    )
}

/// Single-quote a string value, doubling embedded quotes.
fn sql_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

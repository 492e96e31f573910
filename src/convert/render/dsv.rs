//! Delimiter-to-delimiter rewrite
//!
//! Re-emits the header row and every data row with the configured output
//! delimiter. Quoting uses the conversion dialect's quote character and
//! follows the doubling convention the csv crate parses: a field is quoted
//! when it contains the delimiter, the quote character, or a line break, so
//! the output round-trips through the row reader under the same dialect.

use super::{field_or_empty, RenderContext};
use crate::convert::dialect::Quoting;
use crate::convert::rows::Row;
use crate::convert::DialectSource;

pub fn dsv(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let delimiter = ctx.opts.output_delimiter;
    let quote = match &ctx.opts.dialect {
        DialectSource::Explicit(d) => d.quote,
        DialectSource::Sniff { .. } => '"',
    };
    let nl = &ctx.opts.newline;
    let quoting = ctx.opts.quoting;

    let mut lines = vec![emit_record(
        ctx.headers.iter().map(String::as_str),
        delimiter,
        quote,
        quoting,
    )];
    for row in rows {
        lines.push(emit_record(
            row.iter().map(field_or_empty),
            delimiter,
            quote,
            quoting,
        ));
    }
    lines.join(nl)
}

fn emit_record<'a>(
    fields: impl Iterator<Item = &'a str>,
    delimiter: char,
    quote: char,
    quoting: Quoting,
) -> String {
    fields
        .map(|f| emit_field(f, delimiter, quote, quoting))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

fn emit_field(field: &str, delimiter: char, quote: char, quoting: Quoting) -> String {
    let needs_quotes = match quoting {
        Quoting::All => true,
        Quoting::None => false,
        Quoting::Minimal => {
            field.contains(delimiter)
                || field.contains(quote)
                || field.contains('\n')
                || field.contains('\r')
        }
    };
    if !needs_quotes {
        return field.to_string();
    }
    let doubled = field.replace(quote, &format!("{quote}{quote}"));
    format!("{quote}{doubled}{quote}")
}

//! Markup renderers: HTML table, XML nodes, XML attributes
//!
//! Reserved characters (`&`, `<`, `>`, and `"` inside attributes) are always
//! escaped. When `html_utf8` is off, every non-ASCII character is emitted as
//! a decimal numeric character reference, so the output survives transport
//! through ASCII-only channels and decodes back to the original text.

use super::{field_or_empty, RenderContext};
use crate::convert::rows::Row;

/// Escape a value for element content or attribute position.
fn escape(value: &str, attribute: bool, html_utf8: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            c if !html_utf8 && !c.is_ascii() => {
                out.push_str(&format!("&#{};", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// `<table><thead><tbody>` form with one `<th>` per header and one `<td>`
/// per field. Missing fields become empty cells.
pub fn html(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let ind = &ctx.opts.indent;
    let utf8 = ctx.opts.html_utf8;

    let tr = |cells: String| format!("{ind}{ind}<tr>{nl}{cells}{ind}{ind}</tr>{nl}");

    let thead = tr(ctx
        .headers
        .iter()
        .map(|h| format!("{ind}{ind}{ind}<th>{}</th>{nl}", escape(h, false, utf8)))
        .collect());

    let tbody: String = rows
        .map(|row| {
            tr(row
                .iter()
                .take(ctx.headers.len())
                .map(|field| {
                    format!(
                        "{ind}{ind}{ind}<td>{}</td>{nl}",
                        escape(field_or_empty(field), false, utf8)
                    )
                })
                .collect())
        })
        .collect();

    format!(
        "<table>{nl}{ind}<thead>{nl}{thead}{ind}</thead>{nl}{ind}<tbody>{nl}{tbody}{ind}</tbody>{nl}</table>"
    )
}

/// `<rows><row><header>value</header>...</row>...</rows>` with an XML
/// declaration. Header names become element names verbatim (the space
/// joiner has already run for this format).
pub fn xml(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let ind = &ctx.opts.indent;
    let utf8 = ctx.opts.html_utf8;

    let mut out = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>{nl}<rows>{nl}");
    for row in rows {
        out.push_str(&format!("{ind}<row>{nl}"));
        for (header, field) in ctx.headers.iter().zip(&row) {
            out.push_str(&format!(
                "{ind}{ind}<{header}>{}</{header}>{nl}",
                escape(field_or_empty(field), false, utf8)
            ));
        }
        out.push_str(&format!("{ind}</row>{nl}"));
    }
    out.push_str("</rows>");
    out
}

/// `<row header="value" .../>` attribute form.
pub fn xml_properties(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let ind = &ctx.opts.indent;
    let utf8 = ctx.opts.html_utf8;

    let mut out = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>{nl}<rows>{nl}");
    for row in rows {
        let attrs: Vec<String> = ctx
            .headers
            .iter()
            .zip(&row)
            .map(|(header, field)| {
                format!(
                    "{header}=\"{}\"",
                    escape(field_or_empty(field), true, utf8)
                )
            })
            .collect();
        out.push_str(&format!("{ind}<row {}/>{nl}", attrs.join(" ")));
    }
    out.push_str("</rows>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::types::ColumnType;
    use crate::convert::ConversionOptions;

    fn sample_ctx() -> (Vec<String>, Vec<ColumnType>, ConversionOptions) {
        (
            vec!["a".to_string(), "b".to_string()],
            vec![ColumnType::Str, ColumnType::Str],
            ConversionOptions::default(),
        )
    }

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape("a<b>&c", false, true), "a&lt;b&gt;&amp;c");
        assert_eq!(escape("say \"hi\"", true, true), "say &quot;hi&quot;");
    }

    #[test]
    fn test_escape_numeric_character_references() {
        assert_eq!(escape("héllo", false, false), "h&#233;llo");
        // With html_utf8 on, non-ASCII passes through.
        assert_eq!(escape("héllo", false, true), "héllo");
    }

    #[test]
    fn test_xml_wraps_values_in_header_elements() {
        let (headers, types, opts) = sample_ctx();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        let rows = vec![vec![Some("1".to_string()), Some("x<y".to_string())]];
        let out = xml(rows.into_iter(), &ctx);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(out.contains("<a>1</a>"));
        assert!(out.contains("<b>x&lt;y</b>"));
        assert!(out.ends_with("</rows>"));
    }

    #[test]
    fn test_xml_properties_attribute_form() {
        let (headers, types, opts) = sample_ctx();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        let rows = vec![vec![Some("1".to_string()), None]];
        let out = xml_properties(rows.into_iter(), &ctx);
        assert!(out.contains("<row a=\"1\" b=\"\"/>"));
    }

    #[test]
    fn test_html_table_structure() {
        let (headers, types, opts) = sample_ctx();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        let rows = vec![vec![Some("1".to_string()), Some("2".to_string())]];
        let out = html(rows.into_iter(), &ctx);
        assert!(out.starts_with("<table>"));
        assert!(out.contains("<th>a</th>"));
        assert!(out.contains("<td>2</td>"));
        assert!(out.ends_with("</table>"));
    }

    #[test]
    fn test_html_zero_rows_keeps_header_shell() {
        let (headers, types, opts) = sample_ctx();
        let ctx = RenderContext {
            headers: &headers,
            types: &types,
            opts: &opts,
        };
        let out = html(std::iter::empty(), &ctx);
        assert!(out.contains("<thead>"));
        assert!(out.contains("<tbody>"));
    }
}

//! Width-based table renderers: text table, Markdown, MediaWiki, Jira, Gherkin
//!
//! These materialize the full row sequence first to compute the maximum
//! display width per column, then emit padded rows. Widths are display
//! widths via unicode-width, so wide (CJK) and combining characters line up;
//! every data line ends up as wide as the header line.

use unicode_width::UnicodeWidthStr;

use super::{field_or_empty, RenderContext};
use crate::convert::rows::Row;

/// Maximum display width per column over headers and all rows, floored at `min`.
fn column_widths(headers: &[String], rows: &[Row], min: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width().max(min)).collect();
    for row in rows {
        for (col, field) in row.iter().enumerate().take(widths.len()) {
            widths[col] = widths[col].max(field_or_empty(field).width());
        }
    }
    widths
}

/// Pad `value` with trailing spaces to `width` display columns.
fn pad(value: &str, width: usize) -> String {
    let mut out = value.to_string();
    for _ in value.width()..width {
        out.push(' ');
    }
    out
}

/// Bordered plain-text table:
///
/// ```text
/// +--------+-------+
/// | name   | age   |
/// +--------+-------+
/// | Ada    | 36    |
/// +--------+-------+
/// ```
pub fn text_table(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let rows: Vec<Row> = rows.collect();

    // Column width rounds up to the next tab-ish stop, floored at 7.
    let widths: Vec<usize> = column_widths(ctx.headers, &rows, 0)
        .iter()
        .map(|w| ((w + 2) / 4 + 1) * 4 - 1)
        .map(|w| w.max(7))
        .collect();

    let border: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(*w)))
        .collect::<String>()
        + "+";

    let line = |cells: Vec<String>| format!("|{}|", cells.join("|"));
    let header_line = line(
        ctx.headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!(" {}", pad(h, w - 1)))
            .collect(),
    );

    let mut out = format!("{border}{nl}{header_line}{nl}{border}{nl}");
    for row in &rows {
        let cells = row
            .iter()
            .zip(&widths)
            .map(|(field, w)| format!(" {}", pad(field_or_empty(field), w - 1)))
            .collect();
        out.push_str(&format!("{}{nl}", line(cells)));
    }
    out.push_str(&border);
    out.push_str(nl);
    out
}

/// GitHub-style Markdown table with a dash rule under the header.
pub fn markdown(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let rows: Vec<Row> = rows.collect();
    let widths = column_widths(ctx.headers, &rows, 3);

    let line = |cells: Vec<String>| format!("| {} |", cells.join(" | "));
    let mut out = line(
        ctx.headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect(),
    );
    out.push_str(nl);
    out.push('|');
    for w in &widths {
        out.push_str(&"-".repeat(w + 2));
        out.push('|');
    }
    out.push_str(nl);
    for row in &rows {
        let cells = row
            .iter()
            .zip(&widths)
            .map(|(field, w)| pad(field_or_empty(field), *w))
            .collect();
        out.push_str(&line(cells));
        out.push_str(nl);
    }
    out
}

/// MediaWiki table markup.
pub fn wiki(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let rows: Vec<Row> = rows.collect();
    let widths = column_widths(ctx.headers, &rows, 1);

    let mut out = format!("{{| class=\"wikitable\"{nl}|-{nl}");
    let header_cells: Vec<String> = ctx
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect();
    out.push_str(&format!("! {}{nl}", header_cells.join(" !! ")));
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(field, w)| pad(field_or_empty(field), *w))
            .collect();
        out.push_str(&format!("|-{nl}| {}{nl}", cells.join(" || ")));
    }
    out.push_str("|}");
    out
}

/// Jira table markup: `||` delimits header cells, `|` data cells.
pub fn jira(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let rows: Vec<Row> = rows.collect();
    let widths = column_widths(ctx.headers, &rows, 1);

    let header_cells: Vec<String> = ctx
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect();
    let mut out = format!("|| {} ||{nl}", header_cells.join(" || "));
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(field, w)| pad(field_or_empty(field), *w))
            .collect();
        out.push_str(&format!("| {} |{nl}", cells.join(" | ")));
    }
    out
}

/// Gherkin data table: pipe-delimited rows, header first, no rule line.
pub fn gherkin(rows: impl Iterator<Item = Row>, ctx: &RenderContext) -> String {
    let nl = &ctx.opts.newline;
    let rows: Vec<Row> = rows.collect();
    let widths = column_widths(ctx.headers, &rows, 1);

    let line = |cells: Vec<String>| format!("| {} |", cells.join(" | "));
    let mut out = line(
        ctx.headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect(),
    );
    out.push_str(nl);
    for row in &rows {
        let cells = row
            .iter()
            .zip(&widths)
            .map(|(field, w)| pad(field_or_empty(field), *w))
            .collect();
        out.push_str(&line(cells));
        out.push_str(nl);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::types::ColumnType;
    use crate::convert::ConversionOptions;

    fn sample() -> (Vec<String>, Vec<ColumnType>, Vec<Row>) {
        (
            vec!["name".to_string(), "age".to_string()],
            vec![ColumnType::Str, ColumnType::Str],
            vec![
                vec![Some("Ada".to_string()), Some("36".to_string())],
                vec![Some("Linus".to_string()), None],
            ],
        )
    }

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

    fn line_widths(out: &str) -> Vec<usize> {
        out.lines().map(UnicodeWidthStr::width).collect()
    }

    #[test]
    fn test_markdown_lines_align() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = markdown(rows.into_iter(), &ctx(&headers, &types, &opts));
        let widths = line_widths(&out);
        assert!(widths.iter().all(|w| *w == widths[0]), "{out}");
        assert!(out.lines().nth(1).unwrap().starts_with("|--"));
    }

    #[test]
    fn test_markdown_wide_characters_align() {
        let headers = vec!["名前".to_string(), "age".to_string()];
        let types = vec![ColumnType::Str, ColumnType::Str];
        let rows = vec![
            vec![Some("山田".to_string()), Some("3".to_string())],
            vec![Some("x".to_string()), Some("44".to_string())],
        ];
        let opts = ConversionOptions::default();
        let out = markdown(rows.into_iter(), &ctx(&headers, &types, &opts));
        let widths = line_widths(&out);
        assert!(widths.iter().all(|w| *w == widths[0]), "{out}");
    }

    #[test]
    fn test_text_table_borders_and_alignment() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = text_table(rows.into_iter(), &ctx(&headers, &types, &opts));
        let widths = line_widths(&out);
        assert!(widths.iter().all(|w| *w == widths[0]), "{out}");
        assert!(out.starts_with('+'));
        assert!(out.contains("| name"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[lines.len() - 1]);
    }

    #[test]
    fn test_wiki_structure() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = wiki(rows.into_iter(), &ctx(&headers, &types, &opts));
        assert!(out.starts_with("{| class=\"wikitable\""));
        assert!(out.contains("! name"));
        assert!(out.contains("|| 36"));
        assert!(out.ends_with("|}"));
    }

    #[test]
    fn test_jira_header_double_pipes() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = jira(rows.into_iter(), &ctx(&headers, &types, &opts));
        assert!(out.starts_with("|| name"));
        assert!(out.lines().nth(1).unwrap().starts_with("| Ada"));
    }

    #[test]
    fn test_gherkin_alignment() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = gherkin(rows.into_iter(), &ctx(&headers, &types, &opts));
        let widths = line_widths(&out);
        assert!(widths.iter().all(|w| *w == widths[0]), "{out}");
        assert!(out.starts_with("| name"));
    }

    #[test]
    fn test_null_renders_as_blank_cell() {
        let (headers, types, rows) = sample();
        let opts = ConversionOptions::default();
        let out = markdown(rows.into_iter(), &ctx(&headers, &types, &opts));
        let last = out.lines().last().unwrap();
        assert!(last.starts_with("| Linus"));
        assert!(!last.contains("null"));
    }
}

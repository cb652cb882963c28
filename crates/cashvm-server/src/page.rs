//! Built-in entry document, used when no `index.html` is deployed

use cashvm_browser::{
    collapsed_range_start, encode_fragment, format_opcode_label, grid::row_values, BrowserState,
    Catalog, Event, Segment, View,
};
use std::fmt::Write;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem}\
table.matrix{border-collapse:collapse}\
.matrix th,.matrix td{border:1px solid #ddd;padding:.25rem;font-size:.7rem;text-align:center}\
.matrix td.dim{opacity:.3}\
.matrix a{color:inherit;text-decoration:none}\
.placeholder td{font-style:italic;color:#888}\
.push-num,.push-byte{background:#eef6ff}.stack{background:#f3eefe}\
.binary{background:#eefcf3}.arith{background:#fff7e6}.control{background:#fdeeee}\
.crypto{background:#e8f8f8}.intro,.token{background:#f6f6e8}.res{background:#f2f2f2}";

/// Render the grid for an optional search text.
///
/// Collapsed ranges holding a match are shown expanded.
pub fn render_page(catalog: &Catalog, search: Option<&str>) -> String {
    let mut state = BrowserState::default();
    if let Some(text) = search.filter(|text| !text.trim().is_empty()) {
        state = state.reduce(catalog, &Event::SetSearch(text.to_string())).state;
        let starts: Vec<u8> = state
            .matches(catalog)
            .iter()
            .filter_map(|row| collapsed_range_start(row.value))
            .collect();
        state.expanded.extend(starts);
    }

    let view = state.view(catalog);
    let mut html = String::with_capacity(64 * 1024);
    let _ = write!(
        html,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>CashVM Opcodes</h1>\n\
         <form method=\"get\" action=\"/opcodes\"><input name=\"q\" value=\"{}\" \
         placeholder=\"Search by name or description...\"></form>\n",
        escape_html(&view.title),
        escape_html(&view.search),
    );
    if view.highlighted.is_some() {
        let _ = writeln!(html, "<p>{} matching opcodes</p>", view.matches.len());
    }
    render_grid(&mut html, catalog, &view);
    html.push_str("</body>\n</html>\n");
    html
}

fn render_grid(html: &mut String, catalog: &Catalog, view: &View<'_>) {
    html.push_str("<table class=\"matrix\">\n<thead><tr><th></th>");
    for column in 0..16 {
        let _ = write!(html, "<th>{column:X}</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for segment in &view.segments {
        match segment {
            Segment::Row { index } => render_row(html, catalog, view, *index),
            Segment::Placeholder { range } => {
                let _ = writeln!(
                    html,
                    "<tr class=\"placeholder\"><th>{0}</th><td colspan=\"16\">rows {0} collapsed</td></tr>",
                    range.label()
                );
            }
            Segment::ExpandedRange { rows, .. } => {
                for row in rows {
                    render_row(html, catalog, view, *row);
                }
            }
        }
    }
    html.push_str("</tbody>\n</table>\n");
}

fn render_row(html: &mut String, catalog: &Catalog, view: &View<'_>, row: u8) {
    let _ = write!(html, "<tr><th>{row:X}</th>");
    for value in row_values(row) {
        let opcode = catalog.table().get(value);
        let dim = if view.is_dimmed(value) { " dim" } else { "" };
        let _ = write!(
            html,
            "<td class=\"cell {}{dim}\" data-val=\"{value:02x}\" title=\"{}\"><a href=\"{}\">{}</a></td>",
            opcode.category.tone(),
            escape_html(&opcode.description),
            escape_html(&encode_fragment(&opcode.name)),
            escape_html(&format_opcode_label(&opcode.name)),
        );
    }
    html.push_str("</tr>\n");
}

/// Escape text for HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("OP_ADD"), "OP_ADD");
    }

    #[test]
    fn test_default_page() {
        let html = render_page(Catalog::global(), None);
        assert!(html.contains("<title>CashVM Opcodes | Bitcoin Cash</title>"));
        assert!(html.contains("data-val=\"ac\""));
        assert!(html.contains(">CHECK SIG</a>"));
        // Byte pushes start collapsed
        assert!(html.contains("rows 1-3 collapsed"));
        assert!(!html.contains("data-val=\"14\""));
        assert!(!html.contains(" dim\""));
    }

    #[test]
    fn test_search_page() {
        let html = render_page(Catalog::global(), Some("pushbytes_20"));
        assert!(html.contains("1 matching opcodes"));
        assert!(html.contains("data-val=\"14\""));
        assert!(!html.contains("rows 1-3 collapsed"));
        assert!(html.contains("rows E-F collapsed"));
        assert!(html.contains("value=\"pushbytes_20\""));
    }
}

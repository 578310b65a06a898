//! Declarative layout and style model.
//!
//! Two style sheets cover every document: one grid style shared by all
//! tabular ledgers, and a simpler free-form style for certificates. Column
//! widths are proportional (each column gets an equal fraction of the page),
//! striping is keyed by page-local row parity.

use super::common::escape_typst_markup;

/// Style rules shared by every tabular ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStyle {
    pub font_size_pt: u32,
    pub border_pt: u32,
    pub header_fill: &'static str,
    pub stripe_fill: &'static str,
}

/// The one grid style applied uniformly across all ledgers.
pub const LEDGER_TABLE: TableStyle = TableStyle {
    font_size_pt: 10,
    border_pt: 1,
    header_fill: "#e0e0e0",
    stripe_fill: "#f9f9f9",
};

/// Free-form certificate documents: padding plus text sizes, no grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CertificateStyle {
    pub page_margin_pt: u32,
    pub title_size_pt: u32,
    pub body_size_pt: u32,
}

pub const CERTIFICATE_PAGE: CertificateStyle = CertificateStyle {
    page_margin_pt: 30,
    title_size_pt: 24,
    body_size_pt: 14,
};

/// Render one table (header row + body rows) as Typst markup.
///
/// The header row is filled with the style's header color; body rows stripe
/// starting from the first row, which restarts the stripe at the top of
/// every page since each page renders its own table.
pub fn render_table(style: &TableStyle, headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = (0..headers.len())
        .map(|_| "1fr")
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    out.push_str(&format!(
        "#table(\n  columns: ({columns}),\n  stroke: {}pt + black,\n  inset: 5pt,\n  fill: (_, row) => if row == 0 {{ rgb(\"{}\") }} else if calc.odd(row) {{ rgb(\"{}\") }} else {{ white }},\n",
        style.border_pt, style.header_fill, style.stripe_fill
    ));

    for header in headers {
        out.push_str(&format!("  [*{}*],\n", escape_typst_markup(header)));
    }
    for row in rows {
        for cell in row {
            out.push_str(&format!("  [{}],\n", escape_typst_markup(cell)));
        }
    }
    out.push_str(")\n");
    out
}

/// Page setup preamble for a ledger page.
pub fn ledger_page_setup(style: &TableStyle) -> String {
    format!(
        "#set page(paper: \"a4\", flipped: true, margin: 20pt)\n#set text(size: {}pt)\n",
        style.font_size_pt
    )
}

/// Page setup preamble for a free-form certificate page.
pub fn certificate_page_setup(style: &CertificateStyle) -> String {
    format!(
        "#set page(paper: \"a4\", margin: {}pt)\n#set text(size: {}pt, font: \"Times New Roman\")\n",
        style.page_margin_pt, style.body_size_pt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_equal_columns() {
        let markup = render_table(&LEDGER_TABLE, &["A", "B", "C", "D"], &[]);
        assert!(markup.contains("columns: (1fr, 1fr, 1fr, 1fr)"));
    }

    #[test]
    fn test_table_carries_fills() {
        let rows = vec![vec!["x".to_string(), "y".to_string()]];
        let markup = render_table(&LEDGER_TABLE, &["A", "B"], &rows);
        assert!(markup.contains("#e0e0e0"));
        assert!(markup.contains("#f9f9f9"));
        assert!(markup.contains("[*A*]"));
        assert!(markup.contains("[x],"));
    }

    #[test]
    fn test_cell_text_is_escaped() {
        let rows = vec![vec!["a#b".to_string()]];
        let markup = render_table(&LEDGER_TABLE, &["A"], &rows);
        assert!(markup.contains("[a\\#b]"));
    }
}

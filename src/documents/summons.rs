//! Blotter summons: a portrait per-case hearing notice.
//!
//! Unlike the blotter ledger (all cases, tabular), this prints one case in
//! full: the parties, the narrative, the action taken so far, and the
//! scheduled hearing date, closed by the Lupon chairman's signature block.

use super::common::{escape_typst_markup, format_philippine_date, today_spelled_out};
use super::header::institutional_header;
use super::layout::{certificate_page_setup, CERTIFICATE_PAGE};
use super::resolver::{self, BLANK_LINE};
use super::DocumentAsset;
use crate::documents::DocumentContext;
use crate::ledger::models::Blotter;

/// Assembled summons source plus the header assets it references.
#[derive(Debug)]
pub struct SummonsDocument {
    pub source: String,
    pub assets: Vec<DocumentAsset>,
    pub output_name: String,
}

pub fn render(ctx: &DocumentContext, blotter: &Blotter) -> SummonsDocument {
    let header = institutional_header(&ctx.settings);
    let captain = resolver::resolve_captain(&ctx.officials)
        .map(|o| o.name.clone())
        .unwrap_or_else(|| BLANK_LINE.to_string());

    let s = &ctx.settings;
    let address = if blotter.zone.trim().is_empty() && blotter.location.trim().is_empty() {
        BLANK_LINE.to_string()
    } else {
        let mut parts = Vec::new();
        if !blotter.zone.trim().is_empty() {
            parts.push(format!("Zone {}", blotter.zone.trim()));
        }
        if !blotter.location.trim().is_empty() {
            parts.push(blotter.location.trim().to_string());
        }
        if !s.province.trim().is_empty() {
            parts.push(s.province.trim().to_string());
        }
        parts.join(", ")
    };
    let hearing = blotter
        .hearing_date
        .map(format_philippine_date)
        .unwrap_or_else(|| BLANK_LINE.to_string());

    let fields: [(&str, String); 10] = [
        ("Complainant", or_blank(&blotter.reported_by)),
        ("Address/Zone", address),
        ("Respondent", or_blank(&blotter.involved)),
        ("Type", or_blank(&blotter.blotter_type)),
        ("Narrative", or_blank(&blotter.narrative)),
        ("Action Taken", or_blank(&blotter.action)),
        ("Witnesses", or_blank(&blotter.witnesses)),
        ("Evidence", or_blank(&blotter.evidence)),
        ("Resolution", or_blank(&blotter.resolution)),
        ("Hearing Date", hearing),
    ];

    let mut source = certificate_page_setup(&CERTIFICATE_PAGE);
    source.push_str(&header.source);
    source.push_str(&format!(
        "#align(center)[#text(size: {}pt, weight: \"bold\", tracking: 1.5pt)[BLOTTER INFORMATION]]\n#v(14pt)\n",
        CERTIFICATE_PAGE.title_size_pt
    ));
    source.push_str(&format!("#align(right)[*Case No.: {}*]\n#v(8pt)\n", blotter.id));

    source.push_str("#grid(\n  columns: (120pt, 1fr),\n  row-gutter: 8pt,\n");
    for (label, value) in &fields {
        source.push_str(&format!(
            "  [*{}:*], [{}],\n",
            label,
            escape_typst_markup(value)
        ));
    }
    source.push_str(")\n#v(24pt)\n");

    source.push_str(&format!(
        "Prepared this *{}*, at Barangay {}, {}, {}, Philippines.\n#v(30pt)\n",
        escape_typst_markup(&today_spelled_out()),
        escape_typst_markup(&or_blank(&s.barangay)),
        escape_typst_markup(&or_blank(&s.municipality)),
        escape_typst_markup(&or_blank(&s.province)),
    ));
    source.push_str(&format!(
        "#align(right)[#underline[*HON. {}*] \\\nPunong Barangay/Lupon Chairman]\n",
        escape_typst_markup(&captain)
    ));

    SummonsDocument {
        source,
        assets: header.assets,
        output_name: format!("case-{}", blotter.id),
    }
}

fn or_blank(value: &str) -> String {
    if value.trim().is_empty() {
        BLANK_LINE.to_string()
    } else {
        value.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::certificates::testutil::test_context;
    use chrono::NaiveDate;

    fn blotter(id: i64) -> Blotter {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "type": "Dispute",
            "reported_by": "Maria Reyes",
            "involved": "Pedro Cruz",
            "incident_date": "2026-02-10",
            "location": "Malolos",
            "zone": "2",
            "status": "Ongoing",
            "narrative": "Boundary disagreement between neighbors.",
            "hearing_date": "2026-03-05",
        }))
        .unwrap()
    }

    #[test]
    fn test_summons_carries_case_details() {
        let doc = render(&test_context(), &blotter(17));
        assert!(doc.source.contains("BLOTTER INFORMATION"));
        assert!(doc.source.contains("Case No.: 17"));
        assert!(doc.source.contains("Maria Reyes"));
        assert!(doc.source.contains("Pedro Cruz"));
        assert!(doc.source.contains("Zone 2, Malolos, Bulacan"));
        assert!(doc.source.contains(&format_philippine_date(
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap()
        )));
        assert!(doc.source.contains("PEDRO A. SANTOS"));
        assert!(doc.source.contains("Lupon Chairman"));
        assert_eq!(doc.output_name, "case-17");
    }

    #[test]
    fn test_missing_fields_print_blank_lines() {
        let mut record = blotter(1);
        record.hearing_date = None;
        record.witnesses = String::new();
        let doc = render(&test_context(), &record);
        // underscores are escaped on their way into markup
        let blank = escape_typst_markup(BLANK_LINE);
        assert!(doc.source.contains(&format!("[*Hearing Date:*], [{blank}]")));
        assert!(doc.source.contains(&format!("[*Witnesses:*], [{blank}]")));
    }

    #[test]
    fn test_summons_repeats_the_institutional_header() {
        let doc = render(&test_context(), &blotter(1));
        assert!(doc.source.contains("Republic of the Philippines"));
        assert!(doc.source.contains("BARANGAY SAN ISIDRO"));
    }
}

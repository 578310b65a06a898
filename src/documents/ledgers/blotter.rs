//! Blotter records ledger.

use crate::documents::common::format_ordinal_date;
use crate::ledger::models::Blotter;
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 8] = [
    "No.",
    "Type",
    "Reported By",
    "Involved",
    "Incident Date",
    "Location",
    "Zone",
    "Status",
];

pub fn render(settings: &Settings, blotters: &[Blotter], filter: Option<&str>) -> LedgerDocument {
    let rows = blotters
        .iter()
        .enumerate()
        .map(|(i, b)| {
            vec![
                (i + 1).to_string(),
                b.blotter_type.clone(),
                b.reported_by.clone(),
                b.involved.clone(),
                format_ordinal_date(b.incident_date),
                b.location.clone(),
                b.zone.clone(),
                b.status.clone(),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::Blotters, filter, &HEADERS, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_row_order_matches_input() {
        let blotter = |id: i64, reported_by: &str| Blotter {
            id,
            blotter_type: "Dispute".to_string(),
            reported_by: reported_by.to_string(),
            involved: "Neighbors".to_string(),
            incident_date: NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
            location: "Zone 2".to_string(),
            zone: "2".to_string(),
            status: "Settled".to_string(),
            narrative: String::new(),
            action: String::new(),
            witnesses: String::new(),
            evidence: String::new(),
            resolution: String::new(),
            hearing_date: None,
        };
        let doc = render(
            &Settings::default(),
            &[blotter(1, "Aling Rosa"), blotter(2, "Mang Ben")],
            None,
        );
        let first = doc.source.find("Aling Rosa").unwrap();
        let second = doc.source.find("Mang Ben").unwrap();
        assert!(first < second);
        assert!(doc.source.contains("February 3rd, 2026"));
    }
}

//! Officials' attendance logbook ledger.

use crate::documents::common::format_ordinal_date;
use crate::ledger::models::LogbookEntry;
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 10] = [
    "No.",
    "Official",
    "Date",
    "Time In (AM)",
    "Time Out (AM)",
    "Time In (PM)",
    "Time Out (PM)",
    "Total Hours",
    "Status",
    "Remarks",
];

fn time(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

pub fn render(
    settings: &Settings,
    entries: &[LogbookEntry],
    filter: Option<&str>,
) -> LedgerDocument {
    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            vec![
                (i + 1).to_string(),
                e.official_name.clone(),
                format_ordinal_date(e.date),
                time(&e.time_in_am),
                time(&e.time_out_am),
                time(&e.time_in_pm),
                time(&e.time_out_pm),
                e.total_hours
                    .map(|h| format!("{h:.1}"))
                    .unwrap_or_else(|| "-".to_string()),
                e.status.clone().unwrap_or_default(),
                e.remarks.clone().unwrap_or_default(),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::Logbook, filter, &HEADERS, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_logbook_row_substitutes_dashes() {
        let entry = LogbookEntry {
            id: 1,
            official_name: "PEDRO A. SANTOS".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 5, 4).unwrap(),
            time_in_am: Some("8:00".to_string()),
            time_out_am: Some("12:00".to_string()),
            time_in_pm: None,
            time_out_pm: None,
            remarks: Some("Half day".to_string()),
            status: Some("Present".to_string()),
            total_hours: Some(4.0),
        };
        let doc = render(&Settings::default(), &[entry], None);
        assert!(doc.source.contains("PEDRO A. SANTOS"));
        assert!(doc.source.contains("May 4th, 2026"));
        assert!(doc.source.contains("4.0"));
        assert!(doc.source.contains("[-],"));
    }
}

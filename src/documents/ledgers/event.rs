//! Event records ledger.

use crate::documents::common::format_ordinal_date;
use crate::ledger::models::Event;
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 8] = [
    "No.",
    "Name",
    "Type",
    "Venue",
    "Audience",
    "Notes",
    "Status",
    "Date",
];

pub fn render(settings: &Settings, events: &[Event], filter: Option<&str>) -> LedgerDocument {
    let rows = events
        .iter()
        .enumerate()
        .map(|(i, e)| {
            vec![
                (i + 1).to_string(),
                e.name.clone(),
                e.event_type.clone(),
                e.venue.clone(),
                e.audience.clone(),
                e.notes.clone(),
                e.status.clone(),
                format_ordinal_date(e.date),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::Events, filter, &HEADERS, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_event_row_fields() {
        let event = Event {
            id: 1,
            name: "Clean-up Drive".to_string(),
            event_type: "Community".to_string(),
            venue: "Zone 1 Plaza".to_string(),
            audience: "All residents".to_string(),
            notes: String::new(),
            status: "Done".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 21).unwrap(),
        };
        let doc = render(&Settings::default(), &[event], None);
        assert!(doc.source.contains("Clean-up Drive"));
        assert!(doc.source.contains("March 21st, 2026"));
    }
}

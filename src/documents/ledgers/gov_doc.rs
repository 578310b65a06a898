//! Executive orders, resolutions and ordinances ledger.

use crate::documents::common::format_ordinal_date;
use crate::ledger::models::GovDoc;
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 5] = ["No.", "Title", "Type", "Date Issued", "Description"];

pub fn render(settings: &Settings, docs: &[GovDoc], filter: Option<&str>) -> LedgerDocument {
    let rows = docs
        .iter()
        .enumerate()
        .map(|(i, d)| {
            vec![
                (i + 1).to_string(),
                d.title.clone(),
                d.doc_type.clone(),
                format_ordinal_date(d.date_issued),
                d.description.clone(),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::GovDocs, filter, &HEADERS, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_gov_doc_row() {
        let doc_record = GovDoc {
            id: 1,
            title: "Curfew Ordinance".to_string(),
            doc_type: "Ordinance".to_string(),
            date_issued: NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
            description: "Minors' curfew from 10 PM".to_string(),
        };
        let doc = render(&Settings::default(), &[doc_record], None);
        assert!(doc.source.contains("Curfew Ordinance"));
        assert!(doc.source.contains("November 2nd, 2025"));
    }
}

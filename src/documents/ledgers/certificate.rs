//! Issued-certificates ledger.
//!
//! The expiry date and active/expired status columns are derived at print
//! time from the issue date; they are never read from storage.

use chrono::NaiveDate;

use crate::certificate::models::Certificate;
use crate::documents::common::format_ordinal_date;
use crate::documents::resolver::{certificate_status, expiry_date};
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 7] = [
    "Resident",
    "Type",
    "Issued On",
    "Purpose",
    "Amount",
    "Expires On",
    "Status",
];

pub fn render(
    settings: &Settings,
    certificates: &[Certificate],
    today: NaiveDate,
    filter: Option<&str>,
) -> LedgerDocument {
    let rows = certificates
        .iter()
        .map(|c| {
            vec![
                c.resident_name.clone(),
                c.certificate_type.clone(),
                format_ordinal_date(c.issued_date),
                c.purpose.clone().unwrap_or_else(|| "-".to_string()),
                format!("{:.2}", c.amount),
                format_ordinal_date(expiry_date(c.issued_date)),
                certificate_status(c.issued_date, today).to_string(),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::Certificates, filter, &HEADERS, rows)
}

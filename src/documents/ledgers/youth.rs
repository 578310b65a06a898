//! Youth profile ledger.

use chrono::Local;

use crate::documents::resolver::{age_on, assemble_full_name};
use crate::ledger::models::Youth;
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 10] = [
    "No.",
    "Name",
    "Gender",
    "Age",
    "Email",
    "Contact",
    "Education",
    "Work Status",
    "Classification",
    "SK Voter",
];

pub fn render(settings: &Settings, youth: &[Youth], filter: Option<&str>) -> LedgerDocument {
    let today = Local::now().date_naive();
    let rows = youth
        .iter()
        .enumerate()
        .map(|(i, y)| {
            vec![
                (i + 1).to_string(),
                assemble_full_name(&y.first_name, y.middle_name.as_deref(), &y.last_name, None),
                y.gender.clone(),
                y.birthday
                    .map(|b| age_on(b, today).to_string())
                    .unwrap_or_else(|| "-".to_string()),
                y.email_address.clone().unwrap_or_default(),
                y.contact_number.clone().unwrap_or_default(),
                y.educational_background.clone().unwrap_or_default(),
                y.work_status.clone().unwrap_or_default(),
                y.classifications(),
                if y.is_sk_voter { "Yes" } else { "No" }.to_string(),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::Youth, filter, &HEADERS, rows)
}

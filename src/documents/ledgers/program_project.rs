//! Programs and projects ledger.

use crate::documents::common::format_ordinal_date;
use crate::ledger::models::ProgramProject;
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 11] = [
    "No.",
    "Name",
    "Type",
    "Status",
    "Start Date",
    "End Date",
    "Location",
    "Project Manager",
    "Beneficiaries",
    "Budget",
    "Source of Funds",
];

pub fn render(
    settings: &Settings,
    records: &[ProgramProject],
    filter: Option<&str>,
) -> LedgerDocument {
    let rows = records
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                (i + 1).to_string(),
                p.name.clone(),
                p.kind.clone(),
                p.status.clone(),
                p.start_date
                    .map(format_ordinal_date)
                    .unwrap_or_else(|| "-".to_string()),
                p.end_date
                    .map(format_ordinal_date)
                    .unwrap_or_else(|| "-".to_string()),
                p.location.clone(),
                p.project_manager.clone(),
                p.beneficiaries.clone(),
                format!("{:.2}", p.budget),
                p.source_of_funds.clone(),
            ]
        })
        .collect();

    render_pages(
        settings,
        LedgerKind::ProgramsProjects,
        filter,
        &HEADERS,
        rows,
    )
}

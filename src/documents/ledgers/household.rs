//! Household records ledger.

use crate::documents::common::format_ordinal_date;
use crate::household::models::Household;
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 8] = [
    "No.",
    "Household No.",
    "Type",
    "Head",
    "Zone",
    "Date of Residency",
    "Status",
    "Members",
];

pub fn render(
    settings: &Settings,
    households: &[Household],
    filter: Option<&str>,
) -> LedgerDocument {
    let rows = households
        .iter()
        .enumerate()
        .map(|(i, h)| {
            vec![
                (i + 1).to_string(),
                h.household_number.clone(),
                h.household_type.clone(),
                h.head.clone(),
                h.zone.clone(),
                format_ordinal_date(h.date_of_residency),
                h.status.clone(),
                h.members.len().to_string(),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::Households, filter, &HEADERS, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::models::HouseholdMember;
    use crate::household::roles::HouseholdRole;
    use chrono::NaiveDate;

    #[test]
    fn test_row_carries_member_count_and_ordinal_date() {
        let household = Household {
            id: 1,
            household_number: "HH-001".to_string(),
            household_type: "Owner".to_string(),
            head: "Juan Dela Cruz".to_string(),
            zone: "3".to_string(),
            date_of_residency: NaiveDate::from_ymd_opt(2015, 3, 1).unwrap(),
            status: "Active".to_string(),
            members: vec![
                HouseholdMember {
                    resident_id: 1,
                    role: HouseholdRole::Head,
                },
                HouseholdMember {
                    resident_id: 2,
                    role: HouseholdRole::Spouse,
                },
            ],
        };
        let doc = render(&Settings::default(), &[household], None);
        assert!(doc.source.contains("HH-001"));
        assert!(doc.source.contains("March 1st, 2015"));
        assert!(doc.source.contains("[2],"));
    }
}

//! Resident master list.

use chrono::Local;

use crate::documents::resolver::{age_on, resident_full_name};
use crate::resident::models::{Resident, ResidentStatus};
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const HEADERS: [&str; 7] = [
    "No.",
    "Name",
    "Gender",
    "Age",
    "Civil Status",
    "Zone",
    "Status",
];

fn status_label(status: ResidentStatus) -> &'static str {
    match status {
        ResidentStatus::Active => "Active",
        ResidentStatus::Dead => "Dead",
        ResidentStatus::Missing => "Missing",
        ResidentStatus::MovedOut => "Moved Out",
    }
}

/// Sorted by last name then first name, regardless of insertion order.
pub fn render(
    settings: &Settings,
    residents: &[Resident],
    filter: Option<&str>,
) -> LedgerDocument {
    let today = Local::now().date_naive();
    let mut sorted: Vec<&Resident> = residents.iter().collect();
    sorted.sort_by(|a, b| {
        (a.last_name.to_lowercase(), a.first_name.to_lowercase())
            .cmp(&(b.last_name.to_lowercase(), b.first_name.to_lowercase()))
    });

    let rows = sorted
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                resident_full_name(r),
                r.gender.clone(),
                r.birthday
                    .map(|b| age_on(b, today).to_string())
                    .unwrap_or_else(|| "-".to_string()),
                r.civil_status.clone(),
                r.zone.clone(),
                status_label(r.status).to_string(),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::Residents, filter, &HEADERS, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::certificates::testutil::test_resident;

    #[test]
    fn test_rows_are_sorted_by_name() {
        let residents = vec![
            test_resident(1, "Zenaida", "Cruz"),
            test_resident(2, "Alberto", "Abad"),
            test_resident(3, "Alberto", "Cruz"),
        ];
        let doc = render(&Settings::default(), &residents, None);
        let abad = doc.source.find("Abad").unwrap();
        let alberto_cruz = doc.source.find("Alberto S. Cruz").unwrap();
        let zenaida = doc.source.find("Zenaida").unwrap();
        assert!(abad < alberto_cruz);
        assert!(alberto_cruz < zenaida);
    }

    #[test]
    fn test_sixteen_residents_make_two_pages() {
        let residents: Vec<_> = (0..16)
            .map(|i| test_resident(i, "Juan", &format!("Cruz{i:02}")))
            .collect();
        let doc = render(&Settings::default(), &residents, None);
        assert_eq!(doc.source.matches("#pagebreak()").count(), 1);
    }
}

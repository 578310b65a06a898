//! Case-insensitive literal search over the record collections.
//!
//! The query is treated as a literal substring, never as a pattern: regex
//! metacharacters are escaped before the matcher is built, so "4Ps (cash)"
//! finds exactly that text. Filtering preserves input order and an empty
//! query matches everything.

use regex::Regex;

use crate::certificate::models::Certificate;
use crate::documents::resolver::resident_full_name;
use crate::household::models::Household;
use crate::ledger::models::{
    Blotter, Event, Expense, GovDoc, Income, LogbookEntry, ProgramProject, Youth,
};
use crate::resident::models::Resident;

/// Escape regex metacharacters so the query matches literally.
pub fn sanitize(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(
            ch,
            '.' | '*' | '+' | '?' | '^' | '$' | '{' | '}' | '(' | ')' | '|' | '[' | ']' | '\\'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Compiled case-insensitive matcher; `None` for a blank query.
pub fn build_matcher(query: &str) -> Option<Regex> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", sanitize(trimmed))).ok()
}

fn matches_any(matcher: &Regex, fields: &[&str]) -> bool {
    fields.iter().any(|f| matcher.is_match(f))
}

pub fn search_residents(residents: &[Resident], query: &str) -> Vec<Resident> {
    let Some(matcher) = build_matcher(query) else {
        return residents.to_vec();
    };
    residents
        .iter()
        .filter(|r| {
            matches_any(
                &matcher,
                &[
                    &r.first_name,
                    r.middle_name.as_deref().unwrap_or_default(),
                    &r.last_name,
                    r.suffix.as_deref().unwrap_or_default(),
                    &resident_full_name(r),
                    &r.zone,
                    &r.civil_status,
                    &r.gender,
                    r.occupation.as_deref().unwrap_or_default(),
                    r.mobile_number.as_deref().unwrap_or_default(),
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_households(households: &[Household], query: &str) -> Vec<Household> {
    let Some(matcher) = build_matcher(query) else {
        return households.to_vec();
    };
    households
        .iter()
        .filter(|h| {
            matches_any(
                &matcher,
                &[
                    &h.household_number,
                    &h.household_type,
                    &h.head,
                    &h.zone,
                    &h.status,
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_blotters(blotters: &[Blotter], query: &str) -> Vec<Blotter> {
    let Some(matcher) = build_matcher(query) else {
        return blotters.to_vec();
    };
    blotters
        .iter()
        .filter(|b| {
            matches_any(
                &matcher,
                &[
                    &b.blotter_type,
                    &b.reported_by,
                    &b.involved,
                    &b.location,
                    &b.zone,
                    &b.status,
                    &b.narrative,
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_certificates(certificates: &[Certificate], query: &str) -> Vec<Certificate> {
    let Some(matcher) = build_matcher(query) else {
        return certificates.to_vec();
    };
    certificates
        .iter()
        .filter(|c| {
            matches_any(
                &matcher,
                &[
                    &c.resident_name,
                    &c.certificate_type,
                    c.purpose.as_deref().unwrap_or_default(),
                    c.business_name.as_deref().unwrap_or_default(),
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_incomes(incomes: &[Income], query: &str) -> Vec<Income> {
    let Some(matcher) = build_matcher(query) else {
        return incomes.to_vec();
    };
    incomes
        .iter()
        .filter(|i| {
            matches_any(
                &matcher,
                &[
                    &i.category,
                    &i.income_type,
                    &i.or_number,
                    &i.received_from,
                    &i.received_by,
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_expenses(expenses: &[Expense], query: &str) -> Vec<Expense> {
    let Some(matcher) = build_matcher(query) else {
        return expenses.to_vec();
    };
    expenses
        .iter()
        .filter(|e| {
            matches_any(
                &matcher,
                &[
                    &e.category,
                    &e.expense_type,
                    &e.or_number,
                    &e.paid_to,
                    &e.paid_by,
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_events(events: &[Event], query: &str) -> Vec<Event> {
    let Some(matcher) = build_matcher(query) else {
        return events.to_vec();
    };
    events
        .iter()
        .filter(|e| {
            matches_any(
                &matcher,
                &[
                    &e.name,
                    &e.event_type,
                    &e.venue,
                    &e.audience,
                    &e.status,
                    &e.notes,
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_youth(youth: &[Youth], query: &str) -> Vec<Youth> {
    let Some(matcher) = build_matcher(query) else {
        return youth.to_vec();
    };
    youth
        .iter()
        .filter(|y| {
            matches_any(
                &matcher,
                &[
                    &y.first_name,
                    y.middle_name.as_deref().unwrap_or_default(),
                    &y.last_name,
                    &y.gender,
                    y.email_address.as_deref().unwrap_or_default(),
                    y.contact_number.as_deref().unwrap_or_default(),
                    y.educational_background.as_deref().unwrap_or_default(),
                    y.work_status.as_deref().unwrap_or_default(),
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_gov_docs(docs: &[GovDoc], query: &str) -> Vec<GovDoc> {
    let Some(matcher) = build_matcher(query) else {
        return docs.to_vec();
    };
    docs.iter()
        .filter(|d| matches_any(&matcher, &[&d.title, &d.doc_type, &d.description]))
        .cloned()
        .collect()
}

pub fn search_programs_projects(records: &[ProgramProject], query: &str) -> Vec<ProgramProject> {
    let Some(matcher) = build_matcher(query) else {
        return records.to_vec();
    };
    records
        .iter()
        .filter(|p| {
            matches_any(
                &matcher,
                &[
                    &p.name,
                    &p.kind,
                    &p.status,
                    &p.location,
                    &p.project_manager,
                    &p.beneficiaries,
                    &p.source_of_funds,
                ],
            )
        })
        .cloned()
        .collect()
}

pub fn search_logbook(entries: &[LogbookEntry], query: &str) -> Vec<LogbookEntry> {
    let Some(matcher) = build_matcher(query) else {
        return entries.to_vec();
    };
    entries
        .iter()
        .filter(|e| {
            matches_any(
                &matcher,
                &[
                    &e.official_name,
                    e.status.as_deref().unwrap_or_default(),
                    e.remarks.as_deref().unwrap_or_default(),
                ],
            )
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_escapes_metacharacters() {
        assert_eq!(sanitize("4Ps (cash)"), r"4Ps \(cash\)");
        assert_eq!(sanitize("a.b*c"), r"a\.b\*c");
        assert_eq!(sanitize("plain"), "plain");
    }

    #[test]
    fn test_matcher_is_case_insensitive() {
        let matcher = build_matcher("dela cruz").unwrap();
        assert!(matcher.is_match("Juan DELA CRUZ"));
        assert!(!matcher.is_match("Juan Reyes"));
    }

    #[test]
    fn test_blank_query_has_no_matcher() {
        assert!(build_matcher("   ").is_none());
    }

    #[test]
    fn test_literal_dot_does_not_wildcard() {
        let matcher = build_matcher("O.R").unwrap();
        assert!(matcher.is_match("O.R. No. 123"));
        assert!(!matcher.is_match("OUR"));
    }
}

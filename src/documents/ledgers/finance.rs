//! Income and expense ledgers. The two share a shape but print separately.

use crate::documents::common::format_ordinal_date;
use crate::ledger::models::{Expense, Income};
use crate::settings::models::Settings;

use super::{render_pages, LedgerDocument, LedgerKind};

const INCOME_HEADERS: [&str; 8] = [
    "No.",
    "Category",
    "Type",
    "Amount",
    "O.R. Number",
    "Received From",
    "Received By",
    "Date Received",
];

const EXPENSE_HEADERS: [&str; 8] = [
    "No.",
    "Category",
    "Type",
    "Amount",
    "O.R. Number",
    "Paid To",
    "Paid By",
    "Date",
];

pub fn render_incomes(
    settings: &Settings,
    incomes: &[Income],
    filter: Option<&str>,
) -> LedgerDocument {
    let rows = incomes
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.category.clone(),
                r.income_type.clone(),
                format!("{:.2}", r.amount),
                r.or_number.clone(),
                r.received_from.clone(),
                r.received_by.clone(),
                format_ordinal_date(r.date_received),
            ]
        })
        .collect();

    render_pages(settings, LedgerKind::Incomes, filter, &INCOME_HEADERS, rows)
}

pub fn render_expenses(
    settings: &Settings,
    expenses: &[Expense],
    filter: Option<&str>,
) -> LedgerDocument {
    let rows = expenses
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.category.clone(),
                r.expense_type.clone(),
                format!("{:.2}", r.amount),
                r.or_number.clone(),
                r.paid_to.clone(),
                r.paid_by.clone(),
                format_ordinal_date(r.date),
            ]
        })
        .collect();

    render_pages(
        settings,
        LedgerKind::Expenses,
        filter,
        &EXPENSE_HEADERS,
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_income_amount_has_two_decimals() {
        let income = Income {
            id: 1,
            category: "Local".to_string(),
            income_type: "Certification Fee".to_string(),
            amount: 150.5,
            or_number: "OR-0001".to_string(),
            received_from: "Juan Dela Cruz".to_string(),
            received_by: "Treasurer".to_string(),
            date_received: NaiveDate::from_ymd_opt(2026, 4, 22).unwrap(),
        };
        let doc = render_incomes(&Settings::default(), &[income], None);
        assert!(doc.source.contains("150.50"));
        assert!(doc.source.contains("April 22nd, 2026"));
        assert!(doc.source.contains("INCOME RECORDS"));
    }

    #[test]
    fn test_expense_ledger_uses_its_own_title() {
        let expense = Expense {
            id: 1,
            category: "Operations".to_string(),
            expense_type: "Supplies".to_string(),
            amount: 800.0,
            or_number: "OR-0100".to_string(),
            paid_to: "Hardware Store".to_string(),
            paid_by: "Treasurer".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 4, 23).unwrap(),
        };
        let doc = render_expenses(&Settings::default(), &[expense], None);
        assert!(doc.source.contains("EXPENSE RECORDS"));
        assert!(doc.source.contains("Hardware Store"));
    }
}

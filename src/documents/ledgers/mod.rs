//! Printable ledgers.
//!
//! Every ledger shares one page frame: landscape A4, the institutional
//! header repeated at the top of every page, a centered title, an optional
//! "Filtered by" line, and one table per page. Records are paginated before
//! rendering so row striping restarts on each page.

pub mod blotter;
pub mod certificate;
pub mod event;
pub mod finance;
pub mod gov_doc;
pub mod household;
pub mod logbook;
pub mod program_project;
pub mod resident;
pub mod youth;

use super::common::escape_typst_markup;
use super::header::institutional_header;
use super::layout::{ledger_page_setup, render_table, LEDGER_TABLE};
use super::pagination::{paginate, DEFAULT_ROWS_PER_PAGE, RESIDENT_ROWS_PER_PAGE};
use super::DocumentAsset;
use crate::settings::models::Settings;

/// Closed set of printable ledgers, keyed the same way certificates are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerKind {
    Residents,
    Households,
    Blotters,
    Certificates,
    Incomes,
    Expenses,
    Events,
    Youth,
    GovDocs,
    ProgramsProjects,
    Logbook,
}

impl LedgerKind {
    pub const ALL: [LedgerKind; 11] = [
        LedgerKind::Residents,
        LedgerKind::Households,
        LedgerKind::Blotters,
        LedgerKind::Certificates,
        LedgerKind::Incomes,
        LedgerKind::Expenses,
        LedgerKind::Events,
        LedgerKind::Youth,
        LedgerKind::GovDocs,
        LedgerKind::ProgramsProjects,
        LedgerKind::Logbook,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "residents" => Some(Self::Residents),
            "households" => Some(Self::Households),
            "blotters" => Some(Self::Blotters),
            "certificates" => Some(Self::Certificates),
            "incomes" => Some(Self::Incomes),
            "expenses" => Some(Self::Expenses),
            "events" => Some(Self::Events),
            "youth" => Some(Self::Youth),
            "gov-docs" => Some(Self::GovDocs),
            "programs-projects" => Some(Self::ProgramsProjects),
            "logbook" => Some(Self::Logbook),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Residents => "residents",
            Self::Households => "households",
            Self::Blotters => "blotters",
            Self::Certificates => "certificates",
            Self::Incomes => "incomes",
            Self::Expenses => "expenses",
            Self::Events => "events",
            Self::Youth => "youth",
            Self::GovDocs => "gov-docs",
            Self::ProgramsProjects => "programs-projects",
            Self::Logbook => "logbook",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Residents => "RESIDENT MASTER LIST",
            Self::Households => "HOUSEHOLD RECORDS",
            Self::Blotters => "BLOTTER RECORDS",
            Self::Certificates => "ISSUED CERTIFICATES",
            Self::Incomes => "INCOME RECORDS",
            Self::Expenses => "EXPENSE RECORDS",
            Self::Events => "EVENT RECORDS",
            Self::Youth => "YOUTH PROFILE RECORDS",
            Self::GovDocs => "EXECUTIVE ORDERS, RESOLUTIONS AND ORDINANCES",
            Self::ProgramsProjects => "PROGRAMS AND PROJECTS",
            Self::Logbook => "OFFICIALS' ATTENDANCE LOGBOOK",
        }
    }

    /// The resident master list fits more rows; everything else uses the
    /// default page size.
    pub fn rows_per_page(self) -> usize {
        match self {
            Self::Residents => RESIDENT_ROWS_PER_PAGE,
            _ => DEFAULT_ROWS_PER_PAGE,
        }
    }
}

/// Assembled multi-page Typst document for one ledger.
#[derive(Debug)]
pub struct LedgerDocument {
    pub kind: LedgerKind,
    pub source: String,
    pub assets: Vec<DocumentAsset>,
    pub output_name: String,
}

/// Shared page assembly for every ledger.
///
/// An empty record set still yields one page with the header row so the
/// printout is never a blank file.
pub(crate) fn render_pages(
    settings: &Settings,
    kind: LedgerKind,
    filter: Option<&str>,
    headers: &[&str],
    rows: Vec<Vec<String>>,
) -> LedgerDocument {
    let header = institutional_header(settings);
    let pages = paginate(&rows, kind.rows_per_page());

    let mut source = ledger_page_setup(&LEDGER_TABLE);
    let page_count = pages.len().max(1);
    for index in 0..page_count {
        if index > 0 {
            source.push_str("#pagebreak()\n");
        }
        source.push_str(&header.source);
        source.push_str(&format!(
            "#align(center)[#text(size: 14pt, weight: \"bold\")[{}]]\n",
            escape_typst_markup(kind.title())
        ));
        if let Some(filter) = filter.map(str::trim).filter(|f| !f.is_empty()) {
            source.push_str(&format!(
                "#align(center)[#text(size: 10pt)[Filtered by: {}]]\n",
                escape_typst_markup(filter)
            ));
        }
        source.push_str("#v(6pt)\n");
        let page_rows = pages.get(index).copied().unwrap_or(&[]);
        source.push_str(&render_table(&LEDGER_TABLE, headers, page_rows));
    }

    LedgerDocument {
        kind,
        source,
        assets: header.assets,
        output_name: kind.key().to_string(),
    }
}

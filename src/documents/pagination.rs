//! Pagination engine for list-style documents.
//!
//! Splits an ordered record list into fixed-size pages. Every page is later
//! rendered as one physical document page carrying its own repeated header,
//! so nothing here is deduplicated across pages.

/// Rows per page used by most ledgers.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Rows per page for the resident master list (narrower rows).
pub const RESIDENT_ROWS_PER_PAGE: usize = 15;

/// Split `records` into consecutive chunks of at most `page_size` entries.
///
/// Input order is preserved and the last chunk may be shorter. A `page_size`
/// of zero is treated as one row per page rather than panicking.
pub fn paginate<T>(records: &[T], page_size: usize) -> Vec<&[T]> {
    records.chunks(page_size.max(1)).collect()
}

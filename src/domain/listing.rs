/// Outcome of parsing one leaderboard page.
///
/// `usernames` are in row order and not deduplicated; the extractor owns the
/// running list and decides what is new. `row_count` is kept separately so
/// the full walk can tell an empty table from a table whose rows carried no
/// qualifying link.
#[derive(Debug, PartialEq)]
pub enum ListingParse {
    NoListing,
    Listing {
        usernames: Vec<String>,
        row_count: usize,
        pagination: PaginationState,
    },
}

/// Continuation signal read from the page's pagination control.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PaginationState {
    /// No `ul.pagination` on the page at all.
    Absent,
    /// A next control exists and is not disabled.
    NextAvailable,
    /// The next control is missing or disabled.
    NextExhausted,
}

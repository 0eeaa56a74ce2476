// Top Level Constants

/// Separator between tokens on a raw input line.
pub const FIELD_SEPARATOR: char = ';';

/// A row needs at least this many tokens before the open record may be finalized.
pub const FINALIZE_MIN_TOKENS: usize = 10;

/// Tokens shorter than this never carry a field (a bare `Pl` is ignored too).
pub const MIN_TAGGED_TOKEN_LEN: usize = 3;

pub mod tags {
    pub const ISSUE_DATE: &str = "DIs";
    pub const BID_PRICE: &str = "BPr";
    pub const ASK_PRICE: &str = "APl";
    // Checked last so it never shadows the 3-char tags above
    pub const LAST_PRICE: &str = "Pl";
}

pub mod dates {
    /// `YYYYMMDD`
    pub const RAW_DATE_LEN: usize = 8;

    pub const MONTH_ABBREVIATIONS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
}

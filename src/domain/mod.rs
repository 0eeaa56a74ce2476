// Domain types and the record pipeline
mod field_extractor;
mod issue_date;
mod pair_cleaner;
mod record;
mod series;

pub use field_extractor::{
    ExtractError, FieldExtractor, decode_token, extract_records, extract_records_from,
};
pub use issue_date::{DateFormatError, IssueDate, normalize_date};
pub use pair_cleaner::{CleanedPair, SortOrder, clean_and_sort};
pub use record::{FieldTag, FieldValue, PendingRecord, Record};
pub use series::{PriceSeries, ScatterSeries};

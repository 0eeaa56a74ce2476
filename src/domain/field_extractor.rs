use std::num::ParseFloatError;

use thiserror::Error;

use crate::config::FINALIZE_MIN_TOKENS;
use crate::data::{RawRow, RowReadError};
use crate::domain::{DateFormatError, FieldTag, FieldValue, IssueDate, PendingRecord, Record};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Read(#[from] RowReadError),
    #[error("malformed issue date in token {token:?}")]
    Date {
        token: String,
        #[source]
        source: DateFormatError,
    },
    #[error("malformed {tag} value in token {token:?}")]
    Number {
        tag: FieldTag,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Decode one token. `Ok(None)` means the token carries no recognized tag.
pub fn decode_token(token: &str) -> Result<Option<FieldValue>, ExtractError> {
    let Some((tag, rest)) = FieldTag::split_token(token) else {
        return Ok(None);
    };
    // The last token of a line still carries its line ending
    let rest = rest.trim();

    let value = match tag {
        FieldTag::IssueDate => {
            let date = IssueDate::parse(rest).map_err(|source| ExtractError::Date {
                token: token.to_string(),
                source,
            })?;
            FieldValue::IssueDate(date)
        }
        FieldTag::BidPrice => FieldValue::BidPrice(parse_price(tag, token, rest)?),
        FieldTag::AskPrice => FieldValue::AskPrice(parse_price(tag, token, rest)?),
        FieldTag::LastPrice => FieldValue::LastPrice(parse_price(tag, token, rest)?),
    };
    Ok(Some(value))
}

fn parse_price(tag: FieldTag, token: &str, rest: &str) -> Result<f64, ExtractError> {
    rest.parse::<f64>().map_err(|source| ExtractError::Number {
        tag,
        token: token.to_string(),
        source,
    })
}

/// Folds rows into records.
///
/// Matched fields accumulate in a single open record. After each row the
/// record is closed if that row had at least `FINALIZE_MIN_TOKENS` tokens and
/// an issue date has been seen; otherwise it stays open and the next row keeps
/// adding to it. Short rows therefore merge into whichever row closes them.
#[derive(Debug, Default)]
pub struct FieldExtractor {
    pending: PendingRecord,
    rows_in_pending: usize,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row<S: AsRef<str>>(&mut self, row: &[S]) -> Result<Option<Record>, ExtractError> {
        for token in row {
            if let Some(value) = decode_token(token.as_ref())? {
                self.pending.apply(value);
            }
        }
        self.rows_in_pending += 1;

        if row.len() < FINALIZE_MIN_TOKENS {
            return Ok(None);
        }

        match self.pending.try_finalize() {
            Ok(record) => {
                if self.rows_in_pending > 1 {
                    log::debug!("Record {} merged {} rows", record.issue_date, self.rows_in_pending);
                }
                self.pending = PendingRecord::default();
                self.rows_in_pending = 0;
                Ok(Some(record))
            }
            Err(still_open) => {
                self.pending = still_open;
                Ok(None)
            }
        }
    }

    pub fn pending(&self) -> &PendingRecord {
        &self.pending
    }

    /// End of input. Returns the unfinalized accumulator, if it holds anything.
    pub fn finish(self) -> Option<PendingRecord> {
        (!self.pending.is_empty()).then_some(self.pending)
    }
}

/// Run the extractor over in-memory rows.
pub fn extract_records<R>(rows: impl IntoIterator<Item = R>) -> Result<Vec<Record>, ExtractError>
where
    R: AsRef<[String]>,
{
    extract_fallible(rows.into_iter().map(Ok::<R, ExtractError>))
}

/// Run the extractor over a row source that can fail mid-way (e.g. `RowReader`).
/// The first error aborts the run.
pub fn extract_records_from<I, E>(rows: I) -> Result<Vec<Record>, ExtractError>
where
    I: IntoIterator<Item = Result<RawRow, E>>,
    E: Into<ExtractError>,
{
    extract_fallible(rows.into_iter().map(|row| row.map_err(Into::into)))
}

fn extract_fallible<R>(
    rows: impl Iterator<Item = Result<R, ExtractError>>,
) -> Result<Vec<Record>, ExtractError>
where
    R: AsRef<[String]>,
{
    let mut extractor = FieldExtractor::new();
    let mut records = Vec::new();
    let mut row_count = 0usize;

    for row in rows {
        let row = row?;
        row_count += 1;
        if let Some(record) = extractor.push_row(row.as_ref())? {
            records.push(record);
        }
    }

    if let Some(dangling) = extractor.finish() {
        log::debug!("Dropping unfinalized record at end of input: {:?}", dangling);
    }
    log::info!("Extracted {} records from {} rows", records.len(), row_count);

    Ok(records)
}

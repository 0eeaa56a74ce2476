use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::MIN_TAGGED_TOKEN_LEN;
use crate::config::constants::tags;
use crate::domain::IssueDate;

/// The tagged fields a token can carry.
///
/// Declaration order is match order: the 3-char tags come before `Pl`, so a
/// token like `APl...` or `BPr...` is never read as a last price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum FieldTag {
    IssueDate,
    BidPrice,
    AskPrice,
    LastPrice,
}

impl FieldTag {
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::IssueDate => tags::ISSUE_DATE,
            Self::BidPrice => tags::BID_PRICE,
            Self::AskPrice => tags::ASK_PRICE,
            Self::LastPrice => tags::LAST_PRICE,
        }
    }

    /// Find the tag a token starts with and return the untouched remainder.
    pub fn split_token(token: &str) -> Option<(Self, &str)> {
        if token.chars().count() < MIN_TAGGED_TOKEN_LEN {
            return None;
        }
        Self::iter().find_map(|tag| token.strip_prefix(tag.prefix()).map(|rest| (tag, rest)))
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A decoded field value, ready to be folded into the open record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    IssueDate(IssueDate),
    BidPrice(f64),
    AskPrice(f64),
    LastPrice(f64),
}

/// One finalized record. It always has an issue date; prices may be missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub issue_date: IssueDate,
    pub bid_price: Option<f64>,
    pub ask_price: Option<f64>,
    pub last_price: Option<f64>,
}

impl Record {
    pub fn has_any_price(&self) -> bool {
        self.bid_price.is_some() || self.ask_price.is_some() || self.last_price.is_some()
    }
}

/// The open accumulator. Fields may arrive over several rows until a row
/// long enough to close it is seen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PendingRecord {
    pub issue_date: Option<IssueDate>,
    pub bid_price: Option<f64>,
    pub ask_price: Option<f64>,
    pub last_price: Option<f64>,
}

impl PendingRecord {
    /// Later values overwrite earlier ones.
    pub fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::IssueDate(date) => self.issue_date = Some(date),
            FieldValue::BidPrice(price) => self.bid_price = Some(price),
            FieldValue::AskPrice(price) => self.ask_price = Some(price),
            FieldValue::LastPrice(price) => self.last_price = Some(price),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Close the record if it has an issue date; otherwise hand it back unchanged.
    pub fn try_finalize(self) -> Result<Record, Self> {
        match self.issue_date {
            Some(issue_date) => Ok(Record {
                issue_date,
                bid_price: self.bid_price,
                ask_price: self.ask_price,
                last_price: self.last_price,
            }),
            None => Err(self),
        }
    }
}

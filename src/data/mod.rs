mod row_reader;

pub use row_reader::{RawRow, RowReadError, RowReader, split_row};

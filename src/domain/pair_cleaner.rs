use itertools::Itertools;
use strum_macros::{Display, EnumIter};

use crate::domain::IssueDate;

/// Two aligned series with missing values removed, sorted by key (then value).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CleanedPair<K> {
    pub keys: Vec<K>,
    pub values: Vec<f64>,
}

impl<K> CleanedPair<K> {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> {
        self.keys.iter().zip(self.values.iter().copied())
    }

    pub fn map_keys<T>(self, f: impl FnMut(K) -> T) -> CleanedPair<T> {
        CleanedPair {
            keys: self.keys.into_iter().map(f).collect(),
            values: self.values,
        }
    }
}

/// Drop positions whose value is missing, then sort the surviving
/// `(key, value)` pairs ascending by key with the value as tiebreak.
///
/// `keys` and `values` are positionally paired and must be the same length.
pub fn clean_and_sort<K: Ord + Clone>(keys: &[K], values: &[Option<f64>]) -> CleanedPair<K> {
    debug_assert_eq!(keys.len(), values.len());

    let (keys, values) = keys
        .iter()
        .zip(values)
        .filter_map(|(key, value)| value.map(|v| (key.clone(), v)))
        .sorted_by(|(ka, va), (kb, vb)| ka.cmp(kb).then_with(|| va.total_cmp(vb)))
        .unzip();

    CleanedPair { keys, values }
}

/// How cleaned series are ordered along the date axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// By the `DD-Mon-YY` label as text. Not chronological.
    #[default]
    Lexical,
    /// By the underlying calendar date.
    Chronological,
}

impl SortOrder {
    /// Clean one price series against its dates. Keys come back as display labels either way.
    pub fn clean(&self, dates: &[IssueDate], values: &[Option<f64>]) -> CleanedPair<String> {
        match self {
            Self::Lexical => {
                let labels: Vec<String> = dates.iter().map(IssueDate::label).collect();
                clean_and_sort(&labels, values)
            }
            Self::Chronological => clean_and_sort(dates, values).map_keys(|date| date.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_filters_missing_then_sorts_by_key() {
        let keys = ["c", "a", "b"];
        let values = [Some(1.0), Some(2.0), None];

        let cleaned = clean_and_sort(&keys, &values);
        assert_eq!(cleaned.keys, vec!["a", "c"]);
        assert_eq!(cleaned.values, vec![2.0, 1.0]);
    }

    #[test]
    fn test_value_breaks_key_ties() {
        let keys = ["b", "a", "b", "a"];
        let values = [Some(3.0), Some(9.0), Some(1.0), Some(-1.0)];

        let cleaned = clean_and_sort(&keys, &values);
        assert_eq!(cleaned.keys, vec!["a", "a", "b", "b"]);
        assert_eq!(cleaned.values, vec![-1.0, 9.0, 1.0, 3.0]);
    }

    #[test]
    fn test_empty_and_all_missing() {
        let empty: CleanedPair<&str> = clean_and_sort(&[], &[]);
        assert!(empty.is_empty());

        let all_missing = clean_and_sort(&["x", "y"], &[None, None]);
        assert_eq!(all_missing.len(), 0);
        assert!(all_missing.values.is_empty());
    }

    #[test]
    fn test_output_keeps_every_present_pair_once() {
        let keys = ["05-Jan-24", "10-Jan-23", "15-Feb-23", "10-Jan-23", "01-Mar-22"];
        let values = [Some(101.5), None, Some(99.25), Some(100.0), Some(98.0)];

        let cleaned = clean_and_sort(&keys, &values);
        let present = values.iter().filter(|v| v.is_some()).count();
        assert_eq!(cleaned.len(), present);
        assert_eq!(cleaned.values.len(), present);

        let mut expected: Vec<(&str, u64)> = keys
            .iter()
            .zip(values)
            .filter_map(|(k, v)| v.map(|v| (*k, v.to_bits())))
            .collect();
        let mut actual: Vec<(&str, u64)> = cleaned.iter().map(|(k, v)| (*k, v.to_bits())).collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_idempotent() {
        let keys = ["c", "a", "b", "a"];
        let values = [Some(1.0), Some(2.0), None, Some(0.5)];

        let once = clean_and_sort(&keys, &values);
        let as_options: Vec<Option<f64>> = once.values.iter().copied().map(Some).collect();
        let twice = clean_and_sort(&once.keys, &as_options);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_lexical_vs_chronological() {
        let dates: Vec<IssueDate> = ["20240105", "20230110", "20230215"]
            .iter()
            .map(|raw| IssueDate::parse(raw).unwrap())
            .collect();
        let values = [Some(3.0), Some(1.0), Some(2.0)];

        let lexical = SortOrder::Lexical.clean(&dates, &values);
        assert_eq!(lexical.keys, vec!["05-Jan-24", "10-Jan-23", "15-Feb-23"]);
        assert_eq!(lexical.values, vec![3.0, 1.0, 2.0]);

        let chrono = SortOrder::Chronological.clean(&dates, &values);
        assert_eq!(chrono.keys, vec!["10-Jan-23", "15-Feb-23", "05-Jan-24"]);
        assert_eq!(chrono.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_order_names() {
        let names: Vec<String> = SortOrder::iter().map(|o| o.to_string()).collect();
        assert_eq!(names, vec!["lexical", "chronological"]);
        assert_eq!(SortOrder::default(), SortOrder::Lexical);
    }
}

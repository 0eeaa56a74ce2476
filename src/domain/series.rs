use crate::domain::{CleanedPair, IssueDate, Record, SortOrder};

/// Four index-aligned series: entry `i` of each belongs to the same record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    pub dates: Vec<IssueDate>,
    pub bids: Vec<Option<f64>>,
    pub asks: Vec<Option<f64>>,
    pub last_prices: Vec<Option<f64>>,
}

impl PriceSeries {
    /// Records without any price are skipped, so they never reach the date axis.
    pub fn from_records(records: &[Record]) -> Self {
        let mut series = Self::default();
        for record in records.iter().filter(|r| r.has_any_price()) {
            series.dates.push(record.issue_date);
            series.bids.push(record.bid_price);
            series.asks.push(record.ask_price);
            series.last_prices.push(record.last_price);
        }

        let skipped = records.len() - series.len();
        if skipped > 0 {
            log::info!("Skipped {} records with no bid, ask or last price", skipped);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Clean each price series independently against the shared dates.
    pub fn clean(&self, order: SortOrder) -> ScatterSeries {
        let scatter = ScatterSeries {
            date_labels: self.dates.iter().map(IssueDate::label).collect(),
            bid: order.clean(&self.dates, &self.bids),
            ask: order.clean(&self.dates, &self.asks),
            last_price: order.clean(&self.dates, &self.last_prices),
        };
        log::info!(
            "Cleaned series ({} order): {} bids, {} asks, {} last prices over {} dates",
            order,
            scatter.bid.len(),
            scatter.ask.len(),
            scatter.last_price.len(),
            scatter.date_labels.len()
        );
        scatter
    }
}

/// What the plot draws. `date_labels` is the unfiltered, unsorted date
/// sequence and only drives tick placement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSeries {
    pub date_labels: Vec<String>,
    pub bid: CleanedPair<String>,
    pub ask: CleanedPair<String>,
    pub last_price: CleanedPair<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(raw_date: &str, bid: Option<f64>, ask: Option<f64>, last: Option<f64>) -> Record {
        Record {
            issue_date: IssueDate::parse(raw_date).unwrap(),
            bid_price: bid,
            ask_price: ask,
            last_price: last,
        }
    }

    #[test]
    fn test_series_stay_index_aligned() {
        let records = vec![
            record("20230301", Some(1.0), None, Some(1.1)),
            record("20230102", None, Some(2.0), None),
        ];
        let series = PriceSeries::from_records(&records);

        assert_eq!(series.len(), 2);
        assert_eq!(series.dates[1], records[1].issue_date);
        assert_eq!(series.bids, vec![Some(1.0), None]);
        assert_eq!(series.asks, vec![None, Some(2.0)]);
        assert_eq!(series.last_prices, vec![Some(1.1), None]);
    }

    #[test]
    fn test_priceless_records_are_skipped() {
        let records = vec![
            record("20230301", None, None, None),
            record("20230302", None, None, Some(5.0)),
        ];
        let series = PriceSeries::from_records(&records);

        assert_eq!(series.len(), 1);
        assert_eq!(series.dates[0].label(), "02-Mar-23");
    }

    #[test]
    fn test_clean_each_price_series_independently() {
        let records = vec![
            record("20230301", Some(1.0), None, Some(1.1)),
            record("20230102", None, Some(2.0), Some(2.1)),
            record("20230215", Some(3.0), Some(3.5), None),
        ];
        let scatter = PriceSeries::from_records(&records).clean(SortOrder::Lexical);

        assert_eq!(scatter.date_labels, vec!["01-Mar-23", "02-Jan-23", "15-Feb-23"]);
        assert_eq!(scatter.bid.keys, vec!["01-Mar-23", "15-Feb-23"]);
        assert_eq!(scatter.bid.values, vec![1.0, 3.0]);
        assert_eq!(scatter.ask.keys, vec!["02-Jan-23", "15-Feb-23"]);
        assert_eq!(scatter.last_price.keys, vec!["01-Mar-23", "02-Jan-23"]);
        assert_eq!(scatter.last_price.values, vec![1.1, 2.1]);
    }

    #[test]
    fn test_empty_records() {
        let series = PriceSeries::from_records(&[]);
        assert!(series.is_empty());
        let scatter = series.clean(SortOrder::Chronological);
        assert!(scatter.bid.is_empty() && scatter.ask.is_empty() && scatter.last_price.is_empty());
    }
}

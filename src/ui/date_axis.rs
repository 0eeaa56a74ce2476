use std::collections::HashMap;

use crate::domain::{CleanedPair, ScatterSeries};

/// A labelled tick on the date axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTick {
    pub position: usize,
    pub label: String,
}

/// Categorical x axis.
///
/// Each distinct date label gets the next integer position in order of first
/// appearance, scanning the bid, then ask, then last price series. Ticks sit
/// at every `stride`-th position up to the length of the unfiltered date
/// sequence; a tick past the last category has an empty label.
#[derive(Debug, Clone, Default)]
pub struct DateAxis {
    categories: Vec<String>,
    positions: HashMap<String, usize>,
    date_count: usize,
    stride: usize,
}

impl DateAxis {
    pub fn from_scatter(scatter: &ScatterSeries, stride: usize) -> Self {
        let mut axis = Self {
            date_count: scatter.date_labels.len(),
            stride: stride.max(1),
            ..Self::default()
        };
        for pair in [&scatter.bid, &scatter.ask, &scatter.last_price] {
            axis.register(pair);
        }
        axis
    }

    fn register(&mut self, pair: &CleanedPair<String>) {
        for key in &pair.keys {
            if !self.positions.contains_key(key) {
                self.positions.insert(key.clone(), self.categories.len());
                self.categories.push(key.clone());
            }
        }
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.positions.get(label).copied()
    }

    /// Empty string when nothing sits at `position`.
    pub fn label_at(&self, position: usize) -> &str {
        self.categories.get(position).map_or("", String::as_str)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn ticks(&self) -> Vec<DateTick> {
        (0..self.date_count)
            .step_by(self.stride)
            .map(|position| DateTick {
                position,
                label: self.label_at(position).to_string(),
            })
            .collect()
    }

    pub fn stride(&self) -> usize {
        self.stride
    }
}

/// Plot coordinates for one cleaned series, in its sorted order.
pub fn series_points(pair: &CleanedPair<String>, axis: &DateAxis) -> Vec<[f64; 2]> {
    pair.iter()
        .filter_map(|(key, value)| axis.position(key).map(|x| [x as f64, value]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(keys: &[&str], values: &[f64]) -> CleanedPair<String> {
        CleanedPair {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            values: values.to_vec(),
        }
    }

    fn scatter() -> ScatterSeries {
        ScatterSeries {
            date_labels: ["d", "b", "a", "c", "e", "f", "g"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            bid: pair(&["b", "d"], &[1.0, 2.0]),
            ask: pair(&["a", "d"], &[1.5, 2.5]),
            last_price: pair(&["c", "e", "f"], &[1.2, 1.3, 1.4]),
        }
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let axis = DateAxis::from_scatter(&scatter(), 5);
        assert_eq!(axis.categories(), ["b", "d", "a", "c", "e", "f"]);
        assert_eq!(axis.position("a"), Some(2));
        assert_eq!(axis.position("g"), None);
    }

    #[test]
    fn test_ticks_follow_unfiltered_length() {
        let axis = DateAxis::from_scatter(&scatter(), 5);
        assert_eq!(
            axis.ticks(),
            vec![
                DateTick { position: 0, label: "b".to_string() },
                DateTick { position: 5, label: "f".to_string() },
            ]
        );

        let dense = DateAxis::from_scatter(&scatter(), 3);
        let labels: Vec<String> = dense.ticks().into_iter().map(|t| t.label).collect();
        // Position 6 has no category: "g" never had a price
        assert_eq!(labels, vec!["b", "c", ""]);
    }

    #[test]
    fn test_zero_stride_is_clamped() {
        let axis = DateAxis::from_scatter(&scatter(), 0);
        assert_eq!(axis.stride(), 1);
        assert_eq!(axis.ticks().len(), 7);
    }

    #[test]
    fn test_series_points_use_category_positions() {
        let scatter = scatter();
        let axis = DateAxis::from_scatter(&scatter, 5);
        assert_eq!(series_points(&scatter.ask, &axis), vec![[2.0, 1.5], [1.0, 2.5]]);
    }

    #[test]
    fn test_empty_scatter() {
        let axis = DateAxis::from_scatter(&ScatterSeries::default(), 5);
        assert!(axis.categories().is_empty());
        assert!(axis.ticks().is_empty());
        assert_eq!(axis.label_at(0), "");
    }
}

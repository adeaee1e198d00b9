// src/types.rs

use serde::{Deserialize, Serialize};

/// Canonical sentiment categories, in canonical order.
///
/// The order is load-bearing: the dominant-category computation breaks
/// ties by taking the first category in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Neutral,
    Left,
    Right,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Neutral, Category::Left, Category::Right];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Neutral => "neutral",
            Category::Left => "left",
            Category::Right => "right",
        }
    }
}

/// Tweet counts per sentiment category for one classification result.
///
/// Constructed from a classifier response or a store row, never
/// mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub neutral: u64,
    pub left: u64,
    pub right: u64,
}

impl SentimentDistribution {
    pub fn new(neutral: u64, left: u64, right: u64) -> Self {
        Self { neutral, left, right }
    }

    pub fn count(&self, category: Category) -> u64 {
        match category {
            Category::Neutral => self.neutral,
            Category::Left => self.left,
            Category::Right => self.right,
        }
    }

    /// Category with the highest count. Ties go to the first category
    /// in canonical order (neutral, left, right).
    pub fn dominant(&self) -> Category {
        let mut best = Category::Neutral;
        for category in Category::ALL {
            if self.count(category) > self.count(best) {
                best = category;
            }
        }
        best
    }
}

/// One persisted row of the account history table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub account: String,
    #[serde(flatten)]
    pub distribution: SentimentDistribution,
}

impl HistoryRecord {
    pub fn new(account: impl Into<String>, distribution: SentimentDistribution) -> Self {
        Self {
            account: account.into(),
            distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_simple() {
        let dist = SentimentDistribution::new(2, 5, 1);
        assert_eq!(dist.dominant(), Category::Left);

        let dist = SentimentDistribution::new(1, 1, 9);
        assert_eq!(dist.dominant(), Category::Right);
    }

    #[test]
    fn test_dominant_tie_break_canonical_order() {
        // All equal: neutral wins
        let dist = SentimentDistribution::new(3, 3, 3);
        assert_eq!(dist.dominant(), Category::Neutral);

        // Left ties right: left wins
        let dist = SentimentDistribution::new(0, 4, 4);
        assert_eq!(dist.dominant(), Category::Left);
    }

    #[test]
    fn test_history_record_json_shape() {
        let record = HistoryRecord::new("alice", SentimentDistribution::new(2, 5, 1));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "account": "alice",
                "neutral": 2,
                "left": 5,
                "right": 1
            })
        );
    }
}

use derive_more::{Constructor, Deref, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - stable deal identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Deref, Constructor,
    Serialize, Deserialize,
)]
pub struct DealId(u32);

impl DealId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Value Object - analyst score on a 0..=10 scale
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=10.0).contains(&self.0)
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // "8.5" and "8", the way the score badges print it
        write!(f, "{}", self.0)
    }
}

/// Value Object - investment amount in whole dollars
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Deref, Constructor,
    Serialize, Deserialize,
)]
pub struct Amount(u64);

impl Amount {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Thousands-grouped form for cards and detail rows: `$15,000,000`
    pub fn format_full(&self) -> String {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("${grouped}")
    }

    /// Compact form for stat tiles: `$15.0M`, `$450K`
    pub fn format_compact(&self) -> String {
        if self.0 >= 1_000_000 {
            format!("${:.1}M", self.0 as f64 / 1_000_000.0)
        } else {
            format!("${:.0}K", self.0 as f64 / 1_000.0)
        }
    }
}

/// Value Object - funding stage, a small fixed set of labels
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum FundingStage {
    #[strum(serialize = "Seed")]
    #[serde(rename = "Seed")]
    Seed,

    #[strum(serialize = "Series A")]
    #[serde(rename = "Series A")]
    SeriesA,

    #[strum(serialize = "Series B")]
    #[serde(rename = "Series B")]
    SeriesB,

    #[strum(serialize = "Series C")]
    #[serde(rename = "Series C")]
    SeriesC,
}

impl FundingStage {
    pub fn label(&self) -> &str {
        self.as_ref()
    }
}

/// Transient filter state: raw UI inputs, not yet validated numbers.
///
/// `min_score` keeps the input text as typed; parsing happens on read so a
/// half-typed or invalid value never becomes an error state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub min_score: String,
}

impl FilterCriteria {
    pub fn new(name: impl Into<String>, min_score: impl Into<String>) -> Self {
        Self { name: name.into(), min_score: min_score.into() }
    }

    /// Both inputs at their defaults - filtering is the identity
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.min_score.is_empty()
    }

    /// Effective threshold: empty or non-numeric input means no threshold
    pub fn min_score_threshold(&self) -> f64 {
        match self.min_score.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => 0.0,
        }
    }
}

/// Aggregates derived from a deal sequence; computed, never stored
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DealStats {
    pub count: usize,
    pub total_amount: u64,
    /// Mean score rounded to one decimal; 0 for the empty set
    pub avg_score: f64,
    pub sector_count: usize,
}

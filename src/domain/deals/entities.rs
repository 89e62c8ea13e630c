pub use super::value_objects::{Amount, DealId, FundingStage, Score};
use serde::{Deserialize, Serialize};

/// Domain entity - one investment opportunity in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub name: String,
    pub company: String,
    pub sector: String,
    pub stage: FundingStage,
    pub amount: Amount,
    pub score: Score,
    pub description: String,
    pub metrics: DealMetrics,
    pub investors: Vec<String>,
    pub founded: u16,
    pub location: String,
}

impl Deal {
    /// Case-insensitive substring match on the display name.
    /// An empty query matches every deal.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn meets_min_score(&self, min_score: f64) -> bool {
        self.score.value() >= min_score
    }

    /// The one invariant the types don't already enforce: score stays on
    /// the 0..=10 scale (amounts and metric counts are unsigned).
    pub fn is_valid(&self) -> bool {
        self.score.is_valid()
    }
}

/// Headline company metrics shown on cards and the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealMetrics {
    pub revenue: String,
    pub growth: String,
    pub customers: u32,
    #[serde(rename = "teamSize")]
    pub team_size: u32,
}

impl DealMetrics {
    pub fn new(
        revenue: impl Into<String>,
        growth: impl Into<String>,
        customers: u32,
        team_size: u32,
    ) -> Self {
        Self { revenue: revenue.into(), growth: growth.into(), customers, team_size }
    }
}

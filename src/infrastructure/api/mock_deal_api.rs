use gloo_timers::future::TimeoutFuture;

use crate::domain::deals::{Deal, DealId};
use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::api::seed::seed_deals;

/// Default latency windows, half-open millisecond ranges
const LIST_LATENCY_MS: (u32, u32) = (800, 1200);
const DETAIL_LATENCY_MS: (u32, u32) = (300, 500);

/// Default probability that a call fails with a `FetchError`
const DEFAULT_FAILURE_RATE: f64 = 0.05;

/// In-memory stand-in for the deal API.
///
/// Owns the canonical catalog snapshot and simulates a flaky network:
/// every call sleeps a random delay, then either fails or resolves with a
/// copy of the data. Calls are independent - no caching, no coalescing,
/// no built-in retry.
pub struct MockDealApi {
    deals: Vec<Deal>,
    failure_rate: f64,
    list_latency_ms: (u32, u32),
    detail_latency_ms: (u32, u32),
}

impl Default for MockDealApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDealApi {
    pub fn new() -> Self {
        Self {
            deals: seed_deals(),
            failure_rate: DEFAULT_FAILURE_RATE,
            list_latency_ms: LIST_LATENCY_MS,
            detail_latency_ms: DETAIL_LATENCY_MS,
        }
    }

    /// Override the injected failure probability, clamped to [0, 1].
    /// Tests pin this to 0.0 or 1.0 for deterministic outcomes.
    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate.clamp(0.0, 1.0);
        self
    }

    /// Override the latency windows (tests use zero-width ranges)
    pub fn with_latency(mut self, list_ms: (u32, u32), detail_ms: (u32, u32)) -> Self {
        self.list_latency_ms = list_ms;
        self.detail_latency_ms = detail_ms;
        self
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    /// Fetch the full ordered catalog.
    pub async fn list_deals(&self) -> FetchResult<Vec<Deal>> {
        self.simulate_latency(self.list_latency_ms).await;

        if self.roll_failure() {
            let error = FetchError::new("Failed to fetch deals. Please try again.");
            get_logger().warn(
                LogComponent::Infrastructure("MockDealApi"),
                &format!("❌ list_deals failed: {error}"),
            );
            return Err(error);
        }

        get_logger().info(
            LogComponent::Infrastructure("MockDealApi"),
            &format!("✅ list_deals resolved with {} deals", self.deals.len()),
        );
        // defensive copy - callers can never touch the canonical store
        Ok(self.deals.clone())
    }

    /// Fetch a single deal. An unknown id resolves to `Ok(None)`; only the
    /// injected transient failure produces an `Err`.
    pub async fn get_deal(&self, id: DealId) -> FetchResult<Option<Deal>> {
        self.simulate_latency(self.detail_latency_ms).await;

        if self.roll_failure() {
            let error = FetchError::new("Failed to fetch deal details. Please try again.");
            get_logger().warn(
                LogComponent::Infrastructure("MockDealApi"),
                &format!("❌ get_deal({}) failed: {error}", id.value()),
            );
            return Err(error);
        }

        let deal = self.deals.iter().find(|deal| deal.id == id).cloned();
        if deal.is_none() {
            get_logger().info(
                LogComponent::Infrastructure("MockDealApi"),
                &format!("get_deal({}) found no match", id.value()),
            );
        }
        Ok(deal)
    }

    async fn simulate_latency(&self, (min_ms, max_ms): (u32, u32)) {
        let jitter = if max_ms > min_ms {
            (js_sys::Math::random() * f64::from(max_ms - min_ms)) as u32
        } else {
            0
        };
        TimeoutFuture::new(min_ms + jitter).await;
    }

    fn roll_failure(&self) -> bool {
        if self.failure_rate <= 0.0 {
            return false;
        }
        if self.failure_rate >= 1.0 {
            return true;
        }
        js_sys::Math::random() < self.failure_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_rate_is_clamped() {
        assert_eq!(MockDealApi::new().with_failure_rate(1.7).failure_rate(), 1.0);
        assert_eq!(MockDealApi::new().with_failure_rate(-0.3).failure_rate(), 0.0);
        assert_eq!(MockDealApi::new().with_failure_rate(0.25).failure_rate(), 0.25);
    }

    #[test]
    fn default_config_matches_the_simulated_network() {
        let api = MockDealApi::new();
        assert_eq!(api.failure_rate(), DEFAULT_FAILURE_RATE);
        assert_eq!(api.list_latency_ms, LIST_LATENCY_MS);
        assert_eq!(api.detail_latency_ms, DETAIL_LATENCY_MS);
    }

    #[test]
    fn pinned_rates_never_consult_the_rng() {
        // roll_failure at the extremes is deterministic, no Math.random call
        assert!(!MockDealApi::new().with_failure_rate(0.0).roll_failure());
        assert!(MockDealApi::new().with_failure_rate(1.0).roll_failure());
    }
}

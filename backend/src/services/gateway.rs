//! Action gateway isolating artificial latency and mock reference generation
//!
//! The mock endpoints synthesize their delay and identifiers through this
//! interface so a real implementation (persistence, proper id generation,
//! real validation) can replace it without touching the calling services.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

/// Gateway behind every mock action endpoint
#[async_trait]
pub trait ActionGateway: Send + Sync {
    /// Wait out the artificial processing latency
    async fn simulate_latency(&self);

    /// Synthesize a reference of the form `PREFIX-<n>`. No uniqueness
    /// guarantee: the suffix is a random integer below 10000.
    fn next_reference(&self, prefix: &str) -> String;
}

/// The stock gateway: a fixed sleep and a random suffix
pub struct MockActionGateway {
    delay: Duration,
}

impl MockActionGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A gateway with no latency, for tests
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl ActionGateway for MockActionGateway {
    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn next_reference(&self, prefix: &str) -> String {
        let suffix = rand::thread_rng().gen_range(0..10_000);
        format!("{}-{}", prefix, suffix)
    }
}

use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use std::time::Duration;

/// Configuration for the fast-path cache that mirrors freshly created messages.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CacheConfig {
    /// Connection URL of the Redis instance, e.g. `redis://127.0.0.1:6379`.
    pub url: String,
    /// Time after which the cached copy of a message expires, even if it was never read. Default
    /// is 24 hours.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub ttl: Duration,
    /// Prefix prepended to the message ID to form the cache entry key.
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            ttl: Duration::from_secs(86400),
            key_prefix: "secret_message:".to_string(),
        }
    }
}

mod cache_config;
mod database_config;
mod messages_config;
mod raw_config;

use anyhow::bail;

pub use self::{
    cache_config::CacheConfig,
    database_config::DatabaseConfig,
    messages_config::{MIN_KEY_SIZE, MessagesConfig},
    raw_config::RawConfig,
};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Version of the Secretdrop binary.
    pub version: String,
    /// HTTP port to bind API server to.
    pub http_port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Fast-path cache configuration.
    pub cache: CacheConfig,
    /// Configuration for the secret messages.
    pub messages: MessagesConfig,
}

impl TryFrom<RawConfig> for Config {
    type Error = anyhow::Error;

    fn try_from(raw_config: RawConfig) -> Result<Self, Self::Error> {
        if raw_config.messages.key_size < MIN_KEY_SIZE {
            bail!(
                "Message key size must be at least {MIN_KEY_SIZE} bytes, but got {}.",
                raw_config.messages.key_size
            );
        }

        if raw_config.messages.max_message_length == 0 {
            bail!("Maximum message length must be greater than 0.");
        }

        if raw_config.cache.ttl.is_zero() {
            bail!("Cache TTL must be greater than 0.");
        }

        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            http_port: raw_config.port,
            db: raw_config.db,
            cache: raw_config.cache,
            messages: raw_config.messages,
        })
    }
}

use crate::{
    config::CacheConfig,
    messages::{SecretMessage, SecretMessageId},
};
use anyhow::Context;
use futures::future::BoxFuture;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use std::time::Duration;

/// Trait describing a transient, time-bounded cache of the secret messages. The cache isn't
/// authoritative and all its operations are best-effort.
pub trait MessagesCache: Sync + Send + 'static {
    /// Stores a copy of the message that expires after the specified time-to-live.
    fn set<'a>(
        &'a self,
        message: &'a SecretMessage,
        ttl: Duration,
    ) -> BoxFuture<'a, anyhow::Result<()>>;

    /// Retrieves a copy of the message, if it's still cached.
    fn get(&self, id: SecretMessageId) -> BoxFuture<'_, anyhow::Result<Option<SecretMessage>>>;

    /// Removes a copy of the message from the cache, if it exists.
    fn remove(&self, id: SecretMessageId) -> BoxFuture<'_, anyhow::Result<()>>;
}

/// Redis backed messages cache.
#[derive(Clone)]
pub struct RedisMessagesCache {
    connection: MultiplexedConnection,
    key_prefix: String,
}

impl RedisMessagesCache {
    /// Connects to the Redis instance described by the config.
    pub async fn connect(config: &CacheConfig) -> anyhow::Result<Self> {
        let client = Client::open(config.url.as_str())
            .with_context(|| format!("Invalid cache URL: {}", config.url))?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .with_context(|| "Failed to connect to the cache")?;

        Ok(Self {
            connection,
            key_prefix: config.key_prefix.clone(),
        })
    }
}

impl MessagesCache for RedisMessagesCache {
    fn set<'a>(
        &'a self,
        message: &'a SecretMessage,
        ttl: Duration,
    ) -> BoxFuture<'a, anyhow::Result<()>> {
        Box::pin(async move {
            let value = serde_json::to_string(message)?;
            let mut connection = self.connection.clone();
            connection
                .set_ex::<_, _, ()>(
                    cache_entry_key(&self.key_prefix, message.id),
                    value,
                    ttl.as_secs(),
                )
                .await?;

            Ok(())
        })
    }

    fn get(&self, id: SecretMessageId) -> BoxFuture<'_, anyhow::Result<Option<SecretMessage>>> {
        Box::pin(async move {
            let mut connection = self.connection.clone();
            let value: Option<String> = connection
                .get(cache_entry_key(&self.key_prefix, id))
                .await?;

            value
                .map(|value| {
                    serde_json::from_str::<SecretMessage>(&value)
                        .with_context(|| format!("Cannot deserialize cached message ({id})."))
                })
                .transpose()
        })
    }

    fn remove(&self, id: SecretMessageId) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            let mut connection = self.connection.clone();
            connection
                .del::<_, ()>(cache_entry_key(&self.key_prefix, id))
                .await?;

            Ok(())
        })
    }
}

/// Returns the key of the cache entry for the message with the specified ID.
fn cache_entry_key(key_prefix: &str, id: SecretMessageId) -> String {
    format!("{key_prefix}{id}")
}

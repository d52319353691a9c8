use crate::{
    api::Api,
    error::Error as SecretdropError,
    messages::{
        MessageConsumeParams, MessageCreateParams, MessagesCache, SecretMessage, SecretMessageId,
        SecretMessageReceipt, SecretStore,
    },
    security::{hash_password, random_token, tokens_match, verify_password},
};
use anyhow::{Context, bail};
use std::str::FromStr;
use tracing::{debug, warn};

const MESSAGE_NOT_FOUND: &str = "Message not found or already deleted";

pub struct MessagesApiExt<'a, S: SecretStore, C: MessagesCache> {
    api: &'a Api<S, C>,
}

impl<'a, S: SecretStore, C: MessagesCache> MessagesApiExt<'a, S, C> {
    pub fn new(api: &'a Api<S, C>) -> Self {
        Self { api }
    }

    /// Creates a new secret message, stores it in the durable store and mirrors it to the cache.
    pub async fn create_message(
        &self,
        params: MessageCreateParams,
    ) -> anyhow::Result<SecretMessageReceipt> {
        let message = match params.message {
            Some(message) if !message.is_empty() => message,
            _ => bail!(SecretdropError::client("Message is required")),
        };

        let max_message_length = self.api.config.messages.max_message_length;
        if message.len() > max_message_length {
            bail!(SecretdropError::client(format!(
                "Message cannot be longer than {max_message_length} bytes"
            )));
        }

        // Empty password is the same as no password at all.
        let password_hash = match params.password.as_deref() {
            Some(password) if !password.is_empty() => Some(hash_password(password)?),
            _ => None,
        };

        let key = random_token(self.api.config.messages.key_size)?;
        let secret_message = self
            .api
            .store
            .insert(&message, password_hash.as_deref(), &key)
            .await
            .with_context(|| "Failed to store secret message.")?;

        // The durable store is the source of truth, the message is still retrievable even if it
        // couldn't be cached.
        if let Err(err) = self
            .api
            .cache
            .set(&secret_message, self.api.config.cache.ttl)
            .await
        {
            warn!(message.id = %secret_message.id, "Failed to cache secret message: {err:?}");
        }

        debug!(
            message.id = %secret_message.id,
            message.protected = secret_message.password_hash.is_some(),
            "Created secret message."
        );

        Ok(SecretMessageReceipt {
            id: secret_message.id,
            key: secret_message.key,
        })
    }

    /// Retrieves the content of the secret message and permanently deletes it. Only the first
    /// successful call for a given message returns its content.
    pub async fn consume_message(
        &self,
        id: &str,
        params: MessageConsumeParams,
    ) -> anyhow::Result<String> {
        let Ok(id) = SecretMessageId::from_str(id) else {
            bail!(SecretdropError::client("Invalid message ID format"));
        };

        let secret_message = match self.get_cached_message(id).await {
            Some(secret_message) => secret_message,
            None => self
                .api
                .store
                .get(id)
                .await
                .with_context(|| format!("Failed to retrieve secret message ({id})."))?
                .ok_or_else(|| SecretdropError::not_found(MESSAGE_NOT_FOUND))?,
        };

        match params.key.as_deref() {
            Some(key) if tokens_match(key, &secret_message.key) => {}
            _ => {
                debug!(message.id = %id, "Secret message key doesn't match.");
                bail!(SecretdropError::access_forbidden("Invalid key"));
            }
        }

        if let Some(ref password_hash) = secret_message.password_hash {
            let password = match params.password.as_deref() {
                Some(password) if !password.is_empty() => password,
                _ => bail!(SecretdropError::unauthorized("Password required")),
            };

            if !verify_password(password, password_hash)? {
                debug!(message.id = %id, "Secret message password doesn't match.");
                bail!(SecretdropError::access_forbidden("Incorrect password"));
            }
        }

        // The durable store decides whether this call is the one that consumes the message, the
        // cache entry is invalidated regardless of the outcome.
        let removed_message = self.api.store.remove(id, &secret_message.key).await;
        if let Err(err) = self.api.cache.remove(id).await {
            warn!(message.id = %id, "Failed to remove secret message from cache: {err:?}");
        }

        match removed_message
            .with_context(|| format!("Failed to remove secret message ({id})."))?
        {
            Some(SecretMessage { message, .. }) => {
                debug!(message.id = %id, "Consumed secret message.");
                Ok(message)
            }
            None => {
                debug!(message.id = %id, "Secret message has already been consumed.");
                bail!(SecretdropError::not_found(MESSAGE_NOT_FOUND))
            }
        }
    }

    /// Retrieves message from the cache, cache failures are treated as misses.
    async fn get_cached_message(&self, id: SecretMessageId) -> Option<SecretMessage> {
        match self.api.cache.get(id).await {
            Ok(secret_message) => secret_message,
            Err(err) => {
                warn!(message.id = %id, "Failed to retrieve secret message from cache: {err:?}");
                None
            }
        }
    }
}

impl<S: SecretStore, C: MessagesCache> Api<S, C> {
    /// Returns an API to work with secret messages.
    pub fn messages(&self) -> MessagesApiExt<'_, S, C> {
        MessagesApiExt::new(self)
    }
}

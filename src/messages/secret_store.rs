use crate::{
    database::Database,
    messages::{SecretMessage, SecretMessageId},
};
use futures::future::BoxFuture;

/// Trait describing a durable, authoritative store of the secret messages.
pub trait SecretStore: Sync + Send + 'static {
    /// Persists a new message and returns the stored record with the store-assigned ID.
    fn insert<'a>(
        &'a self,
        message: &'a str,
        password_hash: Option<&'a str>,
        key: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<SecretMessage>>;

    /// Retrieves a message by its ID.
    fn get(&self, id: SecretMessageId) -> BoxFuture<'_, anyhow::Result<Option<SecretMessage>>>;

    /// Atomically removes a message with the specified ID and key and returns it. At most one
    /// caller receives `Some` for a given message.
    fn remove<'a>(
        &'a self,
        id: SecretMessageId,
        key: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Option<SecretMessage>>>;
}

impl SecretStore for Database {
    fn insert<'a>(
        &'a self,
        message: &'a str,
        password_hash: Option<&'a str>,
        key: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<SecretMessage>> {
        Box::pin(self.insert_secret_message(message, password_hash, key))
    }

    fn get(&self, id: SecretMessageId) -> BoxFuture<'_, anyhow::Result<Option<SecretMessage>>> {
        Box::pin(self.get_secret_message(id))
    }

    fn remove<'a>(
        &'a self,
        id: SecretMessageId,
        key: &'a str,
    ) -> BoxFuture<'a, anyhow::Result<Option<SecretMessage>>> {
        Box::pin(self.remove_secret_message(id, key))
    }
}

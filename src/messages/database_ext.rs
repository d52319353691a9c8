use crate::{
    database::Database,
    messages::{SecretMessage, SecretMessageId},
};
use sqlx::{FromRow, query_as};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, FromRow)]
struct RawSecretMessage {
    id: Uuid,
    message: String,
    password_hash: Option<String>,
    key: String,
    created_at: OffsetDateTime,
}

impl From<RawSecretMessage> for SecretMessage {
    fn from(raw: RawSecretMessage) -> Self {
        SecretMessage {
            id: raw.id.into(),
            message: raw.message,
            password_hash: raw.password_hash,
            key: raw.key,
            created_at: raw.created_at,
        }
    }
}

/// Extends the primary database with the secret messages methods.
impl Database {
    /// Inserts a new secret message and returns the stored record with the assigned ID.
    pub async fn insert_secret_message(
        &self,
        message: &str,
        password_hash: Option<&str>,
        key: &str,
    ) -> anyhow::Result<SecretMessage> {
        // Timestamps are stored with a second precision to match the cached copy.
        let created_at = OffsetDateTime::now_utc().replace_nanosecond(0)?;
        let raw: RawSecretMessage = query_as(
            r#"
INSERT INTO secret_messages (id, message, password_hash, key, created_at)
VALUES ($1, $2, $3, $4, $5)
RETURNING id, message, password_hash, key, created_at
            "#,
        )
        .bind(*SecretMessageId::new())
        .bind(message)
        .bind(password_hash)
        .bind(key)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(raw.into())
    }

    /// Retrieves secret message by its ID.
    pub async fn get_secret_message(
        &self,
        id: SecretMessageId,
    ) -> anyhow::Result<Option<SecretMessage>> {
        let raw: Option<RawSecretMessage> = query_as(
            r#"
SELECT id, message, password_hash, key, created_at
FROM secret_messages
WHERE id = $1
            "#,
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(raw.map(SecretMessage::from))
    }

    /// Atomically removes the secret message with the specified ID and key, and returns the removed
    /// record. Returns `None` if there is no such message, so that only one of the concurrent
    /// callers can ever observe the removed message.
    pub async fn remove_secret_message(
        &self,
        id: SecretMessageId,
        key: &str,
    ) -> anyhow::Result<Option<SecretMessage>> {
        let raw: Option<RawSecretMessage> = query_as(
            r#"
DELETE FROM secret_messages
WHERE id = $1 AND key = $2
RETURNING id, message, password_hash, key, created_at
            "#,
        )
        .bind(*id)
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(raw.map(SecretMessage::from))
    }
}

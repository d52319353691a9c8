use crate::messages::SecretMessageId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents a one-time readable secret message. The same record is stored in both the durable
/// store and the fast-path cache.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretMessage {
    /// Unique identifier of the message, used as a public lookup handle.
    pub id: SecretMessageId,
    /// Content of the message.
    pub message: String,
    /// Optional one-way hash of the password protecting the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// Random token that must be presented alongside the `id` to retrieve the message.
    pub key: String,
    /// Date and time when the message was created.
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

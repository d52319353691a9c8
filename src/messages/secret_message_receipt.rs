use crate::messages::SecretMessageId;
use serde::Serialize;

/// Handle returned to the creator of the message: both `id` and `key` are required to retrieve it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SecretMessageReceipt {
    /// Unique identifier of the created message.
    pub id: SecretMessageId,
    /// Key that must be presented alongside the `id` to retrieve the message.
    pub key: String,
}

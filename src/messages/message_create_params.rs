use serde::Deserialize;

/// Parameters of the request to create a new secret message.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageCreateParams {
    /// Content of the message, required.
    pub message: Option<String>,
    /// Optional password to protect the message with.
    pub password: Option<String>,
}

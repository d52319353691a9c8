use serde::Deserialize;

/// Parameters of the request to retrieve (and consume) a secret message.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageConsumeParams {
    /// Key that was issued when the message was created.
    pub key: Option<String>,
    /// Password, if the message is password protected.
    pub password: Option<String>,
}

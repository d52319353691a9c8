use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    ops::Deref,
    str::FromStr,
};
use uuid::Uuid;

/// Represents unique identifier of the secret message.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct SecretMessageId(Uuid);

impl SecretMessageId {
    /// Creates a new unique, time-ordered secret message ID.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SecretMessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SecretMessageId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for SecretMessageId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Display for SecretMessageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Deref for SecretMessageId {
    type Target = Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

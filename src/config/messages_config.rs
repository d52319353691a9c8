use serde_derive::{Deserialize, Serialize};

/// Minimum size of the message key in bytes (64 bits of entropy).
pub const MIN_KEY_SIZE: usize = 8;

/// Configuration for the secret messages.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MessagesConfig {
    /// Number of random bytes used to generate a message key. The key is hex encoded, so its
    /// length is twice this value.
    pub key_size: usize,
    /// Maximum length of the message content in bytes.
    pub max_message_length: usize,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            key_size: MIN_KEY_SIZE,
            max_message_length: 10 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::MessagesConfig;
    use insta::assert_toml_snapshot;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(MessagesConfig::default(), @r###"
        key-size = 8
        max-message-length = 10240
        "###);
    }

    #[test]
    fn deserialization() {
        let config: MessagesConfig = toml::from_str(
            r#"
        key-size = 16
        max-message-length = 1024
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            MessagesConfig {
                key_size: 16,
                max_message_length: 1024,
            }
        );
    }
}

mod api_ext;
mod database_ext;
mod message_consume_params;
mod message_create_params;
mod messages_cache;
mod secret_message;
mod secret_message_id;
mod secret_message_receipt;
mod secret_store;

pub use self::{
    message_consume_params::MessageConsumeParams,
    message_create_params::MessageCreateParams,
    messages_cache::{MessagesCache, RedisMessagesCache},
    secret_message::SecretMessage,
    secret_message_id::SecretMessageId,
    secret_message_receipt::SecretMessageReceipt,
    secret_store::SecretStore,
};

#[cfg(test)]
pub mod tests {
    pub use super::{messages_cache::tests::MockMessagesCache, secret_store::tests::MockSecretStore};
}

use crate::{
    error::{Error as SecretdropError, ErrorKind},
    messages::{MessageCreateParams, MessagesCache, SecretMessageId, SecretStore},
    server::app_state::AppState,
};
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct MessagesCreateResponse<'a> {
    message: &'a str,
    id: SecretMessageId,
    key: String,
}

/// POST /messages
pub async fn messages_create<S: SecretStore, C: MessagesCache>(
    state: web::Data<AppState<S, C>>,
    body: web::Json<MessageCreateParams>,
) -> Result<HttpResponse, SecretdropError> {
    match state.api.messages().create_message(body.into_inner()).await {
        Ok(receipt) => Ok(HttpResponse::Created().json(MessagesCreateResponse {
            message: "Secret message created successfully!",
            id: receipt.id,
            key: receipt.key,
        })),
        Err(err) => {
            let err = SecretdropError::from(err);
            if err.kind() == ErrorKind::Unknown {
                error!("Failed to create secret message: {err:?}");
            }
            Err(err)
        }
    }
}

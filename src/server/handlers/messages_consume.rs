use crate::{
    error::{Error as SecretdropError, ErrorKind},
    messages::{MessageConsumeParams, MessagesCache, SecretStore},
    server::app_state::AppState,
};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Deserialize)]
pub struct MessagePath {
    pub id: String,
}

#[derive(Serialize)]
struct MessagesConsumeResponse {
    message: String,
}

/// POST /messages/{id}
pub async fn messages_consume<S: SecretStore, C: MessagesCache>(
    state: web::Data<AppState<S, C>>,
    path: web::Path<MessagePath>,
    body: web::Json<MessageConsumeParams>,
) -> Result<HttpResponse, SecretdropError> {
    match state
        .api
        .messages()
        .consume_message(&path.id, body.into_inner())
        .await
    {
        Ok(message) => Ok(HttpResponse::Ok().json(MessagesConsumeResponse { message })),
        Err(err) => {
            let err = SecretdropError::from(err);
            if err.kind() == ErrorKind::Unknown {
                error!(message.id = %path.id, "Failed to retrieve secret message: {err:?}");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::ErrorKind,
        messages::{MessageConsumeParams, MessageCreateParams},
        server::handlers::{messages_consume, messages_consume::MessagePath},
        tests::mock_app_state,
    };
    use actix_web::{body::MessageBody, web};
    use bytes::Bytes;

    #[actix_web::test]
    async fn can_consume_message() -> anyhow::Result<()> {
        let app_state = web::Data::new(mock_app_state()?);
        let receipt = app_state
            .api
            .messages()
            .create_message(MessageCreateParams {
                message: Some("launch codes".to_string()),
                password: None,
            })
            .await?;

        let response = messages_consume(
            app_state.clone(),
            web::Path::from(MessagePath {
                id: receipt.id.to_string(),
            }),
            web::Json(MessageConsumeParams {
                key: Some(receipt.key.clone()),
                password: None,
            }),
        )
        .await?;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.into_body().try_into_bytes().unwrap(),
            Bytes::from_static(b"{\"message\":\"launch codes\"}")
        );

        let err = messages_consume(
            app_state.clone(),
            web::Path::from(MessagePath {
                id: receipt.id.to_string(),
            }),
            web::Json(MessageConsumeParams {
                key: Some(receipt.key),
                password: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        Ok(())
    }

    #[actix_web::test]
    async fn fails_if_store_fails() -> anyhow::Result<()> {
        let app_state = web::Data::new(mock_app_state()?);
        let receipt = app_state
            .api
            .messages()
            .create_message(MessageCreateParams {
                message: Some("launch codes".to_string()),
                password: None,
            })
            .await?;
        app_state.api.store.fail_removals();

        let err = messages_consume(
            app_state.clone(),
            web::Path::from(MessagePath {
                id: receipt.id.to_string(),
            }),
            web::Json(MessageConsumeParams {
                key: Some(receipt.key),
                password: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);

        let body = actix_web::ResponseError::error_response(&err)
            .into_body()
            .try_into_bytes()
            .unwrap();
        assert_eq!(
            body,
            Bytes::from_static(b"{\"error\":\"Internal Server Error\"}")
        );

        Ok(())
    }
}

mod app_state;
mod handlers;
mod status;

pub use self::{
    app_state::AppState,
    status::{Status, StatusLevel},
};
use crate::{
    api::Api,
    config::Config,
    database::Database,
    error::Error as SecretdropError,
    messages::{MessagesCache, RedisMessagesCache, SecretStore},
};
use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
pub async fn run(config: Config) -> Result<(), anyhow::Error> {
    let database = Database::connect(&config.db).await?;
    let cache = RedisMessagesCache::connect(&config.cache).await?;

    let http_server_url = format!("0.0.0.0:{}", config.http_port);
    let state = web::Data::new(AppState::new(Api::new(config, database.clone(), cache)));
    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure_routes::<Database, RedisMessagesCache>)
    });

    let http_server = http_server
        .bind(&http_server_url)
        .with_context(|| format!("Failed to bind to {}.", &http_server_url))?;

    info!("Secretdrop API server is available at http://{http_server_url}");

    let result = http_server
        .run()
        .await
        .with_context(|| "Failed to run Secretdrop API server.");

    info!("Secretdrop API server is stopped, closing database connections.");
    database.close().await;

    result
}

/// Registers API routes and request body handling shared by all routes.
pub fn configure_routes<S: SecretStore, C: MessagesCache>(config: &mut web::ServiceConfig) {
    config
        .app_data(web::JsonConfig::default().error_handler(|err, _| {
            SecretdropError::client(format!("Invalid request body: {err}")).into()
        }))
        .route("/status", web::get().to(handlers::status_get::<S, C>))
        .service(
            web::scope("/messages")
                .route("", web::post().to(handlers::messages_create::<S, C>))
                .route("/{id}", web::post().to(handlers::messages_consume::<S, C>)),
        );
}

#[cfg(test)]
mod tests {
    use super::configure_routes;
    use crate::{
        messages::tests::{MockMessagesCache, MockSecretStore},
        tests::mock_app_state,
    };
    use actix_web::{App, http::StatusCode, test, web};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn can_create_and_consume_messages() -> anyhow::Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(mock_app_state()?))
                .configure(configure_routes::<MockSecretStore, MockMessagesCache>),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/messages")
                .set_json(json!({ "message": "launch codes", "password": "xyz" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["message"], "Secret message created successfully!");
        let id = body["id"].as_str().unwrap().to_string();
        let key = body["key"].as_str().unwrap().to_string();

        let consume = |params: Value| {
            test::TestRequest::post()
                .uri(&format!("/messages/{id}"))
                .set_json(params)
                .to_request()
        };

        for (params, status, error) in [
            (json!({ "key": key }), StatusCode::UNAUTHORIZED, "Password required"),
            (
                json!({ "key": key, "password": "abc" }),
                StatusCode::FORBIDDEN,
                "Incorrect password",
            ),
            (
                json!({ "key": "0000000000000000", "password": "xyz" }),
                StatusCode::FORBIDDEN,
                "Invalid key",
            ),
        ] {
            let response = test::call_service(&app, consume(params)).await;
            assert_eq!(response.status(), status);
            let body: Value = test::read_body_json(response).await;
            assert_eq!(body, json!({ "error": error }));
        }

        let response =
            test::call_service(&app, consume(json!({ "key": key, "password": "xyz" }))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "message": "launch codes" }));

        let response =
            test::call_service(&app, consume(json!({ "key": key, "password": "xyz" }))).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({ "error": "Message not found or already deleted" })
        );

        Ok(())
    }

    #[actix_web::test]
    async fn rejects_malformed_requests() -> anyhow::Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(mock_app_state()?))
                .configure(configure_routes::<MockSecretStore, MockMessagesCache>),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/messages")
                .set_json(json!({ "password": "xyz" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "error": "Message is required" }));

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/messages")
                .insert_header(("content-type", "application/json"))
                .set_payload("{ not json")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body")
        );

        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/messages/abc123")
                .set_json(json!({ "key": "deadbeefcafef00d" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "error": "Invalid message ID format" }));

        Ok(())
    }

    #[actix_web::test]
    async fn exposes_status() -> anyhow::Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(mock_app_state()?))
                .configure(configure_routes::<MockSecretStore, MockMessagesCache>),
        )
        .await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/status").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({ "version": env!("CARGO_PKG_VERSION"), "level": "available" })
        );

        Ok(())
    }
}

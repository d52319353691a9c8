use crate::{
    error::Error as SecretdropError,
    messages::{MessagesCache, SecretStore},
    server::app_state::AppState,
};
use actix_web::{HttpResponse, web};
use anyhow::anyhow;
use std::ops::Deref;

pub async fn status_get<S: SecretStore, C: MessagesCache>(
    state: web::Data<AppState<S, C>>,
) -> Result<HttpResponse, SecretdropError> {
    state
        .status
        .read()
        .map(|status| HttpResponse::Ok().json(status.deref()))
        .map_err(|err| anyhow!("Failed to retrieve server status: {err:?}.").into())
}

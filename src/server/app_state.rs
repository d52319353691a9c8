use crate::{
    api::Api,
    messages::{MessagesCache, SecretStore},
    server::{Status, StatusLevel},
};
use std::sync::RwLock;

pub struct AppState<S: SecretStore, C: MessagesCache> {
    pub status: RwLock<Status>,
    pub api: Api<S, C>,
}

impl<S: SecretStore, C: MessagesCache> AppState<S, C> {
    pub fn new(api: Api<S, C>) -> Self {
        let version = api.config.version.to_string();
        Self {
            status: RwLock::new(Status {
                version,
                level: StatusLevel::Available,
            }),
            api,
        }
    }
}

use crate::{
    config::Config,
    messages::{MessagesCache, SecretStore},
};

/// Collection of the APIs, extensions are implemented separately in every module.
pub struct Api<S: SecretStore, C: MessagesCache> {
    pub config: Config,
    pub store: S,
    pub cache: C,
}

impl<S: SecretStore, C: MessagesCache> Api<S, C> {
    /// Instantiates APIs collection with the specified config, durable store and cache.
    pub fn new(config: Config, store: S, cache: C) -> Self {
        Self {
            config,
            store,
            cache,
        }
    }
}

use crate::config::{Config, StoreBackend};
use crate::errors::AppError;
use crate::graphql::AppState;
use crate::store::{MemoryStore, MongoStore};
use std::sync::Arc;

/// Opens the configured document store and bundles it with the credential
/// settings the resolvers need.
pub async fn connect(config: &Config) -> Result<AppState, AppError> {
    let state = match config.backend {
        StoreBackend::Mongo => {
            let store = Arc::new(MongoStore::connect(&config.database).await?);
            AppState {
                users: store.clone(),
                employees: store,
                auth: config.auth.clone(),
            }
        }
        StoreBackend::Memory => {
            log::warn!("Using the in-memory store; data is lost on shutdown");
            let store = Arc::new(MemoryStore::new());
            AppState {
                users: store.clone(),
                employees: store,
                auth: config.auth.clone(),
            }
        }
    };
    Ok(state)
}

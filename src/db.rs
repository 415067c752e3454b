use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::{Config, StorageBackend};
use crate::error::StoreError;
use crate::store::{LeaveStore, UserStore, memory::MemoryStore, mongo::MongoStore};

/// Store handles shared by every worker, created once at boot.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub leaves: Arc<dyn LeaveStore>,
}

impl Stores {
    pub fn from_backend<S>(backend: Arc<S>) -> Self
    where
        S: UserStore + LeaveStore + 'static,
    {
        let users: Arc<dyn UserStore> = backend.clone();
        let leaves: Arc<dyn LeaveStore> = backend;
        Self { users, leaves }
    }
}

/// Builds the configured backend.
///
/// For MongoDB only a malformed connection string is fatal. Reaching the
/// server happens in the background and a failure there is logged, so the
/// HTTP listener comes up either way. Registration retries the email index
/// until it exists.
pub async fn init_store(config: &Config) -> Result<Stores, StoreError> {
    match config.storage_backend {
        StorageBackend::Memory => {
            warn!("Using in-memory store, data will not survive a restart");
            Ok(Stores::from_backend(Arc::new(MemoryStore::default())))
        }
        StorageBackend::MongoDb => {
            let store = MongoStore::connect(&config.database_url, &config.database_name).await?;
            info!(database = %config.database_name, "MongoDB client created");

            let store_for_prepare = store.clone();
            actix_web::rt::spawn(async move {
                if let Err(e) = store_for_prepare.prepare().await {
                    error!(error = %e, "MongoDB connection error");
                }
            });

            Ok(Stores::from_backend(Arc::new(store)))
        }
    }
}

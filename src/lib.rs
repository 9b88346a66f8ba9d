//! DentalFlow Data Layer
//!
//! The persistence core of the DentalFlow clinic application: three entity
//! collections (users, patients, incidents) mirrored in memory and rewritten
//! in full to a synchronous key-value store on every mutation, plus a
//! persisted login session. View layers consume this crate through
//! [`AppState`].

pub mod auth;
pub mod config;
pub mod data;
pub mod errors;
pub mod models;
pub mod reports;
pub mod seed;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::{AuthSession, Route};
use config::Config;
use data::DataProvider;
use errors::AppError;
use store::{FileStore, StoreAdapter};

/// Application state constructed once at process start and shared with every
/// consumer.
pub struct AppState {
    pub data: DataProvider,
    pub session: AuthSession,
    pub config: Arc<Config>,
}

impl AppState {
    /// Open the configured store, load the collections (seeding on first
    /// run) and restore any persisted session. Returns the state and the
    /// route the view layer should show first.
    pub fn start(config: Config) -> Result<(Self, Route), AppError> {
        tracing::info!("Starting DentalFlow data layer");
        tracing::info!("Store path: {:?}", config.store_path);

        let store: Arc<dyn StoreAdapter> = Arc::new(FileStore::open(&config.store_path)?);
        Self::start_with_store(config, store)
    }

    /// Like [`AppState::start`], but over a caller-supplied store. Used by
    /// tests and embedders that swap the persistence mechanism.
    pub fn start_with_store(
        config: Config,
        store: Arc<dyn StoreAdapter>,
    ) -> Result<(Self, Route), AppError> {
        let data = DataProvider::load(store.clone())?;
        let (session, route) = AuthSession::restore(store)?;

        Ok((
            Self {
                data,
                session,
                config: Arc::new(config),
            },
            route,
        ))
    }
}

/// Initialize logging. The embedding process calls this once.
pub fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

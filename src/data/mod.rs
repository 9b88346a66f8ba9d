//! Data provider module.
//!
//! The provider is the single source of truth for the three entity
//! collections; every screen reads and mutates through it.

mod provider;

pub use provider::*;

use crate::errors::AppError;
use crate::seed;
use crate::store::{keys, StoreAdapter};

/// Write the seed catalog verbatim into the store, then mark it initialized.
pub(crate) fn seed_store(store: &dyn StoreAdapter) -> Result<(), AppError> {
    store.set(keys::USERS, &serde_json::to_string(&*seed::USERS)?)?;
    store.set(keys::PATIENTS, &serde_json::to_string(&*seed::PATIENTS)?)?;
    store.set(keys::INCIDENTS, &serde_json::to_string(&*seed::INCIDENTS)?)?;
    store.set(keys::INITIALIZED, "true")?;
    Ok(())
}

/// Read a collection, treating an absent or empty value as the empty list.
/// Malformed JSON is fatal here; there is no defensive recovery tier.
fn read_collection<T: serde::de::DeserializeOwned>(
    store: &dyn StoreAdapter,
    key: &str,
) -> Result<Vec<T>, AppError> {
    match store.get(key)? {
        Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

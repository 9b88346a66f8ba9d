//! Credential digests and the persisted login session.
//!
//! Implements constant-time comparison to mitigate timing attacks.

use std::sync::Arc;

use subtle::ConstantTimeEq;

use crate::errors::AppError;
use crate::models::SessionUser;
use crate::store::{keys, StoreAdapter};

/// Logical destination the view layer should show after a session change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Unauthenticated landing view.
    Landing,
    AdminDashboard,
    PatientDashboard,
}

/// Digest a password with the application's placeholder scheme: a 32-bit
/// shift-subtract rolling hash rendered as fixed-width hex.
///
/// This only obfuscates the seeded demo credentials; it is not suitable for
/// real passwords.
pub fn hash_password(password: &str) -> String {
    let mut hash: u32 = 0;
    for ch in password.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as u32);
    }
    format!("{:08x}", hash)
}

/// Perform constant-time string comparison.
pub(crate) fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Holds at most one authenticated user, persisted under its own store key.
///
/// No expiry, no token, no revocation: a persisted record is trusted until
/// an explicit log-out clears it.
pub struct AuthSession {
    store: Arc<dyn StoreAdapter>,
    user: Option<SessionUser>,
}

impl AuthSession {
    /// Restore any persisted session and report where the view layer should
    /// navigate: the role-based dashboard when a record exists, the landing
    /// view otherwise.
    pub fn restore(store: Arc<dyn StoreAdapter>) -> Result<(Self, Route), AppError> {
        let user = match store.get(keys::SESSION)? {
            Some(raw) => {
                let user: SessionUser = serde_json::from_str(&raw)?;
                tracing::info!(email = %user.email, "Restored persisted session");
                Some(user)
            }
            None => None,
        };

        let route = user.as_ref().map(route_for).unwrap_or(Route::Landing);
        Ok((Self { store, user }, route))
    }

    /// Store the authenticated user in memory and under the session key.
    pub fn log_in(&mut self, user: SessionUser) -> Result<Route, AppError> {
        self.store
            .set(keys::SESSION, &serde_json::to_string(&user)?)?;
        tracing::info!(email = %user.email, is_admin = user.is_admin, "User logged in");

        let route = route_for(&user);
        self.user = Some(user);
        Ok(route)
    }

    /// Clear the in-memory user and the persisted session key.
    pub fn log_out(&mut self) -> Result<Route, AppError> {
        self.store.remove(keys::SESSION)?;
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "User logged out");
        }
        Ok(Route::Landing)
    }

    /// Currently authenticated user, if any.
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }
}

fn route_for(user: &SessionUser) -> Route {
    if user.is_admin {
        Route::AdminDashboard
    } else {
        Route::PatientDashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("1a2b3c4d", "1a2b3c4d"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("1a2b3c4d", "1a2b3c4e"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-digest"));
    }

    #[test]
    fn test_constant_time_compare_empty() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }

    #[test]
    fn test_hash_password_deterministic() {
        assert_eq!(hash_password("admin123"), hash_password("admin123"));
        assert_ne!(hash_password("admin123"), hash_password("admin124"));
        assert_eq!(hash_password("admin123").len(), 8);
    }
}

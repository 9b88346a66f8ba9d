//! User model matching the frontend User interface.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// An account that can sign in to one of the two portals.
///
/// Users exist only in the seed catalog; there is no runtime operation that
/// creates or edits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub is_admin: bool,
    /// Linked patient record; only valid on non-admin accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
}

impl User {
    /// Create a user, rejecting an admin account linked to a patient record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        hashed_password: impl Into<String>,
        is_admin: bool,
        patient_id: Option<String>,
    ) -> Result<Self, AppError> {
        if is_admin && patient_id.is_some() {
            return Err(AppError::Validation(
                "an admin user cannot be linked to a patient record".to_string(),
            ));
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            hashed_password: hashed_password.into(),
            is_admin,
            patient_id,
        })
    }

    /// Reduced projection stored in the login session. Never carries the
    /// password digest.
    pub fn to_session(&self) -> SessionUser {
        SessionUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
            patient_id: self.patient_id.clone(),
        }
    }
}

/// The authenticated-user record persisted by the auth session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_with_patient_link_rejected() {
        let result = User::new("u1", "Admin", "a@x.com", "digest", true, Some("p1".into()));
        assert!(result.is_err());
    }

    #[test]
    fn test_session_projection_drops_digest() {
        let user = User::new("u2", "Jo", "jo@x.com", "digest", false, Some("p1".into())).unwrap();
        let session = user.to_session();
        let raw = serde_json::to_string(&session).unwrap();
        assert!(!raw.contains("digest"));
        assert!(raw.contains(r#""patientId":"p1""#));
    }
}

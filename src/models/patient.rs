//! Patient model matching the frontend Patient interface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient record managed through the admin portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub dob: NaiveDate,
    pub contact: String,
    pub health_info: String,
}

/// Payload for creating a new patient; the provider assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub dob: NaiveDate,
    pub contact: String,
    pub health_info: String,
}

impl NewPatient {
    pub(crate) fn into_patient(self, id: String) -> Patient {
        Patient {
            id,
            name: self.name,
            dob: self.dob,
            contact: self.contact,
            health_info: self.health_info,
        }
    }
}

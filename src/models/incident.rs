//! Incident model matching the frontend Incident interface.
//!
//! An incident is an appointment/treatment record linking a patient to a
//! scheduled or completed clinical event.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::FileAttachment;

/// Lifecycle status of an incident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncidentStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
    Pending,
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Scheduled => "Scheduled",
            IncidentStatus::InProgress => "In Progress",
            IncidentStatus::Completed => "Completed",
            IncidentStatus::Cancelled => "Cancelled",
            IncidentStatus::Pending => "Pending",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Scheduled" => Some(IncidentStatus::Scheduled),
            "In Progress" => Some(IncidentStatus::InProgress),
            "Completed" => Some(IncidentStatus::Completed),
            "Cancelled" => Some(IncidentStatus::Cancelled),
            "Pending" => Some(IncidentStatus::Pending),
            _ => None,
        }
    }
}

/// An appointment/treatment record carrying cost, status and attachments.
///
/// `patient_id` is expected to reference an existing patient but is not
/// enforced; readers must tolerate a dangling reference after a patient
/// delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub patient_id: String,
    pub title: String,
    pub description: String,
    pub comments: String,
    pub appointment_date: NaiveDateTime,
    pub cost: f64,
    pub status: IncidentStatus,
    #[serde(default)]
    pub files: Vec<FileAttachment>,
}

/// Payload for creating a new incident; the provider assigns the id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncident {
    pub patient_id: String,
    pub title: String,
    pub description: String,
    pub comments: String,
    pub appointment_date: NaiveDateTime,
    pub cost: f64,
    pub status: IncidentStatus,
    #[serde(default)]
    pub files: Vec<FileAttachment>,
}

impl NewIncident {
    pub(crate) fn into_incident(self, id: String) -> Incident {
        Incident {
            id,
            patient_id: self.patient_id,
            title: self.title,
            description: self.description,
            comments: self.comments,
            appointment_date: self.appointment_date,
            cost: self.cost,
            status: self.status,
            files: self.files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&IncidentStatus::InProgress).unwrap(),
            r#""In Progress""#
        );
        assert_eq!(
            serde_json::from_str::<IncidentStatus>(r#""Scheduled""#).unwrap(),
            IncidentStatus::Scheduled
        );
        assert_eq!(IncidentStatus::from_str("In Progress"), Some(IncidentStatus::InProgress));
        assert_eq!(IncidentStatus::from_str("in progress"), None);
    }

    #[test]
    fn test_appointment_date_wire_form() {
        let raw = r#"{"id":"i1","patientId":"p1","title":"t","description":"d",
            "comments":"c","appointmentDate":"2025-07-01T10:00:00","cost":80,
            "status":"Completed","files":[]}"#;
        let incident: Incident = serde_json::from_str(raw).unwrap();
        let out = serde_json::to_string(&incident).unwrap();
        assert!(out.contains(r#""appointmentDate":"2025-07-01T10:00:00""#));
    }
}

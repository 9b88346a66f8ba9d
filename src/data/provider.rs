//! CRUD operations over the persisted collections.
//!
//! Every mutation updates the in-memory collection and rewrites the full
//! serialized collection to the store in the same call, so the persisted
//! value and memory never diverge.

use std::sync::Arc;

use crate::auth::{constant_time_compare, hash_password};
use crate::errors::AppError;
use crate::models::{Incident, NewIncident, NewPatient, Patient, User};
use crate::seed;
use crate::store::{keys, StoreAdapter};

use super::{read_collection, seed_store};

/// Owner of the in-memory mirror of the persisted collections.
pub struct DataProvider {
    store: Arc<dyn StoreAdapter>,
    users: Vec<User>,
    patients: Vec<Patient>,
    incidents: Vec<Incident>,
    is_loading: bool,
}

impl DataProvider {
    /// Load collections from the store, seeding it first if this store has
    /// never been initialized. Seeding happens once per store lifetime;
    /// later loads read whatever is persisted, including edits.
    pub fn load(store: Arc<dyn StoreAdapter>) -> Result<Self, AppError> {
        let mut provider = Self {
            store,
            users: Vec::new(),
            patients: Vec::new(),
            incidents: Vec::new(),
            is_loading: true,
        };

        if provider.store.get(keys::INITIALIZED)?.is_none() {
            tracing::info!("Store not initialized, writing seed catalog");
            seed_store(provider.store.as_ref())?;
        }

        provider.read_back()?;
        Ok(provider)
    }

    /// Discard all edits and restore the seed catalog.
    pub fn reload_data(&mut self) -> Result<(), AppError> {
        tracing::info!("Reloading factory data, discarding edits");
        self.store.remove(keys::INITIALIZED)?;
        self.store.remove(keys::USERS)?;
        self.store.remove(keys::PATIENTS)?;
        self.store.remove(keys::INCIDENTS)?;

        seed_store(self.store.as_ref())?;
        self.read_back()
    }

    fn read_back(&mut self) -> Result<(), AppError> {
        self.users = read_collection(self.store.as_ref(), keys::USERS)?;
        self.patients = read_collection(self.store.as_ref(), keys::PATIENTS)?;
        self.incidents = read_collection(self.store.as_ref(), keys::INCIDENTS)?;
        self.is_loading = false;
        tracing::debug!(
            users = self.users.len(),
            patients = self.patients.len(),
            incidents = self.incidents.len(),
            "Collections loaded"
        );
        Ok(())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Check credentials and return the matching account.
    ///
    /// Reads the seed catalog, not the live `users` collection: no runtime
    /// operation edits users, and the seeded accounts keep working even if
    /// the persisted `users` key is tampered with. Digest comparison is
    /// constant-time.
    pub fn validate_user(&self, email: &str, password: &str) -> Option<User> {
        let digest = hash_password(password);
        seed::USERS
            .iter()
            .find(|user| {
                user.email == email && constant_time_compare(&user.hashed_password, &digest)
            })
            .cloned()
    }

    // ==================== PATIENT OPERATIONS ====================

    /// Create a new patient and return the stored record.
    ///
    /// The id is derived from the current collection length, not a
    /// monotonic counter, so an interior delete followed by an add can mint
    /// an id that collides with a survivor.
    pub fn add_patient(&mut self, new_patient: NewPatient) -> Result<Patient, AppError> {
        let id = format!("p{}", self.patients.len() + 1);
        let patient = new_patient.into_patient(id);
        self.patients.push(patient.clone());
        self.persist_patients()?;
        tracing::debug!(id = %patient.id, "Patient added");
        Ok(patient)
    }

    /// Replace the patient with the given id, preserving its position.
    /// An unknown id is a silent no-op; the collection is persisted either
    /// way.
    pub fn update_patient(&mut self, patient_id: &str, updated: Patient) -> Result<(), AppError> {
        if let Some(existing) = self.patients.iter_mut().find(|p| p.id == patient_id) {
            *existing = updated;
        }
        self.persist_patients()
    }

    /// Remove the patient with the given id. An unknown id is a silent
    /// no-op. Incidents referencing the patient are left in place.
    pub fn delete_patient(&mut self, patient_id: &str) -> Result<(), AppError> {
        self.patients.retain(|p| p.id != patient_id);
        self.persist_patients()
    }

    pub fn get_patient_by_id(&self, patient_id: &str) -> Option<Patient> {
        self.patients.iter().find(|p| p.id == patient_id).cloned()
    }

    fn persist_patients(&self) -> Result<(), AppError> {
        self.store
            .set(keys::PATIENTS, &serde_json::to_string(&self.patients)?)
    }

    // ==================== INCIDENT OPERATIONS ====================

    /// Create a new incident and return the stored record. Same
    /// length-derived id scheme as patients, with the `i` prefix.
    pub fn add_incident(&mut self, new_incident: NewIncident) -> Result<Incident, AppError> {
        let id = format!("i{}", self.incidents.len() + 1);
        let incident = new_incident.into_incident(id);
        self.incidents.push(incident.clone());
        self.persist_incidents()?;
        tracing::debug!(id = %incident.id, patient_id = %incident.patient_id, "Incident added");
        Ok(incident)
    }

    /// Replace the incident with the given id, preserving its position.
    /// An unknown id is a silent no-op.
    pub fn update_incident(&mut self, incident_id: &str, updated: Incident) -> Result<(), AppError> {
        if let Some(existing) = self.incidents.iter_mut().find(|i| i.id == incident_id) {
            *existing = updated;
        }
        self.persist_incidents()
    }

    /// Remove the incident with the given id. An unknown id is a silent
    /// no-op.
    pub fn delete_incident(&mut self, incident_id: &str) -> Result<(), AppError> {
        self.incidents.retain(|i| i.id != incident_id);
        self.persist_incidents()
    }

    /// All incidents for a patient, in insertion order. Tolerates ids that
    /// no longer reference an existing patient.
    pub fn get_incidents_by_patient_id(&self, patient_id: &str) -> Vec<Incident> {
        self.incidents
            .iter()
            .filter(|i| i.patient_id == patient_id)
            .cloned()
            .collect()
    }

    fn persist_incidents(&self) -> Result<(), AppError> {
        self.store
            .set(keys::INCIDENTS, &serde_json::to_string(&self.incidents)?)
    }
}

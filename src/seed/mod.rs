//! Seed catalog: the fixed reference dataset used to populate empty storage
//! on first run.
//!
//! The catalog is immutable; `reload_data` is the only operation that writes
//! it after initialization. Credential checks read `USERS` directly, so the
//! seeded accounts keep working regardless of what the `users` store key
//! holds.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;

use crate::auth::hash_password;
use crate::models::{FileAttachment, Incident, IncidentStatus, Patient, User};

/// Reference accounts. Digests are computed with the application's own
/// placeholder scheme when the catalog is first touched.
pub static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "u1".to_string(),
            email: "admin@dentalflow.com".to_string(),
            name: "Admin User".to_string(),
            is_admin: true,
            patient_id: None,
            hashed_password: hash_password("admin123"),
        },
        User {
            id: "u2".to_string(),
            email: "john.doe@example.com".to_string(),
            name: "John Doe".to_string(),
            is_admin: false,
            patient_id: Some("p1".to_string()),
            hashed_password: hash_password("patient123"),
        },
        User {
            id: "u3".to_string(),
            email: "jane.smith@example.com".to_string(),
            name: "Jane Smith".to_string(),
            is_admin: false,
            patient_id: Some("p2".to_string()),
            hashed_password: hash_password("patient456"),
        },
    ]
});

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn dt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    d(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid seed time")
}

fn patient(id: &str, name: &str, dob: NaiveDate, contact: &str, health_info: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        dob,
        contact: contact.to_string(),
        health_info: health_info.to_string(),
    }
}

fn file(name: &str, url: &str, content_type: &str) -> FileAttachment {
    FileAttachment {
        name: name.to_string(),
        url: url.to_string(),
        content_type: content_type.to_string(),
    }
}

// Inline sample documents referenced by the seeded incidents.
const SAMPLE_PDF_1: &str = "data:application/pdf;base64,JVBERi0xLjQKJdPr6eEKMSAwIG9iago8PAovVHlwZSAvQ2F0YWxvZwovUGFnZXMgMiAwIFIKPj4KZW5kb2JqCjIgMCBvYmoKPDwKL1R5cGUgL1BhZ2VzCi9LaWRzIFszIDAgUl0KL0NvdW50IDEKPD4KZW5kb2JqCjMgMCBvYmoKPDwKL1R5cGUgL1BhZ2UKL1BhcmVudCAyIDAgUgovUmVzb3VyY2VzIDw8Ci9Gb250IDw8Ci9GMSA0IDAgUgo+Pgo+PgovTWVkaWFCb3ggWzAgMCA2MTIgNzkyXQovQ29udGVudHMgNSAwIFIKPj4KZW5kb2JqCjQgMCBvYmoKPDwKL1R5cGUgL0ZvbnQKL1N1YnR5cGUgL1R5cGUxCi9CYXNlRm9udCAvSGVsdmV0aWNhCj4+CmVuZG9iago1IDAgb2JqCjw8Ci9MZW5ndGggNDQKPj4Kc3RyZWFtCkJUCi9GMSA2IFRmCjcyIDcwMCBUZAooSGVsbG8gV29ybGQhKSBUagpFVApzdHJlYW0KZW5kb2JqCnhyZWYKMCA2CjAwMDAwMDAwMDAgNjU1MzUgZgowMDAwMDAwMDA5IDAwMDAwIG4KMDAwMDAwMDA1OCAwMDAwMCBuCjAwMDAwMDAxMTUgMDAwMDAgbgowMDAwMDAwMjQ1IDAwMDAwIG4KMDAwMDAwMDMyNiAwMDAwMCBuCnRyYWlsZXIKPDwKL1NpemUgNgovUm9vdCAxIDAgUgo+PgpzdGFydHhyZWYKNDE5CiUlRU9G";
const SAMPLE_PNG_1: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/5+hHgAHggJ/PchI7wAAAABJRU5ErkJggg==";
const SAMPLE_JPEG_1: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQEAYABgAAD/2wBDAAEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQH/2wBDAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQH/wAARCAABAAEDASIAAhEBAxEB/8QAFQABAQAAAAAAAAAAAAAAAAAAAAv/xAAUEAEAAAAAAAAAAAAAAAAAAAAA/8QAFQEBAQAAAAAAAAAAAAAAAAAAAAX/xAAUEQEAAAAAAAAAAAAAAAAAAAAA/9oADAMBAAIRAxEAPwA9IP/Z";
const SAMPLE_PDF_2: &str = "data:application/pdf;base64,JVBERi0xLjQKJdPr6eEKMSAwIG9iago8PAovVHlwZSAvQ2F0YWxvZwovUGFnZXMgMiAwIFIKPj4KZW5kb2JqCjIgMCBvYmoKPDwKL1R5cGUgL1BhZ2VzCi9LaWRzIFszIDAgUl0KL0NvdW50IDEKPD4KZW5kb2JqCjMgMCBvYmoKPDwKL1R5cGUgL1BhZ2UKL1BhcmVudCAyIDAgUgovUmVzb3VyY2VzIDw8Ci9Gb250IDw8Ci9GMSA0IDAgUgo+Pgo+PgovTWVkaWFCb3ggWzAgMCA2MTIgNzkyXQovQ29udGVudHMgNSAwIFIKPj4KZW5kb2JqCjQgMCBvYmoKPDwKL1R5cGUgL0ZvbnQKL1N1YnR5cGUgL1R5cGUxCi9CYXNlRm9udCAvSGVsdmV0aWNhCj4+CmVuZG9iago1IDAgb2JqCjw8Ci9MZW5ndGggNDQKPj4Kc3RyZWFtCkJUCi9GMSA2IFRmCjcyIDcwMCBUZAooTVJJIFJlcG9ydCkgVGoKRVQKZW5kc3RyZWFtCmVuZG9iagp4cmVmCjAgNgowMDAwMDAwMDAwIDY1NTM1IGYKMDAwMDAwMDAwOSAwMDAwMCBuCjAwMDAwMDAwNTggMDAwMDAgbgowMDAwMDAwMTE1IDAwMDAwIG4KMDAwMDAwMDI0NSAwMDAwMCBuCjAwMDAwMDAzMjYgMDAwMDAgbgp0cmFpbGVyCjw8Ci9TaXplIDYKL1Jvb3QgMSAwIFIKPj4Kc3RhcnR4cmVmCjQyOQolJUVPRg==";

/// Reference patients written to storage on first run.
pub static PATIENTS: Lazy<Vec<Patient>> = Lazy::new(|| {
    vec![
        patient("p1", "John Doe", d(1990, 5, 10), "1234567890", "No allergies"),
        patient("p2", "Jane Smith", d(1985, 3, 22), "9876543210", "Diabetic"),
        patient("p3", "Alice Johnson", d(1978, 11, 9), "5551234567", "Asthma"),
        patient("p4", "Bob Williams", d(2000, 1, 15), "4445556666", "No known conditions"),
        patient("p5", "Emily Davis", d(1995, 6, 18), "2223334444", "Peanut allergy"),
        patient("p6", "Michael Brown", d(1988, 8, 30), "7778889999", "Hypertension"),
        patient("p7", "Olivia Garcia", d(1992, 12, 12), "6667778888", "No allergies"),
        patient("p8", "David Miller", d(1975, 4, 5), "1112223333", "Heart condition"),
        patient("p9", "Sophia Wilson", d(2001, 9, 27), "9998887777", "No allergies"),
        patient("p10", "Liam Martinez", d(1998, 7, 2), "8889990000", "Lactose intolerant"),
        patient("p11", "Ava Anderson", d(1983, 2, 14), "3334445555", "Migraines"),
    ]
});

/// Reference incidents written to storage on first run.
pub static INCIDENTS: Lazy<Vec<Incident>> = Lazy::new(|| {
    vec![
        Incident {
            id: "i1".to_string(),
            patient_id: "p1".to_string(),
            title: "Toothache".to_string(),
            description: "Upper molar pain".to_string(),
            comments: "Sensitive to cold".to_string(),
            appointment_date: dt(2025, 7, 1, 10, 0),
            cost: 80.0,
            status: IncidentStatus::Completed,
            files: vec![file("invoice.pdf", SAMPLE_PDF_1, "application/pdf"), file("xray.png", SAMPLE_PNG_1, "image/png")],
        },
        Incident {
            id: "i2".to_string(),
            patient_id: "p3".to_string(),
            title: "Routine Checkup".to_string(),
            description: "Annual physical exam".to_string(),
            comments: "Vitals normal".to_string(),
            appointment_date: dt(2025, 6, 28, 9, 30),
            cost: 50.0,
            status: IncidentStatus::Completed,
            files: vec![],
        },
        Incident {
            id: "i3".to_string(),
            patient_id: "p4".to_string(),
            title: "Cavity Filling".to_string(),
            description: "Cavity in lower right molar".to_string(),
            comments: "Used composite material".to_string(),
            appointment_date: dt(2025, 6, 25, 14, 0),
            cost: 120.0,
            status: IncidentStatus::Completed,
            files: vec![file("before.jpg", SAMPLE_JPEG_1, "image/jpeg")],
        },
        Incident {
            id: "i4".to_string(),
            patient_id: "p6".to_string(),
            title: "Flu Symptoms".to_string(),
            description: "Fever, chills, and sore throat".to_string(),
            comments: "Prescribed Tamiflu".to_string(),
            appointment_date: dt(2025, 6, 20, 11, 15),
            cost: 60.0,
            status: IncidentStatus::Completed,
            files: vec![],
        },
        Incident {
            id: "i5".to_string(),
            patient_id: "p2".to_string(),
            title: "Skin Rash".to_string(),
            description: "Redness and itching on arm".to_string(),
            comments: "Allergy suspected".to_string(),
            appointment_date: dt(2025, 6, 18, 16, 30),
            cost: 40.0,
            status: IncidentStatus::Completed,
            files: vec![file("rash.jpg", SAMPLE_JPEG_1, "image/jpeg")],
        },
        Incident {
            id: "i6".to_string(),
            patient_id: "p5".to_string(),
            title: "Blood Test".to_string(),
            description: "Routine blood test".to_string(),
            comments: "Waiting for lab report".to_string(),
            appointment_date: dt(2025, 6, 10, 10, 45),
            cost: 100.0,
            status: IncidentStatus::Pending,
            files: vec![],
        },
        Incident {
            id: "i7".to_string(),
            patient_id: "p8".to_string(),
            title: "Back Pain".to_string(),
            description: "Lower back discomfort".to_string(),
            comments: "MRI advised".to_string(),
            appointment_date: dt(2025, 6, 5, 15, 0),
            cost: 150.0,
            status: IncidentStatus::InProgress,
            files: vec![file("mri.pdf", SAMPLE_PDF_2, "application/pdf")],
        },
        Incident {
            id: "i8".to_string(),
            patient_id: "p10".to_string(),
            title: "Tooth Cleaning".to_string(),
            description: "Dental plaque removal".to_string(),
            comments: "Suggested every 6 months".to_string(),
            appointment_date: dt(2025, 5, 30, 13, 0),
            cost: 70.0,
            status: IncidentStatus::Completed,
            files: vec![],
        },
        Incident {
            id: "i9".to_string(),
            patient_id: "p11".to_string(),
            title: "Migraine".to_string(),
            description: "Recurring headaches".to_string(),
            comments: "MRI scan scheduled".to_string(),
            appointment_date: dt(2025, 5, 25, 9, 0),
            cost: 90.0,
            status: IncidentStatus::Scheduled,
            files: vec![],
        },
        Incident {
            id: "i10".to_string(),
            patient_id: "p7".to_string(),
            title: "Sprained Ankle".to_string(),
            description: "Twisted during jogging".to_string(),
            comments: "Recommended rest + ice".to_string(),
            appointment_date: dt(2025, 5, 20, 17, 45),
            cost: 65.0,
            status: IncidentStatus::Completed,
            files: vec![file("xray-ankle.png", SAMPLE_PNG_1, "image/png")],
        },
    ]
});

//! Dashboard aggregations computed from the collections.
//!
//! Pure functions over slices; callers pass the reference instant, so
//! results are reproducible and the view layer stays a plain consumer.

use std::cmp::Reverse;

use chrono::{Datelike, NaiveDateTime};

use crate::models::{Incident, IncidentStatus, Patient};

/// Headline figures for the admin overview.
#[derive(Debug, Clone)]
pub struct AdminKpis {
    pub total_patients: usize,
    /// Appointments falling on the reference day.
    pub today_appointments: usize,
    /// Revenue from completed incidents in the reference month.
    pub monthly_revenue: f64,
    /// Incidents still scheduled or in progress.
    pub pending_treatments: usize,
    /// Appointments strictly after the reference instant, soonest first,
    /// capped at ten.
    pub upcoming_appointments: Vec<Incident>,
}

pub fn admin_kpis(patients: &[Patient], incidents: &[Incident], now: NaiveDateTime) -> AdminKpis {
    let today = now.date();

    let today_appointments = incidents
        .iter()
        .filter(|i| i.appointment_date.date() == today)
        .count();

    let monthly_revenue = incidents
        .iter()
        .filter(|i| {
            let date = i.appointment_date.date();
            date.year() == today.year()
                && date.month() == today.month()
                && i.status == IncidentStatus::Completed
        })
        .map(|i| i.cost)
        .sum();

    let pending_treatments = incidents
        .iter()
        .filter(|i| matches!(i.status, IncidentStatus::Scheduled | IncidentStatus::InProgress))
        .count();

    let mut upcoming_appointments: Vec<Incident> = incidents
        .iter()
        .filter(|i| i.appointment_date > now)
        .cloned()
        .collect();
    upcoming_appointments.sort_by_key(|i| i.appointment_date);
    upcoming_appointments.truncate(10);

    AdminKpis {
        total_patients: patients.len(),
        today_appointments,
        monthly_revenue,
        pending_treatments,
        upcoming_appointments,
    }
}

/// Split a patient's incidents for the portal: upcoming holds anything
/// scheduled, in progress, or dated after the instant (soonest first);
/// completed holds finished treatments (most recent first).
pub fn split_patient_schedule(
    incidents: &[Incident],
    now: NaiveDateTime,
) -> (Vec<Incident>, Vec<Incident>) {
    let mut upcoming: Vec<Incident> = incidents
        .iter()
        .filter(|i| {
            matches!(i.status, IncidentStatus::Scheduled | IncidentStatus::InProgress)
                || i.appointment_date > now
        })
        .cloned()
        .collect();
    upcoming.sort_by_key(|i| i.appointment_date);

    let mut completed: Vec<Incident> = incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Completed)
        .cloned()
        .collect();
    completed.sort_by_key(|i| Reverse(i.appointment_date));

    (upcoming, completed)
}

/// Long display form of an appointment timestamp, e.g.
/// `July 1, 2025 at 10:00 AM`.
pub fn format_appointment_date(date: &NaiveDateTime) -> String {
    date.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// Short display form, e.g. `Jul 1, 2025 10:00 AM`.
pub fn format_appointment_date_short(date: &NaiveDateTime) -> String {
    date.format("%b %-d, %Y %-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn incident(id: &str, day: u32, hour: u32, cost: f64, status: IncidentStatus) -> Incident {
        Incident {
            id: id.to_string(),
            patient_id: "p1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            comments: "c".to_string(),
            appointment_date: dt(day, hour),
            cost,
            status,
            files: vec![],
        }
    }

    #[test]
    fn test_admin_kpis() {
        let incidents = vec![
            incident("i1", 15, 9, 80.0, IncidentStatus::Completed),
            incident("i2", 15, 14, 50.0, IncidentStatus::Scheduled),
            incident("i3", 20, 10, 120.0, IncidentStatus::Completed),
            incident("i4", 25, 10, 60.0, IncidentStatus::InProgress),
        ];
        let kpis = admin_kpis(&[], &incidents, dt(15, 12));

        assert_eq!(kpis.total_patients, 0);
        assert_eq!(kpis.today_appointments, 2);
        assert_eq!(kpis.monthly_revenue, 200.0);
        assert_eq!(kpis.pending_treatments, 2);
        // Strictly after the instant, soonest first.
        let ids: Vec<_> = kpis.upcoming_appointments.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["i2", "i3", "i4"]);
    }

    #[test]
    fn test_upcoming_capped_at_ten() {
        let incidents: Vec<_> = (1..=12)
            .map(|n| incident(&format!("i{}", n), 16, n, 10.0, IncidentStatus::Scheduled))
            .collect();
        let kpis = admin_kpis(&[], &incidents, dt(15, 12));
        assert_eq!(kpis.upcoming_appointments.len(), 10);
    }

    #[test]
    fn test_patient_schedule_split() {
        let incidents = vec![
            incident("i1", 1, 9, 80.0, IncidentStatus::Completed),
            incident("i2", 10, 9, 40.0, IncidentStatus::Completed),
            incident("i3", 20, 9, 60.0, IncidentStatus::Scheduled),
            // Past but still in progress: counts as upcoming.
            incident("i4", 5, 9, 90.0, IncidentStatus::InProgress),
        ];
        let (upcoming, completed) = split_patient_schedule(&incidents, dt(15, 12));

        let up: Vec<_> = upcoming.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(up, vec!["i4", "i3"]);
        let done: Vec<_> = completed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(done, vec!["i2", "i1"]);
    }

    #[test]
    fn test_appointment_date_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(format_appointment_date(&date), "July 1, 2025 at 10:00 AM");
        assert_eq!(format_appointment_date_short(&date), "Jul 1, 2025 10:00 AM");
    }
}

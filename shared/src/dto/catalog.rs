use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable service. Fetched, never mutated by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    /// Price in the smallest currency unit (rials)
    pub price: i64,
}

/// Booking request built by the booking form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub service_id: i64,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// 24-hour `HH:MM`
    pub time_slot: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Appointment lifecycle status, assigned by the server
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

/// A created appointment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    pub status: AppointmentStatus,
    #[serde(flatten)]
    pub request: AppointmentRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_uses_camel_case_fields() {
        let json = r#"[{"id":1,"name":"Consult","durationMinutes":30,"price":450000,"description":"..."}]"#;
        let services: Vec<Service> = serde_json::from_str(json).unwrap();

        assert_eq!(services.len(), 1);
        assert_eq!(services[0].duration_minutes, 30);
        assert_eq!(services[0].price, 450_000);
    }

    #[test]
    fn test_appointment_request_body() {
        let request = AppointmentRequest {
            service_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
            time_slot: "09:30".to_string(),
            notes: Some(String::new()),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"serviceId": 1, "date": "2025-11-01", "timeSlot": "09:30", "notes": ""})
        );
    }

    #[test]
    fn test_appointment_request_omits_missing_notes() {
        let request = AppointmentRequest {
            service_id: 2,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            time_slot: "10:00".to_string(),
            notes: None,
        };
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_appointment_flattens_request_fields() {
        let json = r#"{"id":9,"status":"pending","serviceId":1,"date":"2025-11-01","timeSlot":"09:30"}"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();

        assert_eq!(appointment.id, 9);
        assert_eq!(appointment.status, AppointmentStatus::Pending);
        assert_eq!(appointment.request.service_id, 1);
        assert_eq!(appointment.request.notes, None);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved payment method. At most one per user has `is_default` set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: i64,
    pub brand: String,
    pub last4: String,
    pub is_default: bool,
}

/// Payment record status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Failed => "Failed",
        }
    }
}

/// A processed (or in-progress) payment. Read-only from the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: i64,
    pub appointment_id: i64,
    /// Amount in the smallest currency unit
    pub amount: i64,
    pub currency: String,
    pub status: PaymentStatus,
    pub processed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_default_flag() {
        let json = r#"[{"id":1,"brand":"Visa","last4":"1234","isDefault":true},{"id":2,"brand":"Mastercard","last4":"9876","isDefault":false}]"#;
        let methods: Vec<PaymentMethod> = serde_json::from_str(json).unwrap();

        assert!(methods[0].is_default);
        assert!(!methods[1].is_default);
    }

    #[test]
    fn test_payment_record_parses_timestamp_and_status() {
        let json = r#"{"id":100,"appointmentId":45,"amount":780000,"currency":"IRT","status":"paid","processedAt":"2025-10-13T16:06:28Z"}"#;
        let record: PaymentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.appointment_id, 45);
        assert_eq!(record.status, PaymentStatus::Paid);
        assert_eq!(record.processed_at.to_rfc3339(), "2025-10-13T16:06:28+00:00");
    }

    #[test]
    fn test_unknown_payment_status_is_rejected() {
        let json = r#"{"id":1,"appointmentId":1,"amount":1,"currency":"IRT","status":"refunded","processedAt":"2025-10-13T16:06:28Z"}"#;
        assert!(serde_json::from_str::<PaymentRecord>(json).is_err());
    }
}

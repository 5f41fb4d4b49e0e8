//! # Catalog Endpoints
//!
//! Service listing and appointment booking.

use reqwest::Method;
use shared::{Appointment, AppointmentRequest, Service};

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch all bookable services.
#[tracing::instrument(skip(client))]
pub async fn list_services(client: &ApiClient) -> Result<Vec<Service>> {
    let services = client
        .send_json::<Vec<Service>>(client.request(Method::GET, "/services/"))
        .await?;
    tracing::debug!(count = services.len(), "Fetched services");
    Ok(services)
}

/// Book an appointment.
///
/// Only success or failure matters to the caller, so a success body that is
/// not an appointment is logged and reported as `None`.
#[tracing::instrument(skip(client, request), fields(service_id = request.service_id, date = %request.date))]
pub async fn create_appointment(
    client: &ApiClient,
    request: AppointmentRequest,
) -> Result<Option<Appointment>> {
    let response = ApiClient::send(client.request(Method::POST, "/appointments/").json(&request)).await?;
    let bytes = response.bytes().await?;

    match serde_json::from_slice::<Appointment>(&bytes) {
        Ok(appointment) => {
            tracing::info!(appointment_id = appointment.id, "Appointment created");
            Ok(Some(appointment))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Appointment created, body not understood");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::client::tests::client_for;
    use super::*;
    use crate::core::service::ApiService;
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_services_decodes_camel_case() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/services/");
                then.status(200).json_body(json!([
                    {"id": 1, "name": "Consult", "durationMinutes": 30, "price": 450000, "description": "..."}
                ]));
            })
            .await;

        let services = client_for(&server).list_services().await.unwrap();

        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "Consult");
        assert_eq!(services[0].duration_minutes, 30);
    }

    #[tokio::test]
    async fn test_create_appointment_posts_expected_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/appointments/").json_body(json!({
                    "serviceId": 1, "date": "2025-11-01", "timeSlot": "09:30", "notes": ""
                }));
                then.status(201).json_body(json!({
                    "id": 12, "status": "pending",
                    "serviceId": 1, "date": "2025-11-01", "timeSlot": "09:30", "notes": ""
                }));
            })
            .await;

        let created = client_for(&server)
            .create_appointment(AppointmentRequest {
                service_id: 1,
                date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
                time_slot: "09:30".to_string(),
                notes: Some(String::new()),
            })
            .await
            .unwrap();

        assert_eq!(created.map(|a| a.id), Some(12));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_appointment_accepts_empty_success_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/appointments/");
                then.status(201);
            })
            .await;

        let created = client_for(&server)
            .create_appointment(AppointmentRequest {
                service_id: 2,
                date: NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
                time_slot: "10:00".to_string(),
                notes: None,
            })
            .await
            .unwrap();

        assert_eq!(created, None);
    }
}

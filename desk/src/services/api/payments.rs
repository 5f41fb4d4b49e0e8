//! # Payment Endpoints
//!
//! Payment methods, payment history and the default-method switch.

use reqwest::Method;
use shared::{PaymentMethod, PaymentRecord};

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch saved payment methods for a user.
#[tracing::instrument(skip(client))]
pub async fn payment_methods(client: &ApiClient, user_id: i64) -> Result<Vec<PaymentMethod>> {
    client
        .send_json(
            client
                .request(Method::GET, "/payments/methods/")
                .query(&[("user_id", user_id)]),
        )
        .await
}

/// Fetch payment history for a user.
#[tracing::instrument(skip(client))]
pub async fn payment_history(client: &ApiClient, user_id: i64) -> Result<Vec<PaymentRecord>> {
    client
        .send_json(
            client
                .request(Method::GET, "/payments/history/")
                .query(&[("user_id", user_id)]),
        )
        .await
}

/// Make `method_id` the user's default payment method. Any 2xx is success;
/// the body is ignored.
#[tracing::instrument(skip(client))]
pub async fn set_default_payment_method(client: &ApiClient, user_id: i64, method_id: i64) -> Result<()> {
    let path = format!("/payments/methods/{}/set_default/", method_id);
    ApiClient::send(client.request(Method::POST, &path).query(&[("user_id", user_id)])).await?;
    tracing::info!("Default payment method updated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::client::tests::client_for;
    use crate::core::service::ApiService;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_set_default_posts_to_method_path_with_user_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/payments/methods/2/set_default/")
                    .query_param("user_id", "7");
                then.status(204);
            })
            .await;

        client_for(&server).set_default_payment_method(7, 2).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_default_server_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/payments/methods/2/set_default/");
                then.status(500);
            })
            .await;

        let err = client_for(&server).set_default_payment_method(7, 2).await.unwrap_err();
        assert!(err.is_server_error());
    }

    #[tokio::test]
    async fn test_history_decodes_records() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/payments/history/").query_param("user_id", "7");
                then.status(200).json_body(json!([{
                    "id": 100, "appointmentId": 45, "amount": 780000, "currency": "IRT",
                    "status": "paid", "processedAt": "2025-10-13T16:06:28Z"
                }]));
            })
            .await;

        let history = client_for(&server).payment_history(7).await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].amount, 780_000);
    }
}

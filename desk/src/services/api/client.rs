//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! One client, one base address, one [`Session`]. No retries, no timeout
//! policy and no caching: each call is a single request that resolves to a
//! decoded body or an [`AppError`].

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    Appointment, AppointmentRequest, AuthResponse, ErrorBody, LoginRequest, PaymentMethod,
    PaymentRecord, RegisterRequest, Service,
};

use super::session::Session;
use crate::config::DeskConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// HTTP client for communicating with the backend API server.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client for `config.api_base_url` that authenticates with `session`.
    pub fn new(config: &DeskConfig, session: Session) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the session's bearer token when present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = Self::send(builder).await?;
        Ok(response.json::<T>().await?)
    }

    /// Send, accept any 2xx and return the raw response.
    ///
    /// Every outcome is logged with its duration, and responses with their status.
    pub(crate) async fn send(builder: RequestBuilder) -> Result<Response> {
        let start = Instant::now();
        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, duration_ms = start.elapsed().as_millis(), "Network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), duration_ms, "Request completed");
            return Ok(response);
        }

        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| serde_json::from_slice::<ErrorBody>(&bytes).ok());

        tracing::warn!(
            status = status.as_u16(),
            duration_ms,
            structured = body.is_some(),
            "Request rejected"
        );
        Err(AppError::Http {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        super::auth::login(self, request).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        super::auth::register(self, request).await
    }

    async fn list_services(&self) -> Result<Vec<Service>> {
        super::catalog::list_services(self).await
    }

    async fn create_appointment(&self, request: AppointmentRequest) -> Result<Option<Appointment>> {
        super::catalog::create_appointment(self, request).await
    }

    async fn payment_methods(&self, user_id: i64) -> Result<Vec<PaymentMethod>> {
        super::payments::payment_methods(self, user_id).await
    }

    async fn payment_history(&self, user_id: i64) -> Result<Vec<PaymentRecord>> {
        super::payments::payment_history(self, user_id).await
    }

    async fn set_default_payment_method(&self, user_id: i64, method_id: i64) -> Result<()> {
        super::payments::set_default_payment_method(self, user_id, method_id).await
    }
}

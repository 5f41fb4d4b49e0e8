//! # Authentication Endpoints
//!
//! Login and registration. Installing the returned token is the caller's
//! decision: a response that arrives after the user abandoned the form must
//! not authenticate the session.

use reqwest::Method;
use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting login");

    let result = client
        .send_json::<AuthResponse>(client.request(Method::POST, "/auth/login/").json(&request))
        .await;

    match &result {
        Ok(auth) => tracing::info!(user_id = auth.user.id, "Login successful"),
        Err(e) => tracing::warn!(error = %e, "Login failed"),
    }
    result
}

/// Register a new account.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting registration");

    let result = client
        .send_json::<AuthResponse>(client.request(Method::POST, "/auth/register/").json(&request))
        .await;

    if let Err(e) = &result {
        tracing::warn!(error = %e, "Registration failed");
    }
    result
}

//! # Service Traits
//!
//! The seam between application state and the backend. [`ApiClient`] talks
//! to the REST API, [`DemoApi`] serves in-memory fixtures, and tests plug in
//! their own implementation.
//!
//! [`ApiClient`]: crate::services::api::ApiClient
//! [`DemoApi`]: crate::services::demo::DemoApi

use async_trait::async_trait;
use shared::{
    Appointment, AppointmentRequest, AuthResponse, LoginRequest, PaymentMethod, PaymentRecord,
    RegisterRequest, Service,
};

use crate::core::error::Result;

/// Backend operations used by the desk.
///
/// Implementations attach the current session token themselves; callers
/// never pass credentials other than on login/register.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `POST /auth/login/`
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse>;

    /// `POST /auth/register/`
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse>;

    /// `GET /services/`
    async fn list_services(&self) -> Result<Vec<Service>>;

    /// `POST /appointments/`
    ///
    /// Returns `None` when the server accepted the booking but its body is
    /// not an appointment the client understands.
    async fn create_appointment(&self, request: AppointmentRequest) -> Result<Option<Appointment>>;

    /// `GET /payments/methods/?user_id=`
    async fn payment_methods(&self, user_id: i64) -> Result<Vec<PaymentMethod>>;

    /// `GET /payments/history/?user_id=`
    async fn payment_history(&self, user_id: i64) -> Result<Vec<PaymentRecord>>;

    /// `POST /payments/methods/{id}/set_default/?user_id=`
    async fn set_default_payment_method(&self, user_id: i64, method_id: i64) -> Result<()>;
}

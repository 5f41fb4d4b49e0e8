//! # Demo Backend
//!
//! In-memory fixtures behind the same [`ApiService`] trait as the REST client.
//! Selected only with `BOOKING_DEMO_DATA=1`; the desk never switches to it
//! because the real backend failed.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;
use shared::{
    Appointment, AppointmentRequest, AppointmentStatus, AuthResponse, LoginRequest, PaymentMethod,
    PaymentRecord, PaymentStatus, RegisterRequest, Service, UserSummary,
};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

pub const DEMO_TOKEN: &str = "demo-token";
pub const DEMO_USER_ID: i64 = 1;

struct DemoData {
    methods: Vec<PaymentMethod>,
    next_appointment_id: i64,
}

pub struct DemoApi {
    services: Vec<Service>,
    history: Vec<PaymentRecord>,
    data: Mutex<DemoData>,
}

impl Default for DemoApi {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoApi {
    pub fn new() -> Self {
        let services = vec![
            Service {
                id: 1,
                name: "Initial consultation".to_string(),
                description: "A 30 minute conversation to review needs and answer questions.".to_string(),
                duration_minutes: 30,
                price: 450_000,
            },
            Service {
                id: 2,
                name: "Specialist follow-up".to_string(),
                description: "A 60 minute session to review progress and plan next steps.".to_string(),
                duration_minutes: 60,
                price: 780_000,
            },
        ];
        let methods = vec![
            PaymentMethod {
                id: 1,
                brand: "Visa".to_string(),
                last4: "1234".to_string(),
                is_default: true,
            },
            PaymentMethod {
                id: 2,
                brand: "Mastercard".to_string(),
                last4: "9876".to_string(),
                is_default: false,
            },
        ];
        let history = vec![PaymentRecord {
            id: 100,
            appointment_id: 45,
            amount: 780_000,
            currency: "IRT".to_string(),
            status: PaymentStatus::Paid,
            processed_at: Utc::now() - Duration::days(2),
        }];

        Self {
            services,
            history,
            data: Mutex::new(DemoData {
                methods,
                next_appointment_id: 1,
            }),
        }
    }

    fn demo_user(name: &str, email: &str) -> AuthResponse {
        AuthResponse {
            token: DEMO_TOKEN.to_string(),
            user: UserSummary {
                id: DEMO_USER_ID,
                name: name.to_string(),
                email: email.to_string(),
            },
        }
    }
}

#[async_trait]
impl ApiService for DemoApi {
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        Ok(Self::demo_user("Demo user", &request.email))
    }

    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse> {
        Ok(Self::demo_user(&request.name, &request.email))
    }

    async fn list_services(&self) -> Result<Vec<Service>> {
        Ok(self.services.clone())
    }

    async fn create_appointment(&self, request: AppointmentRequest) -> Result<Option<Appointment>> {
        if !self.services.iter().any(|s| s.id == request.service_id) {
            return Err(AppError::Http { status: 404, body: None });
        }
        let mut data = self.data.lock();
        let id = data.next_appointment_id;
        data.next_appointment_id += 1;

        Ok(Some(Appointment {
            id,
            status: AppointmentStatus::Pending,
            request,
        }))
    }

    async fn payment_methods(&self, _user_id: i64) -> Result<Vec<PaymentMethod>> {
        Ok(self.data.lock().methods.clone())
    }

    async fn payment_history(&self, _user_id: i64) -> Result<Vec<PaymentRecord>> {
        Ok(self.history.clone())
    }

    async fn set_default_payment_method(&self, _user_id: i64, method_id: i64) -> Result<()> {
        let mut data = self.data.lock();
        if !data.methods.iter().any(|m| m.id == method_id) {
            return Err(AppError::Http { status: 404, body: None });
        }
        for method in data.methods.iter_mut() {
            method.is_default = method.id == method_id;
        }
        Ok(())
    }
}

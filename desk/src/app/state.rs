//! # Application State Types
//!
//! Everything the screens render: the current screen, one sub-state per
//! screen, the authentication context and the API the handlers talk to.

use std::sync::Arc;

use chrono::Local;
use shared::{Appointment, PaymentMethod, PaymentRecord, Service, UserSummary};

use crate::core::{ApiService, FormState, Optimistic, Remote, RequestTicket, RequestTracker};
use crate::services::Session;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Login / register
    Auth,
    /// Service catalog
    Services,
    /// Appointment booking form
    Booking,
    /// Payment methods and history
    Payments,
}

impl Screen {
    /// Get all screens in Tab navigation order
    pub fn all() -> &'static [Screen] {
        &[Screen::Auth, Screen::Services, Screen::Booking, Screen::Payments]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Auth => "Sign in",
            Screen::Services => "Services",
            Screen::Booking => "Book an appointment",
            Screen::Payments => "Payments",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Auth => "/auth",
            Screen::Services => "/services",
            Screen::Booking => "/booking",
            Screen::Payments => "/payments",
        }
    }

    /// Resolve a route path. `/` is a synonym for the service list.
    pub fn from_path(path: &str) -> Option<Screen> {
        match path {
            "/" | "" => Some(Screen::Services),
            other => Screen::all().iter().copied().find(|s| s.path() == other),
        }
    }

    pub fn next(&self) -> Screen {
        let screens = Screen::all();
        let idx = screens.iter().position(|s| s == self).unwrap_or(0);
        screens[(idx + 1) % screens.len()]
    }

    pub fn previous(&self) -> Screen {
        let screens = Screen::all();
        let idx = screens.iter().position(|s| s == self).unwrap_or(0);
        screens[(idx + screens.len() - 1) % screens.len()]
    }
}

/// Which form the auth screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Auth screen fields and submission state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub form: FormState,
}

impl AuthState {
    /// Clear every field and error, abandoning any in-flight submission.
    pub fn reset(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.form.reset();
    }
}

/// Service list shared by the Services and Booking screens
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub services: Remote<Vec<Service>>,
    /// Service shown in the detail card
    pub selected: Option<Service>,
}

#[derive(Debug, Clone)]
pub struct BookingState {
    pub selected: Option<Service>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time_slot: String,
    pub notes: String,
    pub form: FormState,
    /// Appointment returned by the last successful booking, if the server sent one
    pub last_booking: Option<Appointment>,
}

impl Default for BookingState {
    fn default() -> Self {
        Self {
            selected: None,
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            time_slot: crate::utils::validation::FIRST_SLOT.to_string(),
            notes: String::new(),
            form: FormState::new(),
            last_booking: None,
        }
    }
}

/// Both payment collections, fetched together for one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentsData {
    pub methods: Vec<PaymentMethod>,
    pub history: Vec<PaymentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

/// Result message of the last payment mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: FeedbackKind::Error, text: text.into() }
    }
}

/// A set-default write in flight, with the collection as it was before.
#[derive(Debug, Clone)]
pub struct PendingDefault {
    pub ticket: RequestTicket,
    pub method_id: i64,
    pub snapshot: Optimistic<Vec<PaymentMethod>>,
}

#[derive(Debug, Clone, Default)]
pub struct PaymentsState {
    /// Raw text of the user id field
    pub user_id_input: String,
    /// Parsed user id; `None` while the field is blank or not a positive integer
    pub user_id: Option<i64>,
    pub data: Remote<PaymentsData>,
    pub pending_default: Option<PendingDefault>,
    pub feedback: Option<Feedback>,
    pub mutations: RequestTracker,
}

impl PaymentsState {
    pub fn is_mutating(&self) -> bool {
        self.pending_default.is_some()
    }

    /// Abandon in-flight reads and writes and empty the view.
    pub fn reset_data(&mut self) {
        self.data.reset();
        self.mutations.invalidate();
        self.pending_default = None;
        self.feedback = None;
    }
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub auth: AuthState,
    pub catalog: CatalogState,
    pub booking: BookingState,
    pub payments: PaymentsState,
    /// Bearer token slot shared with the API client
    pub session: Session,
    pub current_user: Option<UserSummary>,
    pub api: Arc<dyn ApiService>,
}

impl AppState {
    pub fn new(api: Arc<dyn ApiService>, session: Session) -> Self {
        Self {
            current_screen: Screen::Services,
            auth: AuthState::default(),
            catalog: CatalogState::default(),
            booking: BookingState::default(),
            payments: PaymentsState::default(),
            session,
            current_user: None,
            api,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

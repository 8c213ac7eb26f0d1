// ABOUTME: Application state management and async API bridging for the booking TUI

use std::time::{Duration, Instant};

use chrono::Local;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{BookingApiClient, BookingRequest};
use crate::booking::{fallback_catalog, Service, SimulatedAvailability};
use crate::components::home::HomeState;
use crate::components::wizard::{BookingStep, WizardState};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Booking,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn success(message: String) -> Self {
        Self {
            message,
            kind: NotificationType::Success,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            message,
            kind: NotificationType::Error,
            created_at: Instant::now(),
            duration: Duration::from_secs(5),
        }
    }

    pub fn info(message: String) -> Self {
        Self {
            message,
            kind: NotificationType::Info,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn warning(message: String) -> Self {
        Self {
            message,
            kind: NotificationType::Warning,
            created_at: Instant::now(),
            duration: Duration::from_secs(4),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Deferred API work queued by key handling, dispatched in tick()
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncAction {
    LoadServices,
    SubmitBooking(BookingRequest),
    RefreshAuthStatus,
    Logout,
}

/// Results sent back from spawned API tasks
#[derive(Debug)]
pub enum ApiUpdate {
    Services(Vec<Service>),
    ServicesFailed(String),
    BookingAccepted(i64),
    BookingFailed(String),
    AuthStatus(bool),
    LoggedOut,
    LogoutFailed(String),
}

pub struct AppState {
    pub current_view: View,
    pub should_quit: bool,
    pub help_visible: bool,
    // Flag to force a redraw outside the input path
    pub ui_needs_refresh: bool,

    /// Catalog shown on the home screen and in the wizard
    pub services: Vec<Service>,
    pub services_loading: bool,
    /// Status-bar auth label; errors leave it at logged out
    pub logged_in: bool,

    pub home: HomeState,
    pub wizard: WizardState,
    pub availability: SimulatedAvailability,

    // Async action processing
    pub pending_async_action: Option<AsyncAction>,
    pub notifications: Vec<Notification>,

    // Persistent configuration (saved to ~/.lotus/config.toml)
    pub config: AppConfig,

    api_client: Option<BookingApiClient>,
    update_tx: mpsc::UnboundedSender<ApiUpdate>,
    update_rx: mpsc::UnboundedReceiver<ApiUpdate>,
}

impl AppState {
    pub fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let api_client = match BookingApiClient::from_config(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("Failed to build API client: {}", e);
                None
            }
        };

        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let today = Local::now().date_naive();
        let rotation = Duration::from_secs(config.ui.carousel_interval_secs);

        Self {
            current_view: View::Home,
            should_quit: false,
            help_visible: false,
            ui_needs_refresh: false,
            services: Vec::new(),
            services_loading: false,
            logged_in: false,
            home: HomeState::new(rotation),
            wizard: WizardState::new(today),
            availability: SimulatedAvailability::default(),
            pending_async_action: None,
            notifications: Vec::new(),
            config,
            api_client,
            update_tx,
            update_rx,
        }
    }

    pub fn auth_label(&self) -> &'static str {
        if self.logged_in {
            "Logout"
        } else {
            "Login"
        }
    }

    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
        self.ui_needs_refresh = true;
    }

    pub fn cleanup_expired_notifications(&mut self) {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired());
        if self.notifications.len() != before {
            self.ui_needs_refresh = true;
        }
    }

    pub fn queue_action(&mut self, action: AsyncAction) {
        self.pending_async_action = Some(action);
    }

    /// Take the queued action and spawn its API task. The task reports
    /// back over the update channel; nothing here blocks the UI thread.
    pub fn process_async_action(&mut self) {
        let Some(action) = self.pending_async_action.take() else {
            return;
        };
        self.dispatch(action);
    }

    fn dispatch(&mut self, action: AsyncAction) {
        let Some(client) = self.api_client.clone() else {
            // No client means no backend; the fallback catalog covers the UI
            if action == AsyncAction::LoadServices {
                self.install_services(fallback_catalog());
            }
            return;
        };
        let tx = self.update_tx.clone();

        match action {
            AsyncAction::LoadServices => {
                self.services_loading = true;
                tokio::spawn(async move {
                    let update = match client.fetch_services().await {
                        Ok(services) => ApiUpdate::Services(services),
                        Err(e) => ApiUpdate::ServicesFailed(e.to_string()),
                    };
                    let _ = tx.send(update);
                });
            }
            AsyncAction::SubmitBooking(request) => {
                info!(service_id = request.service_id, "Submitting booking");
                tokio::spawn(async move {
                    let update = match client.create_booking(&request).await {
                        Ok(accepted) => ApiUpdate::BookingAccepted(accepted.id),
                        Err(e) => ApiUpdate::BookingFailed(e.to_string()),
                    };
                    let _ = tx.send(update);
                });
            }
            AsyncAction::RefreshAuthStatus => {
                tokio::spawn(async move {
                    let logged_in = client.auth_status().await.unwrap_or(false);
                    let _ = tx.send(ApiUpdate::AuthStatus(logged_in));
                });
            }
            AsyncAction::Logout => {
                tokio::spawn(async move {
                    let update = match client.logout().await {
                        Ok(()) => ApiUpdate::LoggedOut,
                        Err(e) => ApiUpdate::LogoutFailed(e.to_string()),
                    };
                    let _ = tx.send(update);
                });
            }
        }
    }

    /// Drain completed API results without blocking; true if state changed
    pub fn drain_updates(&mut self) -> bool {
        let mut changed = false;
        loop {
            let update = match self.update_rx.try_recv() {
                Ok(update) => update,
                Err(_) => break,
            };
            self.apply_update(update);
            changed = true;
        }
        changed
    }

    fn apply_update(&mut self, update: ApiUpdate) {
        match update {
            ApiUpdate::Services(services) => {
                self.services_loading = false;
                self.install_services(services);
            }
            ApiUpdate::ServicesFailed(reason) => {
                // Catalog failures are invisible to the user
                debug!("Service catalog unavailable, using fallback: {}", reason);
                self.services_loading = false;
                self.install_services(fallback_catalog());
            }
            ApiUpdate::BookingAccepted(id) => {
                info!(booking_id = id, "Booking confirmed");
                self.wizard.submission_succeeded(id);
                self.add_notification(Notification::success("Booking confirmed".to_string()));
            }
            ApiUpdate::BookingFailed(message) => {
                warn!("Booking submission failed: {}", message);
                self.wizard.submission_failed(message);
            }
            ApiUpdate::AuthStatus(logged_in) => {
                self.logged_in = logged_in;
            }
            ApiUpdate::LoggedOut => {
                self.logged_in = false;
                self.add_notification(Notification::info("Logged out".to_string()));
            }
            ApiUpdate::LogoutFailed(reason) => {
                warn!("Logout failed: {}", reason);
                // Resync the label rather than guessing
                self.queue_action(AsyncAction::RefreshAuthStatus);
            }
        }
        self.ui_needs_refresh = true;
    }

    fn install_services(&mut self, services: Vec<Service>) {
        self.home.set_service_count(services.len());
        self.wizard.set_services(services.clone());
        self.services = services;
        self.ui_needs_refresh = true;
    }

    /// Enter the wizard from the home menu
    pub fn open_booking(&mut self) {
        self.wizard.reset_for_new_booking();
        self.current_view = View::Booking;
        self.ui_needs_refresh = true;
    }

    /// Leave the wizard and land back on the home screen
    pub fn return_home(&mut self) {
        self.current_view = View::Home;
        self.ui_needs_refresh = true;
    }

    /// Commit the calendar cursor as the chosen date and load its slots
    pub fn select_cursor_date(&mut self) {
        let Some(date) = self.wizard.cursor_date() else {
            return;
        };
        if let Err(message) = self.wizard.select_date(date, &mut self.availability) {
            self.wizard.show_error(message);
        }
        self.ui_needs_refresh = true;
    }

    /// Confirm on the summary step. Re-entry while a submission is
    /// in flight is a no-op.
    pub fn confirm_booking(&mut self) {
        if let Some(request) = self.wizard.begin_submission() {
            self.queue_action(AsyncAction::SubmitBooking(request));
        }
    }

    /// Toggle the studio account session from the status bar
    pub fn toggle_auth(&mut self) {
        if self.logged_in {
            self.queue_action(AsyncAction::Logout);
        } else {
            self.add_notification(Notification::info(
                "Visit the studio website to log in".to_string(),
            ));
        }
    }

    #[cfg(test)]
    pub fn push_update_for_test(&mut self, update: ApiUpdate) {
        let _ = self.update_tx.send(update);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Kick off the startup fetches. Both results land via the
    /// update channel, so the first frame renders immediately.
    pub fn init(&mut self) {
        self.state.dispatch(AsyncAction::LoadServices);
        self.state.dispatch(AsyncAction::RefreshAuthStatus);
    }

    pub fn tick(&mut self) {
        self.state.cleanup_expired_notifications();
        self.state.process_async_action();

        if self.state.drain_updates() {
            self.state.ui_needs_refresh = true;
        }

        let now = Instant::now();
        if self.state.current_view == View::Home && self.state.home.tick(now) {
            self.state.ui_needs_refresh = true;
        }

        // Blink the text cursor while the contact form is up
        if self.state.current_view == View::Booking
            && self.state.wizard.current_step == BookingStep::Contact
        {
            self.state.wizard.toggle_cursor();
            self.state.ui_needs_refresh = true;
        }
    }

    /// Check if UI needs immediate refresh and clear the flag
    pub fn needs_ui_refresh(&mut self) -> bool {
        if self.state.ui_needs_refresh {
            self.state.ui_needs_refresh = false;
            true
        } else {
            false
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

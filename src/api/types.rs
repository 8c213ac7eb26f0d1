// ABOUTME: Wire types for the studio backend: service payloads, booking
// ABOUTME: submissions and the auth status replies

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::booking::{Service, ServiceIcon};

/// A service as the backend sends it. Icons and descriptions are optional
/// columns there; the client fills both in.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicePayload {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub duration: i64,
    pub price: f64,
    #[serde(default)]
    pub icon: Option<String>,
}

impl ServicePayload {
    pub fn into_service(self) -> Service {
        let icon = ServiceIcon::resolve(self.icon.as_deref(), &self.name);
        Service {
            id: self.id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            duration_min: self.duration,
            price: self.price,
            icon,
        }
    }
}

/// Body of `POST /booking/events`. Times are studio-local ISO-8601 without
/// offset; the backend stores them as-is. Empty optional fields go out as
/// explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub user_name: String,
    pub email: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub service_id: i64,
    pub phone: Option<String>,
    pub special_requests: Option<String>,
}

/// 201 reply to a booking submission.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingAccepted {
    pub success: bool,
    pub id: i64,
}

/// Error reply shape; `error` carries the reason the backend gives.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    pub logged_in: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoutReply {
    #[serde(default)]
    pub message: Option<String>,
}

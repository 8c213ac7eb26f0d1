// ABOUTME: Studio backend integration: the HTTP client and its wire types

pub mod client;
pub mod types;

pub use client::{BookingApiClient, SubmitError};
pub use types::{AuthStatus, BookingAccepted, BookingRequest, ServicePayload};

// ABOUTME: Booking domain: the service catalog, calendar math, appointment slots
// ABOUTME: and contact validation shared by the wizard and the CLI

pub mod calendar;
pub mod contact;
pub mod service;
pub mod slots;

pub use calendar::{classify_day, format_long_date, CalendarMonth, DayStatus};
pub use contact::{is_valid_email, optional_field, validate_contact, ContactError};
pub use service::{fallback_catalog, format_price, Service, ServiceIcon};
pub use slots::{
    candidate_slots, format_time_12h, format_time_range, AvailabilityError, AvailabilitySource,
    SimulatedAvailability, TimeSlot,
};

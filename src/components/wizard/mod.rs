// ABOUTME: Five-step booking wizard: state machine and rendering

pub mod component;
pub mod state;

pub use component::WizardComponent;
pub use state::{
    BookingStep, ContactField, ContactForm, ScheduleFocus, WizardState, SERVICE_GRID_COLUMNS,
    SLOT_GRID_COLUMNS,
};

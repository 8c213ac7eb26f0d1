// ABOUTME: UI components for the booking TUI including the wizard, home screen, and overlays

pub mod carousel;
pub mod error_modal;
pub mod help;
pub mod home;
pub mod layout;
pub mod wizard;

pub use carousel::Carousel;
pub use error_modal::ErrorModalComponent;
pub use help::HelpComponent;
pub use home::{HomeComponent, HomeMenuEntry, HomeState};
pub use layout::LayoutComponent;
pub use wizard::{
    BookingStep, ContactField, ContactForm, ScheduleFocus, WizardComponent, WizardState,
};

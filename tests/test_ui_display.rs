// ABOUTME: UI display tests rendering the home screen and every wizard step

use chrono::NaiveDate;
use lotus::app::state::View;
use lotus::app::App;
use lotus::booking::{
    candidate_slots, fallback_catalog, AvailabilityError, AvailabilitySource, Service, TimeSlot,
};
use lotus::components::wizard::BookingStep;
use lotus::components::LayoutComponent;
use ratatui::{backend::TestBackend, Terminal};

struct FixedSlots(Vec<TimeSlot>);

impl AvailabilitySource for FixedSlots {
    fn slots_for(
        &mut self,
        _date: NaiveDate,
        _service: &Service,
    ) -> Result<Vec<TimeSlot>, AvailabilityError> {
        Ok(self.0.clone())
    }
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let layout = LayoutComponent::new();

    terminal
        .draw(|frame| {
            layout.render(frame, &app.state);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(ratatui::buffer::Cell::symbol).collect()
}

fn booking_app() -> App {
    let mut app = App::new();
    app.state.current_view = View::Booking;
    app.state.wizard.set_services(fallback_catalog());
    app
}

/// App with a completed selection, parked on the summary step.
fn completed_app() -> App {
    let mut app = booking_app();
    let wizard = &mut app.state.wizard;
    wizard.select_service_at_cursor();
    let date = wizard.today.succ_opt().unwrap();
    let mut source = FixedSlots(candidate_slots());
    wizard.select_date(date, &mut source).unwrap();
    wizard.slot_cursor = 2; // 10:00 AM
    wizard.select_slot_at_cursor();
    wizard.contact.name = "Jane Doe".to_string();
    wizard.contact.email = "jane@example.com".to_string();
    wizard.go_to_step(BookingStep::Summary);
    app
}

#[tokio::test]
async fn test_home_screen_shows_banner_showcases_and_menu() {
    let app = App::new();
    let content = render(&app);

    // Hero banner
    assert!(
        content.contains("Holistic Therapy"),
        "home should show the hero title"
    );
    assert!(
        content.contains("Discover the power of integrated healing"),
        "home should show the hero subtitle"
    );

    // Showcases: no catalog yet, testimonials are static
    assert!(content.contains("Our Services"));
    assert!(content.contains("Loading services..."));
    assert!(content.contains("What Our Clients Say"));
    assert!(content.contains("★★★★★"));
    assert!(content.contains("The holistic approach"));

    // Menu and status bar
    assert!(content.contains("Book an Appointment"));
    assert!(content.contains("Browse Services"));
    assert!(content.contains("Quit"));
    assert!(content.contains("Lotus Wellness Studio"));
    assert!(content.contains("Login"));
}

#[tokio::test]
async fn test_home_screen_shows_loaded_services_with_prices() {
    let mut app = App::new();
    app.state.services = fallback_catalog();
    app.state.home.set_service_count(4);
    let content = render(&app);

    // Window of three at this width, starting from the first service
    assert!(content.contains("Yoga Session"));
    assert!(content.contains("Guided Meditation"));
    assert!(content.contains("Reiki Healing"));
    assert!(content.contains("$75"));
    assert!(content.contains(" 1/4 "));
}

#[tokio::test]
async fn test_service_step_shows_cards_and_progress() {
    let app = booking_app();
    let content = render(&app);

    assert!(content.contains("Book Your Session"));
    assert!(content.contains("What would you like to book?"));

    // Progress row names the four visible steps
    assert!(content.contains("Choose a Service"));
    assert!(content.contains("Date & Time"));
    assert!(content.contains("Your Details"));
    assert!(content.contains("Review & Confirm"));

    // All four catalog cards
    assert!(content.contains("Yoga Session"));
    assert!(content.contains("Guided Meditation"));
    assert!(content.contains("Reiki Healing"));
    assert!(content.contains("Holistic Massage"));
    assert!(content.contains("60 minutes"));
    assert!(content.contains("$75"));
}

#[tokio::test]
async fn test_service_step_marks_exactly_one_selected_card() {
    let mut app = booking_app();
    app.state.wizard.select_service_at_cursor();
    app.state.wizard.move_service_cursor_down();
    let content = render(&app);

    assert_eq!(content.matches("✓ Selected").count(), 1);
}

#[tokio::test]
async fn test_schedule_step_shows_calendar_and_slot_hint() {
    let mut app = booking_app();
    app.state.wizard.select_service_at_cursor();
    app.state.wizard.advance();
    let content = render(&app);

    let month_title = app.state.wizard.month.title();
    assert!(
        content.contains(&month_title),
        "calendar should be titled '{month_title}'"
    );
    assert!(content.contains("Su  Mo  Tu  We  Th  Fr  Sa"));
    assert!(content.contains("dimmed days are past"));

    // No date picked yet
    assert!(content.contains("Pick a date to see open times"));
}

#[tokio::test]
async fn test_schedule_step_lists_open_times_for_the_picked_date() {
    let mut app = booking_app();
    let wizard = &mut app.state.wizard;
    wizard.select_service_at_cursor();
    wizard.advance();
    let date = wizard.today.succ_opt().unwrap();
    let mut source = FixedSlots(candidate_slots());
    wizard.select_date(date, &mut source).unwrap();
    let content = render(&app);

    assert!(content.contains("9:00 AM"));
    assert!(content.contains("5:30 PM"));
    assert!(!content.contains("Pick a date to see open times"));
}

#[tokio::test]
async fn test_schedule_step_reports_a_day_with_no_open_times() {
    let mut app = booking_app();
    let wizard = &mut app.state.wizard;
    wizard.select_service_at_cursor();
    wizard.advance();
    let date = wizard.today.succ_opt().unwrap();
    let mut source = FixedSlots(Vec::new());
    wizard.select_date(date, &mut source).unwrap();
    let content = render(&app);

    assert!(content.contains("No open times on this day"));
    assert!(content.contains("Try another date"));
}

#[tokio::test]
async fn test_contact_step_shows_labeled_fields() {
    let mut app = booking_app();
    app.state.wizard.go_to_step(BookingStep::Contact);
    let content = render(&app);

    assert!(content.contains("How should we reach you?"));
    assert!(content.contains("Full Name"));
    assert!(content.contains("Email"));
    assert!(content.contains("Phone (optional)"));
    assert!(content.contains("Special Requests (optional)"));
}

#[tokio::test]
async fn test_summary_step_reviews_the_booking() {
    let app = completed_app();
    let content = render(&app);

    assert!(content.contains("Booking Summary"));
    assert!(content.contains("Yoga Session"));
    assert!(content.contains("10:00 AM - 11:00 AM"));
    assert!(content.contains("$75"));
    assert!(content.contains("Jane Doe"));
    assert!(content.contains("jane@example.com"));
}

#[tokio::test]
async fn test_confirmed_step_drops_the_progress_row() {
    let mut app = completed_app();
    app.state.wizard.submission_succeeded(17);
    let content = render(&app);

    assert!(content.contains("Booking Confirmed!"));
    assert!(content.contains("Booking reference #17"));
    assert!(content.contains("Our Holistic Wellness Center"));

    // The step indicator is gone for good
    assert!(!content.contains("Choose a Service"));
    assert!(!content.contains("Review & Confirm"));
}

#[tokio::test]
async fn test_error_modal_overlays_the_wizard() {
    let mut app = completed_app();
    app.state.wizard.show_error("Slot no longer available");
    let content = render(&app);

    assert!(content.contains("Something went wrong"));
    assert!(content.contains("Slot no longer available"));
    assert!(content.contains("Enter or Esc to dismiss"));
}

#[tokio::test]
async fn test_help_overlay_lists_the_key_bindings() {
    let mut app = App::new();
    app.state.help_visible = true;
    let content = render(&app);

    assert!(content.contains("Home Screen:"));
    assert!(content.contains("Booking Wizard:"));
    assert!(content.contains("Contact Form:"));
    assert!(content.contains("General:"));
    assert!(content.contains("Previous / next month"));
}

#[tokio::test]
async fn test_status_bar_reports_catalog_loading() {
    let mut app = App::new();
    app.state.services_loading = true;
    let content = render(&app);

    assert!(content.contains("Loading services..."));
}

#[tokio::test]
async fn test_rendering_is_a_pure_function_of_state() {
    let app = completed_app();
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    let layout = LayoutComponent::new();

    terminal
        .draw(|frame| layout.render(frame, &app.state))
        .unwrap();
    let first = terminal.backend().buffer().clone();

    terminal
        .draw(|frame| layout.render(frame, &app.state))
        .unwrap();
    let second = terminal.backend().buffer().clone();

    assert_eq!(first, second);
}

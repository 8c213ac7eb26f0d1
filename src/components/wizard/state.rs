// ABOUTME: State for the five-step booking wizard
// Tracks the selected service, date, slot, contact details and submission progress

use chrono::{NaiveDate, NaiveDateTime};

use crate::api::BookingRequest;
use crate::booking::{
    classify_day, format_long_date, format_price, format_time_range, optional_field,
    validate_contact, AvailabilitySource, CalendarMonth, ContactError, Service, TimeSlot,
};

/// Steps in the booking wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Service,
    Schedule,
    Contact,
    Summary,
    Confirmed,
}

impl BookingStep {
    /// Get all steps in order
    pub fn all() -> &'static [BookingStep] {
        &[
            Self::Service,
            Self::Schedule,
            Self::Contact,
            Self::Summary,
            Self::Confirmed,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> usize {
        match self {
            Self::Service => 1,
            Self::Schedule => 2,
            Self::Contact => 3,
            Self::Summary => 4,
            Self::Confirmed => 5,
        }
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        5
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Service => "Choose a Service",
            Self::Schedule => "Date & Time",
            Self::Contact => "Your Details",
            Self::Summary => "Review & Confirm",
            Self::Confirmed => "Booking Confirmed",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::Service => "What would you like to book?",
            Self::Schedule => "Pick a day and an open time",
            Self::Contact => "How should we reach you?",
            Self::Summary => "Check everything before booking",
            Self::Confirmed => "We look forward to seeing you",
        }
    }

    /// Can we go to the next step?
    pub fn can_advance(&self, state: &WizardState) -> bool {
        match self {
            Self::Service => state.selected_service.is_some(),
            Self::Schedule => state.selected_date.is_some() && state.selected_slot.is_some(),
            Self::Contact => state.contact.validate().is_ok(),
            // Summary only advances through a successful submission
            Self::Summary | Self::Confirmed => false,
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Service => Some(Self::Schedule),
            Self::Schedule => Some(Self::Contact),
            Self::Contact => Some(Self::Summary),
            Self::Summary => Some(Self::Confirmed),
            Self::Confirmed => None,
        }
    }

    /// Get the previous step, if any. Confirmed is terminal; there is no
    /// way back out of it.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Service | Self::Confirmed => None,
            Self::Schedule => Some(Self::Service),
            Self::Contact => Some(Self::Schedule),
            Self::Summary => Some(Self::Contact),
        }
    }

    /// The progress dots cover steps 1-4 and disappear once confirmed.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Confirmed)
    }
}

/// Fields on the contact step, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    SpecialRequests,
}

impl ContactField {
    pub fn all() -> &'static [ContactField] {
        &[
            Self::Name,
            Self::Email,
            Self::Phone,
            Self::SpecialRequests,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone (optional)",
            Self::SpecialRequests => "Special Requests (optional)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::SpecialRequests,
            Self::SpecialRequests => Self::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Self::Name => Self::SpecialRequests,
            Self::Email => Self::Name,
            Self::Phone => Self::Email,
            Self::SpecialRequests => Self::Phone,
        }
    }
}

/// Editable contact form with one focused field and a byte cursor kept on
/// char boundaries.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
    pub focused: ContactField,
    pub cursor: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            special_requests: String::new(),
            focused: ContactField::Name,
            cursor: 0,
        }
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::SpecialRequests => &self.special_requests,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::SpecialRequests => &mut self.special_requests,
        }
    }

    /// Handle text input character
    pub fn input_char(&mut self, c: char) {
        let cursor = self.cursor;
        let field = self.focused_value_mut();
        field.insert(cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Handle backspace
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let field = self.focused_value_mut();
        if let Some(prev) = field[..cursor].chars().next_back() {
            let new_cursor = cursor - prev.len_utf8();
            field.remove(new_cursor);
            self.cursor = new_cursor;
        }
    }

    /// Handle delete key
    pub fn delete(&mut self) {
        let cursor = self.cursor;
        let field = self.focused_value_mut();
        if cursor < field.len() {
            field.remove(cursor);
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        let field = self.value(self.focused);
        if let Some(prev) = field[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let field = self.value(self.focused);
        if let Some(next) = field[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.value(self.focused).len();
    }

    /// Focus the next field, cursor at the end of its text
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
        self.cursor_end();
    }

    /// Focus the previous field, cursor at the end of its text
    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
        self.cursor_end();
    }

    pub fn focus(&mut self, field: ContactField) {
        self.focused = field;
        self.cursor_end();
    }

    /// Required-field check; trims for the check only, raw text is kept.
    pub fn validate(&self) -> Result<(), ContactError> {
        validate_contact(&self.name, &self.email)
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Which pane of the schedule step has the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleFocus {
    Calendar,
    Slots,
}

/// Columns in the service card grid
pub const SERVICE_GRID_COLUMNS: usize = 2;

/// Columns in the time slot grid
pub const SLOT_GRID_COLUMNS: usize = 3;

/// The whole booking wizard: one explicit state value that every render
/// reads and every key handler mutates.
#[derive(Debug)]
pub struct WizardState {
    pub current_step: BookingStep,

    // Step 1
    pub services: Vec<Service>,
    pub service_cursor: usize,
    pub selected_service: Option<Service>,

    // Step 2
    pub today: NaiveDate,
    pub month: CalendarMonth,
    pub cursor_day: u32,
    pub schedule_focus: ScheduleFocus,
    pub selected_date: Option<NaiveDate>,
    pub slots: Vec<TimeSlot>,
    pub slot_cursor: usize,
    pub selected_slot: Option<TimeSlot>,

    // Step 3
    pub contact: ContactForm,

    // Steps 4-5
    pub submission_in_flight: bool,
    pub confirmed_booking_id: Option<i64>,

    /// Modal error text; dismissal never changes the step
    pub error: Option<String>,

    /// Text cursor blink phase, toggled on tick
    pub show_cursor: bool,
}

impl WizardState {
    pub fn new(today: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            current_step: BookingStep::Service,
            services: Vec::new(),
            service_cursor: 0,
            selected_service: None,
            today,
            month: CalendarMonth::containing(today),
            cursor_day: today.day(),
            schedule_focus: ScheduleFocus::Calendar,
            selected_date: None,
            slots: Vec::new(),
            slot_cursor: 0,
            selected_slot: None,
            contact: ContactForm::new(),
            submission_in_flight: false,
            confirmed_booking_id: None,
            error: None,
            show_cursor: true,
        }
    }

    pub fn toggle_cursor(&mut self) {
        self.show_cursor = !self.show_cursor;
    }

    /// Replace the catalog once it loads; cursor stays in range.
    pub fn set_services(&mut self, services: Vec<Service>) {
        self.services = services;
        if self.service_cursor >= self.services.len() {
            self.service_cursor = self.services.len().saturating_sub(1);
        }
    }

    /// Start over for a new booking, keeping the loaded catalog.
    pub fn reset_for_new_booking(&mut self) {
        let services = std::mem::take(&mut self.services);
        *self = Self::new(self.today);
        self.services = services;
    }

    // Step 1: service grid

    pub fn move_service_cursor_left(&mut self) {
        if self.service_cursor % SERVICE_GRID_COLUMNS > 0 {
            self.service_cursor -= 1;
        }
    }

    pub fn move_service_cursor_right(&mut self) {
        if self.service_cursor % SERVICE_GRID_COLUMNS < SERVICE_GRID_COLUMNS - 1
            && self.service_cursor + 1 < self.services.len()
        {
            self.service_cursor += 1;
        }
    }

    pub fn move_service_cursor_up(&mut self) {
        if self.service_cursor >= SERVICE_GRID_COLUMNS {
            self.service_cursor -= SERVICE_GRID_COLUMNS;
        }
    }

    pub fn move_service_cursor_down(&mut self) {
        if self.service_cursor + SERVICE_GRID_COLUMNS < self.services.len() {
            self.service_cursor += SERVICE_GRID_COLUMNS;
        }
    }

    /// Select the highlighted card. Exactly one card is ever selected.
    pub fn select_service_at_cursor(&mut self) {
        if let Some(service) = self.services.get(self.service_cursor) {
            self.selected_service = Some(service.clone());
        }
    }

    pub fn is_service_selected(&self, service: &Service) -> bool {
        self.selected_service
            .as_ref()
            .is_some_and(|selected| selected.id == service.id)
    }

    // Step 2: calendar and slots

    pub fn month_next(&mut self) {
        self.month = self.month.next();
        self.cursor_day = self.month.clamp_day(self.cursor_day);
    }

    pub fn month_previous(&mut self) {
        self.month = self.month.previous();
        self.cursor_day = self.month.clamp_day(self.cursor_day);
    }

    /// Move the day cursor within the displayed month.
    pub fn move_calendar_cursor(&mut self, delta_days: i32) {
        let moved = i64::from(self.cursor_day) + i64::from(delta_days);
        let clamped = moved.clamp(1, i64::from(self.month.days_in_month()));
        self.cursor_day = self.month.clamp_day(u32::try_from(clamped).unwrap_or(1));
    }

    pub fn cursor_date(&self) -> Option<NaiveDate> {
        self.month.date(self.cursor_day)
    }

    /// Select a date and load its open slots. Past dates never select;
    /// picking a new date always clears the old slot choice.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
        availability: &mut dyn AvailabilitySource,
    ) -> Result<(), String> {
        if !classify_day(date, self.today).is_selectable() {
            return Ok(());
        }
        self.selected_date = Some(date);
        self.selected_slot = None;
        self.slot_cursor = 0;
        match self.selected_service.as_ref() {
            Some(service) => match availability.slots_for(date, service) {
                Ok(slots) => {
                    self.slots = slots;
                    self.schedule_focus = ScheduleFocus::Slots;
                    Ok(())
                }
                Err(err) => {
                    self.slots = Vec::new();
                    Err(err.to_string())
                }
            },
            None => Ok(()),
        }
    }

    pub fn move_slot_cursor(&mut self, delta: i32) {
        if self.slots.is_empty() {
            return;
        }
        let last = self.slots.len() - 1;
        let moved = i64::try_from(self.slot_cursor).unwrap_or(0) + i64::from(delta);
        self.slot_cursor = usize::try_from(moved.clamp(0, i64::try_from(last).unwrap_or(0)))
            .unwrap_or(0);
    }

    /// Select the highlighted slot. Exactly one slot is ever selected.
    pub fn select_slot_at_cursor(&mut self) {
        if let Some(slot) = self.slots.get(self.slot_cursor) {
            self.selected_slot = Some(*slot);
        }
    }

    pub fn is_slot_selected(&self, slot: TimeSlot) -> bool {
        self.selected_slot == Some(slot)
    }

    // Step transitions

    /// Move to next step if the current guard passes
    pub fn advance(&mut self) -> bool {
        if self.current_step.can_advance(self) {
            if let Some(next) = self.current_step.next() {
                self.go_to_step(next);
                return true;
            }
        }
        false
    }

    /// Move to previous step
    pub fn go_back(&mut self) -> bool {
        if let Some(prev) = self.current_step.previous() {
            self.go_to_step(prev);
            return true;
        }
        false
    }

    /// The single place the step changes. Transient cursors reset; the
    /// selections themselves survive going backward.
    pub fn go_to_step(&mut self, step: BookingStep) {
        self.current_step = step;
        self.schedule_focus = if self.selected_date.is_some() {
            ScheduleFocus::Slots
        } else {
            ScheduleFocus::Calendar
        };
        if step == BookingStep::Contact {
            self.contact.focus(ContactField::Name);
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.current_step.previous().is_some()
    }

    pub fn is_confirmed(&self) -> bool {
        self.current_step == BookingStep::Confirmed
    }

    // Summary and submission

    /// Appointment start and end; the end is always derived from the
    /// service duration, never stored.
    pub fn booking_window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let date = self.selected_date?;
        let slot = self.selected_slot?;
        let service = self.selected_service.as_ref()?;
        let start = date.and_time(slot.start);
        let end = date.and_time(slot.end_for(service.duration_min));
        Some((start, end))
    }

    /// Labeled rows for the review screen; empty until the wizard has a
    /// complete selection.
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        let (Some(service), Some(date), Some((start, end))) = (
            self.selected_service.as_ref(),
            self.selected_date,
            self.booking_window(),
        ) else {
            return Vec::new();
        };

        let mut rows = vec![
            ("Service", service.name.clone()),
            ("Date", format_long_date(date)),
            ("Time", format_time_range(start.time(), end.time())),
            ("Duration", service.duration_label()),
            ("Price", format_price(service.price)),
            ("Name", self.contact.name.clone()),
            ("Email", self.contact.email.clone()),
        ];
        if !self.contact.phone.is_empty() {
            rows.push(("Phone", self.contact.phone.clone()));
        }
        if !self.contact.special_requests.is_empty() {
            rows.push(("Special Requests", self.contact.special_requests.clone()));
        }
        rows
    }

    /// Wire payload for the submission; None while the wizard is
    /// incomplete.
    pub fn build_request(&self) -> Option<BookingRequest> {
        let (start_time, end_time) = self.booking_window()?;
        let service = self.selected_service.as_ref()?;
        Some(BookingRequest {
            user_name: self.contact.name.clone(),
            email: self.contact.email.clone(),
            start_time,
            end_time,
            service_id: service.id,
            phone: optional_field(&self.contact.phone),
            special_requests: optional_field(&self.contact.special_requests),
        })
    }

    /// Take the request for submission, flipping the in-flight guard.
    /// Returns None (and changes nothing) while a submission is already
    /// running or the wizard is incomplete.
    pub fn begin_submission(&mut self) -> Option<BookingRequest> {
        if self.submission_in_flight {
            return None;
        }
        let request = self.build_request()?;
        self.submission_in_flight = true;
        Some(request)
    }

    pub fn submission_succeeded(&mut self, booking_id: i64) {
        self.submission_in_flight = false;
        self.confirmed_booking_id = Some(booking_id);
        self.go_to_step(BookingStep::Confirmed);
    }

    /// Failure keeps the wizard on Summary with the reason in the modal.
    pub fn submission_failed(&mut self, message: String) {
        self.submission_in_flight = false;
        self.show_error(message);
    }

    // Error modal

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{candidate_slots, fallback_catalog, AvailabilityError};
    use pretty_assertions::assert_eq;

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

    struct BrokenSource;

    impl AvailabilitySource for BrokenSource {
        fn slots_for(
            &mut self,
            _date: NaiveDate,
            _service: &Service,
        ) -> Result<Vec<TimeSlot>, AvailabilityError> {
            Err(AvailabilityError::Unavailable("backend is down".to_string()))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).expect("valid test date")
    }

    fn state_with_catalog() -> WizardState {
        let mut state = WizardState::new(today());
        state.set_services(fallback_catalog());
        state
    }

    #[test]
    fn test_step_navigation() {
        let step = BookingStep::Service;
        assert_eq!(step.next(), Some(BookingStep::Schedule));
        assert_eq!(step.previous(), None);

        let step = BookingStep::Confirmed;
        assert_eq!(step.next(), None);
        assert_eq!(step.previous(), None);

        let step = BookingStep::Summary;
        assert_eq!(step.next(), Some(BookingStep::Confirmed));
        assert_eq!(step.previous(), Some(BookingStep::Contact));
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(BookingStep::Service.number(), 1);
        assert_eq!(BookingStep::Summary.number(), 4);
        assert_eq!(BookingStep::Confirmed.number(), 5);
        assert_eq!(BookingStep::total(), 5);
    }

    #[test]
    fn test_progress_hidden_once_confirmed() {
        assert!(BookingStep::Service.shows_progress());
        assert!(BookingStep::Summary.shows_progress());
        assert!(!BookingStep::Confirmed.shows_progress());
    }

    #[test]
    fn test_cannot_advance_without_a_service() {
        let mut state = state_with_catalog();
        assert!(!state.advance());
        assert_eq!(state.current_step, BookingStep::Service);

        state.select_service_at_cursor();
        assert!(state.advance());
        assert_eq!(state.current_step, BookingStep::Schedule);
    }

    #[test]
    fn test_service_grid_cursor_stays_in_bounds() {
        let mut state = state_with_catalog();
        state.move_service_cursor_left();
        assert_eq!(state.service_cursor, 0);
        state.move_service_cursor_right();
        assert_eq!(state.service_cursor, 1);
        state.move_service_cursor_right();
        assert_eq!(state.service_cursor, 1);
        state.move_service_cursor_down();
        assert_eq!(state.service_cursor, 3);
        state.move_service_cursor_down();
        assert_eq!(state.service_cursor, 3);
        state.move_service_cursor_up();
        assert_eq!(state.service_cursor, 1);
    }

    #[test]
    fn test_selecting_a_date_loads_slots_and_clears_old_slot() {
        let mut state = state_with_catalog();
        state.select_service_at_cursor();
        let mut source = FixedSlots(candidate_slots());

        state
            .select_date(today(), &mut source)
            .expect("slots load");
        assert_eq!(state.slots.len(), 18);
        assert_eq!(state.schedule_focus, ScheduleFocus::Slots);

        state.slot_cursor = 2;
        state.select_slot_at_cursor();
        assert!(state.selected_slot.is_some());

        let tomorrow = today().succ_opt().expect("valid date");
        state
            .select_date(tomorrow, &mut source)
            .expect("slots load");
        assert_eq!(state.selected_date, Some(tomorrow));
        assert_eq!(state.selected_slot, None);
        assert_eq!(state.slot_cursor, 0);
    }

    #[test]
    fn test_past_dates_never_select() {
        let mut state = state_with_catalog();
        state.select_service_at_cursor();
        let mut source = FixedSlots(candidate_slots());

        let yesterday = today().pred_opt().expect("valid date");
        state
            .select_date(yesterday, &mut source)
            .expect("no-op is fine");
        assert_eq!(state.selected_date, None);
        assert!(state.slots.is_empty());
    }

    #[test]
    fn test_slot_load_failure_reports_and_leaves_no_slots() {
        let mut state = state_with_catalog();
        state.select_service_at_cursor();
        let mut source = BrokenSource;

        let err = state
            .select_date(today(), &mut source)
            .expect_err("source fails");
        assert_eq!(err, "Could not load available times: backend is down");
        assert!(state.slots.is_empty());
        assert_eq!(state.selected_slot, None);
    }

    #[test]
    fn test_schedule_guard_needs_date_and_slot() {
        let mut state = state_with_catalog();
        state.select_service_at_cursor();
        state.advance();
        assert!(!state.advance());

        let mut source = FixedSlots(candidate_slots());
        state.select_date(today(), &mut source).expect("slots load");
        assert!(!state.advance());

        state.select_slot_at_cursor();
        assert!(state.advance());
        assert_eq!(state.current_step, BookingStep::Contact);
    }

    #[test]
    fn test_contact_guard_runs_validation() {
        let mut state = complete_to_contact();
        assert!(!state.advance());

        for c in "Ana Martins".chars() {
            state.contact.input_char(c);
        }
        assert!(!state.advance());

        state.contact.focus_next();
        for c in "ana@studio.example".chars() {
            state.contact.input_char(c);
        }
        assert!(state.advance());
        assert_eq!(state.current_step, BookingStep::Summary);
    }

    #[test]
    fn test_contact_form_editing_keeps_cursor_on_char_boundaries() {
        let mut form = ContactForm::new();
        form.input_char('J');
        form.input_char('o');
        form.input_char('ã');
        form.input_char('o');
        assert_eq!(form.name, "João");

        form.backspace();
        form.backspace();
        assert_eq!(form.name, "Jo");

        form.cursor_left();
        form.input_char('e');
        assert_eq!(form.name, "Jeo");
        form.cursor_home();
        form.delete();
        assert_eq!(form.name, "eo");
    }

    #[test]
    fn test_double_submission_is_a_noop() {
        let mut state = complete_to_summary();
        let first = state.begin_submission();
        assert!(first.is_some());
        assert!(state.submission_in_flight);

        let second = state.begin_submission();
        assert!(second.is_none());
        assert!(state.submission_in_flight);
    }

    #[test]
    fn test_submission_failure_stays_on_summary_with_modal() {
        let mut state = complete_to_summary();
        state.begin_submission().expect("request builds");
        state.submission_failed("Slot no longer available".to_string());

        assert_eq!(state.current_step, BookingStep::Summary);
        assert_eq!(state.error.as_deref(), Some("Slot no longer available"));
        assert!(!state.submission_in_flight);

        // The guard releases so the booking can be retried
        assert!(state.begin_submission().is_some());
    }

    #[test]
    fn test_successful_submission_confirms_and_is_terminal() {
        let mut state = complete_to_summary();
        state.begin_submission().expect("request builds");
        state.submission_succeeded(42);

        assert_eq!(state.current_step, BookingStep::Confirmed);
        assert_eq!(state.confirmed_booking_id, Some(42));
        assert!(!state.submission_in_flight);
        assert!(!state.go_back());
        assert!(!state.advance());
    }

    #[test]
    fn test_going_back_keeps_selections() {
        let mut state = complete_to_summary();
        state.go_back();
        state.go_back();
        assert_eq!(state.current_step, BookingStep::Schedule);
        assert!(state.selected_service.is_some());
        assert!(state.selected_date.is_some());
        assert!(state.selected_slot.is_some());
    }

    #[test]
    fn test_end_time_is_derived_from_duration() {
        let state = complete_to_summary();
        let (start, end) = state.booking_window().expect("window exists");
        assert_eq!(start.to_string(), "2025-06-16 10:00:00");
        assert_eq!(end.to_string(), "2025-06-16 11:00:00");
    }

    #[test]
    fn test_reset_keeps_the_catalog() {
        let mut state = complete_to_summary();
        state.submission_succeeded(7);
        state.reset_for_new_booking();

        assert_eq!(state.current_step, BookingStep::Service);
        assert_eq!(state.services.len(), 4);
        assert_eq!(state.selected_service, None);
        assert_eq!(state.confirmed_booking_id, None);
    }

    fn complete_to_contact() -> WizardState {
        let mut state = state_with_catalog();
        state.select_service_at_cursor();
        state.advance();
        let mut source = FixedSlots(candidate_slots());
        state.select_date(today(), &mut source).expect("slots load");
        state.slot_cursor = 2; // 10:00 AM
        state.select_slot_at_cursor();
        state.advance();
        state
    }

    fn complete_to_summary() -> WizardState {
        let mut state = complete_to_contact();
        for c in "Ana Martins".chars() {
            state.contact.input_char(c);
        }
        state.contact.focus_next();
        for c in "ana@studio.example".chars() {
            state.contact.input_char(c);
        }
        state.advance();
        state
    }
}

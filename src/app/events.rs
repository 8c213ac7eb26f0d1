// ABOUTME: Event handling system for keyboard input and app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::app::state::{AppState, View};
use crate::components::home::HomeMenuEntry;
use crate::components::wizard::{BookingStep, ScheduleFocus, SLOT_GRID_COLUMNS};

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    DismissError,
    ToggleAuth,
    // Home screen
    MenuUp,
    MenuDown,
    MenuActivate,
    ShowcasesNext,
    ShowcasesPrevious,
    // Wizard, any step
    WizardBack,
    // Choose a Service
    ServiceLeft,
    ServiceRight,
    ServiceUp,
    ServiceDown,
    ServicePick,
    // Date & Time
    CalendarMove(i32),
    MonthPrevious,
    MonthNext,
    ScheduleFocusToggle,
    DatePick,
    SlotMove(i32),
    SlotPick,
    // Your Details
    ContactInput(char),
    ContactBackspace,
    ContactDelete,
    ContactCursorLeft,
    ContactCursorRight,
    ContactCursorHome,
    ContactCursorEnd,
    ContactNextField,
    ContactPreviousField,
    ContactSubmit,
    // Review & Confirm
    ConfirmBooking,
    // Booking Confirmed
    FinishBooking,
}

pub struct EventHandler;

impl EventHandler {
    /// Translate a key press into an app event for the current state.
    /// Overlays take priority over the active view.
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Ctrl+C always quits
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(AppEvent::Quit);
        }

        // Error modal first (highest priority)
        if state.wizard.error.is_some() {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc => Some(AppEvent::DismissError),
                _ => None,
            };
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        // A submission in flight swallows input until it resolves
        if state.wizard.submission_in_flight {
            return None;
        }

        match state.current_view {
            View::Home => Self::handle_home_keys(key_event),
            View::Booking => Self::handle_wizard_keys(key_event, state),
        }
    }

    fn handle_home_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('l') => Some(AppEvent::ToggleAuth),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::MenuUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::MenuDown),
            KeyCode::Left => Some(AppEvent::ShowcasesPrevious),
            KeyCode::Right => Some(AppEvent::ShowcasesNext),
            KeyCode::Enter => Some(AppEvent::MenuActivate),
            _ => None,
        }
    }

    fn handle_wizard_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Text entry consumes printable keys, so the contact step routes first
        if state.wizard.current_step == BookingStep::Contact {
            return Self::handle_contact_keys(key_event);
        }

        match key_event.code {
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Esc => Some(AppEvent::WizardBack),
            _ => match state.wizard.current_step {
                BookingStep::Service => Self::handle_service_keys(key_event),
                BookingStep::Schedule => Self::handle_schedule_keys(key_event, state),
                BookingStep::Contact => unreachable!("contact keys handled above"),
                BookingStep::Summary => match key_event.code {
                    KeyCode::Enter => Some(AppEvent::ConfirmBooking),
                    _ => None,
                },
                BookingStep::Confirmed => match key_event.code {
                    KeyCode::Enter => Some(AppEvent::FinishBooking),
                    _ => None,
                },
            },
        }
    }

    fn handle_service_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::ServiceLeft),
            KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::ServiceRight),
            KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::ServiceUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::ServiceDown),
            KeyCode::Enter => Some(AppEvent::ServicePick),
            _ => None,
        }
    }

    fn handle_schedule_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        // Month paging works from either pane
        match key_event.code {
            KeyCode::Char('[') | KeyCode::PageUp => return Some(AppEvent::MonthPrevious),
            KeyCode::Char(']') | KeyCode::PageDown => return Some(AppEvent::MonthNext),
            KeyCode::Tab => return Some(AppEvent::ScheduleFocusToggle),
            _ => {}
        }

        match state.wizard.schedule_focus {
            ScheduleFocus::Calendar => match key_event.code {
                KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::CalendarMove(-1)),
                KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::CalendarMove(1)),
                KeyCode::Up | KeyCode::Char('k') => Some(AppEvent::CalendarMove(-7)),
                KeyCode::Down | KeyCode::Char('j') => Some(AppEvent::CalendarMove(7)),
                KeyCode::Enter => Some(AppEvent::DatePick),
                _ => None,
            },
            ScheduleFocus::Slots => match key_event.code {
                KeyCode::Left | KeyCode::Char('h') => Some(AppEvent::SlotMove(-1)),
                KeyCode::Right | KeyCode::Char('l') => Some(AppEvent::SlotMove(1)),
                KeyCode::Up | KeyCode::Char('k') => {
                    Some(AppEvent::SlotMove(-(SLOT_GRID_COLUMNS as i32)))
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    Some(AppEvent::SlotMove(SLOT_GRID_COLUMNS as i32))
                }
                KeyCode::Enter => Some(AppEvent::SlotPick),
                _ => None,
            },
        }
    }

    fn handle_contact_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::WizardBack),
            KeyCode::Enter => Some(AppEvent::ContactSubmit),
            KeyCode::Tab => Some(AppEvent::ContactNextField),
            KeyCode::BackTab => Some(AppEvent::ContactPreviousField),
            KeyCode::Up => Some(AppEvent::ContactPreviousField),
            KeyCode::Down => Some(AppEvent::ContactNextField),
            KeyCode::Backspace => Some(AppEvent::ContactBackspace),
            KeyCode::Delete => Some(AppEvent::ContactDelete),
            KeyCode::Left => Some(AppEvent::ContactCursorLeft),
            KeyCode::Right => Some(AppEvent::ContactCursorRight),
            KeyCode::Home => Some(AppEvent::ContactCursorHome),
            KeyCode::End => Some(AppEvent::ContactCursorEnd),
            KeyCode::Char(c) => Some(AppEvent::ContactInput(c)),
            _ => None,
        }
    }

    /// Apply an event to the state
    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!("Processing event: {:?}", event);
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,
            AppEvent::DismissError => state.wizard.dismiss_error(),
            AppEvent::ToggleAuth => state.toggle_auth(),

            AppEvent::MenuUp => state.home.menu_up(),
            AppEvent::MenuDown => state.home.menu_down(),
            AppEvent::MenuActivate => match state.home.selected_entry() {
                HomeMenuEntry::BookAppointment | HomeMenuEntry::BrowseServices => {
                    state.open_booking();
                }
                HomeMenuEntry::Quit => state.should_quit = true,
            },
            AppEvent::ShowcasesNext => state.home.rotate_showcases_next(),
            AppEvent::ShowcasesPrevious => state.home.rotate_showcases_previous(),

            AppEvent::WizardBack => {
                if !state.wizard.go_back() {
                    state.return_home();
                }
            }

            AppEvent::ServiceLeft => state.wizard.move_service_cursor_left(),
            AppEvent::ServiceRight => state.wizard.move_service_cursor_right(),
            AppEvent::ServiceUp => state.wizard.move_service_cursor_up(),
            AppEvent::ServiceDown => state.wizard.move_service_cursor_down(),
            AppEvent::ServicePick => {
                state.wizard.select_service_at_cursor();
                state.wizard.advance();
            }

            AppEvent::CalendarMove(delta) => state.wizard.move_calendar_cursor(delta),
            AppEvent::MonthPrevious => state.wizard.month_previous(),
            AppEvent::MonthNext => state.wizard.month_next(),
            AppEvent::ScheduleFocusToggle => {
                state.wizard.schedule_focus = match state.wizard.schedule_focus {
                    ScheduleFocus::Calendar => ScheduleFocus::Slots,
                    ScheduleFocus::Slots => ScheduleFocus::Calendar,
                };
            }
            AppEvent::DatePick => state.select_cursor_date(),
            AppEvent::SlotMove(delta) => state.wizard.move_slot_cursor(delta),
            AppEvent::SlotPick => {
                state.wizard.select_slot_at_cursor();
                state.wizard.advance();
            }

            AppEvent::ContactInput(c) => state.wizard.contact.input_char(c),
            AppEvent::ContactBackspace => state.wizard.contact.backspace(),
            AppEvent::ContactDelete => state.wizard.contact.delete(),
            AppEvent::ContactCursorLeft => state.wizard.contact.cursor_left(),
            AppEvent::ContactCursorRight => state.wizard.contact.cursor_right(),
            AppEvent::ContactCursorHome => state.wizard.contact.cursor_home(),
            AppEvent::ContactCursorEnd => state.wizard.contact.cursor_end(),
            AppEvent::ContactNextField => state.wizard.contact.focus_next(),
            AppEvent::ContactPreviousField => state.wizard.contact.focus_previous(),
            AppEvent::ContactSubmit => {
                // Failed validation surfaces the field's message instead
                match state.wizard.contact.validate() {
                    Ok(()) => {
                        state.wizard.advance();
                    }
                    Err(e) => state.wizard.show_error(e.to_string()),
                }
            }

            AppEvent::ConfirmBooking => state.confirm_booking(),
            AppEvent::FinishBooking => {
                state.wizard.reset_for_new_booking();
                state.return_home();
            }
        }
        state.ui_needs_refresh = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fallback_catalog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn booking_state() -> AppState {
        let mut state = AppState::new();
        state.current_view = View::Booking;
        state.wizard.set_services(fallback_catalog());
        state
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let state = AppState::new();
        let event = EventHandler::handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &state,
        );
        assert_eq!(event, Some(AppEvent::Quit));
    }

    #[test]
    fn test_error_modal_swallows_other_keys() {
        let mut state = booking_state();
        state.wizard.show_error("boom");
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Enter), &state),
            Some(AppEvent::DismissError)
        );
        assert_eq!(EventHandler::handle_key_event(key(KeyCode::Char('x')), &state), None);
    }

    #[test]
    fn test_submission_in_flight_swallows_input() {
        let mut state = booking_state();
        state.wizard.submission_in_flight = true;
        assert_eq!(EventHandler::handle_key_event(key(KeyCode::Enter), &state), None);
        assert_eq!(EventHandler::handle_key_event(key(KeyCode::Char('q')), &state), None);
    }

    #[test]
    fn test_question_mark_types_into_contact_form() {
        let mut state = booking_state();
        state.wizard.go_to_step(BookingStep::Contact);
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('?')), &state),
            Some(AppEvent::ContactInput('?'))
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('q')), &state),
            Some(AppEvent::ContactInput('q'))
        );
    }

    #[test]
    fn test_enter_on_service_card_selects_and_advances() {
        let mut state = booking_state();
        let event =
            EventHandler::handle_key_event(key(KeyCode::Enter), &state).expect("event expected");
        EventHandler::process_event(event, &mut state);
        assert_eq!(state.wizard.current_step, BookingStep::Schedule);
        assert!(state.wizard.selected_service.is_some());
    }

    #[test]
    fn test_escape_from_first_step_returns_home() {
        let mut state = booking_state();
        let event =
            EventHandler::handle_key_event(key(KeyCode::Esc), &state).expect("event expected");
        EventHandler::process_event(event, &mut state);
        assert_eq!(state.current_view, View::Home);
    }

    #[test]
    fn test_invalid_contact_submit_opens_error_modal() {
        let mut state = booking_state();
        state.wizard.go_to_step(BookingStep::Contact);
        EventHandler::process_event(AppEvent::ContactSubmit, &mut state);
        assert_eq!(
            state.wizard.error.as_deref(),
            Some("Please enter your full name.")
        );
        assert_eq!(state.wizard.current_step, BookingStep::Contact);
    }

    #[test]
    fn test_month_keys_page_the_calendar() {
        let mut state = booking_state();
        state.wizard.go_to_step(BookingStep::Schedule);
        let before = state.wizard.month;
        EventHandler::process_event(AppEvent::MonthNext, &mut state);
        assert_eq!(state.wizard.month, before.next());
        EventHandler::process_event(AppEvent::MonthPrevious, &mut state);
        assert_eq!(state.wizard.month, before);
    }
}

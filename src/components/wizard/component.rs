// ABOUTME: Renders the five booking wizard steps
// Step-based wizard UI following premium TUI style guide

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::state::{
    BookingStep, ContactField, ScheduleFocus, WizardState, SERVICE_GRID_COLUMNS,
    SLOT_GRID_COLUMNS,
};
use crate::booking::{classify_day, format_long_date, format_time_range, DayStatus};
use crate::config::StudioConfig;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// The booking wizard component
pub struct WizardComponent;

impl WizardComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &WizardState, studio: &StudioConfig) {
        // Clear background
        frame.render_widget(Clear, area);
        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        if state.current_step.shows_progress() {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5), // Header with progress
                    Constraint::Min(15),   // Step content
                    Constraint::Length(3), // Key hints
                ])
                .split(area);

            self.render_header(frame, layout[0], state);
            self.render_step_content(frame, layout[1], state, studio);
            self.render_hints(frame, layout[2], state);
        } else {
            // Confirmed: the progress indicator is gone for good
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(15), Constraint::Length(3)])
                .split(area);

            self.render_step_content(frame, layout[0], state, studio);
            self.render_hints(frame, layout[1], state);
        }
    }

    /// Render the header with step progress
    fn render_header(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Progress indicator
            ])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("🌸 ", Style::default()),
            Span::styled(
                "Book Your Session",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  —  {}", state.current_step.description()),
                Style::default().fg(MUTED_GRAY),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        self.render_progress(frame, header_layout[1], state);
    }

    /// Render step progress dots
    fn render_progress(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let steps: Vec<BookingStep> = BookingStep::all()
            .iter()
            .copied()
            .filter(BookingStep::shows_progress)
            .collect();
        let current_idx = state.current_step.number() - 1;

        let mut spans = vec![Span::styled("  ", Style::default())];

        for (idx, step) in steps.iter().enumerate() {
            let (icon, style) = if idx < current_idx {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if idx == current_idx {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };

            spans.push(Span::styled(icon, style));
            spans.push(Span::styled(" ", Style::default()));
            spans.push(Span::styled(
                step.title(),
                if idx == current_idx {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));

            if idx < steps.len() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, area);
    }

    /// Render the main step content
    fn render_step_content(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &WizardState,
        studio: &StudioConfig,
    ) {
        match state.current_step {
            BookingStep::Service => self.render_services(frame, area, state),
            BookingStep::Schedule => self.render_schedule(frame, area, state),
            BookingStep::Contact => self.render_contact(frame, area, state),
            BookingStep::Summary => self.render_summary(frame, area, state),
            BookingStep::Confirmed => self.render_confirmed(frame, area, state, studio),
        }
    }

    /// Render the service card grid
    fn render_services(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Our Services ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.services.is_empty() {
            let loading = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Loading services...",
                    Style::default().fg(MUTED_GRAY),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(loading, inner);
            return;
        }

        let rows = state.services.len().div_ceil(SERVICE_GRID_COLUMNS);
        let row_constraints: Vec<Constraint> = (0..rows).map(|_| Constraint::Length(7)).collect();
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(row_constraints)
            .split(inner);

        for (row_idx, row_area) in row_areas.iter().enumerate() {
            let col_areas = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row_area);

            for col_idx in 0..SERVICE_GRID_COLUMNS {
                let service_idx = row_idx * SERVICE_GRID_COLUMNS + col_idx;
                let Some(service) = state.services.get(service_idx) else {
                    continue;
                };

                let selected = state.is_service_selected(service);
                let highlighted = state.service_cursor == service_idx;
                let border_style = if selected {
                    Style::default().fg(SELECTION_GREEN)
                } else if highlighted {
                    Style::default().fg(GOLD)
                } else {
                    Style::default().fg(SUBDUED_BORDER)
                };

                let card = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .style(Style::default().bg(PANEL_BG))
                    .title(format!(" {} {} ", service.icon.glyph(), service.name))
                    .title_style(Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD));

                let card_inner = card.inner(*col_areas.get(col_idx).unwrap_or(row_area));
                frame.render_widget(card, *col_areas.get(col_idx).unwrap_or(row_area));

                let mut lines = vec![
                    Line::from(Span::styled(
                        service.description.clone(),
                        Style::default().fg(MUTED_GRAY),
                    )),
                    Line::from(vec![
                        Span::styled("⏱ ", Style::default().fg(CORNFLOWER_BLUE)),
                        Span::styled(service.duration_label(), Style::default().fg(SOFT_WHITE)),
                        Span::styled("   ", Style::default()),
                        Span::styled(
                            service.price_label(),
                            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                ];
                if selected {
                    lines.push(Line::from(Span::styled(
                        "✓ Selected",
                        Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
                    )));
                }

                let body = Paragraph::new(lines).wrap(Wrap { trim: true });
                frame.render_widget(body, card_inner);
            }
        }
    }

    /// Render the calendar next to the open time slots
    fn render_schedule(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        self.render_calendar(frame, panes[0], state);
        self.render_slots(frame, panes[1], state);
    }

    fn render_calendar(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let focused = state.schedule_focus == ScheduleFocus::Calendar;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { GOLD } else { CORNFLOWER_BLUE }))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" ◀ {} ▶ ", state.month.title()))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                WEEKDAY_HEADER,
                Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
            )),
        ];

        // Leading blanks, then one cell per day, chunked into weeks
        let offset = state.month.first_weekday_offset();
        let days = state.month.days_in_month();
        let mut cells: Vec<Span> = (0..offset)
            .map(|_| Span::styled("    ", Style::default()))
            .collect();

        for day in 1..=days {
            let Some(date) = state.month.date(day) else {
                continue;
            };
            let status = classify_day(date, state.today);
            let selected = state.selected_date == Some(date);
            let under_cursor = focused && state.cursor_day == day;

            let mut style = match status {
                DayStatus::Past => Style::default().fg(SUBDUED_BORDER),
                DayStatus::Today => Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                DayStatus::Upcoming => Style::default().fg(SOFT_WHITE),
            };
            if selected {
                style = Style::default()
                    .fg(DARK_BG)
                    .bg(SELECTION_GREEN)
                    .add_modifier(Modifier::BOLD);
            }
            if under_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let marker = if status == DayStatus::Today { "•" } else { " " };
            cells.push(Span::styled(format!("{day:>3}{marker}"), style));

            if cells.len() == 7 {
                lines.push(Line::from(std::mem::take(&mut cells)));
            }
        }
        if !cells.is_empty() {
            lines.push(Line::from(cells));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "• today    dimmed days are past",
            Style::default().fg(MUTED_GRAY),
        )));

        let calendar = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(calendar, inner);
    }

    fn render_slots(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let focused = state.schedule_focus == ScheduleFocus::Slots;
        let title = match state.selected_date {
            Some(date) => format!(" Times — {} ", date.format("%a, %b %-d")),
            None => " Available Times ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { GOLD } else { CORNFLOWER_BLUE }))
            .style(Style::default().bg(PANEL_BG))
            .title(title)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.selected_date.is_none() {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Pick a date to see open times",
                    Style::default().fg(MUTED_GRAY),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
            return;
        }

        if state.slots.is_empty() {
            let empty = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No open times on this day",
                    Style::default().fg(MUTED_GRAY),
                )),
                Line::from(Span::styled(
                    "Try another date",
                    Style::default().fg(MUTED_GRAY),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let mut lines = vec![Line::from("")];
        for (row_idx, row) in state.slots.chunks(SLOT_GRID_COLUMNS).enumerate() {
            let mut spans = Vec::new();
            for (col_idx, slot) in row.iter().enumerate() {
                let slot_idx = row_idx * SLOT_GRID_COLUMNS + col_idx;
                let selected = state.is_slot_selected(*slot);
                let under_cursor = focused && state.slot_cursor == slot_idx;

                let mut style = Style::default().fg(SOFT_WHITE);
                if selected {
                    style = Style::default()
                        .fg(DARK_BG)
                        .bg(SELECTION_GREEN)
                        .add_modifier(Modifier::BOLD);
                }
                if under_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }

                spans.push(Span::styled(format!(" {:>8} ", slot.label()), style));
                spans.push(Span::styled(" ", Style::default()));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        let grid = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(grid, inner);
    }

    /// Render the contact details form
    fn render_contact(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Your Details ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let field_areas = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(inner);

        for (idx, field) in ContactField::all().iter().enumerate() {
            let focused = state.contact.focused == *field;
            let value = state.contact.value(*field);

            let text = if focused && state.show_cursor {
                let (before, after) = value.split_at(state.contact.cursor);
                format!("{before}│{after}")
            } else {
                value.to_string()
            };

            let input = Paragraph::new(text)
                .style(Style::default().fg(SOFT_WHITE))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(if focused {
                            GOLD
                        } else {
                            SUBDUED_BORDER
                        }))
                        .style(Style::default().bg(DARK_BG))
                        .title(format!(" {} ", field.label()))
                        .title_style(Style::default().fg(if focused {
                            GOLD
                        } else {
                            MUTED_GRAY
                        })),
                );
            if let Some(field_area) = field_areas.get(idx) {
                frame.render_widget(input, *field_area);
            }
        }
    }

    /// Render the review screen
    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Booking Summary ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from("")];
        for (label, value) in state.summary_rows() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{label:>18}:  "),
                    Style::default().fg(GOLD),
                ),
                Span::styled(value, Style::default().fg(SOFT_WHITE)),
            ]));
            lines.push(Line::from(""));
        }

        if state.submission_in_flight {
            lines.push(Line::from(Span::styled(
                "Submitting your booking...",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )));
        }

        let summary = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(summary, inner);
    }

    /// Render the confirmation screen; the wizard is terminal here
    fn render_confirmed(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &WizardState,
        studio: &StudioConfig,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SELECTION_GREEN))
            .style(Style::default().bg(PANEL_BG))
            .title(" Booking Confirmed ")
            .title_style(Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "✅ Booking Confirmed!",
                Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Thank you for booking with us. A confirmation email is on its way.",
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(""),
        ];

        if let Some(service) = state.selected_service.as_ref() {
            lines.push(detail_line("Service", &service.name));
        }
        if let Some(date) = state.selected_date {
            lines.push(detail_line("Date", &format_long_date(date)));
        }
        if let Some((start, end)) = state.booking_window() {
            lines.push(detail_line(
                "Time",
                &format_time_range(start.time(), end.time()),
            ));
        }
        lines.push(detail_line("Location", &studio.location));
        if let Some(id) = state.confirmed_booking_id {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Booking reference #{id}"),
                Style::default().fg(MUTED_GRAY),
            )));
        }

        let confirmation = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(confirmation, inner);
    }

    /// Render contextual key hints for the current step
    fn render_hints(&self, frame: &mut Frame, area: Rect, state: &WizardState) {
        let hints: &[(&str, &str)] = match state.current_step {
            BookingStep::Service => &[
                ("↑↓←→", "choose"),
                ("Enter", "select / continue"),
                ("Esc", "home"),
            ],
            BookingStep::Schedule => match state.schedule_focus {
                ScheduleFocus::Calendar => &[
                    ("↑↓←→", "move day"),
                    ("[ ]", "month"),
                    ("Enter", "pick date"),
                    ("Tab", "times"),
                    ("Esc", "back"),
                ],
                ScheduleFocus::Slots => &[
                    ("↑↓←→", "move"),
                    ("Enter", "pick time / continue"),
                    ("Tab", "calendar"),
                    ("Esc", "back"),
                ],
            },
            BookingStep::Contact => &[
                ("Tab", "next field"),
                ("Enter", "continue"),
                ("Esc", "back"),
            ],
            BookingStep::Summary => &[("Enter", "confirm booking"), ("Esc", "back")],
            BookingStep::Confirmed => &[("Enter", "back to home"), ("q", "quit")],
        };

        let mut spans = Vec::new();
        for (idx, (key, label)) in hints.iter().enumerate() {
            spans.push(Span::styled(*key, Style::default().fg(GOLD)));
            spans.push(Span::styled(
                format!(" {label}"),
                Style::default().fg(MUTED_GRAY),
            ));
            if idx < hints.len() - 1 {
                spans.push(Span::styled("  •  ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(bar, area);
    }
}

impl Default for WizardComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn detail_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(MUTED_GRAY)),
        Span::styled(
            value.to_string(),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ),
    ])
}

// ABOUTME: Main layout component dispatching views and drawing the status bar

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

// Premium color palette (TUI Style Guide)
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

use super::{ErrorModalComponent, HelpComponent, HomeComponent, WizardComponent};
use crate::app::state::{AppState, NotificationType, View};

pub struct LayoutComponent {
    home: HomeComponent,
    wizard: WizardComponent,
    help: HelpComponent,
    error_modal: ErrorModalComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            home: HomeComponent::new(),
            wizard: WizardComponent::new(),
            help: HelpComponent::new(),
            error_modal: ErrorModalComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Active view
                Constraint::Length(3), // Status bar
            ])
            .split(frame.size());

        match state.current_view {
            View::Home => self.home.render(
                frame,
                main_layout[0],
                &state.home,
                &state.services,
                &state.config.studio,
            ),
            View::Booking => self.wizard.render(
                frame,
                main_layout[0],
                &state.wizard,
                &state.config.studio,
            ),
        }

        self.render_status_bar(frame, main_layout[1], state);

        // Overlays, back to front: error modal, then help on top
        if let Some(message) = state.wizard.error.as_deref() {
            self.error_modal.render(frame, frame.size(), message);
        }
        if state.help_visible {
            self.help.render(frame, frame.size());
        }

        self.render_notifications(frame, frame.size(), state);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut status_spans: Vec<Span> = vec![
            Span::styled("🌸 ", Style::default().fg(GOLD)),
            Span::styled(
                state.config.studio.name.clone(),
                Style::default().fg(SOFT_WHITE),
            ),
            Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("📍 ", Style::default().fg(CORNFLOWER_BLUE)),
            Span::styled(
                state.config.studio.location.clone(),
                Style::default().fg(MUTED_GRAY),
            ),
        ];

        status_spans.push(Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)));
        status_spans.push(Span::styled(
            "l ",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ));
        status_spans.push(Span::styled(
            state.auth_label(),
            Style::default().fg(if state.logged_in {
                SELECTION_GREEN
            } else {
                MUTED_GRAY
            }),
        ));

        if state.services_loading {
            status_spans.push(Span::styled("  │  ", Style::default().fg(SUBDUED_BORDER)));
            status_spans.push(Span::styled(
                "⏳ Loading services...",
                Style::default().fg(WARNING_ORANGE),
            ));
        }

        let status = Paragraph::new(Line::from(status_spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(CORNFLOWER_BLUE))
                    .style(Style::default().bg(DARK_BG)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(status, area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = &state.notifications;
        if notifications.is_empty() {
            return;
        }

        // Top-right corner, newest first, three lines each
        let notification_width = 50;
        let notification_height = notifications.len() as u16 * 3;

        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: notification_height.min(area.height.saturating_sub(2)),
        };

        for (i, notification) in notifications.iter().enumerate() {
            let y_offset = i as u16 * 3;
            if y_offset >= notification_area.height {
                break;
            }

            let single_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 3.min(notification_area.height - y_offset),
            };

            let (icon, color) = match notification.kind {
                NotificationType::Success => ("✓ ", SELECTION_GREEN),
                NotificationType::Error => ("✗ ", ERROR_RED),
                NotificationType::Warning => ("⚠ ", WARNING_ORANGE),
                NotificationType::Info => ("ℹ ", CORNFLOWER_BLUE),
            };

            let line = Line::from(vec![
                Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.message.as_str(), Style::default().fg(color)),
            ]);

            let widget = Paragraph::new(line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(PANEL_BG)),
                )
                .wrap(ratatui::widgets::Wrap { trim: true });

            frame.render_widget(widget, single_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

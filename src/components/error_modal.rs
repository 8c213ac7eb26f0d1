// ABOUTME: Modal overlay for booking errors, dismissable without losing wizard progress

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const ERROR_RED: Color = Color::Rgb(220, 80, 80);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const GOLD: Color = Color::Rgb(255, 215, 0);

pub struct ErrorModalComponent;

impl ErrorModalComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, message: &str) {
        let dialog_width = 64.min(area.width.saturating_sub(4));
        let dialog_height = 9.min(area.height.saturating_sub(2));

        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
            y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        // Clear only the dialog area so the step behind stays visible
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(" Something went wrong ")
            .title_style(Style::default().fg(ERROR_RED).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ERROR_RED))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let body = Paragraph::new(message)
            .style(Style::default().fg(SOFT_WHITE))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[0]);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(GOLD)),
            Span::styled(" or ", Style::default().fg(MUTED_GRAY)),
            Span::styled("Esc", Style::default().fg(GOLD)),
            Span::styled(" to dismiss", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }
}

impl Default for ErrorModalComponent {
    fn default() -> Self {
        Self::new()
    }
}

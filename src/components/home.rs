// ABOUTME: Home screen with studio banner, showcase carousels and main menu

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::carousel::Carousel;
use crate::booking::Service;
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

const HERO_TITLE: &str = "Holistic Therapy";
const HERO_SUBTITLE: &str = "Discover the power of integrated healing for your mind, body, and \
spirit. Our comprehensive approach combines traditional wisdom with modern techniques to help \
you achieve optimal wellness.";

/// Approved client quotes shown in the testimonial showcase
const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "The holistic approach here has completely transformed my life. I came in feeling \
stressed and overwhelmed, but now I feel balanced and at peace.",
        "Sarah Johnson",
        "Marketing Executive",
    ),
    (
        "I've tried many different therapies over the years, but nothing compares to the \
integrated healing approach here.",
        "Michael Chen",
        "Software Engineer",
    ),
    (
        "After struggling with anxiety for years, I finally found relief through the \
personalized treatment plan they created for me.",
        "Emily Rodriguez",
        "Teacher",
    ),
];

/// Entries in the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeMenuEntry {
    BookAppointment,
    BrowseServices,
    Quit,
}

impl HomeMenuEntry {
    pub fn all() -> &'static [HomeMenuEntry] {
        &[Self::BookAppointment, Self::BrowseServices, Self::Quit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BookAppointment => "Book an Appointment",
            Self::BrowseServices => "Browse Services",
            Self::Quit => "Quit",
        }
    }
}

/// State for the home screen
#[derive(Debug)]
pub struct HomeState {
    pub menu_cursor: usize,
    pub services_carousel: Carousel,
    pub testimonials_carousel: Carousel,
}

impl HomeState {
    pub fn new(rotation_interval: Duration) -> Self {
        Self {
            menu_cursor: 0,
            services_carousel: Carousel::new(0, rotation_interval),
            testimonials_carousel: Carousel::new(TESTIMONIALS.len(), rotation_interval),
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_cursor + 1 < HomeMenuEntry::all().len() {
            self.menu_cursor += 1;
        }
    }

    pub fn selected_entry(&self) -> HomeMenuEntry {
        HomeMenuEntry::all()[self.menu_cursor.min(HomeMenuEntry::all().len() - 1)]
    }

    /// Manual rotation turns both showcases together
    pub fn rotate_showcases_next(&mut self) {
        self.services_carousel.rotate_next();
        self.testimonials_carousel.rotate_next();
    }

    pub fn rotate_showcases_previous(&mut self) {
        self.services_carousel.rotate_previous();
        self.testimonials_carousel.rotate_previous();
    }

    /// Advance auto-rotation; true when something moved and a redraw is due
    pub fn tick(&mut self, now: Instant) -> bool {
        let services_moved = self.services_carousel.tick(now);
        let testimonials_moved = self.testimonials_carousel.tick(now);
        services_moved || testimonials_moved
    }

    pub fn set_service_count(&mut self, count: usize) {
        self.services_carousel.set_item_count(count);
    }
}

/// The home screen component
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &HomeState,
        services: &[Service],
        studio: &StudioConfig,
    ) {
        let container = Block::default().style(Style::default().bg(DARK_BG));
        frame.render_widget(container, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),  // Banner
                Constraint::Length(8),  // Services showcase
                Constraint::Length(8),  // Testimonials showcase
                Constraint::Min(6),     // Menu
            ])
            .split(area);

        self.render_banner(frame, layout[0], studio);
        self.render_services_showcase(frame, layout[1], state, services);
        self.render_testimonials(frame, layout[2], state);
        self.render_menu(frame, layout[3], state);
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect, studio: &StudioConfig) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {} ", studio.name))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("🌸 {HERO_TITLE} 🌸"),
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(HERO_SUBTITLE, Style::default().fg(MUTED_GRAY))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(banner, inner);
    }

    fn render_services_showcase(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &HomeState,
        services: &[Service],
    ) {
        let block = showcase_block(" Our Services ", &state.services_carousel);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if services.is_empty() {
            let loading = Paragraph::new(Line::from(Span::styled(
                "Loading services...",
                Style::default().fg(MUTED_GRAY),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(loading, inner);
            return;
        }

        let window = Carousel::window_for_width(area.width);
        let indices = state.services_carousel.visible_indices(window);
        let columns = column_areas(inner, indices.len());

        for (slot, idx) in indices.iter().enumerate() {
            let Some(service) = services.get(*idx) else {
                continue;
            };
            let Some(column) = columns.get(slot) else {
                continue;
            };

            let card = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{} {}", service.icon.glyph(), service.name),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    service.duration_label(),
                    Style::default().fg(MUTED_GRAY),
                )),
                Line::from(Span::styled(
                    service.price_label(),
                    Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(card, *column);
        }
    }

    fn render_testimonials(&self, frame: &mut Frame, area: Rect, state: &HomeState) {
        let block = showcase_block(" What Our Clients Say ", &state.testimonials_carousel);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let window = Carousel::window_for_width(area.width);
        let indices = state.testimonials_carousel.visible_indices(window);
        let columns = column_areas(inner, indices.len());

        for (slot, idx) in indices.iter().enumerate() {
            let Some((quote, name, title)) = TESTIMONIALS.get(*idx) else {
                continue;
            };
            let Some(column) = columns.get(slot) else {
                continue;
            };

            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    "★★★★★",
                    Style::default().fg(GOLD),
                )),
                Line::from(Span::styled(
                    format!("“{quote}”"),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::ITALIC),
                )),
                Line::from(Span::styled(
                    format!("— {name}, {title}"),
                    Style::default().fg(MUTED_GRAY),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(card, *column);
        }
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect, state: &HomeState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![Line::from("")];
        for (idx, entry) in HomeMenuEntry::all().iter().enumerate() {
            let selected = idx == state.menu_cursor;
            let line = if selected {
                Line::from(vec![
                    Span::styled("▶ ", Style::default().fg(SELECTION_GREEN)),
                    Span::styled(
                        entry.label(),
                        Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled("  ", Style::default()),
                    Span::styled(entry.label(), Style::default().fg(SOFT_WHITE)),
                ])
            };
            lines.push(line);
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "↑↓ menu  •  Enter open  •  ←→ showcases  •  l login/logout  •  ? help",
            Style::default().fg(MUTED_GRAY),
        )));

        let menu = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(menu, inner);
    }
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn showcase_block(title: &str, carousel: &Carousel) -> Block<'static> {
    let position = if carousel.item_count() > 0 {
        format!(" {}/{} ", carousel.index() + 1, carousel.item_count())
    } else {
        String::new()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SUBDUED_BORDER))
        .style(Style::default().bg(PANEL_BG))
        .title(title.to_string())
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(position).right_aligned())
}

fn column_areas(inner: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let share = 100 / count as u16;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Percentage(share)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints(constraints)
        .split(inner)
        .to_vec()
}

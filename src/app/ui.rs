//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use ratatui_image::StatefulImage;
use unicode_width::UnicodeWidthStr;

use super::animation::{Entrance, Fade, Spin};
use super::loader::RemoteData;
use super::state::{AppState, Mode, Screen};
use crate::theme::Palette;

/// Application icon
const ICON: &str = "🗂";

/// Main render function
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let palette = state.palette;

    // Set background
    let area = frame.area();
    let bg_block = Block::default().style(Style::default().bg(palette.bg));
    frame.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Top bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_top_bar(frame, state, chunks[0]);
    if matches!(state.screen, Screen::List) {
        render_list_screen(frame, state, chunks[1]);
    } else {
        render_detail_screen(frame, state, chunks[1]);
    }
    render_status_bar(frame, state, chunks[2]);

    // Modal dialogs
    match state.mode {
        Mode::Alert => render_alert(frame, state),
        Mode::Help => render_help_popup(frame, state),
        Mode::Normal => {}
    }
}

fn render_top_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let palette = state.palette;

    let (title, hint) = match &state.screen {
        Screen::List => {
            // Collection title only appears once the data is in
            let title = match state.list.state() {
                RemoteData::Ready { payload, .. } => payload.title.clone(),
                _ => String::new(),
            };
            (title, "[r] Refresh")
        }
        Screen::Detail { item } => (item.name.clone(), "[Esc] Back"),
    };

    let bar = Paragraph::new(Line::from(Span::styled(
        title,
        palette.top_bar_title(),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(palette.top_bar())
            .title(format!(" {ICON} Vetrina ")),
    );
    frame.render_widget(bar, area);

    let hint_line = Paragraph::new(Line::from(Span::styled(
        format!("{hint} "),
        palette.top_bar(),
    )))
    .alignment(Alignment::Right);
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(hint_line, inner);
}

fn render_list_screen(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let palette = state.palette;

    if let Some(elapsed) = state.list.loading_elapsed() {
        render_loading(frame, &palette, area, elapsed);
        return;
    }
    if let Some(message) = state.list.error_message() {
        let message = message.to_string();
        render_error(frame, &palette, area, "Failed to load data", &message);
        return;
    }

    let entrance = state
        .list
        .entrance_elapsed()
        .unwrap_or(Entrance::DURATION);
    let area = entrance_area(area, entrance);
    let fade = Entrance::fade(entrance);

    // Layout: [Items] [Preview]
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_item_cards(frame, state, horizontal[0], fade);
    render_preview(frame, state, horizontal[1]);
}

fn render_item_cards(frame: &mut Frame, state: &AppState, area: Rect, fade: Fade) {
    let palette = state.palette;

    let block = Block::default()
        .title(" Items ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.block());

    let Some(category) = state.list.payload() else {
        return;
    };

    if category.items.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled("  No items in this collection", palette.text_muted()),
            Line::from(vec![
                Span::styled("  Press ", palette.text_dim()),
                Span::styled("[r]", palette.key_hint()),
                Span::styled(" to fetch another", palette.text_dim()),
            ]),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let card_items: Vec<ListItem> = category
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == state.selected;
            let marker = if is_selected { "▌" } else { " " };
            let label = format!("{marker} {}", item.name);
            let pad = width.saturating_sub(label.width());
            let text = format!("{label}{:pad$}", "");

            // Cards materialize through the entrance fade: muted text first,
            // then the dimmed card color, then full color.
            let style = match fade {
                Fade::Faint => palette.text_muted(),
                Fade::Dim => Style::default()
                    .bg(item.card_color())
                    .fg(item.text_color())
                    .add_modifier(Modifier::DIM),
                Fade::Full => {
                    let style = Style::default().bg(item.card_color()).fg(item.text_color());
                    if is_selected {
                        style.add_modifier(Modifier::BOLD)
                    } else {
                        style
                    }
                }
            };

            ListItem::new(vec![Line::styled(text, style), Line::from("")])
        })
        .collect();

    let list = List::new(card_items).block(block);
    frame.render_widget(list, area);
}

fn render_preview(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let palette = state.palette;

    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.block());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(path) = state
        .selected_item()
        .and_then(|item| item.image_path())
        .map(str::to_string)
    else {
        let placeholder =
            Paragraph::new(Line::styled("No image", palette.text_muted())).alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    };

    if !state.config.show_images {
        return;
    }

    if let Some(protocol) = state.image_protocol(&path) {
        let image = StatefulImage::new();
        frame.render_stateful_widget(image, inner, protocol);
    } else if state.image_loading(&path) {
        let loading =
            Paragraph::new(Line::styled("Loading image...", palette.text_muted())).alignment(Alignment::Center);
        frame.render_widget(loading, inner);
    }
}

fn render_detail_screen(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let palette = state.palette;
    let Screen::Detail { item } = &state.screen else {
        return;
    };
    let item = item.clone();

    let Some(loader) = state.detail.as_ref() else {
        return;
    };

    if let Some(elapsed) = loader.loading_elapsed() {
        render_loading(frame, &palette, area, elapsed);
        return;
    }
    if let Some(message) = loader.error_message() {
        let message = message.to_string();
        render_error(frame, &palette, area, "Failed to load text", &message);
        return;
    }

    let Some(text) = loader.payload().map(|t| t.text.clone()) else {
        return;
    };
    let entrance = loader.entrance_elapsed().unwrap_or(Entrance::DURATION);
    let area = entrance_area(area, entrance);
    let fade = Entrance::fade(entrance);

    // A centered card tinted with the item's color
    let card_area = centered_rect(70, 80, area);
    let card_style = match fade {
        Fade::Faint => palette.text_muted(),
        Fade::Dim => Style::default()
            .bg(item.card_color())
            .fg(item.text_color())
            .add_modifier(Modifier::DIM),
        Fade::Full => Style::default().bg(item.card_color()).fg(item.text_color()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(card_style);
    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    // Image on top when present, wrapped text below
    let has_image = state.config.show_images && item.image_path().is_some();
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if has_image {
            vec![Constraint::Percentage(50), Constraint::Min(0)]
        } else {
            vec![Constraint::Min(0)]
        })
        .split(inner);

    if has_image
        && let Some(path) = item.image_path().map(str::to_string)
        && let Some(protocol) = state.image_protocol(&path)
    {
        let image = StatefulImage::new();
        frame.render_stateful_widget(image, sections[0], protocol);
    }

    let text_area = *sections.last().unwrap_or(&inner);
    let wrapped = textwrap::fill(&text, text_area.width.saturating_sub(2) as usize);
    let body = Paragraph::new(wrapped)
        .style(card_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, text_area);
}

/// Spinner view shown while a fetch is in flight
fn render_loading(frame: &mut Frame, palette: &Palette, area: Rect, elapsed: std::time::Duration) {
    let spinner = Paragraph::new(vec![
        Line::from(""),
        Line::styled(Spin::frame(elapsed).to_string(), palette.spinner()),
        Line::from(""),
        Line::styled("Loading...", palette.text_muted()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(spinner, area);
}

/// Inline error view with a retry hint; both screens share it
fn render_error(frame: &mut Frame, palette: &Palette, area: Rect, headline: &str, message: &str) {
    let error = Paragraph::new(vec![
        Line::from(""),
        Line::styled(headline.to_string(), palette.text_error()),
        Line::styled(message.to_string(), palette.text_dim()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r]", palette.key_hint()),
            Span::styled(" Retry", palette.text()),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(error, area);
}

/// The list screen's blocking alert with Retry/Cancel actions
fn render_alert(frame: &mut Frame, state: &AppState) {
    let palette = state.palette;
    let popup_area = centered_rect(50, 30, frame.area());

    frame.render_widget(Clear, popup_area);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_secondary));
    frame.render_widget(bg_block, popup_area);

    let alert = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "Failed to load data.",
            palette.text().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Please try again or check your connection.",
            palette.text_dim(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", palette.key_hint()),
            Span::styled(" Retry    ", palette.text()),
            Span::styled("[Esc]", palette.key_hint()),
            Span::styled(" Cancel", palette.text()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.text_error()),
    );
    frame.render_widget(alert, popup_area);
}

fn render_help_popup(frame: &mut Frame, state: &AppState) {
    let palette = state.palette;
    let popup_area = centered_rect(50, 60, frame.area());

    frame.render_widget(Clear, popup_area);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_secondary));
    frame.render_widget(bg_block, popup_area);

    let entry = |keys: &str, action: &str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<14}"), palette.key_hint()),
            Span::styled(action.to_string(), palette.text()),
        ])
    };

    let help_content = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            "  List",
            palette.text().add_modifier(Modifier::BOLD),
        )]),
        entry("j/k or ↑/↓", "Move selection"),
        entry("g/G", "Jump to first/last item"),
        entry("Enter", "Open item"),
        entry("r", "Refresh collection"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  Detail",
            palette.text().add_modifier(Modifier::BOLD),
        )]),
        entry("Esc or h", "Back to the list"),
        entry("r", "Retry text fetch"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "  General",
            palette.text().add_modifier(Modifier::BOLD),
        )]),
        entry("?", "Toggle this help"),
        entry("q", "Quit"),
    ];

    let help = Paragraph::new(help_content).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.block()),
    );
    frame.render_widget(help, popup_area);
}

fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let palette = state.palette;
    let content = vec![
        Span::styled(format!(" {}", state.status), palette.text_dim()),
        Span::styled("  |  ? Help  q Quit", palette.text_muted()),
    ];
    let status = Paragraph::new(Line::from(content))
        .style(Style::default().bg(palette.bg_secondary));
    frame.render_widget(status, area);
}

/// Push content down by the entrance animation's current offset
fn entrance_area(area: Rect, elapsed: std::time::Duration) -> Rect {
    let offset = Entrance::offset_rows(elapsed).min(area.height);
    Rect {
        y: area.y + offset,
        height: area.height - offset,
        ..area
    }
}

const fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_width = r.width * percent_x / 100;
    let popup_height = r.height * percent_y / 100;
    Rect {
        x: r.x + (r.width - popup_width) / 2,
        y: r.y + (r.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

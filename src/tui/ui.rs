//! TUI rendering with ratatui
//!
//! Draws the terminal UI: filter header, gallery list, carousel, status bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::app::{App, AppState};
use crate::filter::Bucket;

/// Main draw function — renders the entire TUI
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: filter header, center content, bottom status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter header
            Constraint::Min(5),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    draw_filter_header(frame, chunks[0], app);

    match app.state {
        AppState::Browse => draw_gallery(frame, chunks[1], app),
        AppState::Carousel => draw_carousel(frame, chunks[1], app),
    }

    draw_status_bar(frame, chunks[2], app);

    // Help overlay (drawn last, on top)
    if app.show_help {
        draw_help_overlay(frame, area);
    }
}

const BUCKETS: &[Bucket] = &[
    Bucket::All,
    Bucket::Unidentified,
    Bucket::Named,
    Bucket::Politics,
    Bucket::Military,
    Bucket::FirstLadies,
];

/// Draw the active category and the bucket selector row
fn draw_filter_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.engine.filter_state();

    let mut spans = vec![Span::styled(
        match state.category {
            Some(c) => format!(" category:{} ", c.label()),
            None => " category:all ".to_string(),
        },
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    for (i, bucket) in BUCKETS.iter().enumerate() {
        let style = if *bucket == state.bucket {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!(" {}:{} ", i + 1, bucket.label()),
            style,
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Silograph "));

    frame.render_widget(header, area);
}

/// Draw the gallery list with selection markers
fn draw_gallery(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.engine.visible();
    let title = format!(" {} ", app.engine.count_line());

    if visible.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No results found",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from("  Adjust the category or bucket filter."),
        ])
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(empty, area);
        return;
    }

    // Scroll the list so the cursor stays in view
    let inner_height = area.height.saturating_sub(2) as usize;
    let offset = app.cursor.saturating_sub(inner_height.saturating_sub(1));

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner_height)
        .map(|(i, record)| {
            let marker = if app.engine.selection().contains(&record.filename) {
                "[x] "
            } else {
                "[ ] "
            };
            let category = record.category.map(|c| c.label()).unwrap_or("-");

            let style = if i == app.cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(Span::styled(
                format!("{}{:<10} {}", marker, category, record.alt_text()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

/// Draw the 3-up carousel: one panel per slide in the current window
fn draw_carousel(frame: &mut Frame, area: Rect, app: &App) {
    let carousel = match &app.carousel {
        Some(c) => c,
        None => return,
    };

    let window = carousel.window();
    let title = format!(
        " Collection {}..{} of {} ",
        carousel.index() + 1,
        carousel.index() + window.len(),
        carousel.len()
    );

    let outer = Block::default().borders(Borders::ALL).title(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(inner);

    for (i, panel) in panels.iter().enumerate() {
        let Some(slide) = window.get(i) else {
            continue;
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", slide.alt),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("  {}", slide.src)),
        ];
        if let Some(caption) = &slide.caption {
            if !caption.date.is_empty() {
                lines.push(Line::from(format!("  {}", caption.date)));
            }
            if !caption.place.is_empty() {
                lines.push(Line::from(format!("  {}", caption.place)));
            }
        }
        if let Some(overlay) = &slide.overlay {
            lines.push(Line::from(Span::styled(
                format!("  outline: {}", overlay.display()),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let panel_block = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(panel_block, *panel);
    }
}

/// Draw bottom status bar
fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let left = Span::styled(
        format!(" {} ", app.status_message),
        Style::default().fg(Color::White),
    );

    let right = Span::styled(
        match app.state {
            AppState::Browse => " ?:Help  Space:Select  v:View  e:Export  q:Quit ",
            AppState::Carousel => " h/l:Page  e:Export  Esc:Back ",
        },
        Style::default().fg(Color::DarkGray),
    );

    let bar = Paragraph::new(Line::from(vec![left, right])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(bar, area);
}

/// Draw help overlay popup
fn draw_help_overlay(frame: &mut Frame, area: Rect) {
    // Center the popup
    let popup_width = 60.min(area.width.saturating_sub(4));
    let popup_height = 24.min(area.height.saturating_sub(4));
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  KEYBOARD SHORTCUTS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Navigation",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("    j / ↓        Move down"),
        Line::from("    k / ↑        Move up"),
        Line::from("    g / Home     Jump to first"),
        Line::from("    G / End      Jump to last"),
        Line::from("    PgUp/PgDn    Page up/down"),
        Line::from(""),
        Line::from(Span::styled(
            "  Filters",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("    c / w / m    Toggle children/women/men"),
        Line::from("    1-6          all / unidentified / named /"),
        Line::from("                 politics / military / firstladies"),
        Line::from(""),
        Line::from(Span::styled(
            "  Selection",
            Style::default().fg(Color::Yellow),
        )),
        Line::from("    Space/Enter  Toggle selection"),
        Line::from("    a            Select all visible"),
        Line::from("    n            Deselect all"),
        Line::from("    v            View selection in carousel"),
        Line::from("    e            Export to morph/sketch tool"),
        Line::from(""),
        Line::from("  Press any key to close."),
    ];

    let popup = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(popup, popup_area);
}

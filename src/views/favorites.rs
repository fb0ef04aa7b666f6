use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;
use crate::views::comments::card_comment_lines;
use crate::views::common::{render_empty, render_loading, story_card_lines};
use crate::views::status_bar::StatusBar;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(0),    // Favorites list
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_header(frame, app, chunks[0]);
    render_favorites_list(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "♥ Favorites",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", app.favorites.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if app.load.should_show_spinner() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_favorites_list(frame: &mut Frame, app: &App, area: Rect) {
    if app.favorites.is_empty() {
        render_empty(
            frame,
            "Favorites",
            "No liked stories yet. Press f on a story to like it.",
            area,
        );
        return;
    }
    if app.favorite_stories.is_empty() {
        // The set has entries but their records are still resolving
        render_loading(frame, "Favorites", area);
        return;
    }

    let content_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = app
        .favorite_stories
        .iter()
        .enumerate()
        .map(|(i, story)| {
            let mut lines = story_card_lines(story, i + 1, true);
            if let Some(rev) = app.reveal_state(story.id).and_then(|s| s.revealed()) {
                lines.extend(card_comment_lines(story.kids.len(), rev, content_width));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Favorites"),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 40))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_offset(app.scroll_offset);
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut bar = StatusBar::new()
        .label("Favorites")
        .help("j/k:nav  Enter:comments  f:unlike  Esc:back  ?:help  q:quit");

    if !app.favorite_stories.is_empty() {
        bar = bar.position(app.selected_index + 1, app.favorite_stories.len());
    }
    if app.load.loading {
        bar = bar.loading("Loading...");
    }

    bar.render(frame, area);
}

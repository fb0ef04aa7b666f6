use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::api::Story;
use crate::time::format_datetime;

/// The two lines of a story card header, shared by the stories and
/// favorites lists.
pub fn story_card_lines(story: &Story, rank: usize, is_favorite: bool) -> Vec<Line<'static>> {
    let mut title_spans = vec![
        Span::styled(format!("{rank:>3}. "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            story.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", story.domain()),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if is_favorite {
        title_spans.push(Span::styled(" ♥", Style::default().fg(Color::Red)));
    }

    let meta_line = Line::from(vec![
        Span::raw("     "),
        Span::styled(
            format!("▲ {}", story.score),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(story.by.clone(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(
            format!("{} comments", story.kids.len()),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" | "),
        Span::styled(
            format_datetime(story.time),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    vec![Line::from(title_spans), meta_line]
}

/// Render a bordered placeholder while a list fetch is in flight.
pub fn render_loading(frame: &mut Frame, title: &str, area: Rect) {
    let loading = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(loading, area);
}

/// Render a bordered placeholder for an empty list.
pub fn render_empty(frame: &mut Frame, title: &str, message: &str, area: Rect) {
    let empty = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(empty, area);
}

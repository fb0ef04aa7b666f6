//! Help overlay popup showing keybindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::app::Message;
use crate::keys::{format_key, global_keymap, stories_keymap};

const ITEMS: [(Message, &str); 14] = [
    (Message::SelectNext, "Move down"),
    (Message::SelectPrev, "Move up"),
    (Message::NextPage, "Next page"),
    (Message::PrevPage, "Previous page"),
    (Message::RevealComments, "Show comments"),
    (Message::LoadMoreComments, "Load more comments"),
    (Message::HideComments, "Hide comments"),
    (Message::ToggleCommentText, "Expand long comment"),
    (Message::ToggleFavorite, "Like / unlike story"),
    (Message::ShowFavorites, "Favorites view"),
    (Message::OpenUrl, "Open story link"),
    (Message::OpenDiscussion, "Open HN discussion"),
    (Message::Refresh, "Refresh"),
    (Message::Quit, "Quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    // Dim the underlying content
    let buf = frame.buffer_mut();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = &mut buf[(x, y)];
            cell.set_style(cell.style().add_modifier(Modifier::DIM));
        }
    }

    let keymap = global_keymap().extend(stories_keymap());
    let formatted: Vec<(String, &str)> = ITEMS
        .iter()
        .filter_map(|(msg, label)| {
            keymap
                .find_key(msg)
                .map(|(code, mods)| (format_key(code, mods), *label))
        })
        .collect();

    let key_width = formatted.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let label_width = formatted.iter().map(|(_, l)| l.len()).max().unwrap_or(0);
    let content_width = key_width + 2 + label_width;
    let popup_width = (content_width + 2 + 4) as u16; // borders plus padding
    let popup_height = (formatted.len() + 4) as u16;

    let popup_width = popup_width.min(area.width.saturating_sub(4));
    let popup_height = popup_height.min(area.height.saturating_sub(4));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = formatted
        .iter()
        .map(|(keys, label)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:>key_width$}"),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(label.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Help")
            .padding(Padding::uniform(1)),
    );

    frame.render_widget(paragraph, popup_area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::api::{Category, Story};
use crate::app::App;
use crate::page::PAGE_SIZE;
use crate::views::comments::card_comment_lines;
use crate::views::common::{render_empty, render_loading, story_card_lines};
use crate::views::status_bar::StatusBar;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Category tabs
        Constraint::Min(0),    // Story list
        Constraint::Length(1), // Pagination
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    render_category_tabs(frame, app, chunks[0]);
    render_story_list(frame, app, chunks[1]);
    render_pagination(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_category_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Category::all()
        .iter()
        .enumerate()
        .flat_map(|(i, category)| {
            let style = if *category == app.page_state.category {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![
                Span::styled(format!("[{}]", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(category.label(), style),
                Span::raw("  "),
            ]
        })
        .collect();

    spans.push(Span::styled(
        "[F]Favorites",
        Style::default().fg(Color::DarkGray),
    ));

    if app.load.should_show_spinner() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_story_list(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!("{} Stories", app.page_state.category.label());

    if app.stories.is_empty() {
        if app.load.loading {
            render_loading(frame, &title, area);
        } else {
            render_empty(frame, &title, "No stories to show", area);
        }
        return;
    }

    // 2 for borders, 2 for padding
    let content_width = area.width.saturating_sub(4) as usize;
    let rank_base = (app.page_state.page - 1) * PAGE_SIZE;

    let items: Vec<ListItem> = app
        .stories
        .iter()
        .enumerate()
        .map(|(i, story)| story_to_list_item(app, story, rank_base + i + 1, content_width))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
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

fn story_to_list_item(
    app: &App,
    story: &Story,
    rank: usize,
    content_width: usize,
) -> ListItem<'static> {
    let mut lines = story_card_lines(story, rank, app.favorites.contains(story.id));

    if let Some(rev) = app.reveal_state(story.id).and_then(|s| s.revealed()) {
        lines.extend(card_comment_lines(story.kids.len(), rev, content_width));
    }

    ListItem::new(lines)
}

fn render_pagination(frame: &mut Frame, app: &App, area: Rect) {
    let state = &app.page_state;
    let active = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled(
            "[ prev",
            if state.has_prev() { active } else { disabled },
        ),
        Span::styled(
            format!("  page {}/{}  ", state.page, state.total_pages.max(1)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            "next ]",
            if state.has_next() { active } else { disabled },
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut bar = StatusBar::new()
        .label(app.page_state.category.label())
        .page(app.page_state.page, app.page_state.total_pages.max(1))
        .help("j/k:nav  [/]:pages  1-3:category  Enter:comments  f:like  F:favorites  ?:help  q:quit");

    if !app.stories.is_empty() {
        bar = bar.position(app.selected_index + 1, app.stories.len());
    }
    if app.load.loading {
        bar = bar.loading("Loading...");
    }

    bar.render(frame, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Message;
    use crate::test_utils::{StoryBuilder, TestAppBuilder, sample_stories};
    use crate::views::tests::render_to_string;

    #[test]
    fn test_stories_view_renders_list() {
        let app = TestAppBuilder::new()
            .with_stories(sample_stories())
            .selected(0)
            .build();

        let output = render_to_string(100, 30, |frame| {
            render(frame, &app, frame.area());
        });

        assert!(output.contains("Show HN: I built a terminal reader for Hacker News"));
        assert!(output.contains("▲ 142"));
        assert!(output.contains("(github.com)"));
        assert!(output.contains("Best Stories"));
    }

    #[test]
    fn test_rank_numbers_continue_across_pages() {
        let app = TestAppBuilder::new()
            .page(2)
            .with_stories(sample_stories())
            .build();

        let output = render_to_string(100, 30, |frame| {
            render(frame, &app, frame.area());
        });

        // First story on page 2 is rank 31
        assert!(output.contains(" 31. "));
    }

    #[test]
    fn test_category_tabs_show_active() {
        let app = TestAppBuilder::new().build();
        let output = render_to_string(80, 24, |frame| {
            render(frame, &app, frame.area());
        });

        assert!(output.contains("[1]Best"));
        assert!(output.contains("[2]New"));
        assert!(output.contains("[3]Top"));
        assert!(output.contains("[F]Favorites"));
    }

    #[test]
    fn test_pagination_bar() {
        let mut app = TestAppBuilder::new().with_stories(sample_stories()).build();
        app.page_state.page = 2;
        app.page_state.total_pages = 17;

        let output = render_to_string(80, 24, |frame| {
            render(frame, &app, frame.area());
        });

        assert!(output.contains("page 2/17"));
        assert!(output.contains("[ prev"));
        assert!(output.contains("next ]"));
    }

    #[test]
    fn test_empty_list_placeholder() {
        let app = TestAppBuilder::new().build();
        let output = render_to_string(80, 24, |frame| {
            render(frame, &app, frame.area());
        });

        assert!(output.contains("No stories to show"));
    }

    #[test]
    fn test_loading_placeholder() {
        let app = TestAppBuilder::new().loading().build();
        let output = render_to_string(80, 24, |frame| {
            render(frame, &app, frame.area());
        });

        assert!(output.contains("Loading..."));
    }

    #[test]
    fn test_favorite_marker_shown() {
        let stories = sample_stories();
        let app = TestAppBuilder::new()
            .with_stories(stories)
            .with_favorites(vec![1])
            .build();

        let output = render_to_string(100, 30, |frame| {
            render(frame, &app, frame.area());
        });

        assert!(output.contains('♥'));
    }

    #[tokio::test]
    async fn test_revealed_card_shows_comment_footer() {
        let story = StoryBuilder::new()
            .id(1)
            .title("With comments")
            .kids(vec![10, 11, 12])
            .build();
        let mut app = TestAppBuilder::new().with_stories(vec![story]).build();
        app.update(Message::RevealComments);

        let output = render_to_string(100, 30, |frame| {
            render(frame, &app, frame.area());
        });

        assert!(output.contains("Loading comments..."));
    }
}

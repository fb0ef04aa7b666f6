use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::api::CommentNode;
use crate::reveal::{self, REVEAL_STEP, Revealed};

/// Colors for different nesting depths (cycles after 6)
const DEPTH_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

fn depth_color(depth: usize) -> Color {
    DEPTH_COLORS[depth % DEPTH_COLORS.len()]
}

/// The inline comment lines for a revealed story card: the loaded subtrees
/// followed by a fetch/load-more/hide footer.
pub fn card_comment_lines(kid_count: usize, rev: &Revealed, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if kid_count == 0 {
        lines.push(Line::from(Span::styled(
            "     No comments yet",
            Style::default().fg(Color::DarkGray),
        )));
        return lines;
    }

    for node in &rev.nodes {
        push_node_lines(&mut lines, node, 0, None, rev.text_expanded, width);
    }

    lines.push(footer_line(kid_count, rev));
    lines
}

fn push_node_lines(
    lines: &mut Vec<Line<'static>>,
    node: &CommentNode,
    depth: usize,
    parent_author: Option<&str>,
    text_expanded: bool,
    width: usize,
) {
    let comment = &node.comment;
    let color = depth_color(depth);
    let indent = "     ".to_string() + &"  ".repeat(depth);

    let mut meta_spans = vec![
        Span::raw(indent.clone()),
        Span::styled(
            format!("● {}", comment.by),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(parent) = parent_author {
        meta_spans.push(Span::styled(
            format!(" replying to {parent}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(meta_spans));

    let truncated = !text_expanded && reveal::needs_toggle(&comment.text);
    let body = if truncated {
        format!("{}…", reveal::preview(&comment.text))
    } else {
        comment.text.clone()
    };

    let wrap_width = width.saturating_sub(indent.len()).max(20);
    for wrapped in textwrap::wrap(&body, wrap_width) {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(wrapped.into_owned(), Style::default().fg(Color::Gray)),
        ]));
    }

    if reveal::needs_toggle(&comment.text) {
        let hint = if text_expanded {
            "[e] show less"
        } else {
            "[e] show more"
        };
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]));
    }

    for child in &node.children {
        push_node_lines(lines, child, depth + 1, Some(&comment.by), text_expanded, width);
    }
}

fn footer_line(kid_count: usize, rev: &Revealed) -> Line<'static> {
    let text = if rev.fetching {
        "     Loading comments...".to_string()
    } else if rev.loaded_count < kid_count {
        let remaining = kid_count - rev.loaded_count;
        format!(
            "     [m] load {} more ({remaining} remaining)  [h] hide",
            REVEAL_STEP.min(remaining)
        )
    } else {
        "     [h] hide comments".to_string()
    };
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

//! Incremental comment revealing for story cards.
//!
//! Each story card owns a [`RevealState`]: collapsed until the user asks for
//! comments, then a growing prefix of the story's top-level kids. The prefix
//! grows [`REVEAL_STEP`] comments at a time and only the newly revealed
//! suffix is fetched. Replies below the top level arrive pre-resolved as
//! full [`CommentNode`] subtrees (see `HnClient::fetch_comment_nodes`), so
//! this module never paginates below the first level.

use std::ops::Range;

use crate::api::CommentNode;

/// How many top-level comments each Reveal/LoadMore step adds.
pub const REVEAL_STEP: usize = 2;

/// Comment bodies longer than this many characters are shown truncated with
/// an expand toggle.
pub const TEXT_PREVIEW_CHARS: usize = 285;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum RevealState {
    #[default]
    Collapsed,
    Revealing(Revealed),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Revealed {
    /// Target prefix length of the story's kid list.
    pub loaded_count: usize,
    /// Subtrees fetched so far, in kid order. Trails `loaded_count` while a
    /// fetch is in flight.
    pub nodes: Vec<CommentNode>,
    /// Scroll offset captured when the card was revealed, restored on hide.
    pub scroll_anchor: usize,
    /// A fetch for the current suffix is in flight.
    pub fetching: bool,
    /// Whether truncated comment bodies in this card are shown in full.
    pub text_expanded: bool,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealing(_))
    }

    pub fn revealed(&self) -> Option<&Revealed> {
        match self {
            RevealState::Revealing(rev) => Some(rev),
            RevealState::Collapsed => None,
        }
    }

    /// Start revealing: capture the current scroll offset and target the
    /// first [`REVEAL_STEP`] kids (or fewer). Returns the kid-index range to
    /// fetch.
    pub fn reveal(&mut self, kid_count: usize, scroll_anchor: usize) -> Range<usize> {
        let count = REVEAL_STEP.min(kid_count);
        *self = RevealState::Revealing(Revealed {
            loaded_count: count,
            nodes: Vec::new(),
            scroll_anchor,
            fetching: count > 0,
            text_expanded: false,
        });
        0..count
    }

    /// Grow the revealed prefix by [`REVEAL_STEP`], capped at `kid_count`.
    /// Returns the newly revealed suffix to fetch, or None when everything
    /// is already loaded, a fetch is in flight, or the card is collapsed.
    pub fn load_more(&mut self, kid_count: usize) -> Option<Range<usize>> {
        let RevealState::Revealing(rev) = self else {
            return None;
        };
        if rev.fetching || rev.loaded_count >= kid_count {
            return None;
        }
        let from = rev.loaded_count;
        rev.loaded_count = (rev.loaded_count + REVEAL_STEP).min(kid_count);
        rev.fetching = true;
        Some(from..rev.loaded_count)
    }

    /// Collapse the card, discarding loaded comments. Returns the scroll
    /// offset captured at reveal time so the view can restore it.
    pub fn hide(&mut self) -> Option<usize> {
        match std::mem::take(self) {
            RevealState::Revealing(rev) => Some(rev.scroll_anchor),
            RevealState::Collapsed => None,
        }
    }

    /// Accept fetched subtrees for the suffix starting at kid index `from`.
    /// Results arriving after the card was hidden, or for a superseded
    /// reveal, are dropped.
    pub fn absorb(&mut self, from: usize, nodes: Vec<CommentNode>) {
        if let RevealState::Revealing(rev) = self {
            if from == rev.nodes.len() && from < rev.loaded_count {
                rev.nodes.extend(nodes);
            }
            rev.fetching = false;
        }
    }

    pub fn toggle_text(&mut self) {
        if let RevealState::Revealing(rev) = self {
            rev.text_expanded = !rev.text_expanded;
        }
    }
}

/// Whether a comment body is long enough to get an expand/collapse toggle.
pub fn needs_toggle(text: &str) -> bool {
    text.chars().count() > TEXT_PREVIEW_CHARS
}

/// The truncated form of a comment body, at most [`TEXT_PREVIEW_CHARS`]
/// characters, cut on a character boundary.
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(TEXT_PREVIEW_CHARS) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

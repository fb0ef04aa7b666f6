pub mod comments;
pub mod common;
pub mod favorites;
pub mod help_overlay;
pub mod status_bar;
pub mod stories;

use ratatui::{Frame, layout::Rect};

use crate::app::{App, View};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.view {
        View::Stories => stories::render(frame, app, area),
        View::Favorites => favorites::render(frame, app, area),
    }
    if app.show_help {
        help_overlay::render(frame, area);
    }
}

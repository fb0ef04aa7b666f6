use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Builder for rendering a consistent status bar across views.
///
/// The status bar has a standard layout:
/// `[Label] [Loading?] Page Position | Help Text`
pub struct StatusBar<'a> {
    label: &'a str,
    loading_text: Option<&'a str>,
    page: Option<(usize, usize)>,
    position: Option<(usize, usize)>,
    help_text: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self {
            label: "",
            loading_text: None,
            page: None,
            position: None,
            help_text: "",
        }
    }

    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn loading(mut self, text: &'a str) -> Self {
        self.loading_text = Some(text);
        self
    }

    pub fn page(mut self, current: usize, total: usize) -> Self {
        self.page = Some((current, total));
        self
    }

    pub fn position(mut self, current: usize, total: usize) -> Self {
        self.position = Some((current, total));
        self
    }

    pub fn help(mut self, text: &'a str) -> Self {
        self.help_text = text;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.label),
                Style::default().bg(Color::Blue).fg(Color::White),
            ),
            Span::raw(" "),
        ];

        if let Some(loading) = self.loading_text {
            spans.push(Span::styled(
                loading.to_string(),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(" | "));
        }

        if let Some((current, total)) = self.page {
            spans.push(Span::styled(
                format!("page {current}/{total}"),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw(" | "));
        }

        if let Some((current, total)) = self.position {
            spans.push(Span::styled(
                format!("{current}/{total}"),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw(" | "));
        }

        spans.push(Span::styled(
            self.help_text.to_string(),
            Style::default().fg(Color::DarkGray),
        ));

        let status = Line::from(spans);
        frame.render_widget(Paragraph::new(status), area);
    }
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self::new()
    }
}

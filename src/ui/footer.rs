use crate::ui::theme::HINT_TEXT;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ←/h: Prev │ →/l: Next │ r: Reload config │ q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, status: Option<&str>) -> Paragraph<'static> {
        let left = match status {
            Some(message) => format!(" {message}"),
            None => HINTS.to_string(),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let padding = (area.width as usize)
            .saturating_sub(left.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(left, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
    }
}

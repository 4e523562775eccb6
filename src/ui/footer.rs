use crate::locale::Strings;
use crate::ui::theme::FOOTER_TEXT;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    hints: &'static str,
}

impl Footer {
    pub fn new(strings: &Strings) -> Self {
        Self {
            hints: strings.hints,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = self.hints.chars().count();
        let version_width = version.chars().count();
        let padding = (area.width as usize)
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default()
            .fg(FOOTER_TEXT.to_color())
            .add_modifier(Modifier::DIM);

        // Hints sit on the middle row of the footer.
        let line = Line::from(vec![
            Span::styled(self.hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(vec![Line::default(), line])
            .style(text_style)
            .alignment(Alignment::Left)
    }
}

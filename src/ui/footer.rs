use crate::ui::app::FetchStatus;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ↑/↓: Move │ g/G Home/End: First/Last │ Enter: View │ PgUp/PgDn: Scroll │ q: Quit";

pub struct Footer<'a> {
    status: &'a FetchStatus,
}

impl<'a> Footer<'a> {
    pub fn new(status: &'a FetchStatus) -> Self {
        Self { status }
    }

    /// Text shown on the left; a failed fetch replaces the key hints.
    pub fn message(&self) -> String {
        match self.status {
            FetchStatus::Failed(reason) => format!(" Fetch failed: {reason} (r: retry)"),
            _ => HINTS.to_string(),
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let message = self.message();
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let message_width = message.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(message_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let message_style = match self.status {
            FetchStatus::Failed(_) => Style::default().fg(STATUS_ERROR),
            _ => text_style,
        };

        let line = Line::from(vec![
            Span::styled(message, message_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_offers_retry() {
        let status = FetchStatus::Failed("server returned HTTP 500".to_string());
        let message = Footer::new(&status).message();
        assert!(message.contains("server returned HTTP 500"));
        assert!(message.contains("r: retry"));
    }

    #[test]
    fn done_shows_hints_only() {
        let message = Footer::new(&FetchStatus::Done).message();
        assert_eq!(message, HINTS);
        assert!(message.contains("g/G Home/End"));
    }
}

use crate::ui::app::FetchStatus;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    source_url: &'a str,
    status: &'a FetchStatus,
    users: usize,
    posts: usize,
}

impl<'a> Header<'a> {
    pub fn new(source_url: &'a str, status: &'a FetchStatus, users: usize, posts: usize) -> Self {
        Self {
            source_url,
            status,
            users,
            posts,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (dot, dot_color) = match self.status {
            FetchStatus::Done => ("●", STATUS_OK),
            FetchStatus::Failed(_) => ("●", STATUS_ERROR),
            FetchStatus::Idle | FetchStatus::InFlight => ("○", STATUS_PENDING),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(dot, Style::default().fg(dot_color)),
            Span::styled("  ", text_style),
            Span::styled("postboard", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(self.source_url.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} users, {} posts", self.users, self.posts),
                text_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

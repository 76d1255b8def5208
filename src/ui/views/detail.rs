//! Posts of the selected author.

use std::fmt;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::posts::{posts_of, Post, UserId};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const NO_POSTS: &str = "No posts by this user.";

/// Detail view built from an explicit user and post list.
///
/// An id with no posts yields an empty view that renders [`NO_POSTS`].
pub struct DetailView<'a> {
    user: UserId,
    items: Vec<&'a Post>,
}

impl<'a> DetailView<'a> {
    pub fn new(user: UserId, posts: &'a [Post]) -> Self {
        Self {
            user,
            items: posts_of(posts, user),
        }
    }

    pub fn items(&self) -> &[&'a Post] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn heading(&self) -> String {
        format!("User {}", self.user)
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let title_style = Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD);
        let body_style = Style::default().fg(MUTED_TEXT);

        if self.is_empty() {
            return vec![Line::from(Span::styled(NO_POSTS, body_style))];
        }

        let mut lines = Vec::with_capacity(self.items.len() * 3);
        for (idx, post) in self.items.iter().copied().enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(post.title.as_str(), title_style)));
            for body_line in post.body.lines() {
                lines.push(Line::from(Span::styled(body_line, body_style)));
            }
        }
        lines
    }

    pub fn widget(&self, scroll: u16) -> Paragraph<'a> {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", self.heading()),
                        Style::default().fg(ACCENT),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        if self.is_empty() {
            writeln!(f)?;
            return writeln!(f, "{NO_POSTS}");
        }
        for post in &self.items {
            writeln!(f)?;
            writeln!(f, "## {}", post.title)?;
            writeln!(f, "{}", post.body)?;
        }
        Ok(())
    }
}

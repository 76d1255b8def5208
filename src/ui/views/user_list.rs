//! Table of authors derived from the post list.

use std::fmt;

use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::posts::{derive_users, first_post_of, Post, UserId};
use crate::ui::board::BoardState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use crate::ui::views::detail::DetailView;

pub const PLACEHOLDER: &str = "Please select a user to view their posts.";

/// One row of the author table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub user_id: UserId,
    /// Title of the first post by this user, in list order.
    pub title: String,
}

/// Rows for every distinct user, first-seen order.
pub fn user_rows(posts: &[Post]) -> Vec<UserRow> {
    derive_users(posts)
        .into_iter()
        .filter_map(|user_id| {
            first_post_of(posts, user_id).map(|post| UserRow {
                user_id,
                title: post.title.clone(),
            })
        })
        .collect()
}

/// What goes below the table.
pub enum DetailPanel<'a> {
    Placeholder,
    Detail(DetailView<'a>),
}

/// Pick the detail panel for the current state.
pub fn detail_panel(state: &BoardState) -> DetailPanel<'_> {
    match state.selected_user {
        Some(user) => DetailPanel::Detail(DetailView::new(user, &state.posts)),
        None => DetailPanel::Placeholder,
    }
}

impl fmt::Display for DetailPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailPanel::Placeholder => writeln!(f, "{PLACEHOLDER}"),
            DetailPanel::Detail(view) => write!(f, "{view}"),
        }
    }
}

pub struct UserListView {
    rows: Vec<UserRow>,
    selected_user: Option<UserId>,
}

impl UserListView {
    pub fn new(state: &BoardState) -> Self {
        Self {
            rows: user_rows(&state.posts),
            selected_user: state.selected_user,
        }
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn widget(&self) -> Table<'static> {
        let header = Row::new(vec!["User ID", "Title", "Action"]).style(
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        );

        let rows = self.rows.iter().map(|row| {
            let active = self.selected_user == Some(row.user_id);
            let action = if active {
                Span::styled("Viewing", Style::default().fg(ACCENT))
            } else {
                Span::styled("View", Style::default().fg(MUTED_TEXT))
            };
            Row::new(vec![
                Cell::from(row.user_id.to_string()),
                Cell::from(row.title.clone()),
                Cell::from(action),
            ])
        });

        Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Min(20),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(Span::styled(" Users ", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("> ")
    }
}

impl fmt::Display for UserListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8} {}", "User ID", "Title")?;
        for row in &self.rows {
            writeln!(f, "{:<8} {}", row.user_id, row.title)?;
        }
        Ok(())
    }
}

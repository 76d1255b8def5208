use tracing::{debug, warn};

use crate::fetch::FetchOutcome;
use crate::posts::UserId;
use crate::ui::board::{BoardIntent, BoardReducer, BoardState};
use crate::ui::mvi::Reducer;
use crate::ui::views::{detail_panel, user_rows, DetailPanel, UserRow};

/// Side effects requested by the view, executed by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    FetchPosts,
}

/// Progress of the posts fetch. Kept outside [`BoardState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    InFlight,
    Done,
    Failed(String),
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    mounted: bool,
    /// Posts and selection (MVI pattern).
    board: BoardState,
    /// Rows derived from `board.posts`, refreshed on every dispatch.
    rows: Vec<UserRow>,
    cursor: usize,
    detail_scroll: u16,
    fetch_status: FetchStatus,
    source_url: String,
    commands: Vec<UiCommand>,
}

impl App {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            mounted: false,
            board: BoardState::default(),
            rows: Vec::new(),
            cursor: 0,
            detail_scroll: 0,
            fetch_status: FetchStatus::Idle,
            source_url: source_url.into(),
            commands: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    pub fn fetch_status(&self) -> &FetchStatus {
        &self.fetch_status
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Called when the view is first displayed. Requests the fetch once per
    /// lifetime; later calls do nothing.
    pub fn on_mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.start_fetch();
    }

    /// Manual re-fetch, only available after a failed fetch.
    pub fn request_retry(&mut self) -> bool {
        if !matches!(self.fetch_status, FetchStatus::Failed(_)) {
            return false;
        }
        self.start_fetch();
        true
    }

    fn start_fetch(&mut self) {
        self.fetch_status = FetchStatus::InFlight;
        self.commands.push(UiCommand::FetchPosts);
    }

    /// Drain pending side effects.
    pub fn take_commands(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        if self.should_quit {
            debug!("ignoring fetch result after quit");
            return;
        }
        match outcome {
            Ok(posts) => {
                self.fetch_status = FetchStatus::Done;
                self.dispatch(BoardIntent::ReplacePosts(posts));
            }
            Err(err) => {
                warn!(error = %err, "posts unavailable");
                self.fetch_status = FetchStatus::Failed(err.user_message());
            }
        }
    }

    pub fn dispatch(&mut self, intent: BoardIntent) {
        let replaces_posts = matches!(intent, BoardIntent::ReplacePosts(_));
        dispatch_mvi!(self, board, BoardReducer, intent);
        if replaces_posts {
            self.rows = user_rows(&self.board.posts);
            self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        }
        self.detail_scroll = 0;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Activate the selection control of the highlighted row.
    pub fn select_current(&mut self) -> Option<UserId> {
        let user = self.rows.get(self.cursor)?.user_id;
        self.dispatch(BoardIntent::SelectUser(user));
        Some(user)
    }

    /// Scroll the detail panel, stopping at its last line.
    pub fn scroll_detail(&mut self, delta: i16) {
        let max = u16::try_from(self.detail_line_count().saturating_sub(1)).unwrap_or(u16::MAX);
        self.detail_scroll = self.detail_scroll.saturating_add_signed(delta).min(max);
    }

    fn detail_line_count(&self) -> usize {
        match detail_panel(&self.board) {
            DetailPanel::Detail(view) => view.lines().len(),
            DetailPanel::Placeholder => 0,
        }
    }
}

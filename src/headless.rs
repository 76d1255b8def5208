//! Non-interactive modes: print a fetched board, or replay recorded actions.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::fetch::{FetchError, PostsClient};
use crate::posts::UserId;
use crate::ui::board::{BoardIntent, BoardReducer, BoardState, IntentError};
use crate::ui::mvi::Reducer;
use crate::ui::views::{detail_panel, UserListView};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read actions from '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: {source}")]
    Intent {
        line: usize,
        #[source]
        source: IntentError,
    },
}

/// Board as plain text: the user table, a blank line, then the detail panel.
pub fn render_text(state: &BoardState) -> String {
    format!("{}\n{}", UserListView::new(state), detail_panel(state))
}

/// Fetch once and build the board, optionally preselecting `user`.
pub async fn fetch_board(
    client: &PostsClient,
    user: Option<UserId>,
) -> Result<BoardState, FetchError> {
    let posts = client.fetch_posts().await?;
    let intents = std::iter::once(BoardIntent::ReplacePosts(posts))
        .chain(user.map(BoardIntent::SelectUser));
    Ok(BoardReducer::reduce_all(BoardState::default(), intents))
}

/// Decode one action per line and fold them into a board.
///
/// Blank lines are skipped. The first undecodable line aborts the replay.
pub fn replay<R: BufRead>(reader: R, source: &Path) -> Result<BoardState, ReplayError> {
    let mut state = BoardState::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| ReplayError::Read {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let intent = BoardIntent::decode(&line).map_err(|source_err| ReplayError::Intent {
            line: idx + 1,
            source: source_err,
        })?;
        debug!(line = idx + 1, ?intent, "replaying action");
        state = BoardReducer::reduce(state, intent);
    }
    info!(posts = state.posts.len(), "replay finished");
    Ok(state)
}

pub fn replay_file(path: &Path) -> Result<BoardState, ReplayError> {
    let file = File::open(path).map_err(|source| ReplayError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    replay(BufReader::new(file), path)
}

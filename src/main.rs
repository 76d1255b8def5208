use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use postboard::cli::Cli;
use postboard::config::Config;
use postboard::fetch::PostsClient;
use postboard::headless::{fetch_board, render_text, replay_file};
use postboard::logging::init_tracing;
use postboard::posts::UserId;
use postboard::ui::board::{BoardIntent, BoardReducer, BoardState};
use postboard::ui::mvi::Reducer;
use tracing::error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    if let Err(err) = run(cli) {
        error!("exiting with error: {err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(path) = &cli.replay {
        let state = replay_file(path)?;
        let state = preselect(state, cli.user);
        return print_board(&state);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    let config = match cli.url {
        Some(url) => config.with_url(url)?,
        None => config,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    if cli.print {
        let client = PostsClient::new(&config.source)?;
        let state = runtime.block_on(fetch_board(&client, cli.user))?;
        return print_board(&state);
    }

    postboard::ui::run(&config, runtime.handle())
}

fn preselect(state: BoardState, user: Option<UserId>) -> BoardState {
    match user {
        Some(user) => BoardReducer::reduce(state, BoardIntent::SelectUser(user)),
        None => state,
    }
}

fn print_board(state: &BoardState) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(render_text(state).as_bytes())?;
    stdout.flush()?;
    Ok(())
}

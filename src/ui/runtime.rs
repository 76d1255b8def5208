use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use anyhow::Context;
use tokio::runtime::Handle;
use tracing::info;

use crate::config::Config;
use crate::fetch::{spawn_fetch, PostsClient};
use crate::scope::ViewScope;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the interactive board until the user quits.
pub fn run(config: &Config, runtime: &Handle) -> anyhow::Result<()> {
    let client = PostsClient::new(&config.source)?;
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let scope = ViewScope::new();
    let events = EventHandler::new(tick_rate, scope.handle());
    let mut app = App::new(client.url());
    app.on_mount();
    info!(url = %client.url(), "board mounted");

    loop {
        for command in app.take_commands() {
            match command {
                UiCommand::FetchPosts => {
                    let tx = events.sender();
                    spawn_fetch(runtime, client.clone(), scope.handle(), move |outcome| {
                        let _ = tx.send(AppEvent::Fetched(outcome));
                    });
                }
            }
        }

        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Fetched(outcome)) => app.on_fetch_outcome(outcome),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(..)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    scope.close();
    drop(guard);
    info!("board closed");
    Ok(())
}

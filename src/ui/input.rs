use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: i16 = 5;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::Home | KeyCode::Char('g') => app.cursor_to_start(),
        KeyCode::End | KeyCode::Char('G') => app.cursor_to_end(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.select_current();
        }
        KeyCode::PageDown => app.scroll_detail(PAGE),
        KeyCode::PageUp => app.scroll_detail(-PAGE),
        KeyCode::Char('r') => {
            app.request_retry();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::Post;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded() -> App {
        let mut app = App::new("http://localhost/posts");
        app.on_mount();
        app.take_commands();
        app.on_fetch_outcome(Ok(vec![Post::new(1, 1, "a", ""), Post::new(2, 2, "b", "")]));
        app
    }

    #[test]
    fn q_quits() {
        let mut app = loaded();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = loaded();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn down_then_enter_selects_second_user() {
        let mut app = loaded();
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.board().selected_user, Some(2));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = loaded();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.should_quit());
    }
}

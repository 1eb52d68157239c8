// src/input.rs

use crate::app::App;
use crate::core::models::SelectedFile;
use crate::core::selection;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::{Path, PathBuf};
use tracing::warn;

/// What the event loop has to do after an input event has been applied.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// The trigger fired; the app is already `Submitting` with this file.
    Submit(SelectedFile),
}

pub async fn handle_event(app: &mut App, event: Event) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if app.notification.is_some() {
                handle_notification_input(app, key.code);
                Action::None
            } else {
                handle_key(app, key).await
            }
        }
        // Terminals deliver a dropped file as pasted text.
        Event::Paste(text) if app.notification.is_none() => {
            handle_drop(app, &text).await;
            Action::None
        }
        _ => Action::None,
    }
}

/// A notification is blocking: only dismissal is accepted.
fn handle_notification_input(app: &mut App, key_code: KeyCode) {
    if matches!(key_code, KeyCode::Enter | KeyCode::Esc) {
        app.dismiss_notification();
    }
}

async fn handle_key(app: &mut App, key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Action::None;
    }

    match key.code {
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Esc => {
            if app.input.is_empty() {
                app.quit();
            } else {
                app.input.clear();
            }
        }
        KeyCode::Enter if !app.input.trim().is_empty() => {
            let path = PathBuf::from(app.input.trim());
            if select_path(app, &path).await {
                app.input.clear();
            }
        }
        KeyCode::Enter | KeyCode::F(5) => {
            if let Some(file) = app.begin_submission() {
                return Action::Submit(file);
            }
        }
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
    Action::None
}

async fn handle_drop(app: &mut App, text: &str) {
    let paths = selection::parse_dropped_paths(text);
    if paths.len() > 1 {
        warn!(count = paths.len(), "Several files dropped; keeping the first.");
    }
    if let Some(path) = paths.first() {
        select_path(app, path).await;
    }
}

/// Loads and selects a file, reporting failures through a notification.
pub async fn select_path(app: &mut App, path: &Path) -> bool {
    match selection::load_selected_file(path).await {
        Ok(file) => app.select_file(file).is_ok(),
        Err(err) => {
            app.report_selection_error(&err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{NotificationKind, UiState};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn temp_file(suffix: &str, content: &[u8]) -> NamedTempFile {
        let mut tmp = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        tmp.write_all(content).unwrap();
        tmp
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(handle_event(app, key(KeyCode::Char(c))).await, Action::None);
        }
    }

    async fn app_with_selection(image: &NamedTempFile) -> App {
        let mut app = App::new();
        assert!(select_path(&mut app, image.path()).await);
        app
    }

    #[tokio::test]
    async fn test_enter_with_typed_path_selects() {
        let image = temp_file(".png", PNG_HEADER);
        let mut app = App::new();
        type_text(&mut app, &image.path().display().to_string()).await;

        assert_eq!(handle_event(&mut app, key(KeyCode::Enter)).await, Action::None);
        assert!(app.input.is_empty());
        assert_eq!(app.state, UiState::FileSelected);
        assert!(app.can_submit());
    }

    #[tokio::test]
    async fn test_enter_with_empty_input_submits() {
        let image = temp_file(".png", PNG_HEADER);
        let mut app = app_with_selection(&image).await;

        match handle_event(&mut app, key(KeyCode::Enter)).await {
            Action::Submit(file) => assert_eq!(file.path, image.path()),
            other => panic!("expected submit, got {other:?}"),
        }
        assert!(app.is_submitting());
        assert!(!app.can_submit());
    }

    #[tokio::test]
    async fn test_whitespace_input_counts_as_empty() {
        let image = temp_file(".png", PNG_HEADER);
        let mut app = app_with_selection(&image).await;
        type_text(&mut app, "  ").await;

        assert!(matches!(handle_event(&mut app, key(KeyCode::Enter)).await, Action::Submit(_)));
    }

    #[tokio::test]
    async fn test_f5_submits_once() {
        let image = temp_file(".png", PNG_HEADER);
        let mut app = app_with_selection(&image).await;

        assert!(matches!(handle_event(&mut app, key(KeyCode::F(5))).await, Action::Submit(_)));
        assert_eq!(handle_event(&mut app, key(KeyCode::F(5))).await, Action::None);
        assert_eq!(handle_event(&mut app, key(KeyCode::Enter)).await, Action::None);
    }

    #[tokio::test]
    async fn test_trigger_without_file_does_nothing() {
        let mut app = App::new();
        assert_eq!(handle_event(&mut app, key(KeyCode::F(5))).await, Action::None);
        assert_eq!(handle_event(&mut app, key(KeyCode::Enter)).await, Action::None);
        assert_eq!(app.state, UiState::Idle);
    }

    #[tokio::test]
    async fn test_esc_clears_input_then_quits() {
        let mut app = App::new();
        type_text(&mut app, "abc").await;
        handle_event(&mut app, key(KeyCode::Backspace)).await;
        assert_eq!(app.input, "ab");

        handle_event(&mut app, key(KeyCode::Esc)).await;
        assert!(app.input.is_empty());
        assert!(!app.should_quit);

        handle_event(&mut app, key(KeyCode::Esc)).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_with_input() {
        let mut app = App::new();
        type_text(&mut app, "half typed").await;
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        handle_event(&mut app, ctrl_c).await;
        assert!(app.should_quit);
        assert_eq!(app.input, "half typed");
    }

    #[tokio::test]
    async fn test_key_release_is_ignored() {
        let mut app = App::new();
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;

        handle_event(&mut app, Event::Key(release)).await;
        assert!(app.input.is_empty());
    }

    #[tokio::test]
    async fn test_pasted_non_image_leaves_trigger_disabled() {
        let text = temp_file(".txt", b"just some notes");
        let mut app = App::new();

        handle_event(&mut app, Event::Paste(text.path().display().to_string())).await;
        assert!(!app.can_submit());
        assert_eq!(app.state, UiState::Idle);
        let notification = app.notification.as_ref().unwrap();
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert_eq!(handle_event(&mut app, key(KeyCode::F(5))).await, Action::None);
    }

    #[tokio::test]
    async fn test_paste_of_several_paths_keeps_first() {
        let first = temp_file(".png", PNG_HEADER);
        let second = temp_file(".png", PNG_HEADER);
        let mut app = App::new();
        let pasted = format!("'{}' '{}'\n", first.path().display(), second.path().display());

        handle_event(&mut app, Event::Paste(pasted)).await;
        let selected = app.selected_file.as_ref().unwrap();
        assert_eq!(selected.path, first.path());
        assert!(app.can_submit());
    }

    #[tokio::test]
    async fn test_notification_blocks_until_dismissed() {
        let image = temp_file(".png", PNG_HEADER);
        let mut app = App::new();
        app.notify(NotificationKind::Error, "Error: invalid image".to_string());

        type_text(&mut app, "x").await;
        handle_event(&mut app, Event::Paste(image.path().display().to_string())).await;
        assert!(app.input.is_empty());
        assert!(app.selected_file.is_none());

        handle_event(&mut app, key(KeyCode::Enter)).await;
        assert!(app.notification.is_none());
    }

    #[tokio::test]
    async fn test_unreadable_typed_path_keeps_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        type_text(&mut app, &dir.path().join("gone.png").display().to_string()).await;

        handle_event(&mut app, key(KeyCode::Enter)).await;
        assert!(!app.input.is_empty());
        assert!(app.notification.is_some());
        assert!(!app.can_submit());
    }
}

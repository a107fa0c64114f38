//! Keyboard-driven sessions through the TUI input layer.

use std::path::Path;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use snap_engine::{App, AppSettings, Clipboard, QuestionCatalog, ResultCatalog, Screen};
use snap_tui::apply_event;
use tempfile::tempdir;

#[derive(Default)]
struct Recorder(Vec<String>);

impl Clipboard for Recorder {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.0.push(text.to_string());
        Ok(())
    }
}

fn app_exporting_to(dir: &Path) -> App {
    let mut settings = AppSettings::default();
    settings.share_base_url = "https://mbti-snap.app".to_string();
    settings.export_dir = dir.to_path_buf();
    App::with_catalogs(
        QuestionCatalog::builtin().expect("questions"),
        ResultCatalog::builtin().expect("results"),
        settings,
    )
}

fn type_keys(app: &mut App, clipboard: &mut Recorder, keys: &[KeyCode]) -> bool {
    let mut quit = false;
    for code in keys {
        quit = apply_event(
            app,
            &Event::Key(KeyEvent::new(*code, KeyModifiers::NONE)),
            clipboard,
        );
    }
    quit
}

#[test]
fn full_quiz_then_save_and_share() {
    let dir = tempdir().expect("tempdir");
    let mut app = app_exporting_to(dir.path());
    let mut clipboard = Recorder::default();

    type_keys(&mut app, &mut clipboard, &[KeyCode::Enter]);
    type_keys(&mut app, &mut clipboard, &[KeyCode::Char('2'); 12]);
    assert_eq!(app.result_code(), Some("INFP"));

    type_keys(&mut app, &mut clipboard, &[KeyCode::Char('s')]);
    assert!(dir.path().join("mbti_result_INFP.txt").exists());

    type_keys(&mut app, &mut clipboard, &[KeyCode::Char('p')]);
    let shared = clipboard.0.last().expect("share text copied");
    assert!(shared.starts_with("INFP - The Dreaming Mediator\n"));
    assert!(shared.ends_with("https://mbti-snap.app/result/INFP"));
}

#[test]
fn going_back_keeps_earlier_answers() {
    let dir = tempdir().expect("tempdir");
    let mut app = app_exporting_to(dir.path());
    let mut clipboard = Recorder::default();

    type_keys(
        &mut app,
        &mut clipboard,
        &[
            KeyCode::Enter,
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Char('h'),
            KeyCode::Char('h'),
        ],
    );
    assert_eq!(
        app.screen(),
        &Screen::Question {
            step: 0,
            selected: 0
        }
    );
    assert_eq!(app.ledger().len(), 2);

    type_keys(&mut app, &mut clipboard, &[KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.ledger().len(), 2);
    assert_eq!(app.selected_option(), Some(1));
}

#[test]
fn quit_from_result_screen() {
    let dir = tempdir().expect("tempdir");
    let mut app = app_exporting_to(dir.path());
    let mut clipboard = Recorder::default();
    app.open_result("ENFP");
    assert!(type_keys(&mut app, &mut clipboard, &[KeyCode::Char('q')]));
}

#[test]
fn retest_key_clears_ledger() {
    let dir = tempdir().expect("tempdir");
    let mut app = app_exporting_to(dir.path());
    let mut clipboard = Recorder::default();

    type_keys(&mut app, &mut clipboard, &[KeyCode::Enter]);
    type_keys(&mut app, &mut clipboard, &[KeyCode::Char('1'); 12]);
    type_keys(&mut app, &mut clipboard, &[KeyCode::Char('r')]);

    assert_eq!(app.screen(), &Screen::Home);
    assert!(app.ledger().is_empty());
}

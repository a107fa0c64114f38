//! Whole-session behavior through the engine API.

use std::fs;
use std::path::Path;

use snap_engine::{
    App, AppSettings, Axis, Clipboard, Letter, QuestionCatalog, ResultCatalog, Screen, TypeCode,
};
use snap_types::ui::UiOptions;
use tempfile::tempdir;

fn settings(export_dir: &Path) -> AppSettings {
    AppSettings {
        ui_options: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        share_base_url: "https://quiz.example/".to_string(),
        export_dir: export_dir.to_path_buf(),
    }
}

fn app(export_dir: &Path) -> App {
    App::with_catalogs(
        QuestionCatalog::builtin().expect("questions"),
        ResultCatalog::builtin().expect("results"),
        settings(export_dir),
    )
}

fn answer_with(app: &mut App, pick: impl Fn(Axis) -> Letter) -> Option<TypeCode> {
    app.start();
    let mut derived = None;
    while let Some(question) = app.current_question().cloned() {
        let wanted = pick(question.axis);
        let choice = question
            .options
            .iter()
            .position(|option| option.value == wanted)
            .expect("axis letter offered");
        derived = app.answer(choice);
    }
    derived
}

struct Unavailable;

impl Clipboard for Unavailable {
    fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
        anyhow::bail!("clipboard unavailable")
    }
}

#[test]
fn every_type_is_reachable() {
    let dir = tempdir().expect("tempdir");
    for code in TypeCode::all() {
        let mut app = app(dir.path());
        let derived = answer_with(&mut app, |axis| code.letter(axis));
        assert_eq!(derived, Some(code));

        let profile = app.result_profile().expect("profile");
        assert!(!profile.is_unknown(), "{code} has no profile");
    }
}

#[test]
fn changing_one_axis_on_retake_changes_one_letter() {
    let dir = tempdir().expect("tempdir");
    let mut app = app(dir.path());
    answer_with(&mut app, Axis::primary);
    assert_eq!(app.result_code(), Some("ESTJ"));

    app.retest();
    answer_with(&mut app, |axis| {
        if axis == Axis::Judgment {
            axis.secondary()
        } else {
            axis.primary()
        }
    });
    assert_eq!(app.result_code(), Some("ESFJ"));
}

#[test]
fn share_link_uses_configured_base() {
    let dir = tempdir().expect("tempdir");
    let mut app = app(dir.path());
    answer_with(&mut app, Axis::secondary);
    assert_eq!(
        app.share_url().as_deref(),
        Some("https://quiz.example/result/INFP")
    );
}

#[test]
fn shared_link_opens_without_answers() {
    let dir = tempdir().expect("tempdir");
    let mut app = app(dir.path());
    app.open_result(" entp ");

    // Codes from links are not normalized.
    assert_eq!(app.result_code(), Some("entp"));
    assert!(app.result_profile().expect("profile").is_unknown());
    assert!(app.ledger().is_empty());

    app.retest();
    assert_eq!(app.screen(), &Screen::Home);
}

#[test]
fn share_without_clipboard_saves_card() {
    let dir = tempdir().expect("tempdir");
    let mut app = app(dir.path());
    answer_with(&mut app, Axis::primary);
    app.share(&mut Unavailable);

    let card = fs::read_to_string(dir.path().join("mbti_result_ESTJ.txt")).expect("card saved");
    assert!(card.starts_with("MBTI Snap result\n"));
    assert!(card.contains("ESTJ - The Efficient Organizer"));
    assert!(card.contains("Share: https://quiz.example/result/ESTJ"));
}

#[test]
fn export_overwrites_previous_card() {
    let dir = tempdir().expect("tempdir");
    let mut app = app(dir.path());
    app.open_result("ISTP");
    let first = app.export_card().expect("first export");

    app.retest();
    app.open_result("ISTP");
    let second = app.export_card().expect("second export");

    assert_eq!(first, second);
    let entries = fs::read_dir(dir.path()).expect("read dir").count();
    assert_eq!(entries, 1);
}

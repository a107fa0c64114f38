//! Unit tests for the engine crate.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use tempfile::tempdir;

use super::*;

fn test_settings() -> AppSettings {
    AppSettings {
        ui_options: UiOptions::default(),
        share_base_url: "https://mbti-snap.app".to_string(),
        export_dir: PathBuf::from("."),
    }
}

fn test_app() -> App {
    App::with_catalogs(
        QuestionCatalog::builtin().expect("builtin questions"),
        ResultCatalog::builtin().expect("builtin results"),
        test_settings(),
    )
}

/// Answer every question so its axis gets `pick(axis)`.
fn complete_quiz(app: &mut App, pick: impl Fn(Axis) -> Letter) -> Option<TypeCode> {
    app.start();
    let mut last = None;
    while let Some(question) = app.current_question().cloned() {
        let wanted = pick(question.axis);
        let choice = question
            .options
            .iter()
            .position(|option| option.value == wanted)
            .expect("letter offered");
        last = app.answer(choice);
    }
    last
}

#[derive(Default)]
struct RecordingClipboard {
    copied: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> anyhow::Result<()> {
        Err(anyhow!("no display"))
    }
}

#[test]
fn new_app_starts_home_with_empty_ledger() {
    let app = test_app();
    assert_eq!(app.screen(), &Screen::Home);
    assert!(app.ledger().is_empty());
    assert_eq!(app.progress(), None);
    assert!(app.result_code().is_none());
}

#[test]
fn start_shows_first_question() {
    let mut app = test_app();
    app.start();
    assert_eq!(
        app.screen(),
        &Screen::Question {
            step: 0,
            selected: 0
        }
    );
    assert_eq!(app.progress(), Some((1, 12)));
    assert_eq!(app.current_question().map(|q| q.id.value()), Some(1));
}

#[test]
fn all_primary_run_ends_on_estj() {
    let mut app = test_app();
    let code = complete_quiz(&mut app, Axis::primary);
    assert_eq!(code.map(|c| c.to_string()).as_deref(), Some("ESTJ"));
    assert_eq!(app.result_code(), Some("ESTJ"));
    assert_eq!(app.ledger().len(), 12);
}

#[test]
fn all_secondary_run_ends_on_infp() {
    let mut app = test_app();
    complete_quiz(&mut app, Axis::secondary);
    assert_eq!(app.result_code(), Some("INFP"));

    let tally = app.result_tally().expect("tally for derived result");
    for axis in Axis::ALL {
        assert_eq!(tally.count(axis.secondary()), 3);
        assert_eq!(tally.count(axis.primary()), 0);
    }
}

#[test]
fn result_matches_ledger_derivation() {
    let mut app = test_app();
    app.start();
    for choice in [0, 1, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0] {
        app.answer(choice);
    }
    let expected = derive(app.ledger().snapshot(), app.questions().questions());
    assert_eq!(app.result_code(), Some(expected.to_string().as_str()));

    let tally = app.result_tally().expect("tally");
    assert_eq!(tally.code(), expected);
    assert_eq!(app.ledger().len(), 12);
}

#[test]
fn only_final_answer_derives() {
    let mut app = test_app();
    app.start();
    for _ in 0..11 {
        assert!(app.answer(1).is_none());
    }
    assert_eq!(app.progress(), Some((12, 12)));
    assert!(app.answer(1).is_some());
    assert!(matches!(app.screen(), Screen::Result { .. }));
}

#[test]
fn out_of_range_choice_is_ignored() {
    let mut app = test_app();
    app.start();
    assert!(app.answer(5).is_none());
    assert_eq!(app.progress(), Some((1, 12)));
    assert!(app.ledger().is_empty());
}

#[test]
fn answer_outside_question_screen_is_ignored() {
    let mut app = test_app();
    assert!(app.answer(0).is_none());
    assert!(app.ledger().is_empty());
}

#[test]
fn back_then_reanswer_overwrites() {
    let mut app = test_app();
    app.start();
    app.answer(0); // q1 -> E
    app.back();
    assert_eq!(app.progress(), Some((1, 12)));
    assert_eq!(app.selected_option(), Some(0));

    app.answer(1); // q1 -> I
    assert_eq!(app.ledger().len(), 1);
    assert_eq!(
        app.ledger().get(snap_types::QuestionId::new(1)),
        Some(Letter::I)
    );
}

#[test]
fn back_from_first_question_returns_home() {
    let mut app = test_app();
    app.start();
    app.back();
    assert_eq!(app.screen(), &Screen::Home);
}

#[test]
fn selection_is_clamped_to_options() {
    let mut app = test_app();
    app.start();
    app.select_prev();
    assert_eq!(app.selected_option(), Some(0));
    app.select_next();
    app.select_next();
    assert_eq!(app.selected_option(), Some(1));

    app.confirm_selection();
    assert_eq!(
        app.ledger().get(snap_types::QuestionId::new(1)),
        Some(Letter::I)
    );
}

#[test]
fn retest_resets_everything() {
    let mut app = test_app();
    complete_quiz(&mut app, Axis::secondary);
    app.retest();

    assert_eq!(app.screen(), &Screen::Home);
    assert!(app.ledger().is_empty());
    assert!(app.result_tally().is_none());
    assert!(app.progress_ratio().abs() < f32::EPSILON);

    let code = complete_quiz(&mut app, Axis::primary);
    assert_eq!(code, Some(TypeCode::all_primary()));
}

#[test]
fn open_result_uses_code_verbatim() {
    let mut app = test_app();
    app.open_result("ENFJ");
    assert_eq!(app.result_code(), Some("ENFJ"));
    assert!(app.result_tally().is_none());
    let profile = app.result_profile().expect("profile");
    assert!(!profile.is_unknown());
}

#[test]
fn open_result_with_unknown_code_falls_back() {
    let mut app = test_app();
    app.open_result("QQQQ");
    let profile = app.result_profile().expect("profile");
    assert!(profile.is_unknown());
    assert_eq!(
        app.share_url().as_deref(),
        Some("https://mbti-snap.app/result/QQQQ")
    );
}

#[test]
fn share_payload_matches_result() {
    let mut app = test_app();
    complete_quiz(&mut app, Axis::primary);
    let payload = app.share_payload().expect("payload");
    assert_eq!(payload.title, "ESTJ - The Efficient Organizer");
    assert_eq!(payload.url, "https://mbti-snap.app/result/ESTJ");
    assert!(payload.text.starts_with("Decisive and practical."));
}

#[test]
fn copy_link_sets_status() {
    let mut app = test_app();
    app.open_result("INTP");
    let mut clipboard = RecordingClipboard::default();
    app.copy_link(&mut clipboard);

    assert_eq!(clipboard.copied, vec!["https://mbti-snap.app/result/INTP"]);
    let status = app.status_message().expect("status");
    assert_eq!(status.text(), "Link copied!");
    assert_eq!(status.kind(), StatusKind::Info);
}

#[test]
fn copy_link_failure_reports_error() {
    let mut app = test_app();
    app.open_result("INTP");
    app.copy_link(&mut BrokenClipboard);
    assert_eq!(
        app.status_message().map(StatusMessage::kind),
        Some(StatusKind::Error)
    );
}

#[test]
fn share_falls_back_to_export_without_clipboard() {
    let dir = tempdir().expect("tempdir");
    let mut settings = test_settings();
    settings.export_dir = dir.path().to_path_buf();
    let mut app = App::with_catalogs(
        QuestionCatalog::builtin().expect("questions"),
        ResultCatalog::builtin().expect("results"),
        settings,
    );
    app.open_result("ISFP");
    app.share(&mut BrokenClipboard);

    let path = dir.path().join("mbti_result_ISFP.txt");
    assert!(path.exists());
    let status = app.status_message().expect("status");
    assert!(status.text().contains("Upload it to share"));
}

#[test]
fn export_writes_card_with_tally() {
    let dir = tempdir().expect("tempdir");
    let mut app = test_app();
    complete_quiz(&mut app, Axis::secondary);

    let path = app.export_card_to(dir.path()).expect("export");
    assert_eq!(path, dir.path().join("mbti_result_INFP.txt"));
    let card = std::fs::read_to_string(&path).expect("read card");
    assert!(card.contains("INFP - The Dreaming Mediator"));
    assert!(card.contains("Energy      E 0 | I 3"));
    assert!(card.contains("Share: https://mbti-snap.app/result/INFP"));
}

#[test]
fn export_without_result_fails() {
    let mut app = test_app();
    let dir = tempdir().expect("tempdir");
    assert!(matches!(
        app.export_card_to(dir.path()),
        Err(ExportError::NoResult)
    ));
}

#[test]
fn export_to_missing_dir_reports_error() {
    let dir = tempdir().expect("tempdir");
    let mut app = test_app();
    app.open_result("ESFP");
    let err = app
        .export_card_to(&dir.path().join("nope"))
        .expect_err("missing dir");
    assert!(matches!(err, ExportError::Write { .. }));
    assert_eq!(
        app.status_message().map(StatusMessage::kind),
        Some(StatusKind::Error)
    );
}

#[test]
fn status_expires_after_ttl() {
    let mut app = test_app();
    app.open_result("INTP");
    app.copy_link(&mut RecordingClipboard::default());
    assert!(app.status_message().is_some());

    app.advance(Duration::ZERO, Instant::now() + Duration::from_secs(1));
    assert!(app.status_message().is_some());

    app.advance(Duration::ZERO, Instant::now() + Duration::from_secs(10));
    assert!(app.status_message().is_none());
}

#[test]
fn progress_animates_toward_step_ratio() {
    let mut app = test_app();
    app.start();
    let target = 1.0 / 12.0;
    assert!(app.progress_ratio() < target);

    app.advance(Duration::from_secs(1), Instant::now());
    assert!((app.progress_ratio() - target).abs() < 1e-6);
}

#[test]
fn reduced_motion_jumps_progress() {
    let mut settings = test_settings();
    settings.ui_options.reduced_motion = true;
    let mut app = App::with_catalogs(
        QuestionCatalog::builtin().expect("questions"),
        ResultCatalog::builtin().expect("results"),
        settings,
    );
    app.start();
    app.answer(0);
    assert!((app.progress_ratio() - 2.0 / 12.0).abs() < 1e-6);
}

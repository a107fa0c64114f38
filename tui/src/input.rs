//! Input handling for the MBTI Snap TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use snap_engine::{App, Clipboard, Screen};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and queues them for the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a reader blocked on a full queue wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued events into `app`. Returns `true` once the app should exit.
pub fn handle_events(
    app: &mut App,
    input: &mut InputPump,
    clipboard: &mut dyn Clipboard,
) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev, clipboard) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply a single terminal event. Returns `true` once the app should exit.
pub fn apply_event(app: &mut App, event: &Event, clipboard: &mut dyn Clipboard) -> bool {
    let Event::Key(key) = event else {
        return app.should_quit();
    };
    if matches!(key.kind, KeyEventKind::Release) {
        return app.should_quit();
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return true;
    }

    match app.screen() {
        Screen::Home => handle_home(app, *key),
        Screen::Question { .. } => handle_question(app, *key),
        Screen::Result { .. } => handle_result(app, *key, clipboard),
    }
    app.should_quit()
}

fn handle_home(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.start(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_question(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(code) = app.confirm_selection() {
                debug!(%code, "Quiz finished from keyboard");
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let choice = c as usize - '1' as usize;
            app.answer(choice);
        }
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') | KeyCode::Esc => app.back(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_result(app: &mut App, key: KeyEvent, clipboard: &mut dyn Clipboard) {
    match key.code {
        KeyCode::Char('s') => {
            // Status line already reports the outcome.
            let _ = app.export_card();
        }
        KeyCode::Char('c') => app.copy_link(clipboard),
        KeyCode::Char('p') => app.share(clipboard),
        KeyCode::Char('r') => app.retest(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

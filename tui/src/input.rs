//! Input handling for the advisor TUI.

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

use advisor_engine::{App, FormField, SubmitOutcome};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the UI loop.
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

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
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
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
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

/// Drain pending events into `app`. Returns `true` once the app wants to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
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

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns `true` if the app should quit.
///
/// Submitting spawns the request, so this must run inside a tokio runtime.
pub fn apply_event(app: &mut App, ev: Event) -> bool {
    match ev {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if app.focus() == FormField::Email {
                app.form_mut().edit_email(|input| input.enter_text(&text));
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.request_quit();
            return;
        }
        KeyCode::Char('s') if ctrl => {
            submit(app);
            return;
        }
        KeyCode::Esc => {
            app.request_quit();
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::PageUp => {
            app.view_mut().scroll_page_up();
            return;
        }
        KeyCode::PageDown => {
            app.view_mut().scroll_page_down();
            return;
        }
        _ => {}
    }

    match app.focus() {
        FormField::Email => handle_email_key(app, key, ctrl),
        FormField::Industries => match key.code {
            KeyCode::Up => app.industry_cursor_up(),
            KeyCode::Down => app.industry_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_industry_at_cursor(),
            _ => {}
        },
        FormField::Revenue | FormField::Budget | FormField::Interest => match key.code {
            KeyCode::Left => app.adjust_focused(false),
            KeyCode::Right => app.adjust_focused(true),
            KeyCode::Up => app.focus_prev(),
            KeyCode::Down | KeyCode::Enter => app.focus_next(),
            _ => {}
        },
        FormField::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => submit(app),
            KeyCode::Up => app.focus_prev(),
            KeyCode::Down => app.focus_next(),
            _ => {}
        },
    }
}

fn handle_email_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char('w') if ctrl => app.form_mut().edit_email(|i| i.delete_word_backwards()),
        KeyCode::Char('u') if ctrl => app.form_mut().edit_email(|i| i.clear()),
        KeyCode::Char(c) if !ctrl => app.form_mut().edit_email(|i| i.enter_char(c)),
        KeyCode::Backspace => app.form_mut().edit_email(|i| i.delete_char()),
        KeyCode::Delete => app.form_mut().edit_email(|i| i.delete_char_forward()),
        KeyCode::Left => app.adjust_focused(false),
        KeyCode::Right => app.adjust_focused(true),
        KeyCode::Home => app.form_mut().edit_email(|i| i.move_cursor_home()),
        KeyCode::End => app.form_mut().edit_email(|i| i.move_cursor_end()),
        KeyCode::Down | KeyCode::Enter => app.focus_next(),
        KeyCode::Up => app.focus_prev(),
        _ => {}
    }
}

fn submit(app: &mut App) {
    let outcome = app.submit();
    debug!(?outcome, "Submit requested");
    match outcome {
        SubmitOutcome::Blocked => app.set_focus(FormField::Email),
        SubmitOutcome::Started | SubmitOutcome::AlreadySubmitting => {}
    }
}

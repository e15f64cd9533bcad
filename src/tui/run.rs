//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Ticker thread: a fixed heartbeat driving the timer queue
//! The event loop consumes from the channel, dispatching to pure
//! handlers and feeding their follow-ups into the scheduler.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::timer::Scheduler;
use crate::transcript::SessionEvent;
use crate::types::DemoTiming;

use super::state::{Action, App, AppEvent, FollowUp, ScheduledEffect};
use super::update::{apply_intent, apply_scheduled, cancel_demo, intent_for};
use super::view::render;

// ============================================================================
// OPTIONS
// ============================================================================

/// Knobs for an interactive session.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub timing: DemoTiming,
    /// Start the scripted typing sequence after the intro delay.
    pub demo_intro: bool,
    /// Heartbeat period for the ticker thread.
    pub tick: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            timing: DemoTiming::default(),
            demo_intro: true,
            tick: Duration::from_millis(50),
        }
    }
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// With the composer focused, printable keys become input; otherwise
/// letters are screen commands. Returns None for keys that map to
/// nothing in the current mode.
pub fn map_key(key: KeyEvent, composer_active: bool) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if composer_active {
        return match key.code {
            KeyCode::Char(c) => Some(Action::Char(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Tab => Some(Action::ToggleFocus),
            _ => None,
        };
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab => Some(Action::ToggleFocus),

        // Screen commands
        KeyCode::Char('m') => Some(Action::Mic),
        KeyCode::Char('r') => Some(Action::Reply),
        KeyCode::Char('g') => Some(Action::Quote),
        KeyCode::Char('s') => Some(Action::SubscribeCta),
        KeyCode::Char('c') => Some(Action::Continue),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

/// Spawn a thread that sends a heartbeat at a fixed cadence.
fn spawn_ticker(tx: mpsc::Sender<AppEvent>, period: Duration) {
    thread::spawn(move || {
        loop {
            thread::sleep(period);
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Feed pure-layer follow-ups into the scheduler.
fn arm(scheduler: &mut Scheduler<ScheduledEffect>, follow_ups: Vec<FollowUp>, now: Instant) {
    for follow_up in follow_ups {
        match follow_up {
            FollowUp::Once(effect, delay) => scheduler.schedule_once(effect, delay, now),
            FollowUp::Every(effect, interval) => scheduler.schedule_every(effect, interval, now),
            FollowUp::Cancel(effect) => scheduler.cancel(effect),
        }
    }
}

/// Run the interactive session until the user quits.
///
/// Returns the session transcript so the caller can print or dump it.
pub fn run(options: RunOptions) -> io::Result<Vec<SessionEvent>> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let mut app = App::new(options.timing.clone(), Local::now().naive_local());
    let mut scheduler: Scheduler<ScheduledEffect> = Scheduler::new();

    let start = Instant::now();
    scheduler.schedule_every(
        ScheduledEffect::ClockRefresh,
        options.timing.clock_refresh,
        start,
    );
    if options.demo_intro {
        scheduler.schedule_once(ScheduledEffect::DemoStart, options.timing.intro, start);
    }

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());
    spawn_ticker(tx, options.tick);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                let now = Instant::now();
                // The first real keypress takes the session over from
                // the scripted demo.
                arm(&mut scheduler, cancel_demo(&mut app), now);
                if let Some(action) = map_key(key, app.composer_active())
                    && let Some(intent) = intent_for(&app, &action)
                {
                    let follow_ups = apply_intent(&mut app, intent);
                    arm(&mut scheduler, follow_ups, now);
                }
            }
            AppEvent::Tick => {
                let now = Instant::now();
                app.entrance = app.entrance.saturating_add(1);
                for effect in scheduler.pop_due(now) {
                    if effect == ScheduledEffect::ClockRefresh {
                        app.clock = Local::now().naive_local();
                        continue;
                    }
                    let follow_ups = apply_scheduled(&mut app, effect);
                    arm(&mut scheduler, follow_ups, now);
                }
            }
        }
    }

    restore_terminal()?;
    Ok(app.transcript)
}

// ============================================================================
// TESTS
// ============================================================================

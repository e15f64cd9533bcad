//! TUI state algebra: pure types, zero effects.
//!
//! The [`App`] owns the screen controller plus every piece of transient
//! presentation state (composer buffer, cursors, toast, demo progress).
//! The transition layer (`update`) and the rendering layer (`view`) both
//! program against these types; only `run` touches the terminal.

use chrono::NaiveDateTime;
use std::time::Duration;

use crate::controller::ScreenController;
use crate::transcript::SessionEvent;
use crate::types::{DemoTiming, Vendor};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel: a key reader thread sends
/// `Key` variants and a ticker thread sends `Tick` at a fixed cadence.
/// Ticks drive the timer queue and the entrance reveal.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(crossterm::event::KeyEvent),
    /// Periodic heartbeat from the ticker thread.
    Tick,
}

// ============================================================================
// ACTIONS AND INTENTS
// ============================================================================

/// Semantic key vocabulary, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; what an Action means
/// depends on the current screen (see `update::intent_for`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Enter,
    Back,
    /// Toggle home-screen focus between shortcuts and composer.
    ToggleFocus,
    /// Printable input while the composer is focused.
    Char(char),
    Backspace,
    /// Screen-local CTA letters.
    Mic,
    Reply,
    Quote,
    SubscribeCta,
    Continue,
    Quit,
}

/// A discrete user intent, the vocabulary the controller consumes.
///
/// `intent_for` resolves (screen, focus, action) to one of these;
/// `apply_intent` executes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    CursorUp,
    CursorDown,
    FocusComposer,
    BlurComposer,
    Insert(char),
    DeleteBack,
    /// Submit the composer text for simulated processing.
    Submit,
    /// Start simulated voice capture.
    StartVoice,
    /// Activate the shortcut at the given index.
    ActivateShortcut(usize),
    /// Reply to the personal message.
    Reply,
    /// Choose a comparison option and open its detail page.
    SelectVendor(Vendor),
    /// The unified-quote CTA on the comparison screen.
    UnifiedQuote,
    /// Quote request from the vendor detail page.
    RequestQuote,
    /// Open the story at the given index (0 = breaking banner).
    OpenStory(usize),
    /// The subscribe CTA on the news front page.
    Subscribe,
    /// The continue button on the paywall.
    ContinueSubscription,
    /// Navigate back from the current screen.
    GoBack,
    Quit,
}

// ============================================================================
// SCHEDULED EFFECTS
// ============================================================================

/// Delayed effects owned by the timer queue. One pending deadline per
/// variant (see [`crate::timer::Scheduler`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledEffect {
    /// Refresh the displayed clock.
    ClockRefresh,
    /// Simulated AI processing finished; move to the comparison screen.
    FinishProcessing,
    /// Simulated voice capture finished; fill the composer.
    FinishVoice,
    /// Auto-dismiss the current toast.
    DismissToast,
    /// Intro delay elapsed; begin the demo typing sequence.
    DemoStart,
    /// Type the next demo character.
    DemoKeystroke,
    /// Demo finished typing; press send.
    DemoSend,
}

/// Timer instruction returned by a pure transition. The effects layer
/// feeds these into the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Once(ScheduledEffect, Duration),
    Every(ScheduledEffect, Duration),
    Cancel(ScheduledEffect),
}

// ============================================================================
// PER-SCREEN TRANSIENT STATE
// ============================================================================

/// Which home-screen region receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Shortcuts,
    Composer,
}

/// Progress of the scripted typing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPhase {
    /// Waiting for the intro delay.
    Pending,
    /// Typing the demo request; index of the next character.
    Typing(usize),
    /// Typed everything, waiting to press send.
    AwaitingSend,
    /// Ran to completion (request submitted).
    Done,
    /// Aborted by a user keypress.
    Canceled,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// The navigation state machine. Owns current screen, vendor
    /// selection, and the subscription flag.
    pub controller: ScreenController,
    /// All demo delays.
    pub timing: DemoTiming,

    /// Home-screen focus.
    pub focus: Focus,
    /// Composer buffer.
    pub composer: String,
    /// Send is in flight (simulated processing).
    pub processing: bool,
    /// Mic capture is in flight.
    pub listening: bool,

    /// Cursor over the shortcut cards (Home).
    pub shortcut_cursor: usize,
    /// Cursor over the vendor cards (Comparison).
    pub vendor_cursor: usize,
    /// Cursor over stories (NewsHome); 0 is the breaking banner.
    pub story_cursor: usize,

    /// Current toast, if any.
    pub toast: Option<String>,
    /// Scripted demo progress.
    pub demo: DemoPhase,
    /// Displayed wall-clock value, refreshed by timer.
    pub clock: NaiveDateTime,
    /// Ticks since the last screen activation; drives the entrance
    /// reveal in the view layer. Saturates.
    pub entrance: u16,

    /// Session event log.
    pub transcript: Vec<SessionEvent>,
    /// Set to true when the app should exit on the next loop.
    pub should_quit: bool,
}

impl App {
    pub fn new(timing: DemoTiming, clock: NaiveDateTime) -> Self {
        Self {
            controller: ScreenController::new(),
            timing,
            focus: Focus::default(),
            composer: String::new(),
            processing: false,
            listening: false,
            shortcut_cursor: 0,
            vendor_cursor: 0,
            story_cursor: 0,
            toast: None,
            demo: DemoPhase::Pending,
            clock,
            entrance: 0,
            transcript: Vec::new(),
            should_quit: false,
        }
    }

    /// True while the composer should receive printable keys.
    pub fn composer_active(&self) -> bool {
        self.controller.current_screen() == crate::types::ScreenId::Home
            && self.focus == Focus::Composer
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScreenId;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 6, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn app_starts_on_home_with_defaults() {
        let app = App::new(DemoTiming::default(), noon());
        assert_eq!(app.controller.current_screen(), ScreenId::Home);
        assert_eq!(app.focus, Focus::Shortcuts);
        assert!(app.composer.is_empty());
        assert!(!app.processing);
        assert_eq!(app.demo, DemoPhase::Pending);
        assert!(app.transcript.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn composer_only_active_on_home_with_composer_focus() {
        let mut app = App::new(DemoTiming::default(), noon());
        assert!(!app.composer_active());
        app.focus = Focus::Composer;
        assert!(app.composer_active());
        app.controller.navigate(ScreenId::Comparison);
        assert!(!app.composer_active());
    }
}

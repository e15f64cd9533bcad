//! Pure state transitions.
//!
//! Three functions, all side-effect free and fully testable without a
//! terminal:
//!
//! - [`intent_for`] resolves (current screen, focus, action) to a user
//!   intent. Actions a screen does not accept resolve to nothing.
//! - [`apply_intent`] executes an intent against the [`App`], returning
//!   the timer follow-ups for the effects layer.
//! - [`apply_scheduled`] handles a fired timer effect the same way.

use crate::content::{
    self, DEMO_REQUEST, REPLY_CONFIRMATION, UNIFIED_QUOTE_TOAST,
};
use crate::transcript::{events_for_change, SessionEvent};
use crate::types::{ScreenId, Vendor};

use super::state::{Action, App, DemoPhase, Focus, FollowUp, Intent, ScheduledEffect};

// ============================================================================
// ACTION -> INTENT
// ============================================================================

/// What an action means on the current screen.
pub fn intent_for(app: &App, action: &Action) -> Option<Intent> {
    if *action == Action::Quit {
        return Some(Intent::Quit);
    }
    match app.controller.current_screen() {
        ScreenId::Home => intent_on_home(app, action),
        ScreenId::Comparison => intent_on_comparison(app, action),
        ScreenId::VendorDetail => intent_on_vendor_detail(action),
        ScreenId::NewsHome => intent_on_news_home(app, action),
        ScreenId::NewsPaywall => intent_on_paywall(action),
        ScreenId::NewsArticle => intent_on_article(action),
    }
}

fn intent_on_home(app: &App, action: &Action) -> Option<Intent> {
    match app.focus {
        Focus::Composer => match action {
            Action::Char(c) => Some(Intent::Insert(*c)),
            Action::Backspace => Some(Intent::DeleteBack),
            Action::Enter => Some(Intent::Submit),
            Action::Back | Action::ToggleFocus => Some(Intent::BlurComposer),
            _ => None,
        },
        Focus::Shortcuts => match action {
            Action::MoveUp => Some(Intent::CursorUp),
            Action::MoveDown => Some(Intent::CursorDown),
            Action::Enter => Some(Intent::ActivateShortcut(app.shortcut_cursor)),
            Action::ToggleFocus => Some(Intent::FocusComposer),
            Action::Mic => Some(Intent::StartVoice),
            Action::Reply => Some(Intent::Reply),
            _ => None,
        },
    }
}

fn intent_on_comparison(app: &App, action: &Action) -> Option<Intent> {
    match action {
        Action::MoveUp => Some(Intent::CursorUp),
        Action::MoveDown => Some(Intent::CursorDown),
        Action::Enter => Some(Intent::SelectVendor(Vendor::ALL[app.vendor_cursor])),
        Action::Quote => Some(Intent::UnifiedQuote),
        Action::Back => Some(Intent::GoBack),
        _ => None,
    }
}

fn intent_on_vendor_detail(action: &Action) -> Option<Intent> {
    match action {
        Action::Quote => Some(Intent::RequestQuote),
        Action::Back => Some(Intent::GoBack),
        _ => None,
    }
}

fn intent_on_news_home(app: &App, action: &Action) -> Option<Intent> {
    match action {
        Action::MoveUp => Some(Intent::CursorUp),
        Action::MoveDown => Some(Intent::CursorDown),
        Action::Enter => Some(Intent::OpenStory(app.story_cursor)),
        Action::SubscribeCta => Some(Intent::Subscribe),
        Action::Back => Some(Intent::GoBack),
        _ => None,
    }
}

fn intent_on_paywall(action: &Action) -> Option<Intent> {
    match action {
        Action::Continue => Some(Intent::ContinueSubscription),
        Action::Back => Some(Intent::GoBack),
        _ => None,
    }
}

fn intent_on_article(action: &Action) -> Option<Intent> {
    match action {
        Action::Back => Some(Intent::GoBack),
        _ => None,
    }
}

/// Where Back leads from each screen. Home is the root.
fn back_target(screen: ScreenId) -> Option<ScreenId> {
    match screen {
        ScreenId::Home => None,
        ScreenId::Comparison => Some(ScreenId::Home),
        ScreenId::VendorDetail => Some(ScreenId::Comparison),
        ScreenId::NewsHome => Some(ScreenId::Home),
        ScreenId::NewsPaywall | ScreenId::NewsArticle => Some(ScreenId::NewsHome),
    }
}

// ============================================================================
// INTENT EXECUTION
// ============================================================================

/// Execute an intent. Returns timer follow-ups for the effects layer.
pub fn apply_intent(app: &mut App, intent: Intent) -> Vec<FollowUp> {
    match intent {
        Intent::CursorUp => {
            move_cursor(app, -1);
            Vec::new()
        }
        Intent::CursorDown => {
            move_cursor(app, 1);
            Vec::new()
        }
        Intent::FocusComposer => {
            app.focus = Focus::Composer;
            Vec::new()
        }
        Intent::BlurComposer => {
            app.focus = Focus::Shortcuts;
            Vec::new()
        }
        Intent::Insert(c) => {
            if !app.processing {
                app.composer.push(c);
            }
            Vec::new()
        }
        Intent::DeleteBack => {
            app.composer.pop();
            Vec::new()
        }
        Intent::Submit => submit(app),
        Intent::StartVoice => {
            if app.listening {
                return Vec::new();
            }
            app.listening = true;
            vec![FollowUp::Once(
                ScheduledEffect::FinishVoice,
                app.timing.voice_capture,
            )]
        }
        Intent::ActivateShortcut(index) => {
            let Some(shortcut) = content::shortcuts().get(index) else {
                return Vec::new();
            };
            match shortcut.opens {
                Some(screen) => {
                    navigate_to(app, screen);
                    Vec::new()
                }
                None => show_toast(app, content::activation_toast(shortcut.label)),
            }
        }
        Intent::Reply => show_toast(app, REPLY_CONFIRMATION.to_string()),
        Intent::SelectVendor(vendor) => {
            app.controller.select_vendor(vendor);
            app.transcript.push(SessionEvent::VendorSelected { vendor });
            navigate_to(app, ScreenId::VendorDetail);
            Vec::new()
        }
        Intent::UnifiedQuote => {
            app.transcript.push(SessionEvent::QuoteRequested {
                vendors: vec![Vendor::Copperhead, Vendor::KrisTech],
            });
            show_toast(app, UNIFIED_QUOTE_TOAST.to_string())
        }
        Intent::RequestQuote => {
            let Some(vendor) = app.controller.selected_vendor() else {
                return Vec::new();
            };
            app.transcript.push(SessionEvent::QuoteRequested {
                vendors: vec![vendor],
            });
            show_toast(app, content::quote_toast(vendor))
        }
        Intent::OpenStory(index) => {
            let story = if index == 0 {
                content::BREAKING
            } else {
                match content::stories().get(index - 1) {
                    Some(s) => *s,
                    None => return Vec::new(),
                }
            };
            let resolved = app.controller.resolve_news_target(ScreenId::NewsPaywall);
            app.transcript.push(SessionEvent::StoryOpened {
                headline: story.headline.to_string(),
                resolved,
            });
            navigate_to(app, resolved);
            Vec::new()
        }
        Intent::Subscribe => {
            mark_subscribed(app);
            navigate_to(app, ScreenId::NewsPaywall);
            Vec::new()
        }
        Intent::ContinueSubscription => {
            mark_subscribed(app);
            navigate_to(app, ScreenId::NewsHome);
            Vec::new()
        }
        Intent::GoBack => {
            if let Some(target) = back_target(app.controller.current_screen()) {
                navigate_to(app, target);
            }
            Vec::new()
        }
        Intent::Quit => {
            app.should_quit = true;
            Vec::new()
        }
    }
}

fn submit(app: &mut App) -> Vec<FollowUp> {
    let text = app.composer.trim().to_string();
    if text.is_empty() || app.processing {
        return Vec::new();
    }
    app.processing = true;
    app.transcript.push(SessionEvent::RequestSubmitted { text });
    vec![FollowUp::Once(
        ScheduledEffect::FinishProcessing,
        app.timing.processing,
    )]
}

fn move_cursor(app: &mut App, delta: isize) {
    let (cursor, len) = match app.controller.current_screen() {
        ScreenId::Home => (&mut app.shortcut_cursor, content::shortcuts().len()),
        ScreenId::Comparison => (&mut app.vendor_cursor, Vendor::ALL.len()),
        // Story 0 is the breaking banner.
        ScreenId::NewsHome => (&mut app.story_cursor, content::stories().len() + 1),
        _ => return,
    };
    if len == 0 {
        return;
    }
    let next = if delta < 0 {
        cursor.saturating_sub(1)
    } else {
        (*cursor + 1).min(len - 1)
    };
    *cursor = next;
}

fn mark_subscribed(app: &mut App) {
    if !app.controller.is_subscribed() {
        app.controller.subscribe();
        app.transcript.push(SessionEvent::Subscribed);
    }
}

/// Navigate and log. A no-op navigation leaves the transcript and the
/// entrance counter alone.
fn navigate_to(app: &mut App, target: ScreenId) {
    let previous_overlay = app.controller.overlay();
    if let Some(change) = app.controller.navigate(target) {
        app.transcript
            .extend(events_for_change(&change, previous_overlay));
        app.entrance = 0;
    }
}

/// Replace the current toast and rearm its dismissal.
fn show_toast(app: &mut App, message: String) -> Vec<FollowUp> {
    app.transcript.push(SessionEvent::ToastShown {
        message: message.clone(),
    });
    app.toast = Some(message);
    vec![FollowUp::Once(ScheduledEffect::DismissToast, app.timing.toast)]
}

// ============================================================================
// SCHEDULED EFFECTS
// ============================================================================

/// Handle a fired timer effect.
///
/// `ClockRefresh` is not handled here: reading the wall clock is an
/// effect, so the run loop owns it.
pub fn apply_scheduled(app: &mut App, effect: ScheduledEffect) -> Vec<FollowUp> {
    match effect {
        ScheduledEffect::ClockRefresh => Vec::new(),
        ScheduledEffect::FinishProcessing => {
            app.processing = false;
            app.composer.clear();
            app.focus = Focus::Shortcuts;
            navigate_to(app, ScreenId::Comparison);
            Vec::new()
        }
        ScheduledEffect::FinishVoice => {
            app.listening = false;
            app.composer = DEMO_REQUEST.to_string();
            app.focus = Focus::Composer;
            Vec::new()
        }
        ScheduledEffect::DismissToast => {
            app.toast = None;
            Vec::new()
        }
        ScheduledEffect::DemoStart => {
            if app.demo != DemoPhase::Pending {
                return Vec::new();
            }
            app.demo = DemoPhase::Typing(0);
            app.focus = Focus::Composer;
            vec![FollowUp::Every(
                ScheduledEffect::DemoKeystroke,
                app.timing.keystroke,
            )]
        }
        ScheduledEffect::DemoKeystroke => {
            let DemoPhase::Typing(index) = app.demo else {
                return vec![FollowUp::Cancel(ScheduledEffect::DemoKeystroke)];
            };
            match DEMO_REQUEST.chars().nth(index) {
                Some(c) => {
                    app.composer.push(c);
                    app.demo = DemoPhase::Typing(index + 1);
                    Vec::new()
                }
                None => {
                    app.demo = DemoPhase::AwaitingSend;
                    vec![
                        FollowUp::Cancel(ScheduledEffect::DemoKeystroke),
                        FollowUp::Once(ScheduledEffect::DemoSend, app.timing.send_pause),
                    ]
                }
            }
        }
        ScheduledEffect::DemoSend => {
            app.demo = DemoPhase::Done;
            submit(app)
        }
    }
}

/// Abort the scripted demo. Called on the first user keypress so the
/// demo never fights the user for the composer.
pub fn cancel_demo(app: &mut App) -> Vec<FollowUp> {
    match app.demo {
        DemoPhase::Pending | DemoPhase::Typing(_) | DemoPhase::AwaitingSend => {
            app.demo = DemoPhase::Canceled;
            vec![
                FollowUp::Cancel(ScheduledEffect::DemoStart),
                FollowUp::Cancel(ScheduledEffect::DemoKeystroke),
                FollowUp::Cancel(ScheduledEffect::DemoSend),
            ]
        }
        DemoPhase::Done | DemoPhase::Canceled => Vec::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DemoTiming, Overlay};
    use chrono::NaiveDate;

    fn app() -> App {
        let noon = NaiveDate::from_ymd_opt(2023, 6, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        App::new(DemoTiming::default(), noon)
    }

    fn drive(app: &mut App, intent: Intent) -> Vec<FollowUp> {
        apply_intent(app, intent)
    }

    // -- intent resolution --

    #[test]
    fn quit_works_on_every_screen() {
        let mut a = app();
        for screen in ScreenId::ALL {
            a.controller.navigate(screen);
            assert_eq!(intent_for(&a, &Action::Quit), Some(Intent::Quit));
        }
    }

    #[test]
    fn composer_focus_turns_chars_into_input() {
        let mut a = app();
        a.focus = Focus::Composer;
        assert_eq!(
            intent_for(&a, &Action::Char('x')),
            Some(Intent::Insert('x'))
        );
        assert_eq!(intent_for(&a, &Action::Enter), Some(Intent::Submit));
        assert_eq!(
            intent_for(&a, &Action::Back),
            Some(Intent::BlurComposer)
        );
    }

    #[test]
    fn shortcuts_focus_navigates_cards() {
        let a = app();
        assert_eq!(intent_for(&a, &Action::MoveDown), Some(Intent::CursorDown));
        assert_eq!(
            intent_for(&a, &Action::Enter),
            Some(Intent::ActivateShortcut(0))
        );
        assert_eq!(intent_for(&a, &Action::Mic), Some(Intent::StartVoice));
    }

    #[test]
    fn comparison_enter_selects_focused_vendor() {
        let mut a = app();
        a.controller.navigate(ScreenId::Comparison);
        assert_eq!(
            intent_for(&a, &Action::Enter),
            Some(Intent::SelectVendor(Vendor::Copperhead))
        );
        a.vendor_cursor = 1;
        assert_eq!(
            intent_for(&a, &Action::Enter),
            Some(Intent::SelectVendor(Vendor::KrisTech))
        );
    }

    #[test]
    fn paywall_only_accepts_continue_back_quit() {
        let mut a = app();
        a.controller.navigate(ScreenId::NewsPaywall);
        assert_eq!(
            intent_for(&a, &Action::Continue),
            Some(Intent::ContinueSubscription)
        );
        assert_eq!(intent_for(&a, &Action::Back), Some(Intent::GoBack));
        assert_eq!(intent_for(&a, &Action::Enter), None);
        assert_eq!(intent_for(&a, &Action::MoveDown), None);
    }

    // -- cursors --

    #[test]
    fn cursors_clamp_at_both_ends() {
        let mut a = app();
        drive(&mut a, Intent::CursorUp);
        assert_eq!(a.shortcut_cursor, 0);
        for _ in 0..20 {
            drive(&mut a, Intent::CursorDown);
        }
        assert_eq!(a.shortcut_cursor, content::shortcuts().len() - 1);
    }

    #[test]
    fn story_cursor_includes_breaking_banner() {
        let mut a = app();
        a.controller.navigate(ScreenId::NewsHome);
        for _ in 0..20 {
            drive(&mut a, Intent::CursorDown);
        }
        assert_eq!(a.story_cursor, content::stories().len());
    }

    // -- composer / submit --

    #[test]
    fn submit_empty_composer_is_a_noop() {
        let mut a = app();
        let follow = drive(&mut a, Intent::Submit);
        assert!(follow.is_empty());
        assert!(!a.processing);
        assert!(a.transcript.is_empty());
    }

    #[test]
    fn submit_schedules_processing_and_logs_request() {
        let mut a = app();
        a.composer = "  tracer wire  ".to_string();
        let follow = drive(&mut a, Intent::Submit);
        assert!(a.processing);
        assert_eq!(
            follow,
            vec![FollowUp::Once(
                ScheduledEffect::FinishProcessing,
                a.timing.processing
            )]
        );
        assert_eq!(
            a.transcript[0],
            SessionEvent::RequestSubmitted {
                text: "tracer wire".to_string()
            }
        );
    }

    #[test]
    fn double_submit_is_ignored_while_processing() {
        let mut a = app();
        a.composer = "wire".to_string();
        drive(&mut a, Intent::Submit);
        let follow = drive(&mut a, Intent::Submit);
        assert!(follow.is_empty());
        assert_eq!(a.transcript.len(), 1);
    }

    #[test]
    fn typing_is_blocked_while_processing() {
        let mut a = app();
        a.composer = "wire".to_string();
        drive(&mut a, Intent::Submit);
        drive(&mut a, Intent::Insert('x'));
        assert_eq!(a.composer, "wire");
    }

    #[test]
    fn finish_processing_lands_on_comparison_with_overlay() {
        let mut a = app();
        a.composer = "wire".to_string();
        drive(&mut a, Intent::Submit);
        apply_scheduled(&mut a, ScheduledEffect::FinishProcessing);
        assert!(!a.processing);
        assert!(a.composer.is_empty());
        assert_eq!(a.controller.current_screen(), ScreenId::Comparison);
        assert!(a.transcript.contains(&SessionEvent::OverlayShown {
            overlay: Overlay::UnifiedQuote
        }));
    }

    // -- voice --

    #[test]
    fn voice_capture_fills_composer_with_demo_request() {
        let mut a = app();
        let follow = drive(&mut a, Intent::StartVoice);
        assert!(a.listening);
        assert_eq!(
            follow,
            vec![FollowUp::Once(
                ScheduledEffect::FinishVoice,
                a.timing.voice_capture
            )]
        );
        apply_scheduled(&mut a, ScheduledEffect::FinishVoice);
        assert!(!a.listening);
        assert_eq!(a.composer, DEMO_REQUEST);
        assert_eq!(a.focus, Focus::Composer);
    }

    #[test]
    fn second_mic_press_while_listening_is_ignored() {
        let mut a = app();
        drive(&mut a, Intent::StartVoice);
        let follow = drive(&mut a, Intent::StartVoice);
        assert!(follow.is_empty());
    }

    // -- shortcuts / toasts --

    #[test]
    fn news_shortcut_navigates_instead_of_toasting() {
        let mut a = app();
        let index = content::shortcuts()
            .iter()
            .position(|s| s.opens.is_some())
            .unwrap();
        drive(&mut a, Intent::ActivateShortcut(index));
        assert_eq!(a.controller.current_screen(), ScreenId::NewsHome);
        assert!(a.toast.is_none());
    }

    #[test]
    fn plain_shortcut_toasts_and_arms_dismissal() {
        let mut a = app();
        let follow = drive(&mut a, Intent::ActivateShortcut(0));
        assert_eq!(
            a.toast.as_deref(),
            Some("Activating: Morning Briefing")
        );
        assert_eq!(
            follow,
            vec![FollowUp::Once(ScheduledEffect::DismissToast, a.timing.toast)]
        );
        apply_scheduled(&mut a, ScheduledEffect::DismissToast);
        assert!(a.toast.is_none());
    }

    #[test]
    fn reply_toasts_confirmation() {
        let mut a = app();
        drive(&mut a, Intent::Reply);
        assert_eq!(a.toast.as_deref(), Some(REPLY_CONFIRMATION));
    }

    #[test]
    fn new_toast_replaces_the_old_one() {
        let mut a = app();
        drive(&mut a, Intent::ActivateShortcut(0));
        drive(&mut a, Intent::Reply);
        assert_eq!(a.toast.as_deref(), Some(REPLY_CONFIRMATION));
    }

    // -- vendors --

    #[test]
    fn selecting_a_vendor_opens_its_detail_page() {
        let mut a = app();
        a.controller.navigate(ScreenId::Comparison);
        drive(&mut a, Intent::SelectVendor(Vendor::KrisTech));
        assert_eq!(a.controller.current_screen(), ScreenId::VendorDetail);
        assert_eq!(a.controller.selected_vendor(), Some(Vendor::KrisTech));
        assert!(a.transcript.contains(&SessionEvent::VendorSelected {
            vendor: Vendor::KrisTech
        }));
    }

    #[test]
    fn quote_from_detail_names_selected_vendor() {
        let mut a = app();
        a.controller.navigate(ScreenId::Comparison);
        drive(&mut a, Intent::SelectVendor(Vendor::Copperhead));
        drive(&mut a, Intent::RequestQuote);
        assert_eq!(
            a.toast.as_deref(),
            Some("Quote request sent to Copperhead Industries")
        );
    }

    #[test]
    fn quote_without_selection_is_a_noop() {
        let mut a = app();
        let follow = drive(&mut a, Intent::RequestQuote);
        assert!(follow.is_empty());
        assert!(a.toast.is_none());
    }

    #[test]
    fn unified_quote_toasts_both_vendors() {
        let mut a = app();
        a.controller.navigate(ScreenId::Comparison);
        drive(&mut a, Intent::UnifiedQuote);
        assert_eq!(a.toast.as_deref(), Some(UNIFIED_QUOTE_TOAST));
        assert!(a.transcript.contains(&SessionEvent::QuoteRequested {
            vendors: vec![Vendor::Copperhead, Vendor::KrisTech]
        }));
    }

    // -- news flow --

    #[test]
    fn story_click_hits_paywall_before_subscribing() {
        let mut a = app();
        a.controller.navigate(ScreenId::NewsHome);
        drive(&mut a, Intent::OpenStory(1));
        assert_eq!(a.controller.current_screen(), ScreenId::NewsPaywall);
    }

    #[test]
    fn story_click_skips_paywall_after_subscribing() {
        let mut a = app();
        a.controller.navigate(ScreenId::NewsHome);
        a.controller.subscribe();
        drive(&mut a, Intent::OpenStory(1));
        assert_eq!(a.controller.current_screen(), ScreenId::NewsArticle);
    }

    #[test]
    fn continue_subscribes_and_returns_to_news_home() {
        let mut a = app();
        a.controller.navigate(ScreenId::NewsHome);
        drive(&mut a, Intent::OpenStory(0));
        drive(&mut a, Intent::ContinueSubscription);
        assert!(a.controller.is_subscribed());
        assert_eq!(a.controller.current_screen(), ScreenId::NewsHome);
        assert_eq!(a.controller.overlay(), None);
        assert_eq!(
            a.transcript
                .iter()
                .filter(|e| **e == SessionEvent::Subscribed)
                .count(),
            1
        );
    }

    #[test]
    fn subscribing_twice_logs_once() {
        let mut a = app();
        a.controller.navigate(ScreenId::NewsHome);
        drive(&mut a, Intent::Subscribe);
        a.controller.navigate(ScreenId::NewsHome);
        drive(&mut a, Intent::Subscribe);
        assert_eq!(
            a.transcript
                .iter()
                .filter(|e| **e == SessionEvent::Subscribed)
                .count(),
            1
        );
    }

    // -- back navigation --

    #[test]
    fn back_walks_up_the_screen_hierarchy() {
        let mut a = app();
        a.controller.navigate(ScreenId::Comparison);
        a.controller.navigate(ScreenId::VendorDetail);
        drive(&mut a, Intent::GoBack);
        assert_eq!(a.controller.current_screen(), ScreenId::Comparison);
        drive(&mut a, Intent::GoBack);
        assert_eq!(a.controller.current_screen(), ScreenId::Home);
        drive(&mut a, Intent::GoBack);
        assert_eq!(a.controller.current_screen(), ScreenId::Home);
    }

    #[test]
    fn article_backs_out_to_news_home() {
        let mut a = app();
        a.controller.subscribe();
        a.controller.navigate(ScreenId::NewsArticle);
        drive(&mut a, Intent::GoBack);
        assert_eq!(a.controller.current_screen(), ScreenId::NewsHome);
    }

    // -- demo sequence --

    #[test]
    fn demo_types_the_whole_request_then_sends() {
        let mut a = app();
        let follow = apply_scheduled(&mut a, ScheduledEffect::DemoStart);
        assert_eq!(a.demo, DemoPhase::Typing(0));
        assert_eq!(a.focus, Focus::Composer);
        assert_eq!(
            follow,
            vec![FollowUp::Every(
                ScheduledEffect::DemoKeystroke,
                a.timing.keystroke
            )]
        );

        for _ in 0..DEMO_REQUEST.chars().count() {
            apply_scheduled(&mut a, ScheduledEffect::DemoKeystroke);
        }
        assert_eq!(a.composer, DEMO_REQUEST);
        assert_eq!(a.demo, DemoPhase::Typing(DEMO_REQUEST.chars().count()));

        let follow = apply_scheduled(&mut a, ScheduledEffect::DemoKeystroke);
        assert_eq!(a.demo, DemoPhase::AwaitingSend);
        assert!(follow.contains(&FollowUp::Cancel(ScheduledEffect::DemoKeystroke)));
        assert!(follow.contains(&FollowUp::Once(
            ScheduledEffect::DemoSend,
            a.timing.send_pause
        )));

        let follow = apply_scheduled(&mut a, ScheduledEffect::DemoSend);
        assert_eq!(a.demo, DemoPhase::Done);
        assert!(a.processing);
        assert_eq!(
            follow,
            vec![FollowUp::Once(
                ScheduledEffect::FinishProcessing,
                a.timing.processing
            )]
        );
    }

    #[test]
    fn user_keypress_cancels_the_demo() {
        let mut a = app();
        apply_scheduled(&mut a, ScheduledEffect::DemoStart);
        apply_scheduled(&mut a, ScheduledEffect::DemoKeystroke);
        let follow = cancel_demo(&mut a);
        assert_eq!(a.demo, DemoPhase::Canceled);
        assert_eq!(follow.len(), 3);
        // Further keystroke fires (already in flight) self-cancel.
        let follow = apply_scheduled(&mut a, ScheduledEffect::DemoKeystroke);
        assert_eq!(
            follow,
            vec![FollowUp::Cancel(ScheduledEffect::DemoKeystroke)]
        );
    }

    #[test]
    fn cancel_after_completion_does_nothing() {
        let mut a = app();
        a.demo = DemoPhase::Done;
        assert!(cancel_demo(&mut a).is_empty());
        assert_eq!(a.demo, DemoPhase::Done);
    }

    #[test]
    fn demo_start_fires_only_from_pending() {
        let mut a = app();
        a.demo = DemoPhase::Canceled;
        let follow = apply_scheduled(&mut a, ScheduledEffect::DemoStart);
        assert!(follow.is_empty());
        assert_eq!(a.demo, DemoPhase::Canceled);
    }

    // -- full scripted session --

    #[test]
    fn end_to_end_demo_session_transcript_is_ordered() {
        let mut a = app();
        a.composer = DEMO_REQUEST.to_string();
        drive(&mut a, Intent::Submit);
        apply_scheduled(&mut a, ScheduledEffect::FinishProcessing);
        drive(&mut a, Intent::SelectVendor(Vendor::Copperhead));
        drive(&mut a, Intent::RequestQuote);
        drive(&mut a, Intent::GoBack);
        drive(&mut a, Intent::GoBack);
        let news = content::shortcuts()
            .iter()
            .position(|s| s.opens.is_some())
            .unwrap();
        drive(&mut a, Intent::ActivateShortcut(news));
        drive(&mut a, Intent::OpenStory(0));
        drive(&mut a, Intent::ContinueSubscription);
        drive(&mut a, Intent::OpenStory(0));
        assert_eq!(a.controller.current_screen(), ScreenId::NewsArticle);

        // Spot-check ordering of the load-bearing events.
        let positions: Vec<usize> = [
            a.transcript.iter().position(|e| {
                matches!(e, SessionEvent::RequestSubmitted { .. })
            }),
            a.transcript.iter().position(|e| {
                matches!(e, SessionEvent::VendorSelected { .. })
            }),
            a.transcript.iter().position(|e| *e == SessionEvent::Subscribed),
            a.transcript.iter().rposition(|e| {
                matches!(
                    e,
                    SessionEvent::StoryOpened {
                        resolved: ScreenId::NewsArticle,
                        ..
                    }
                )
            }),
        ]
        .into_iter()
        .map(|p| p.unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

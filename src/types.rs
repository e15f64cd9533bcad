//! Domain types for agentos-demo.
//!
//! Everything here is pure data shared across the controller, the TUI,
//! and the headless walkthrough.

use std::time::Duration;

use serde::Serialize;

// ============================================================================
// ENUMS
// ============================================================================

/// One full-page view state in the session.
///
/// Exactly one screen is current at any time; there is no "none" state.
/// The numbering of the original prototype (screens 1-6) maps onto these
/// variants in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    /// Launcher: clock, weather, shortcuts, personal message, composer.
    Home,
    /// Two vendor options side by side after a request is processed.
    Comparison,
    /// Detail page for the selected vendor.
    VendorDetail,
    /// News widget front page.
    NewsHome,
    /// Subscription gate shown to non-subscribers.
    NewsPaywall,
    /// Full article, reachable only once subscribed.
    NewsArticle,
}

impl ScreenId {
    /// All screens, in prototype order. Handy for exhaustive tests.
    pub const ALL: [ScreenId; 6] = [
        ScreenId::Home,
        ScreenId::Comparison,
        ScreenId::VendorDetail,
        ScreenId::NewsHome,
        ScreenId::NewsPaywall,
        ScreenId::NewsArticle,
    ];
}

/// One of the two selectable comparison options.
///
/// The identity is carried into the detail screen and the quote-request
/// action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Vendor {
    Copperhead,
    KrisTech,
}

impl Vendor {
    /// Both vendors, in comparison-card order.
    pub const ALL: [Vendor; 2] = [Vendor::Copperhead, Vendor::KrisTech];
}

/// A fixed call-to-action region pinned to the bottom of a screen.
///
/// At most one is visible at a time; visibility is a pure function of
/// (current screen, subscription state); see
/// [`crate::controller::overlay_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Overlay {
    /// "Request quotes from both suppliers" on the comparison screen.
    UnifiedQuote,
    /// "Subscribe" banner on the news front page for non-subscribers.
    Subscribe,
}

/// Output format for the walkthrough transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TIMING
// ============================================================================

/// Every delay in the scripted demo, gathered in one place.
///
/// Defaults mirror the original prototype's hard-coded intervals. Tests
/// and the `--fast` walkthrough substitute zeroed values so nothing has
/// to sleep.
#[derive(Debug, Clone)]
pub struct DemoTiming {
    /// Simulated AI processing between send and the comparison screen.
    pub processing: Duration,
    /// Simulated voice capture after the mic is pressed.
    pub voice_capture: Duration,
    /// How long a toast stays up before auto-dismissing.
    pub toast: Duration,
    /// Quiet period after launch before the demo starts typing.
    pub intro: Duration,
    /// Per-character interval of the demo typing sequence.
    pub keystroke: Duration,
    /// Pause between the demo finishing typing and pressing send.
    pub send_pause: Duration,
    /// Clock refresh period.
    pub clock_refresh: Duration,
}

impl Default for DemoTiming {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(1500),
            voice_capture: Duration::from_millis(2000),
            toast: Duration::from_millis(3000),
            intro: Duration::from_millis(2000),
            keystroke: Duration::from_millis(100),
            send_pause: Duration::from_millis(1000),
            clock_refresh: Duration::from_secs(60),
        }
    }
}

impl DemoTiming {
    /// All-zero timing: every scheduled effect fires on the next poll.
    pub fn instant() -> Self {
        Self {
            processing: Duration::ZERO,
            voice_capture: Duration::ZERO,
            toast: Duration::ZERO,
            intro: Duration::ZERO,
            keystroke: Duration::ZERO,
            send_pause: Duration::ZERO,
            clock_refresh: Duration::ZERO,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_screens_are_distinct() {
        for (i, a) in ScreenId::ALL.iter().enumerate() {
            for b in &ScreenId::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn screen_serializes_to_snake_case() {
        let json = serde_json::to_string(&ScreenId::NewsPaywall).unwrap();
        assert_eq!(json, "\"news_paywall\"");
    }

    #[test]
    fn vendor_serializes_to_snake_case() {
        let json = serde_json::to_string(&Vendor::KrisTech).unwrap();
        assert_eq!(json, "\"kris_tech\"");
    }

    #[test]
    fn default_timing_matches_prototype_intervals() {
        let t = DemoTiming::default();
        assert_eq!(t.processing, Duration::from_millis(1500));
        assert_eq!(t.voice_capture, Duration::from_millis(2000));
        assert_eq!(t.toast, Duration::from_millis(3000));
        assert_eq!(t.keystroke, Duration::from_millis(100));
        assert_eq!(t.clock_refresh, Duration::from_secs(60));
    }

    #[test]
    fn instant_timing_is_all_zero() {
        let t = DemoTiming::instant();
        assert_eq!(t.processing, Duration::ZERO);
        assert_eq!(t.toast, Duration::ZERO);
    }
}

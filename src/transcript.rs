//! Session transcript: typed event log plus formatting.
//!
//! The original prototype narrated every transition to the console.
//! Here the narration is data: the presentation layers append
//! [`SessionEvent`]s, and pure functions render the log as text or JSON.

use serde::Serialize;

use crate::controller::ScreenChange;
use crate::types::{Overlay, OutputFormat, ScreenId, Vendor};

// ============================================================================
// EVENTS
// ============================================================================

/// One observable thing that happened during a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The composer submitted a request for processing.
    RequestSubmitted { text: String },
    /// A navigation took effect.
    ScreenActivated { from: ScreenId, to: ScreenId },
    /// A fixed call-to-action became visible.
    OverlayShown { overlay: Overlay },
    /// A fixed call-to-action was hidden.
    OverlayHidden { overlay: Overlay },
    /// A comparison option was chosen.
    VendorSelected { vendor: Vendor },
    /// Quote request issued to one or both vendors.
    QuoteRequested { vendors: Vec<Vendor> },
    /// A story click resolved to its actual destination.
    StoryOpened { headline: String, resolved: ScreenId },
    /// The session subscribed. Never reverted.
    Subscribed,
    /// A toast notification appeared.
    ToastShown { message: String },
}

/// Expand a [`ScreenChange`] into transcript events.
///
/// Emits the activation plus overlay show/hide events relative to the
/// overlay that was visible before the change.
pub fn events_for_change(
    change: &ScreenChange,
    previous_overlay: Option<Overlay>,
) -> Vec<SessionEvent> {
    let mut events = vec![SessionEvent::ScreenActivated {
        from: change.from,
        to: change.to,
    }];
    if previous_overlay != change.overlay {
        if let Some(overlay) = previous_overlay {
            events.push(SessionEvent::OverlayHidden { overlay });
        }
        if let Some(overlay) = change.overlay {
            events.push(SessionEvent::OverlayShown { overlay });
        }
    }
    events
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Format a session transcript for output.
pub fn format_transcript(events: &[SessionEvent], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(events),
        OutputFormat::Json => format_json(events),
    }
}

fn format_human(events: &[SessionEvent]) -> String {
    let mut out = String::new();
    out.push_str("=== Session Transcript ===\n");
    for (i, event) in events.iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i + 1, describe(event)));
    }
    if events.is_empty() {
        out.push_str("  (no events)\n");
    }
    out
}

fn format_json(events: &[SessionEvent]) -> String {
    serde_json::to_string_pretty(events).unwrap_or_else(|e| {
        // Serialization of these types cannot fail; be loud if it does.
        panic!("Failed to serialize transcript to JSON: {}", e)
    })
}

fn describe(event: &SessionEvent) -> String {
    match event {
        SessionEvent::RequestSubmitted { text } => {
            format!("request submitted: \"{}\"", text)
        }
        SessionEvent::ScreenActivated { from, to } => {
            format!("screen activated: {} -> {}", screen_label(*from), screen_label(*to))
        }
        SessionEvent::OverlayShown { overlay } => {
            format!("overlay shown: {}", overlay_label(*overlay))
        }
        SessionEvent::OverlayHidden { overlay } => {
            format!("overlay hidden: {}", overlay_label(*overlay))
        }
        SessionEvent::VendorSelected { vendor } => {
            format!("vendor selected: {}", crate::content::vendor_profile(*vendor).name)
        }
        SessionEvent::QuoteRequested { vendors } => {
            let names: Vec<&str> = vendors
                .iter()
                .map(|v| crate::content::vendor_profile(*v).name)
                .collect();
            format!("quote requested: {}", names.join(" + "))
        }
        SessionEvent::StoryOpened { headline, resolved } => {
            format!("story opened: \"{}\" -> {}", headline, screen_label(*resolved))
        }
        SessionEvent::Subscribed => "subscribed".to_string(),
        SessionEvent::ToastShown { message } => format!("toast: {}", message),
    }
}

fn screen_label(screen: ScreenId) -> &'static str {
    match screen {
        ScreenId::Home => "home",
        ScreenId::Comparison => "comparison",
        ScreenId::VendorDetail => "vendor detail",
        ScreenId::NewsHome => "news",
        ScreenId::NewsPaywall => "paywall",
        ScreenId::NewsArticle => "article",
    }
}

fn overlay_label(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::UnifiedQuote => "unified quote",
        Overlay::Subscribe => "subscribe",
    }
}

// ============================================================================
// TESTS
// ============================================================================

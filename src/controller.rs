//! Screen-navigation state machine.
//!
//! This is the core of the demo: a controller owning the current screen,
//! the vendor selection, and the subscription flag. Navigation targets
//! are the [`ScreenId`] enum, so an invalid target is unrepresentable;
//! callers validate at the input boundary (key mapping) and the
//! controller itself is total.
//!
//! Overlay visibility is never stored; it is derived from
//! (current screen, subscribed) by [`overlay_for`], so repeated
//! evaluation for the same state always agrees regardless of how that
//! state was reached.

use crate::types::{Overlay, ScreenId, Vendor};

// ============================================================================
// OVERLAY POLICY
// ============================================================================

/// Which fixed call-to-action is visible on a screen, if any.
///
/// Total over both arguments. At most one overlay per screen:
/// - Comparison always carries the unified-quote CTA.
/// - NewsHome carries the subscribe banner until the session subscribes.
/// - Every other screen shows nothing.
pub fn overlay_for(screen: ScreenId, subscribed: bool) -> Option<Overlay> {
    match screen {
        ScreenId::Comparison => Some(Overlay::UnifiedQuote),
        ScreenId::NewsHome if !subscribed => Some(Overlay::Subscribe),
        _ => None,
    }
}

// ============================================================================
// SCREEN CHANGE
// ============================================================================

/// Outcome of a non-trivial navigation.
///
/// The presentation layer consumes this to trigger entrance effects and
/// transcript entries. Navigating to the current screen produces no
/// change at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChange {
    /// Screen that was deactivated.
    pub from: ScreenId,
    /// Screen that is now current.
    pub to: ScreenId,
    /// Overlay visible after activation, per [`overlay_for`].
    pub overlay: Option<Overlay>,
}

// ============================================================================
// CONTROLLER
// ============================================================================

/// Session-scoped UI state: one instance per session, owned by the
/// presentation layer. All state starts at its default (Home, no vendor,
/// not subscribed) and lives until the process exits.
#[derive(Debug)]
pub struct ScreenController {
    current: ScreenId,
    selected_vendor: Option<Vendor>,
    subscribed: bool,
}

impl Default for ScreenController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenController {
    pub fn new() -> Self {
        Self {
            current: ScreenId::Home,
            selected_vendor: None,
            subscribed: false,
        }
    }

    pub fn current_screen(&self) -> ScreenId {
        self.current
    }

    pub fn selected_vendor(&self) -> Option<Vendor> {
        self.selected_vendor
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Overlay visible right now.
    pub fn overlay(&self) -> Option<Overlay> {
        overlay_for(self.current, self.subscribed)
    }

    /// Switch to `target`.
    ///
    /// Returns `None` (and leaves all state untouched) when `target` is
    /// already current; otherwise deactivates the current screen,
    /// activates `target`, and reports the change with the overlay now
    /// visible.
    pub fn navigate(&mut self, target: ScreenId) -> Option<ScreenChange> {
        if target == self.current {
            return None;
        }
        let from = self.current;
        self.current = target;
        Some(ScreenChange {
            from,
            to: target,
            overlay: self.overlay(),
        })
    }

    /// Record which comparison option was chosen. Read back when
    /// rendering the detail screen and when issuing a quote request.
    pub fn select_vendor(&mut self, vendor: Vendor) {
        self.selected_vendor = Some(vendor);
    }

    /// Mark the session as subscribed. Idempotent and monotonic: there
    /// is no un-subscribe path.
    pub fn subscribe(&mut self) {
        self.subscribed = true;
    }

    /// Resolve a story click's nominal target.
    ///
    /// The one place business logic overrides a literal navigation
    /// request: a subscribed session skips the paywall and lands on the
    /// article instead. Any other requested screen passes through
    /// unchanged.
    pub fn resolve_news_target(&self, requested: ScreenId) -> ScreenId {
        if requested == ScreenId::NewsPaywall && self.subscribed {
            ScreenId::NewsArticle
        } else {
            requested
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Blue: accent, interactive CTAs (the prototype's accent-blue)
//! - Green: prices, positive facts
//! - Red: breaking-news kicker
//! - Dim: secondary text (dates, taglines, fine print)
//! - Bold: headlines, vendor names, the clock

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Accent / interactive element: blue.
pub const STYLE_ACCENT: Style = Style::new().fg(Color::Blue);

/// Positive fact (price, availability): green.
pub const STYLE_POSITIVE: Style = Style::new().fg(Color::Green);

/// Breaking-news kicker: red.
pub const STYLE_BREAKING: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Secondary text: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Headline / important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Status bar.
pub const STYLE_STATUS: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// The big home-screen clock.
pub const STYLE_CLOCK: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Focused card / list row.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Fixed call-to-action bar.
pub const STYLE_CTA: Style = Style::new().fg(Color::Black).bg(Color::Blue);

/// Toast notification line.
pub const STYLE_TOAST: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Blue)
    .add_modifier(Modifier::BOLD);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

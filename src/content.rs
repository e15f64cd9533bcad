//! Canned demo content.
//!
//! Every string the scripted walkthrough displays lives here: the demo
//! request, the two vendor profiles, the home-screen shortcuts, the
//! personal message, and the news widget copy. Pure data, no I/O.

use crate::types::{ScreenId, Vendor};

// ============================================================================
// HOME SCREEN
// ============================================================================

/// The request the demo types into the composer, also used as the
/// simulated voice-to-text result.
pub const DEMO_REQUEST: &str =
    "I need 6AWG pipe bursting tracer wire for my Folsom HDD project";

/// Weather line under the clock.
pub const WEATHER: &str = "72° Sunny · Folsom, CA";

/// A launcher shortcut card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub label: &'static str,
    /// Some shortcuts open a screen; the rest just toast an activation.
    pub opens: Option<ScreenId>,
}

/// Shortcut cards in display order. The New York Times card is the one
/// that navigates; everything else simulates an activation.
pub fn shortcuts() -> &'static [Shortcut] {
    &[
        Shortcut { label: "Morning Briefing", opens: None },
        Shortcut { label: "Job Site Cameras", opens: None },
        Shortcut { label: "The New York Times", opens: Some(ScreenId::NewsHome) },
        Shortcut { label: "Supplier Orders", opens: None },
    ]
}

/// The personal message shown below the shortcuts.
pub const MESSAGE_FROM: &str = "Sarah";
pub const MESSAGE_BODY: &str =
    "Don't forget, dinner with the Hendersons at 7. Love you!";

/// Toast shown after pressing reply on the personal message.
pub const REPLY_CONFIRMATION: &str = "Reply sent to your wife";

// ============================================================================
// VENDORS
// ============================================================================

/// Everything the comparison card and detail screen show for one vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorProfile {
    pub vendor: Vendor,
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub lead_time: &'static str,
    pub highlights: &'static [&'static str],
}

const COPPERHEAD: VendorProfile = VendorProfile {
    vendor: Vendor::Copperhead,
    name: "Copperhead Industries",
    tagline: "High-strength copper-clad steel tracer wire",
    price: "$489 / 2,500 ft spool",
    lead_time: "Ships in 2 days",
    highlights: &[
        "6AWG copper-clad steel, 1,150 lb break load",
        "Rated for pipe bursting and HDD pulls",
        "45 mil HDPE jacket, direct bury",
        "Made in USA, lifetime warranty",
    ],
};

const KRIS_TECH: VendorProfile = VendorProfile {
    vendor: Vendor::KrisTech,
    name: "Kris-Tech Wire",
    tagline: "Solid copper tracer wire, contractor priced",
    price: "$445 / 2,500 ft spool",
    lead_time: "Ships in 4 days",
    highlights: &[
        "6AWG solid copper, maximum conductivity",
        "30 mil HDPE jacket, direct bury",
        "Bulk pricing on 4+ spools",
        "Same-week delivery to Folsom",
    ],
};

/// Profile lookup. Total over the enum, so it cannot fail at runtime.
pub fn vendor_profile(vendor: Vendor) -> &'static VendorProfile {
    match vendor {
        Vendor::Copperhead => &COPPERHEAD,
        Vendor::KrisTech => &KRIS_TECH,
    }
}

/// Toast for a single-vendor quote request.
pub fn quote_toast(vendor: Vendor) -> String {
    format!("Quote request sent to {}", vendor_profile(vendor).name)
}

/// Toast for the unified quote CTA on the comparison screen.
pub const UNIFIED_QUOTE_TOAST: &str =
    "Quote requests sent to both Copperhead Industries and Kris-Tech Wire";

/// Toast for a non-navigating shortcut.
pub fn activation_toast(label: &str) -> String {
    format!("Activating: {label}")
}

// ============================================================================
// NEWS WIDGET
// ============================================================================

/// A front-page story card. Clicking one nominally targets the paywall;
/// the controller resolves the real destination from the subscription
/// flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsStory {
    pub kicker: &'static str,
    pub headline: &'static str,
}

/// Breaking-news banner above the story list. Behaves like a story.
pub const BREAKING: NewsStory = NewsStory {
    kicker: "Breaking",
    headline: "Federal infrastructure bill clears final vote, $110B for utilities",
};

pub fn stories() -> &'static [NewsStory] {
    &[
        NewsStory {
            kicker: "Business",
            headline: "Copper prices hit three-year high as grid projects accelerate",
        },
        NewsStory {
            kicker: "Technology",
            headline: "Trenchless drilling boom reshapes suburban utility work",
        },
        NewsStory {
            kicker: "California",
            headline: "Folsom approves water main replacement across 14 districts",
        },
    ]
}

/// Paywall copy.
pub const PAYWALL_HEADLINE: &str = "Subscribe to continue reading";
pub const PAYWALL_OFFER: &str = "$4 every 4 weeks for your first year";
pub const PAYWALL_FINE_PRINT: &str =
    "Cancel anytime. Offer for new subscribers only.";

/// The article behind the paywall.
pub const ARTICLE_HEADLINE: &str =
    "Copper prices hit three-year high as grid projects accelerate";
pub const ARTICLE_BYLINE: &str = "By Dana Whitfield";
pub const ARTICLE_BODY: &[&str] = &[
    "Copper futures closed at their highest level since 2023 on Tuesday, \
     driven by a surge in grid modernization and trenchless utility \
     construction across the western United States.",
    "Contractors report lead times stretching from days to weeks for \
     copper-clad steel products, with tracer wire and grounding conductors \
     in particularly short supply.",
    "Analysts expect demand to stay elevated through the year as federal \
     infrastructure money reaches municipal water and broadband projects.",
];

// ============================================================================
// TESTS
// ============================================================================

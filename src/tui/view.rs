//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function; `render()` dispatches on
//! the controller's current screen. Shared chrome (status bar, overlay
//! CTA, toast, help line) is built here too. Widget-building functions
//! are pure; the only effect is `Frame::render_widget`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::clock;
use crate::content::{self, VendorProfile};
use crate::types::{Overlay, ScreenId, Vendor};

use super::state::{App, DemoPhase, Focus};
use super::theme;

/// Ticks between successive entrance reveals (~100 ms at the 50 ms
/// tick cadence, matching the prototype's stagger).
const REVEAL_TICKS: u16 = 2;

/// Whether the item at `index` has entered yet.
fn revealed(entrance: u16, index: usize) -> bool {
    entrance as usize >= index * REVEAL_TICKS as usize
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let overlay = app.controller.overlay();

    let mut constraints = vec![
        Constraint::Length(1), // status bar
        Constraint::Min(0),    // screen content
    ];
    if overlay.is_some() {
        constraints.push(Constraint::Length(2));
    }
    if app.toast.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1)); // help
    let chunks = Layout::vertical(constraints).split(area);

    frame.render_widget(render_status(app), chunks[0]);

    let mut next = 2;
    render_screen(app, frame, chunks[1]);
    if let Some(overlay) = overlay {
        frame.render_widget(render_overlay_bar(overlay), chunks[next]);
        next += 1;
    }
    if let Some(toast) = &app.toast {
        frame.render_widget(render_toast(toast), chunks[next]);
        next += 1;
    }
    frame.render_widget(render_help(app), chunks[next]);
}

fn render_screen(app: &App, frame: &mut Frame, area: Rect) {
    match app.controller.current_screen() {
        ScreenId::Home => render_home(app, frame, area),
        ScreenId::Comparison => render_comparison(app, frame, area),
        ScreenId::VendorDetail => render_vendor_detail(app, frame, area),
        ScreenId::NewsHome => render_news_home(app, frame, area),
        ScreenId::NewsPaywall => render_paywall(frame, area),
        ScreenId::NewsArticle => render_article(frame, area),
    }
}

// ============================================================================
// SHARED CHROME
// ============================================================================

fn render_status(app: &App) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(clock::format_time(app.clock), theme::STYLE_STATUS),
        Span::styled("  ·  AgentOS  ·  ", theme::STYLE_DIM),
        Span::styled(clock::format_date(app.clock), theme::STYLE_DIM),
    ]))
}

/// CTA copy for each overlay.
pub fn cta_text(overlay: Overlay) -> &'static str {
    match overlay {
        Overlay::UnifiedQuote => "Request quotes from both suppliers  [g]",
        Overlay::Subscribe => "Subscribe to The New York Times  [s]",
    }
}

fn render_overlay_bar(overlay: Overlay) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(cta_text(overlay), theme::STYLE_CTA)),
    ])
}

fn render_toast(message: &str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        format!("  {}  ", message),
        theme::STYLE_TOAST,
    ))
    .centered()
}

/// Help line per screen (and home focus).
pub fn help_text(app: &App) -> &'static str {
    match app.controller.current_screen() {
        ScreenId::Home => match app.focus {
            Focus::Composer => "[type] compose  [Enter] send  [Esc] shortcuts",
            Focus::Shortcuts => {
                "[j/k] move  [Enter] open  [Tab] compose  [m] mic  [r] reply  [q] quit"
            }
        },
        ScreenId::Comparison => "[j/k] choose  [Enter] view option  [g] quotes  [Esc] back",
        ScreenId::VendorDetail => "[g] request quote  [Esc] back",
        ScreenId::NewsHome => "[j/k] move  [Enter] read  [s] subscribe  [Esc] back",
        ScreenId::NewsPaywall => "[c] continue  [Esc] back",
        ScreenId::NewsArticle => "[Esc] back",
    }
}

fn render_help(app: &App) -> Paragraph<'static> {
    Paragraph::new(Span::styled(help_text(app), theme::STYLE_HELP))
}

// ============================================================================
// HOME
// ============================================================================

fn render_home(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    let mut row = 0usize;

    if revealed(app.entrance, row) {
        lines.push(Line::from(Span::styled(
            clock::format_time(app.clock),
            theme::STYLE_CLOCK,
        )));
        lines.push(Line::from(Span::styled(
            clock::format_date(app.clock),
            theme::STYLE_DIM,
        )));
    }
    row += 1;
    if revealed(app.entrance, row) {
        lines.push(Line::from(Span::styled(content::WEATHER, theme::STYLE_DIM)));
    }
    lines.push(Line::from(""));

    for (i, shortcut) in content::shortcuts().iter().enumerate() {
        row += 1;
        if !revealed(app.entrance, row) {
            continue;
        }
        let focused = app.focus == Focus::Shortcuts && app.shortcut_cursor == i;
        let marker = if focused { "❯ " } else { "  " };
        let style = if focused {
            theme::STYLE_CURSOR
        } else {
            theme::STYLE_IMPORTANT
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), theme::STYLE_ACCENT),
            Span::styled(shortcut.label, style),
        ]));
    }
    lines.push(Line::from(""));

    row += 1;
    if revealed(app.entrance, row) {
        lines.push(Line::from(vec![
            Span::styled(format!("{} · ", content::MESSAGE_FROM), theme::STYLE_ACCENT),
            Span::styled(content::MESSAGE_BODY, theme::STYLE_DIM),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(composer_line(app));
    if app.processing {
        lines.push(Line::from(Span::styled(
            "Thinking…",
            theme::STYLE_ACCENT,
        )));
    } else if app.listening {
        lines.push(Line::from(Span::styled(
            "Listening…",
            theme::STYLE_ACCENT,
        )));
    } else if matches!(app.demo, DemoPhase::Typing(_)) {
        lines.push(Line::from(Span::styled("Demo…", theme::STYLE_DIM)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn composer_line(app: &App) -> Line<'static> {
    let focused = app.focus == Focus::Composer;
    let prompt = if focused { "❯ " } else { "  " };
    if app.composer.is_empty() && !focused {
        Line::from(vec![
            Span::styled(prompt.to_string(), theme::STYLE_ACCENT),
            Span::styled("Ask AgentOS anything…", theme::STYLE_DIM),
        ])
    } else {
        let cursor = if focused { "█" } else { "" };
        Line::from(vec![
            Span::styled(prompt.to_string(), theme::STYLE_ACCENT),
            Span::raw(format!("{}{}", app.composer, cursor)),
        ])
    }
}

// ============================================================================
// COMPARISON
// ============================================================================

fn render_comparison(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // title
        Constraint::Min(0),   // cards
    ])
    .split(area);

    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Two strong options for your tracer wire:",
            theme::STYLE_IMPORTANT,
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    let cards = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    for (i, vendor) in Vendor::ALL.iter().enumerate() {
        let profile = content::vendor_profile(*vendor);
        let focused = app.vendor_cursor == i;
        let show = revealed(app.entrance, i + 1);
        frame.render_widget(vendor_card(profile, focused, show), cards[i]);
    }
}

fn vendor_card(profile: &VendorProfile, focused: bool, show: bool) -> Paragraph<'static> {
    if !show {
        return Paragraph::new("");
    }
    let name_style = if focused {
        theme::STYLE_CURSOR
    } else {
        theme::STYLE_IMPORTANT
    };
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", profile.name),
            name_style,
        )),
        Line::from(Span::styled(profile.tagline, theme::STYLE_DIM)),
        Line::from(Span::styled(profile.price, theme::STYLE_POSITIVE)),
        Line::from(Span::styled(profile.lead_time, theme::STYLE_DIM)),
        Line::from(""),
    ];
    for highlight in profile.highlights {
        lines.push(Line::from(vec![
            Span::styled("• ", theme::STYLE_ACCENT),
            Span::raw(*highlight),
        ]));
    }
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

// ============================================================================
// VENDOR DETAIL
// ============================================================================

fn render_vendor_detail(app: &App, frame: &mut Frame, area: Rect) {
    let Some(vendor) = app.controller.selected_vendor() else {
        frame.render_widget(
            Paragraph::new(Span::styled("No option selected.", theme::STYLE_DIM)),
            area,
        );
        return;
    };
    let profile = content::vendor_profile(vendor);

    let mut lines = vec![Line::from("")];
    if revealed(app.entrance, 0) {
        lines.push(Line::from(Span::styled(
            profile.name,
            theme::STYLE_IMPORTANT,
        )));
        lines.push(Line::from(Span::styled(profile.tagline, theme::STYLE_DIM)));
        lines.push(Line::from(""));
    }
    if revealed(app.entrance, 2) {
        lines.push(Line::from(vec![
            Span::styled(profile.price, theme::STYLE_POSITIVE),
            Span::styled(format!("   {}", profile.lead_time), theme::STYLE_DIM),
        ]));
        lines.push(Line::from(""));
        for highlight in profile.highlights {
            lines.push(Line::from(vec![
                Span::styled("• ", theme::STYLE_ACCENT),
                Span::raw(*highlight),
            ]));
        }
    }
    if revealed(app.entrance, 4) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Request a quote  [g]",
            theme::STYLE_CTA,
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// NEWS
// ============================================================================

fn render_news_home(app: &App, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "The New York Times",
            theme::STYLE_IMPORTANT,
        )),
        Line::from(""),
    ];

    // Story 0 is the breaking banner.
    let breaking_focused = app.story_cursor == 0;
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", content::BREAKING.kicker.to_uppercase()),
            theme::STYLE_BREAKING,
        ),
        Span::styled(
            content::BREAKING.headline,
            if breaking_focused {
                theme::STYLE_CURSOR
            } else {
                theme::STYLE_IMPORTANT
            },
        ),
    ]));
    lines.push(Line::from(""));

    for (i, story) in content::stories().iter().enumerate() {
        if !revealed(app.entrance, i + 1) {
            continue;
        }
        let focused = app.story_cursor == i + 1;
        lines.push(Line::from(vec![
            Span::styled(format!("{}  ", story.kicker), theme::STYLE_ACCENT),
            Span::styled(
                story.headline,
                if focused {
                    theme::STYLE_CURSOR
                } else {
                    theme::STYLE_IMPORTANT
                },
            ),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_paywall(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            content::PAYWALL_HEADLINE,
            theme::STYLE_IMPORTANT,
        )),
        Line::from(""),
        Line::from(Span::styled(content::PAYWALL_OFFER, theme::STYLE_POSITIVE)),
        Line::from(Span::styled(
            content::PAYWALL_FINE_PRINT,
            theme::STYLE_DIM,
        )),
        Line::from(""),
        Line::from(Span::styled("Continue  [c]", theme::STYLE_CTA)),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).centered(),
        area,
    );
}

fn render_article(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            content::ARTICLE_HEADLINE,
            theme::STYLE_IMPORTANT,
        )),
        Line::from(Span::styled(content::ARTICLE_BYLINE, theme::STYLE_DIM)),
        Line::from(""),
    ];
    for paragraph in content::ARTICLE_BODY {
        lines.push(Line::from(Span::raw(*paragraph)));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

// ============================================================================
// TESTS
// ============================================================================

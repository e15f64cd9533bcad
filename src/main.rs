//! agentos-demo CLI
//!
//! Interactive TUI session or a headless scripted walkthrough of the
//! AgentOS assistant demo.

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use chrono::Local;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use agentos_demo::content;
use agentos_demo::transcript::format_transcript;
use agentos_demo::tui::run::{RunOptions, run};
use agentos_demo::tui::state::{App, DemoPhase, Intent, ScheduledEffect};
use agentos_demo::tui::update::{apply_intent, apply_scheduled};
use agentos_demo::types::{DemoTiming, OutputFormat, Vendor};

#[derive(Parser)]
#[command(name = "agentos-demo")]
#[command(about = "Terminal walkthrough of the AgentOS assistant demo")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (scripted intro unless disabled)
    Run {
        /// Skip the scripted typing sequence
        #[arg(long)]
        no_intro: bool,

        /// Print the session transcript on exit
        #[arg(long)]
        transcript: bool,

        /// Heartbeat period in milliseconds
        #[arg(long, default_value_t = 50)]
        tick_ms: u64,
    },

    /// Drive the whole scripted demo headlessly and print the transcript
    Walkthrough {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Skip the simulated delays
        #[arg(long)]
        fast: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { no_intro, transcript, tick_ms } => {
            cmd_run(no_intro, transcript, tick_ms)
        }
        Commands::Walkthrough { format, fast } => cmd_walkthrough(format.into(), fast),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// PROGRESS HELPERS
// ============================================================================

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_run(no_intro: bool, transcript: bool, tick_ms: u64) -> Result<(), String> {
    let options = RunOptions {
        timing: DemoTiming::default(),
        demo_intro: !no_intro,
        tick: Duration::from_millis(tick_ms.max(1)),
    };

    let events = run(options).map_err(|e| e.to_string())?;

    if transcript {
        print!("{}", format_transcript(&events, OutputFormat::Human));
    }

    Ok(())
}

/// Drive the scripted session against the same pure layers the TUI
/// uses, without a terminal.
fn cmd_walkthrough(format: OutputFormat, fast: bool) -> Result<(), String> {
    let timing = if fast {
        DemoTiming::instant()
    } else {
        DemoTiming::default()
    };
    let narrate = format == OutputFormat::Human;
    let mut app = App::new(timing.clone(), Local::now().naive_local());

    // The scripted request, typed exactly as the demo does.
    pause(timing.intro, fast);
    apply_scheduled(&mut app, ScheduledEffect::DemoStart);
    while matches!(app.demo, DemoPhase::Typing(_)) {
        apply_scheduled(&mut app, ScheduledEffect::DemoKeystroke);
        pause(timing.keystroke, fast);
    }
    pause(timing.send_pause, fast);
    apply_scheduled(&mut app, ScheduledEffect::DemoSend);

    if narrate && !fast {
        let sp = spinner("Processing request…");
        thread::sleep(timing.processing);
        sp.finish_and_clear();
    }
    apply_scheduled(&mut app, ScheduledEffect::FinishProcessing);

    // Compare, pick Copperhead, quote it, then quote both.
    apply_intent(&mut app, Intent::SelectVendor(Vendor::Copperhead));
    apply_intent(&mut app, Intent::RequestQuote);
    apply_intent(&mut app, Intent::GoBack);
    apply_intent(&mut app, Intent::UnifiedQuote);
    apply_intent(&mut app, Intent::GoBack);

    // News: hit the paywall, subscribe, land on the article.
    let news_shortcut = content::shortcuts()
        .iter()
        .position(|s| s.opens.is_some())
        .ok_or("demo content is missing the news shortcut")?;
    apply_intent(&mut app, Intent::ActivateShortcut(news_shortcut));
    apply_intent(&mut app, Intent::OpenStory(0));
    apply_intent(&mut app, Intent::ContinueSubscription);
    apply_intent(&mut app, Intent::OpenStory(1));

    print!("{}", format_transcript(&app.transcript, format));
    Ok(())
}

fn pause(duration: Duration, fast: bool) {
    if !fast && !duration.is_zero() {
        thread::sleep(duration);
    }
}

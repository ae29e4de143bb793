//! Colorful console output for search progress.
//!
//! Provides a custom `tracing` layer that formats queenstep lifecycle events
//! (`search_start`, `search_end`, `replay_start`, `replay_end`) with colors.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::logging::env_filter;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init(directive: Option<&str>) {
    INIT.get_or_init(|| {
        print_banner();

        let _ = tracing_subscriber::registry()
            .with(env_filter(directive))
            .with(QueenstepConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let version_line = format!(
        "queenstep v{} - stepwise N-Queens search",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = writeln!(stdout, "{}", "=".repeat(version_line.len()).bright_cyan());
    let _ = stdout.flush();
}

/// A tracing layer that formats queenstep events with colors.
pub struct QueenstepConsoleLayer;

impl<S: Subscriber> Layer<S> for QueenstepConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("queenstep") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    strategy: Option<String>,
    outcome: Option<String>,
    board: Option<String>,
    size: Option<u64>,
    duration_ms: Option<u64>,
    events: Option<u64>,
    solutions: Option<u64>,
    speed: Option<u64>,
    steps: Option<u64>,
    step_limit: Option<u64>,
    stop_at_first: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "strategy" => self.strategy = Some(s),
            "outcome" => self.outcome = Some(s),
            "board" => self.board = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "size" => self.size = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "events" => self.events = Some(value),
            "solutions" => self.solutions = Some(value),
            "speed" => self.speed = Some(value),
            "steps" => self.steps = Some(value),
            "step_limit" => self.step_limit = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, non_negative(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "stop_at_first" {
            self.stop_at_first = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "strategy" => self.strategy = Some(value.to_string()),
            "outcome" => self.outcome = Some(value.to_string()),
            "board" => self.board = Some(value.to_string()),
            _ => {}
        }
    }
}

/// Counters are never negative; anything below zero is shown as 0.
fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "search_end" => format_search_end(v),
        "replay_start" => format_replay_start(v),
        "replay_end" => format_replay_end(v),
        _ => String::new(),
    }
}

fn tag(v: &EventVisitor) -> String {
    format!("[{}]", v.strategy.as_deref().unwrap_or("Search"))
}

fn format_search_start(v: &EventVisitor) -> String {
    let size = v.size.unwrap_or(0);
    format!(
        "{} {} {} search started: board ({}x{}), stop at first ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        tag(v).bright_cyan(),
        size.to_string().bright_yellow(),
        size.to_string().bright_yellow(),
        v.stop_at_first.unwrap_or(true).to_string().yellow()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} search ended: outcome ({}), time spent ({}), events ({}), solutions ({}), speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        tag(v).bright_cyan(),
        format_outcome(v.outcome.as_deref().unwrap_or("unknown")),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.events.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.solutions.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.speed
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold()
    )
}

fn format_replay_start(v: &EventVisitor) -> String {
    let limit = match v.step_limit.unwrap_or(0) {
        0 => "none".to_string(),
        n => n.to_formatted_string(&Locale::en),
    };
    format!(
        "{} {} {} replay started: board ({}), step limit ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Replay]".bright_cyan(),
        v.size.unwrap_or(0).to_string().bright_yellow(),
        limit.yellow()
    )
}

fn format_replay_end(v: &EventVisitor) -> String {
    format!(
        "{} {} {} replay {} after {} steps: {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Replay]".bright_cyan(),
        format_outcome(v.outcome.as_deref().unwrap_or("unknown")),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.board.as_deref().unwrap_or("[]")
    )
}

fn format_outcome(outcome: &str) -> String {
    match outcome {
        "solved" => outcome.bright_green().bold().to_string(),
        "exhausted" => outcome.bright_red().to_string(),
        _ => outcome.white().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

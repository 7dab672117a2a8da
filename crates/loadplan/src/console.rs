//! Colorful console output for solve events.
//!
//! Provides a `tracing` layer that formats the solver's structured events
//! with colors. Enabled with the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "loadplan_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// overrides the default `loadplan_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let mut builder = EnvFilter::builder();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
            builder = builder.with_default_directive(directive);
        }

        let _ = tracing_subscriber::registry()
            .with(builder.from_env_lossy())
            .with(LoadPlanConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct LoadPlanConsoleLayer;

impl<S: Subscriber> Layer<S> for LoadPlanConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("loadplan_solver") {
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
    phase: Option<String>,
    carrier: Option<String>,
    optimizer: Option<String>,
    score: Option<String>,
    part_count: Option<u64>,
    surface_count: Option<u64>,
    pruned_sides: Option<u64>,
    hinted_parts: Option<u64>,
    errors: Option<u64>,
    warnings: Option<u64>,
    messages: Option<u64>,
    score_calculations: Option<u64>,
    feasible: Option<bool>,
    solvable: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "phase" => self.phase = Some(s),
            "carrier" => self.carrier = Some(s),
            "optimizer" => self.optimizer = Some(s),
            "score" => self.score = Some(s),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "carrier" => self.carrier = Some(value.to_string()),
            "optimizer" => self.optimizer = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "part_count" | "parts" => self.part_count = Some(value),
            "surface_count" => self.surface_count = Some(value),
            "pruned_sides" => self.pruned_sides = Some(value),
            "hinted_parts" => self.hinted_parts = Some(value),
            "errors" => self.errors = Some(value),
            "warnings" => self.warnings = Some(value),
            "messages" => self.messages = Some(value),
            "score_calculations" => self.score_calculations = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "feasible" => self.feasible = Some(value),
            "solvable" => self.solvable = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("solve_start") => format_solve_start(v),
        Some("preprocess_end") => format_preprocess_end(v),
        Some("phase_end") => format_phase_end(v),
        Some("solve_end") => format_solve_end(v),
        _ => String::new(),
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Solving started: carrier ({}), parts ({}), surfaces ({}), optimizer ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        v.carrier.as_deref().unwrap_or("?").white().bold(),
        v.part_count.unwrap_or(0).bright_yellow(),
        v.surface_count.unwrap_or(0).bright_yellow(),
        v.optimizer.as_deref().unwrap_or("?").bright_magenta(),
    )
}

fn format_preprocess_end(v: &EventVisitor) -> String {
    let errors = v.errors.unwrap_or(0);
    let errors = if errors > 0 {
        errors.bright_red().to_string()
    } else {
        errors.white().to_string()
    };
    format!(
        "{} {} {} pruned sides ({}), hinted parts ({}), errors ({}), warnings ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Preprocess]".bright_cyan(),
        v.pruned_sides.unwrap_or(0).yellow(),
        v.hinted_parts.unwrap_or(0).yellow(),
        errors,
        v.warnings.unwrap_or(0).yellow(),
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("unknown");
    format!(
        "{} {} {} phase ended",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        format!("[{}]", phase).bright_cyan(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    if v.solvable == Some(false) {
        return format!(
            "{} {} {} Request is unsolvable: {} message(s)",
            timestamp().bright_black(),
            "INFO".bright_green(),
            "[Solver]".bright_cyan(),
            v.messages.unwrap_or(0).bright_red(),
        );
    }

    let score = v.score.as_deref().unwrap_or("N/A");
    let status = if v.feasible.unwrap_or(false) {
        "FEASIBLE".bright_green().bold().to_string()
    } else {
        "INFEASIBLE".bright_red().bold().to_string()
    };
    format!(
        "{} {} {} Solving ended: score ({}), {}, score calculations ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        format_score(score),
        status,
        v.score_calculations.unwrap_or(0).white(),
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

/// Colors a `"{hard}hard/{soft}soft"` score by sign. Anything else is
/// returned unchanged.
fn format_score(score: &str) -> String {
    let Some((hard, soft)) = score.split_once('/') else {
        return score.to_string();
    };
    let levels = hard
        .strip_suffix("hard")
        .and_then(|h| h.parse::<i64>().ok())
        .zip(soft.strip_suffix("soft").and_then(|s| s.parse::<i64>().ok()));
    let Some((hard_value, soft_value)) = levels else {
        return score.to_string();
    };

    let hard = if hard_value < 0 {
        hard.bright_red().to_string()
    } else {
        hard.bright_green().to_string()
    };
    let soft = if soft_value < 0 {
        soft.yellow().to_string()
    } else {
        soft.white().to_string()
    };
    format!("{}/{}", hard, soft)
}

//! Step-by-step N-Queens replay in the terminal.
//!
//! Usage: `replay [config.toml|config.yaml]`
//!
//! Without an argument the default configuration (8x8 backtracking, stop at
//! the first solution) is used.

use std::process::ExitCode;

use queenstep::{
    console, run_replay, Assignment, ConfigError, ReplayConfig, ReplayOutcome, SearchEvent,
};

fn load_config(path: Option<String>) -> Result<ReplayConfig, ConfigError> {
    match path {
        Some(path) => ReplayConfig::load(path),
        None => Ok(ReplayConfig::default()),
    }
}

fn describe(event: &SearchEvent) -> String {
    match event {
        SearchEvent::Place { row, col, .. } => format!("place  row {row} col {col}"),
        SearchEvent::Remove { row, col, .. } => format!("remove row {row} col {col}"),
        SearchEvent::Solution { .. } => "solution".to_string(),
    }
}

fn print_board(board: &Assignment) {
    let n = board.len();
    println!("{}", "-".repeat(n * 2 + 1));
    for row in 0..n {
        print!("|");
        for col in 0..n {
            print!("{}", if board.column(row) == Some(col) { "Q|" } else { " |" });
        }
        println!();
    }
    println!("{}", "-".repeat(n * 2 + 1));
}

fn main() -> ExitCode {
    let config = match load_config(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    console::init(config.log_filter.as_deref());

    let report = run_replay(&config, |step| {
        let m = step.metrics;
        println!(
            "{:>6}  {:<22} g={} h={} f={} attacks={}  {}",
            step.index,
            describe(&step.event),
            m.g,
            m.h,
            m.f,
            m.attacking_pairs,
            step.event.snapshot()
        );
    });

    let report = match report {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match &report.outcome {
        ReplayOutcome::Solved(board) => {
            println!(
                "\n{}-Queens solution after {} steps ({}):",
                report.size.get(),
                report.steps,
                report.strategy
            );
            print_board(board);
        }
        ReplayOutcome::Exhausted => {
            println!("\nNo solution for {} ({} steps).", report.size, report.steps);
        }
        ReplayOutcome::Running => {
            println!("\nStopped after {} steps without a result.", report.steps);
        }
    }

    ExitCode::SUCCESS
}

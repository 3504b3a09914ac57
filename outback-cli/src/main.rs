mod console;
mod game;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::Rng;
use std::io::{self, Write};
use std::path::PathBuf;

use console::Console;
use game::GameConfig;
use outback_game::ResultSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary after the farewell text
    Console,
    /// Machine-readable JSON summary
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "outback-trail", version)]
#[command(about = "Survive the crossing from the trail head to the end of the Outback Trail")]
struct Args {
    /// Directory holding `<name>.txt` save files
    #[arg(long, default_value = ".")]
    save_dir: PathBuf,

    /// Traveler name; skips the name prompt
    #[arg(long)]
    name: Option<String>,

    /// Seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Summary format printed when the session ends
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().r#gen());
    log::debug!("session seed {seed}");
    let config = GameConfig {
        save_dir: args.save_dir,
        name: args.name,
        seed,
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    let summary = game::run(&config, &mut console)?;
    write_report(console.out(), &summary, args.report)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn write_report<W: Write>(
    out: &mut W,
    summary: &ResultSummary,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Console => render::console_summary(out, summary)?,
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(summary).context("failed to encode summary")?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush().context("failed to flush report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use outback_game::{Loadout, TravelerState, result_summary};

    #[test]
    fn args_default_to_console_report_in_current_dir() {
        let args = Args::try_parse_from(["outback-trail"]).unwrap();
        assert_eq!(args.save_dir, PathBuf::from("."));
        assert_eq!(args.report, ReportFormat::Console);
        assert!(args.seed.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn args_accept_every_flag() {
        let args = Args::try_parse_from([
            "outback-trail",
            "--save-dir",
            "/tmp/saves",
            "--name",
            "Clancy",
            "--seed",
            "42",
            "--report",
            "json",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.save_dir, PathBuf::from("/tmp/saves"));
        assert_eq!(args.name.as_deref(), Some("Clancy"));
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.report, ReportFormat::Json);
        assert!(args.verbose);
    }

    #[test]
    fn json_report_is_parseable() {
        let state = TravelerState::new(Loadout {
            food: 100,
            water: 100,
            spare_parts: 5,
            trade_goods: 0,
        });
        let mut out = Vec::new();
        write_report(&mut out, &result_summary(&state), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["days"], 1);
        assert_eq!(value["distance_remaining"], 850);
        assert!(value["ending"].is_null());
    }
}

//! Player-facing text for events, banners and the closing summary.

use colored::Colorize;
use std::io::{self, Write};

use outback_game::{
    BreakdownOutcome, Ending, EventReport, ResultSummary, SubOutcome, TrailEvent, TradeOutcome,
    TradeResolution,
};

const VICTORY_STARS: usize = 61;
const DEATH_BANG: usize = 40;

pub fn event_header<W: Write>(out: &mut W, event: &TrailEvent) -> io::Result<()> {
    writeln!(out, "\n{}", format!("!! {} !!", event.name).yellow().bold())?;
    writeln!(out, "{}", event.message)
}

/// Describe a resolved event. Merchant headers are printed before the
/// offer is put to the player, so they are skipped here.
pub fn event_report<W: Write>(out: &mut W, report: &EventReport) -> io::Result<()> {
    if !matches!(report.outcome, SubOutcome::Trade(_)) {
        event_header(out, report.event())?;
    }
    match report.outcome {
        SubOutcome::DeltasOnly => Ok(()),
        SubOutcome::Breakdown(outcome) => breakdown(out, outcome),
        SubOutcome::Trade(outcome) => trade(out, outcome),
        SubOutcome::Found(find) => writeln!(
            out,
            "{}",
            format!(
                "You found {}! +{} {}.",
                find.description(),
                find.amount,
                find.label()
            )
            .green()
        ),
    }
}

fn breakdown<W: Write>(out: &mut W, outcome: BreakdownOutcome) -> io::Result<()> {
    writeln!(
        out,
        "You need {} spare part(s) to repair the caravan.",
        outcome.required()
    )?;
    match outcome {
        BreakdownOutcome::Repaired { .. } => {
            writeln!(out, "{}", "You repair the caravan and continue.".green())
        }
        BreakdownOutcome::Stranded { .. } => writeln!(
            out,
            "{}",
            "Not enough spare parts: you are stranded and perish.".red()
        ),
    }
}

fn trade<W: Write>(out: &mut W, outcome: TradeOutcome) -> io::Result<()> {
    match outcome.resolution {
        TradeResolution::Declined => writeln!(out, "You decline the offer and move on."),
        TradeResolution::Unaffordable => writeln!(
            out,
            "{}",
            format!("You don\u{2019}t have enough {}.", outcome.offer.give.kind).red()
        ),
        TradeResolution::Accepted => writeln!(out, "{}", "Trade complete.".green()),
    }
}

pub fn ending_banner<W: Write>(out: &mut W, ending: Ending) -> io::Result<()> {
    match ending {
        Ending::Arrived => {
            let stars = "*".repeat(VICTORY_STARS);
            let rule = "-".repeat(VICTORY_STARS);
            writeln!(out, "{}", stars.bright_yellow())?;
            writeln!(out, "{rule}")?;
            writeln!(
                out,
                "{}",
                "🏁 Congratulations!!! You reached the end of the trail alive!"
                    .bright_green()
                    .bold()
            )?;
            writeln!(out, "{rule}")?;
            writeln!(out, "{}", stars.bright_yellow())
        }
        Ending::Died { cause } => {
            let bangs = "!".repeat(DEATH_BANG);
            writeln!(out, "{}", bangs.red())?;
            writeln!(out, "{}", format!("💀 You died of {cause}.").red().bold())?;
            writeln!(out, "{}", bangs.red())
        }
    }
}

/// Closing summary in the console report format.
pub fn console_summary<W: Write>(out: &mut W, summary: &ResultSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Journey Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "==================".cyan())?;
    writeln!(out, "{}", summary.headline)?;
    writeln!(out, "Days on the trail: {}", summary.days)?;
    writeln!(
        out,
        "Distance travelled: {} km ({} km left)",
        summary.distance_travelled, summary.distance_remaining
    )?;
    writeln!(out, "Health: {}", summary.health)?;
    writeln!(
        out,
        "Supplies: food {}, water {}, spare parts {}, opal gems {}",
        summary.food, summary.water, summary.spare_parts, summary.trade_goods
    )
}

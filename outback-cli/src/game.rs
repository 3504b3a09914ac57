//! Interactive game loop driving one traveler from the trail head to an ending.

use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use outback_game::constants::KNAPSACK_CAPACITY;
use outback_game::{
    EventKind, FileStorage, GameEngine, HELP_TEXT, Loadout, LoadoutError, ResultSummary,
    TradeOffer, TrailSession, events::event, is_valid_traveler_name, parse_quantity,
    result_summary, validate_loadout,
};

use crate::console::{Command, Console};
use crate::render;

const KNAPSACK_PROMPTS: [&str; 4] = [
    "Enter units of FOOD to pack: ",
    "Enter units of WATER to pack: ",
    "Enter number of SPARE PARTS to pack: ",
    "Enter number of OPAL GEMS to pack: ",
];

const INVALID_NAME: &str = "Name must be non-empty and alphanumeric (no spaces). Try again.";

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub save_dir: PathBuf,
    /// Skips the name prompt when set.
    pub name: Option<String>,
    pub seed: u64,
}

/// Play one session to completion or until the player quits.
pub fn run<R, W>(config: &GameConfig, console: &mut Console<R, W>) -> Result<ResultSummary>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        console.out(),
        "{}",
        "================= Aussie Trail =================".bright_cyan().bold()
    )?;
    let name = traveler_name(config, console)?;
    let engine = GameEngine::new(FileStorage::new(&config.save_dir));

    let resumed = engine
        .resume_session(&name, config.seed)
        .with_context(|| format!("failed to load the save for {name}"))?;
    let mut session = if let Some(session) = resumed {
        writeln!(console.out(), "{}", "[Game loaded]".dimmed())?;
        if let Some(ending) = session.state().ending() {
            render::ending_banner(console.out(), ending)?;
        }
        session
    } else {
        writeln!(console.out(), "New adventurer detected – welcome, {name}!")?;
        let loadout = plan_knapsack(console)?;
        let session = engine.create_session(loadout, config.seed);
        save(&engine, &name, &session, console)?;
        session
    };
    info!("{name} sets out with seed {}", session.seed());

    while !session.is_over() {
        writeln!(console.out(), "{}", session.describe())?;
        writeln!(
            console.out(),
            "Choose action: [T]ravel, [R]est, [S]ave, [I]nfo, [Q]uit"
        )?;
        let command = match console.prompt("> ")? {
            Some(line) => Command::parse(&line),
            None => {
                debug!("input closed, quitting");
                Some(Command::Quit)
            }
        };

        match command {
            Some(Command::Travel) => travel(&mut session, console)?,
            Some(Command::Rest) => {
                session.rest();
                writeln!(console.out(), "You took a rest day.")?;
            }
            Some(Command::Save) => {
                save(&engine, &name, &session, console)?;
                continue;
            }
            Some(Command::Help) => {
                writeln!(console.out(), "{HELP_TEXT}")?;
                continue;
            }
            Some(Command::Quit) => {
                save(&engine, &name, &session, console)?;
                writeln!(console.out(), "Progress saved. Goodbye.")?;
                return Ok(result_summary(session.state()));
            }
            None => {
                writeln!(console.out(), "{}", "Invalid choice.".red())?;
                continue;
            }
        }

        if let Some(ending) = session.state().ending() {
            render::ending_banner(console.out(), ending)?;
        }
    }

    save(&engine, &name, &session, console)?;
    Ok(result_summary(session.state()))
}

fn traveler_name<R: BufRead, W: Write>(
    config: &GameConfig,
    console: &mut Console<R, W>,
) -> Result<String> {
    if let Some(name) = &config.name {
        if !is_valid_traveler_name(name) {
            bail!("invalid traveler name {name:?}: names must be non-empty and alphanumeric");
        }
        return Ok(name.clone());
    }
    loop {
        let name = console
            .prompt("Enter your adventurer name: ")?
            .context("input closed before a traveler name was entered")?;
        if is_valid_traveler_name(&name) {
            return Ok(name);
        }
        writeln!(console.out(), "{INVALID_NAME}")?;
    }
}

/// Ask for all four quantities, starting over whenever the set is rejected.
fn plan_knapsack<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Loadout> {
    writeln!(
        console.out(),
        "You have a knapsack that can carry {KNAPSACK_CAPACITY} total units of supplies."
    )?;
    writeln!(
        console.out(),
        "Resources available: Food, Water, Spare parts, opal gems.\n"
    )?;

    'packing: loop {
        let mut quantities = [0_i64; 4];
        for (slot, prompt) in quantities.iter_mut().zip(KNAPSACK_PROMPTS) {
            let line = console
                .prompt(prompt)?
                .context("input closed while packing the knapsack")?;
            match parse_quantity(&line) {
                Ok(value) => *slot = value,
                Err(err) => {
                    debug!("{err}");
                    writeln!(console.out(), "Please enter whole numbers only.\n")?;
                    continue 'packing;
                }
            }
        }

        let [food, water, spare_parts, trade_goods] = quantities;
        match validate_loadout(food, water, spare_parts, trade_goods) {
            Ok(loadout) => return Ok(loadout),
            Err(err) => {
                debug!("{err}");
                let message = match err {
                    LoadoutError::NotANumber { .. } => "Please enter whole numbers only.",
                    LoadoutError::Negative { .. } => "Values cannot be negative.",
                    LoadoutError::OverCapacity { .. } => {
                        "That exceeds your knapsack capacity. Try again."
                    }
                };
                writeln!(console.out(), "{message}\n")?;
            }
        }
    }
}

fn travel<R: BufRead, W: Write>(
    session: &mut TrailSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    let km = session.travel_leg();
    writeln!(console.out(), "You travelled {km} km today.")?;

    let mut failure = None;
    let report = session.trail_event(&mut |offer: &TradeOffer| {
        let answer = render::event_header(console.out(), event(EventKind::TravellingMerchant))
            .map_err(anyhow::Error::from)
            .and_then(|()| console.confirm_trade(offer));
        answer.unwrap_or_else(|err| {
            failure.get_or_insert(err);
            false
        })
    });
    if let Some(err) = failure {
        return Err(err.context("failed to settle the merchant's offer"));
    }
    if let Some(report) = report {
        render::event_report(console.out(), &report)?;
    }
    Ok(())
}

fn save<R: BufRead, W: Write>(
    engine: &GameEngine<FileStorage>,
    name: &str,
    session: &TrailSession,
    console: &mut Console<R, W>,
) -> Result<()> {
    engine
        .save_session(name, session)
        .with_context(|| format!("failed to save progress for {name}"))?;
    writeln!(console.out(), "{}", "[Game saved]".dimmed())?;
    Ok(())
}

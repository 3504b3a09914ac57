//! Line-oriented prompting over any reader/writer pair.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use outback_game::TradeOffer;

/// A parsed main-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Travel,
    Rest,
    Save,
    Help,
    Quit,
}

impl Command {
    /// Case-insensitive single-letter commands; anything else is rejected.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "t" => Some(Self::Travel),
            "r" => Some(Self::Rest),
            "s" => Some(Self::Save),
            "i" | "h" => Some(Self::Help),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Print `message` and read one line. `None` means the input is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Show a merchant's offer and read a yes/no answer. Anything not
    /// starting with `y`, including closed input, declines.
    pub fn confirm_trade(&mut self, offer: &TradeOffer) -> Result<bool> {
        writeln!(
            self.out,
            "He wants to sell you {} {} in exchange for {} {}. Accept? (y/n)",
            offer.receive.amount, offer.receive.kind, offer.give.amount, offer.give.kind
        )?;
        let answer = self.prompt("> ")?.unwrap_or_default();
        Ok(answer.to_ascii_lowercase().starts_with('y'))
    }
}

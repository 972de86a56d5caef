use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::format::{format_chat, format_decode_error, format_header};
use crate::profile::locate_profile;
use crate::replay::{decode_replay, ReplayDecoder, ReplayFile, ReplayListing, ReplayReader};

/// Blocks until the operator presses a key
pub trait KeyWait {
    fn wait_for_key(&mut self) -> Result<()>;
}

/// Reads a single key press from the console in raw mode
pub struct TerminalKeyWait;

impl KeyWait for TerminalKeyWait {
    fn wait_for_key(&mut self) -> Result<()> {
        if !io::stdin().is_terminal() {
            debug!("stdin is not a terminal, not waiting for a key");
            return Ok(());
        }

        enable_raw_mode()?;
        let result = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        disable_raw_mode()?;
        result.context("Failed to read key press")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    StartingUp,
    ProcessingToday,
    PromptingForPrevious,
    ProcessingPrevious { count: usize },
    AwaitingExit,
    Terminated,
}

pub const PREVIOUS_PROMPT: &str = "How many more previous games to show?: ";
pub const INVALID_COUNT: &str = "Invalid input. Showing 0 additional games.";

/// Interpret the operator's answer to the previous-games prompt.
/// Empty means zero; `None` means the input was not a non-negative integer.
pub fn parse_previous_count(input: &str) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return Some(0);
    }
    match input.parse::<i64>() {
        Ok(n) => usize::try_from(n).ok(),
        Err(_) => {
            // Too large for an integer but still a count: show everything
            let digits = input.strip_prefix('+').unwrap_or(input);
            (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(usize::MAX)
        }
    }
}

pub struct App<D, K> {
    pub stage: Stage,
    config: Config,
    today: NaiveDate,
    decoder: D,
    keys: K,
    listing: ReplayListing,
}

impl<D: ReplayDecoder, K: KeyWait> App<D, K> {
    /// `today` decides which replays count as today's games
    pub fn new(config: Config, today: NaiveDate, decoder: D, keys: K) -> Self {
        Self {
            stage: Stage::StartingUp,
            config,
            today,
            decoder,
            keys,
            listing: ReplayListing::default(),
        }
    }

    /// Drive the session to completion, reading answers from `input` and writing the transcript
    /// to `out`. Apart from console write errors, only startup failures are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        while self.stage != Stage::Terminated {
            self.stage = self.step(input, out)?;
        }
        Ok(())
    }

    fn step<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Stage> {
        let next = match self.stage {
            Stage::StartingUp => {
                let profile =
                    locate_profile(&self.config.base_dir, self.config.profile_id.as_deref())?;
                self.listing = ReplayReader::list_by_day(&profile.save_dir, self.today)?;
                info!(
                    "Profile {}: {} games today, {} earlier",
                    profile.id,
                    self.listing.today.len(),
                    self.listing.previous.len()
                );
                Stage::ProcessingToday
            }
            Stage::ProcessingToday => {
                let today = &self.listing.today;
                if today.is_empty() {
                    writeln!(out, "\nNo games played today.")?;
                } else {
                    writeln!(out, "\nProcessing today's {} games:", today.len())?;
                    self.show_games(out, today, today.len())?;
                }
                Stage::PromptingForPrevious
            }
            Stage::PromptingForPrevious => {
                write!(out, "\n{}", PREVIOUS_PROMPT)?;
                out.flush()?;

                let mut line = String::new();
                if let Err(e) = input.read_line(&mut line) {
                    warn!("Failed to read answer: {}", e);
                    line.clear();
                }

                let count = match parse_previous_count(&line) {
                    Some(count) => count,
                    None => {
                        debug!("Rejected previous game count {:?}", line.trim());
                        writeln!(out, "{}", INVALID_COUNT)?;
                        0
                    }
                };
                Stage::ProcessingPrevious { count }
            }
            Stage::ProcessingPrevious { count } => {
                if count > 0 {
                    let shown = &self.listing.previous[..count.min(self.listing.previous.len())];
                    if shown.is_empty() {
                        writeln!(out, "\nNo previous games available.")?;
                    } else {
                        // Numbered against the requested count, even when fewer exist
                        writeln!(out, "\nProcessing {} previous games:", count)?;
                        self.show_games(out, shown, count)?;
                    }
                }
                Stage::AwaitingExit
            }
            Stage::AwaitingExit => {
                writeln!(out, "\nPress any key to quit...")?;
                out.flush()?;
                if let Err(e) = self.keys.wait_for_key() {
                    warn!("{:#}", e);
                }
                Stage::Terminated
            }
            Stage::Terminated => Stage::Terminated,
        };
        Ok(next)
    }

    /// Decode and print each replay as a numbered `Game i/total` block.
    /// A replay that fails to decode prints its error and the batch moves on.
    fn show_games<W: Write>(&self, out: &mut W, replays: &[ReplayFile], total: usize) -> Result<()> {
        for (idx, replay) in replays.iter().enumerate() {
            let (chat, summary) = match decode_replay(&self.decoder, &replay.path) {
                Ok(summary) => (format_chat(&summary), Some(summary)),
                Err(e) => (format_decode_error(&replay.path, &e), None),
            };
            writeln!(
                out,
                "\nGame {}/{}: {}",
                idx + 1,
                total,
                format_header(&replay.path, summary.as_ref())
            )?;
            writeln!(out, "{}", chat)?;
        }
        Ok(())
    }
}

use anyhow::{Context, Error as Anyhow};
use clap::{Parser, ValueEnum};
use lib::wire::{canonical, Event, HistoryRecord, WireMove};
use std::io::{stdin, BufRead};
use tracing::{info, instrument, warn};

/// The kind of payload to decode.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Kind {
    /// Moves as sent over the network.
    #[default]
    Move,
    /// Records of a game's history.
    Record,
    /// Socket events.
    Event,
}

/// Reads JSON payloads from the standard input, one per line, and describes them.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Decode {
    /// The kind of payload to expect.
    #[clap(short, long, value_enum, default_value_t)]
    kind: Kind,
}

fn describe(event: &Event) -> String {
    match event {
        Event::Move(w) => w.describe(),
        Event::TurnUpdated { current_turn } => format!("{} to move", current_turn.name()),
        Event::GameUpdated(status) => format!("game updated: {status}"),
        Event::Error { message } => format!("error: {message}"),
    }
}

impl Decode {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut records = Vec::new();
        let mut rejected = 0;

        for (n, line) in stdin().lock().lines().enumerate() {
            let line = line.context("failed to read from stdin")?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let decoded = match self.kind {
                Kind::Move => line.parse::<WireMove>().map(|w| w.describe()),
                Kind::Event => line.parse::<Event>().map(|e| describe(&e)),
                Kind::Record => line.parse::<HistoryRecord>().map(|r| {
                    let description = r.r#move.describe();
                    records.push(r);
                    description
                }),
            };

            match decoded {
                Ok(description) => println!("{description}"),
                Err(e) => {
                    warn!(line = n + 1, error = %e, "skipping malformed payload");
                    rejected += 1;
                }
            }
        }

        if !records.is_empty() {
            println!();
            for (i, w) in canonical(records).iter().enumerate() {
                println!("#{} {}", i + 1, w.describe());
            }
        }

        info!(rejected, "done");

        Ok(())
    }
}

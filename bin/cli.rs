use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Tools for inspecting the three-player hexagonal board and its payloads.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// Whether to log the time spent in each applet.
    #[clap(short, long)]
    timed: bool,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    fn trace(&self) {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let spans = if self.timed {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let writer = layer()
            .pretty()
            .without_time()
            .with_span_events(spans)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.trace();
        self.applet.unwrap_or_default().execute()
    }
}

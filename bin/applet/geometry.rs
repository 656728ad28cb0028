use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::board::Config;
use serde::Serialize;
use std::io::{stdout, Write};
use tracing::{info, instrument};

/// Projects the board and prints its geometry as JSON lines.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Geometry {
    /// The board configuration.
    #[clap(short, long, default_value_t)]
    config: Config,
}

fn emit<T: Serialize>(out: &mut impl Write, item: &T) -> Result<(), Anyhow> {
    serde_json::to_writer(&mut *out, item).context("failed to serialize geometry")?;
    writeln!(out)?;
    Ok(())
}

impl Geometry {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let view = self.config.view();
        let mut out = stdout().lock();

        emit(&mut out, &view.viewport())?;

        let mut tiles = 0;
        for tile in view.tiles() {
            emit(&mut out, &tile)?;
            tiles += 1;
        }

        let labels = view.labels();
        for label in labels.files.iter().chain(&labels.ranks) {
            emit(&mut out, label)?;
        }

        info!(tiles, orientation = %view.orientation(), "projected board");

        Ok(())
    }
}

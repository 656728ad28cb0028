use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::hex::{Cell, Layout, Orientation};
use tracing::{instrument, warn};

fn parse_cell(s: &str) -> Result<Cell, Anyhow> {
    let (q, r) = s.split_once(',').context("expected `q,r`")?;
    let q = q.trim().parse().context("invalid q coordinate")?;
    let r = r.trim().parse().context("invalid r coordinate")?;
    Ok(Cell::try_new(q, r)?)
}

/// Prints the name of a cell.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Notation {
    /// The orientation of the board, or the color sitting at the bottom.
    #[clap(short, long, default_value_t)]
    orientation: Orientation,

    /// The axial coordinates of the cell, as in `q,r`.
    #[clap(value_parser = parse_cell, allow_hyphen_values = true)]
    cell: Cell,
}

impl Notation {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        if !Layout.contains(self.cell) {
            warn!(cell = %self.cell, "cell is not on the board");
        }

        println!("{}", self.cell.notation(self.orientation));
        Ok(())
    }
}

use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod decode;
mod geometry;
mod notation;

#[derive(From, Subcommand)]
pub enum Applet {
    Decode(decode::Decode),
    Geometry(geometry::Geometry),
    Notation(notation::Notation),
}

impl Default for Applet {
    fn default() -> Self {
        geometry::Geometry::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Decode(a) => a.execute(),
            Applet::Geometry(a) => a.execute(),
            Applet::Notation(a) => a.execute(),
        }
    }
}

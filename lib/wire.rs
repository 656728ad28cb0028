use derive_more::{Display, Error, From};

mod event;
mod r#move;
mod record;

pub use event::*;
pub use r#move::*;
pub use record::*;

/// The reason why parsing a JSON payload failed.
#[derive(Debug, Display, Error, From)]
#[display(fmt = "failed to parse payload")]
pub struct ParseWireError(serde_json::Error);

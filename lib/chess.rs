mod color;
mod key;
mod r#move;
mod move_type;
mod piece;
mod role;
mod state;

pub use color::*;
pub use key::*;
pub use move_type::*;
pub use piece::*;
pub use r#move::*;
pub use role::*;
pub use state::*;

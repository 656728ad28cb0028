mod cell;
mod layout;
mod notation;
mod orientation;
mod pixel;
mod shade;
mod viewport;

pub use cell::*;
pub use layout::*;
pub use notation::*;
pub use orientation::*;
pub use pixel::*;
pub use shade::*;
pub use viewport::*;

mod color;
mod constants;
mod summary;

pub mod util;

pub use color::*;
pub use constants::*;
pub use summary::*;
pub use util::format_clock;

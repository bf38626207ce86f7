mod width;
mod screen;
mod readout;

pub use width::{BitWidth, WidthError};
pub use screen::Screen;
pub use readout::Readout;

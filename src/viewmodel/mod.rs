mod clock;
mod exhibit_viewmodel;
mod ticker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use exhibit_viewmodel::{
    overflow_demo_value, ExhibitViewModel, Preset, TimeSource, OVERFLOW_CYCLE, OVERFLOW_START,
};
pub use ticker::{tick_readouts, REFRESH_PERIOD};

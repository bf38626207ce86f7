use tracing::debug;

use crate::model::{Readout, Screen};
use crate::util::{format_bits, safe_calendar_string};
use super::Clock;

/// First value of the rollover replay, ten seconds before a 32-bit `time_t` runs out
pub const OVERFLOW_START: i64 = (1 << 31) - 10;

/// Length in seconds of one rollover replay cycle
pub const OVERFLOW_CYCLE: i64 = 20;

/// The 32-bit value the overflow screen shows at `now`.
///
/// Counts up from [`OVERFLOW_START`] and wraps past `i32::MAX` into negative
/// numbers the way a real 32-bit counter would.
pub fn overflow_demo_value(now: i64) -> i64 {
    let value = OVERFLOW_START + now.rem_euclid(OVERFLOW_CYCLE);
    if value >= 1 << 31 {
        value - (1 << 32)
    } else {
        value
    }
}

/// Where the displayed instant comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    Now,
    Slider(i64),
}

/// The Now / Min / Zero / Max buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    Now,
    Min,
    Max,
    Zero,
}

/// Headless state of the exhibit: which screen is up and what time it shows
#[derive(Debug, Clone)]
pub struct ExhibitViewModel {
    screen: Screen,
    source: TimeSource,
}

impl ExhibitViewModel {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            source: TimeSource::Now,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn source(&self) -> TimeSource {
        self.source
    }

    /// Switch to another screen, keeping the time source
    pub fn show(&mut self, screen: Screen) {
        if screen != self.screen {
            debug!(from = %self.screen, to = %screen, "switching screen");
            self.screen = screen;
        }
    }

    /// Move the slider, clamped to the current screen's range.
    /// Ignored on screens without a slider.
    pub fn slide_to(&mut self, value: i64) {
        if let Some((min, max)) = self.screen.slider_range() {
            self.source = TimeSource::Slider(value.clamp(min, max));
        }
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        let Some((min, max)) = self.screen.slider_range() else {
            debug!(screen = %self.screen, ?preset, "screen has no slider, preset ignored");
            return;
        };

        self.source = match preset {
            Preset::Now => TimeSource::Now,
            Preset::Min => TimeSource::Slider(min),
            Preset::Max => TimeSource::Slider(max),
            Preset::Zero => TimeSource::Slider(0),
        };
        debug!(screen = %self.screen, ?preset, source = ?self.source, "preset applied");
    }

    /// The value the current screen displays at this instant
    pub fn current_value(&self, clock: &dyn Clock) -> i64 {
        match (self.screen, self.source) {
            (Screen::Overflow, _) => overflow_demo_value(clock.now_unix()),
            (_, TimeSource::Now) => clock.now_unix(),
            (_, TimeSource::Slider(value)) => value,
        }
    }

    pub fn readout(&self, clock: &dyn Clock) -> Readout {
        let value = self.current_value(clock);
        let width = self.screen.width();

        Readout {
            screen: self.screen,
            value,
            width,
            binary: format_bits(i128::from(value), width),
            calendar: safe_calendar_string(value),
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::BitWidth;

/// The three exhibit screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Live 32-bit clock with a slider
    Clock,
    /// Endless replay of the 2038 rollover
    Overflow,
    /// 64-bit clock with a slider
    Wide,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Clock, Screen::Overflow, Screen::Wide];

    pub fn width(self) -> BitWidth {
        match self {
            Screen::Clock | Screen::Overflow => BitWidth::W32,
            Screen::Wide => BitWidth::W64,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Clock => "What Time is It?",
            Screen::Overflow => "The 2038 Problem",
            Screen::Wide => "What's New in Computer Time?",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Screen::Clock => "How do computers know what time it is?",
            Screen::Overflow => "How could 99 + 1 = 0?",
            Screen::Wide => "Nowadays, we use twice as much space to store the time!",
        }
    }

    /// Inclusive slider bounds, or `None` for screens without a slider
    pub fn slider_range(self) -> Option<(i64, i64)> {
        match self {
            Screen::Clock => Some((i32::MIN as i64, i32::MAX as i64)),
            Screen::Overflow => None,
            Screen::Wide => Some((i64::MIN, i64::MAX)),
        }
    }

    pub fn has_slider(self) -> bool {
        self.slider_range().is_some()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Clock => "clock",
            Screen::Overflow => "overflow",
            Screen::Wide => "wide",
        };
        f.write_str(name)
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clock" | "32" => Ok(Screen::Clock),
            "overflow" | "2038" => Ok(Screen::Overflow),
            "wide" | "64" => Ok(Screen::Wide),
            other => Err(format!("unknown screen '{}' (expected clock, overflow or wide)", other)),
        }
    }
}

use serde::Serialize;

use super::{BitWidth, Screen};

/// Everything one screen displays for a single tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub screen: Screen,
    pub value: i64,
    pub width: BitWidth,
    pub binary: String,
    pub calendar: String,
}

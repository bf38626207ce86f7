mod bits;
mod format;

pub use bits::{format_bits, parse_bits, saturated_bits};
pub use format::{approximate_year, approximate_year_string, safe_calendar_string, SECONDS_PER_YEAR};

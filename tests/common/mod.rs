// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use epoch_exhibit::model::BitWidth;

/// Interesting values around the edges of 32- and 64-bit time
pub fn edge_values() -> Vec<i128> {
    vec![
        i64::MIN as i128,
        i32::MIN as i128 - 1,
        i32::MIN as i128,
        -86_400,
        -1,
        0,
        1,
        1_700_000_000,
        i32::MAX as i128,
        i32::MAX as i128 + 1,
        i64::MAX as i128,
    ]
}

/// Decode a rendered bit string by hand: strip spaces, read as unsigned, remove the bias
pub fn decode_biased(rendered: &str, width: BitWidth) -> i128 {
    let digits: String = rendered.split(' ').collect();
    let biased = u128::from_str_radix(&digits, 2).unwrap();
    biased as i128 - (1i128 << (width.bits() - 1))
}

pub fn all_ones(width: BitWidth) -> String {
    vec!["11111111"; width.bytes()].join(" ")
}

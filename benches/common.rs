// Shared benchmark helpers
#![allow(dead_code)]

/// Evenly spread values across the signed 64-bit range, plus a few out of range
pub fn generate_values(count: usize) -> Vec<i128> {
    let step = (u64::MAX / count.max(1) as u64) as i128;
    (0..count as i128)
        .map(|i| i64::MIN as i128 + i * step)
        .chain([i64::MAX as i128 + 1, i128::MIN])
        .collect()
}

/// Timestamps spanning both the exact and the approximate calendar paths
pub fn generate_timestamps(count: usize) -> Vec<i64> {
    generate_values(count)
        .into_iter()
        .filter_map(|v| i64::try_from(v).ok())
        .collect()
}

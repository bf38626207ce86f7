use crate::model::BitWidth;

const SATURATED_BYTE: &str = "11111111";

/// Render `value` as a bias-adjusted, byte-grouped binary string of `width` bits.
///
/// The value is shifted by `2^(N-1)` so that the most negative representable
/// number is all zeros and the most positive is all ones. Values outside the
/// signed range of `width` render as all ones, which is a saturation marker and
/// not a wraparound: callers that want to show rollover must wrap the value
/// themselves before calling this.
pub fn format_bits(value: i128, width: BitWidth) -> String {
    if !width.contains(value) {
        return saturated_bits(width);
    }

    let bits = width.bits();
    let mask = u128::MAX >> (128 - bits);
    let biased = (value as u128).wrapping_add(1u128 << (bits - 1)) & mask;

    let n = bits as usize;
    let mut digits = format!("{:0width$b}", biased, width = n);
    if digits.len() > n {
        digits.drain(..digits.len() - n);
    }

    group_bytes(&digits)
}

/// The all-ones pattern shown for values that do not fit in `width`
pub fn saturated_bits(width: BitWidth) -> String {
    vec![SATURATED_BYTE; width.bytes()].join(" ")
}

/// Inverse of [`format_bits`] for in-range values.
///
/// Whitespace between groups is ignored. Returns `None` unless exactly
/// `width` binary digits remain.
pub fn parse_bits(rendered: &str, width: BitWidth) -> Option<i128> {
    let digits: String = rendered.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() != width.bits() as usize || !digits.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }

    let biased = u128::from_str_radix(&digits, 2).ok()?;
    let bits = width.bits();
    let shift = 128 - bits;
    let unbiased = biased.wrapping_sub(1u128 << (bits - 1));
    // Sign-extend from `bits` to 128.
    Some(((unbiased << shift) as i128) >> shift)
}

fn group_bytes(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 8);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 8 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 50;

/// A clamped window into a ranked board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PageRequest {
    /// Clamps `limit` into `[1, MAX_LIMIT]` and `offset` to be non-negative.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset: offset.max(0),
        }
    }

    /// Builds a page from raw query values. Unparsable or missing values fall
    /// back to the defaults before clamping.
    pub fn from_params(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self::new(
            limit.and_then(parse_leading_int).unwrap_or(DEFAULT_LIMIT),
            offset.and_then(parse_leading_int).unwrap_or(0),
        )
    }
}

/// Lenient integer parsing: skips leading whitespace, accepts an optional
/// sign, and reads digits up to the first non-digit. `"12abc"` is 12, `"abc"`
/// is `None`. Values beyond `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });
    Some(if negative { -magnitude } else { magnitude })
}

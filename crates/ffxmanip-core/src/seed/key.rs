// crates/ffxmanip-core/src/seed/key.rs

use chrono::{Datelike, NaiveDateTime, Timelike};

/// The two trailing decimal digits of the year, reread as hex digits:
/// 2024 -> "24" -> 0x24 = 36. Game quirk, keep as-is.
#[inline]
pub fn year_byte(year: i32) -> u32 {
    let yy = year.rem_euclid(100) as u32;
    (yy / 10) * 16 + (yy % 10)
}

/// XOR-combination of the six calendar fields the game feeds its seeder.
/// Every field is below 256, so the key always lands in [0, 255].
pub fn encode_key(at: NaiveDateTime) -> i64 {
    let k = at.day()
        ^ at.month()
        ^ year_byte(at.year())
        ^ at.hour()
        ^ at.minute()
        ^ at.second();
    i64::from(k)
}

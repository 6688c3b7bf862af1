use chrono::{Duration, NaiveDate, NaiveDateTime};
use ffxmanip_core::encode_key;
use ffxmanip_core::seed::key::year_byte;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn year_uses_decimal_digits_read_as_hex() {
    assert_eq!(year_byte(2024), 0x24);
    assert_eq!(year_byte(2024), 36);
    assert_eq!(year_byte(1999), 0x99);
    assert_eq!(year_byte(2000), 0);
    assert_eq!(year_byte(2155), 0x55);
}

#[test]
fn known_keys() {
    // 15 ^ 5 ^ 0x24 ^ 13 ^ 37 ^ 43
    assert_eq!(encode_key(at(2024, 5, 15, 13, 37, 43)), 45);
    // 30 ^ 8 ^ 0x26 ^ 12 ^ 0 ^ 0
    assert_eq!(encode_key(at(2026, 8, 30, 12, 0, 0)), 60);
}

#[test]
fn keys_stay_within_one_byte() {
    let mut t = at(1999, 12, 31, 23, 59, 30);
    for _ in 0..120 {
        let k = encode_key(t);
        assert!((0..=255).contains(&k), "key {k} out of byte range at {t}");
        t += Duration::seconds(1);
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use ffxmanip_core::window::{search_window, DEFAULT_WINDOW_SECS};
use ffxmanip_core::ManipError;

fn at(h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 30)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

// Seed reached when the game samples 2026-08-30 12:00:00 under byte 0x5A.
const TARGET: u32 = 3255576540;
const BYTE: u8 = 0x5A;

#[test]
fn synthetic_single_hit() {
    let hits = search_window(TARGET, BYTE, at(11, 59, 59), 2).unwrap();
    // press one second before the sampled instant
    assert_eq!(hits, vec![at(11, 59, 59)]);
}

#[test]
fn full_window_hits_are_chronological() {
    let hits = search_window(TARGET, BYTE, at(11, 59, 55), DEFAULT_WINDOW_SECS).unwrap();
    assert_eq!(hits.len(), 10);
    assert_eq!(hits[0], at(11, 59, 59));
    assert_eq!(hits[1], at(12, 1, 0));
    assert_eq!(hits[9], at(12, 9, 8));
    for w in hits.windows(2) {
        assert!(w[0] < w[1]);
    }
}

#[test]
fn unreachable_target_yields_empty() {
    // key ^ byte never leaves [0, 255] and seed 0 is not in that image
    let hits = search_window(0, BYTE, at(11, 59, 55), DEFAULT_WINDOW_SECS).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn sub_second_start_is_truncated() {
    let start = NaiveDate::from_ymd_opt(2026, 8, 30)
        .unwrap()
        .and_hms_milli_opt(11, 59, 59, 731)
        .unwrap();
    let hits = search_window(TARGET, BYTE, start, 2).unwrap();
    assert_eq!(hits, vec![at(11, 59, 59)]);
}

#[test]
fn zero_window_is_rejected() {
    let err = search_window(TARGET, BYTE, at(12, 0, 0), 0).unwrap_err();
    assert!(matches!(err, ManipError::Validation(_)));
}

// crates/ffxmanip-core/src/window.rs

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::error::{ManipError, Result};
use crate::seed::hash::seed_from_key;
use crate::seed::key::encode_key;

/// Default search horizon, in seconds.
pub const DEFAULT_WINDOW_SECS: u32 = 600;

/// Find every second within the next `window_secs` seconds at which
/// pressing New Game yields `target` under `mystery_byte`.
///
/// Each candidate instant is tested as the moment the game reads its
/// clock; the returned timestamps are one second earlier, the moment the
/// player must press. Chronological order. An empty result is a valid
/// outcome: the byte cannot reach the target in this window, restart the
/// session to reroll it.
///
/// `target` may be any u32; the catalogue only constrains recovery, not
/// search.
pub fn search_window(
    target: u32,
    mystery_byte: u8,
    start: NaiveDateTime,
    window_secs: u32,
) -> Result<Vec<NaiveDateTime>> {
    if window_secs == 0 {
        return Err(ManipError::Validation(
            "window must be at least one second".into(),
        ));
    }

    // whole-second grid; 0 ns is always representable
    let mut at = start.with_nanosecond(0).unwrap_or(start);

    let mut hits = Vec::new();
    for _ in 0..window_secs {
        at += Duration::seconds(1);
        let key = encode_key(at) ^ i64::from(mystery_byte);
        if seed_from_key(key) == target {
            hits.push(at - Duration::seconds(1));
        }
    }
    Ok(hits)
}

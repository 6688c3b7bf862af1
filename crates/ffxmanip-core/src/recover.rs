// crates/ffxmanip-core/src/recover.rs

use chrono::{Duration, NaiveDateTime};

use crate::catalogue::{Catalogue, DamageValues};
use crate::error::{ManipError, Result};
use crate::seed::hash::seed_from_key;
use crate::seed::key::encode_key;

/// Recover the per-session mystery byte from the moment New Game was
/// pressed and the damage values observed afterwards.
///
/// The game samples its clock one tick after the press, so the pressed
/// timestamp is advanced by one second before encoding. The scan checks
/// all 256 candidates in ascending order and returns the lowest match;
/// the catalogue is not guaranteed collision-free in theory, so the order
/// matters for reproducibility.
pub fn recover_mystery_byte(
    catalogue: &Catalogue,
    pressed_at: NaiveDateTime,
    observed: DamageValues,
) -> Result<u8> {
    let sampled_at = pressed_at + Duration::seconds(1);
    let key = encode_key(sampled_at);

    let seed = catalogue
        .seed_of(observed)
        .ok_or(ManipError::SeedNotInCatalogue)?;
    // lookup-then-verify, kept from the original tool
    if !catalogue.contains_seed(seed) {
        return Err(ManipError::SeedNotInCatalogue);
    }

    for candidate in 0u8..=255 {
        if seed_from_key(key ^ i64::from(candidate)) == seed {
            return Ok(candidate);
        }
    }
    Err(ManipError::NoByteMatches)
}

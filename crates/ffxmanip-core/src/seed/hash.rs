// crates/ffxmanip-core/src/seed/hash.rs

use crate::seed::wrap::wrap_s32;

/// The FFX RNG seeding formula: three LCG-style rounds over wrapping i32
/// arithmetic, then a 16-bit fold. Every intermediate step must stay on
/// signed 32-bit values with wraparound; the right shift in the fold is
/// arithmetic. Any deviation changes every derived seed.
pub fn seed_from_key(key: i64) -> u32 {
    let v = wrap_s32(key.wrapping_add(1));
    let v = v.wrapping_mul(1108104919).wrapping_add(11786);
    let v = v.wrapping_mul(1566083941).wrapping_add(15413);
    let v = (v >> 16).wrapping_add(v << 16);
    // two's-complement reinterpretation maps negative v to v + 2^32
    v as u32
}

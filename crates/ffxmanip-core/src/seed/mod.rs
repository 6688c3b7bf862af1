// crates/ffxmanip-core/src/seed/mod.rs

pub mod hash;
pub mod key;
pub mod wrap;

// crates/ffxmanip-cli/src/cmd/mod.rs

pub mod recover;
pub mod run;
pub mod search;
pub mod seeds;

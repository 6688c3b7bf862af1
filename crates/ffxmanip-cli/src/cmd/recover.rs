// crates/ffxmanip-cli/src/cmd/recover.rs

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::Args;

use ffxmanip_core::recover::recover_mystery_byte;
use ffxmanip_core::Catalogue;

use crate::monitor::TIME_FMT;
use crate::prompt::parse_damage_values;

#[derive(Args, Debug)]
pub struct RecoverArgs {
    /// Moment New Game was pressed, as DD/MM/YYYY HH:MM:SS
    #[arg(long)]
    pub pressed_at: String,

    /// Observed damage values, e.g. "269 133 288" (Auron1 Tidus Auron2)
    #[arg(long)]
    pub dvs: String,
}

pub fn run(args: RecoverArgs) -> anyhow::Result<()> {
    let pressed_at = NaiveDateTime::parse_from_str(&args.pressed_at, TIME_FMT)
        .with_context(|| format!("bad timestamp '{}'", args.pressed_at))?;
    let observed = parse_damage_values(&args.dvs).map_err(anyhow::Error::msg)?;

    let catalogue = Catalogue::load()?;
    let byte = recover_mystery_byte(&catalogue, pressed_at, observed)
        .context("mystery byte recovery")?;

    println!("Mystery byte: {byte}");
    if let Some(seed) = catalogue.seed_of(observed) {
        if let Some(index) = catalogue.index_of(seed) {
            println!("Observed seed: {seed} (catalogue index {index})");
        }
    }
    Ok(())
}

// crates/ffxmanip-cli/src/cmd/search.rs

use anyhow::{bail, Context};
use chrono::Local;
use clap::Args;

use ffxmanip_core::window::{search_window, DEFAULT_WINDOW_SECS};
use ffxmanip_core::Catalogue;

use crate::monitor::{Clock, TIME_FMT};
use crate::prompt::ask;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Target seed: a raw u32 value, or idx:N for catalogue index N.
    /// Unlike recovery, search accepts seeds outside the catalogue.
    #[arg(long)]
    pub seed: String,

    /// Known mystery byte for the current game session
    #[arg(long)]
    pub byte: u8,

    /// Search window in seconds, starting now
    #[arg(long, default_value_t = DEFAULT_WINDOW_SECS)]
    pub window: u32,

    /// After printing the hits, monitor them with the live clock
    #[arg(long, default_value_t = false)]
    pub monitor: bool,
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    let target = resolve_seed(&args.seed)?;

    let now = Local::now().naive_local();
    let times = search_window(target, args.byte, now, args.window)?;

    if times.is_empty() {
        println!(
            "No second in the next {}s yields seed {target} with mystery byte {}.\n\
             Restart the game to reroll the mystery byte, then search again.",
            args.window, args.byte
        );
        return Ok(());
    }

    println!("Press new game at one of these seconds to get seed {target}:");
    for t in &times {
        println!("    {}", t.format(TIME_FMT));
    }

    if args.monitor {
        let clock = Clock::start(times);
        ask("Press enter to quit.")?;
        clock.stop();
    }
    Ok(())
}

fn resolve_seed(input: &str) -> anyhow::Result<u32> {
    if let Some(index) = input.strip_prefix("idx:") {
        let index: usize = index
            .parse()
            .with_context(|| format!("bad catalogue index '{index}'"))?;
        let catalogue = Catalogue::load()?;
        return match catalogue.seed_at(index) {
            Some(seed) => Ok(seed),
            None => bail!("catalogue index {index} out of range (0..=255)"),
        };
    }
    input
        .parse::<u32>()
        .with_context(|| format!("bad seed value '{input}'"))
}

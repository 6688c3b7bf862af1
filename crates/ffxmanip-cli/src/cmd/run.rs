// crates/ffxmanip-cli/src/cmd/run.rs
//
// Interactive manip session, the original tool's main loop: pick a target
// seed, obtain the mystery byte (typed in, or recovered from a timed New
// Game press plus the observed damage values), search the window and
// monitor the resulting trigger seconds.

use clap::Args;

use chrono::Local;
use ffxmanip_core::recover::recover_mystery_byte;
use ffxmanip_core::window::{search_window, DEFAULT_WINDOW_SECS};
use ffxmanip_core::{Catalogue, ManipError};

use crate::monitor::{run_countdown, Clock, TIME_FMT};
use crate::prompt::{
    ask, parse_damage_values, parse_mystery_byte, parse_seed_choice, SeedChoice,
};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Time the first New Game press with a fixed countdown instead of
    /// the live clock
    #[arg(long, default_value_t = false)]
    pub countdown: bool,

    /// Countdown length in seconds
    #[arg(long, default_value_t = 5)]
    pub countdown_secs: u64,

    /// Search window in seconds
    #[arg(long, default_value_t = DEFAULT_WINDOW_SECS)]
    pub window: u32,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let catalogue = Catalogue::load()?;

    let target = prompt_target_seed(&catalogue)?;
    // target came from the catalogue either way, index_of cannot miss
    if let Some(index) = catalogue.index_of(target) {
        println!("Picked seed {index} ({target}).");
    }

    loop {
        let byte = prompt_mystery_byte(&catalogue, &args)?;

        let now = Local::now().naive_local();
        let times = search_window(target, byte, now, args.window)?;

        if times.is_empty() {
            println!(
                "Impossible to manip seed {target} with mystery byte {byte}.\n\
                 Restart the game to reroll the mystery byte."
            );
            continue;
        }

        println!("Press new game at one of these seconds to get seed {target}:");
        for t in &times {
            println!("    {}", t.format(TIME_FMT));
        }

        let clock = Clock::start(times);
        ask("Press enter to quit.")?;
        clock.stop();
        return Ok(());
    }
}

fn prompt_target_seed(catalogue: &Catalogue) -> anyhow::Result<u32> {
    loop {
        let input = ask("Type the seed (ID or Number) you want: ")?;
        match parse_seed_choice(&input) {
            Ok(SeedChoice::Index(i)) => {
                if let Some(seed) = catalogue.seed_at(i) {
                    return Ok(seed);
                }
                println!("No catalogue entry {i}.");
            }
            Ok(SeedChoice::Value(seed)) => {
                if catalogue.contains_seed(seed) {
                    return Ok(seed);
                }
                println!("Seed {seed} is not available on the FFX PC version.");
            }
            Err(msg) => println!("{msg}"),
        }
    }
}

fn prompt_mystery_byte(catalogue: &Catalogue, args: &RunArgs) -> anyhow::Result<u8> {
    loop {
        let input = ask(
            "If you have it already, type your mystery byte, otherwise just press enter: ",
        )?;
        if input.is_empty() {
            return observe_mystery_byte(catalogue, args);
        }
        match parse_mystery_byte(&input) {
            Ok(byte) => return Ok(byte),
            Err(msg) => println!("{msg}"),
        }
    }
}

/// Time a New Game press, then recover the byte from the damage values
/// the player reads off the opening fight.
fn observe_mystery_byte(catalogue: &Catalogue, args: &RunArgs) -> anyhow::Result<u8> {
    if args.countdown {
        ask(&format!(
            "Once you press enter a countdown of {} seconds will begin. \
             Press new game once it reaches 0.",
            args.countdown_secs
        ))?;
        run_countdown(args.countdown_secs);
    } else {
        let clock = Clock::start(Vec::new());
        ask("Press enter and new game at the same time.")?;
        clock.stop();
    }

    let pressed_at = Local::now().naive_local();
    println!(
        "Time when pressing new game: {}",
        pressed_at.format(TIME_FMT)
    );

    loop {
        let input = ask("Damage values (Auron1 Tidus Auron2): ")?;
        let observed = match parse_damage_values(&input) {
            Ok(dvs) => dvs,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };
        match recover_mystery_byte(catalogue, pressed_at, observed) {
            Ok(byte) => {
                println!("\nMystery byte: {byte}\n");
                return Ok(byte);
            }
            Err(ManipError::SeedNotInCatalogue) => println!("Seed not found."),
            Err(ManipError::NoByteMatches) => {
                println!("No mystery byte matches, check the damage values.")
            }
            Err(other) => return Err(other.into()),
        }
    }
}

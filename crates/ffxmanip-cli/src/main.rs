// crates/ffxmanip-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod monitor;
mod prompt;

#[derive(Parser)]
#[command(name = "ffxmanip")]
#[command(about = "FFX HD (PC) RNG seed manipulation tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive manip session (seed prompt, byte recovery, live monitor)
    Run(cmd::run::RunArgs),

    /// One-shot manip window search with a known mystery byte
    Search(cmd::search::SearchArgs),

    /// Recover the mystery byte from a press moment and damage values
    Recover(cmd::recover::RecoverArgs),

    /// List the seed catalogue (index, seed, damage values)
    Seeds(cmd::seeds::SeedsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Search(args) => cmd::search::run(args),
        Commands::Recover(args) => cmd::recover::run(args),
        Commands::Seeds(args) => cmd::seeds::run(args),
    }
}

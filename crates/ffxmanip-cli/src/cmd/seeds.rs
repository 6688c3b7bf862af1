// crates/ffxmanip-cli/src/cmd/seeds.rs

use clap::Args;

use ffxmanip_core::Catalogue;

#[derive(Args, Debug)]
pub struct SeedsArgs {
    /// Show only the first N catalogue rows
    #[arg(long, default_value_t = 256)]
    pub limit: usize,
}

pub fn run(args: SeedsArgs) -> anyhow::Result<()> {
    let catalogue = Catalogue::load()?;

    println!("{:>3}  {:>10}  damage values", "id", "seed");
    for (i, seed, dvs) in catalogue.iter().take(args.limit) {
        println!("{i:>3}  {seed:>10}  {:>3} {:>3} {:>3}", dvs[0], dvs[1], dvs[2]);
    }
    Ok(())
}

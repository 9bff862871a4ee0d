use clap::{Parser, Subcommand};

use self::{recommend::RecommendArg, simulate::SimulateArg};

mod recommend;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Run a full Captain's Mode draft where both teams follow the
    /// recommendation engine
    Simulate(#[clap(flatten)] SimulateArg),
    /// Show pick or ban recommendations for a draft position
    Recommend(#[clap(flatten)] RecommendArg),
}

pub(crate) fn run() -> anyhow::Result<()> {
    match CommandArgs::parse().mode {
        Mode::Simulate(arg) => simulate::run(&arg),
        Mode::Recommend(arg) => recommend::run(&arg),
    }
}

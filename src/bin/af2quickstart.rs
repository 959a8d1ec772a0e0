use anyhow::Result;
use clap::Parser;
use foldguide_rs::cli::{LogArgs, QuickstartArgs, run_quickstart};

#[derive(Parser, Debug)]
#[command(
    name = "af2quickstart",
    about = "Prepare a FASTA input and walk through an AlphaFold 2 / ColabFold run"
)]
struct Cli {
    #[command(flatten)]
    log: LogArgs,

    #[command(flatten)]
    args: QuickstartArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init();
    run_quickstart(cli.args)
}

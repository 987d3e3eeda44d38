use anyhow::Result;
use clap::Parser;

use sizecap::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}

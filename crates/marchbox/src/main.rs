//! Entry point: parses the CLI, initialises tracing, and hands the resolved
//! renderer configuration to the windowed run loop.

mod cli;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    let args = cli::parse();
    run::initialise_tracing();
    run::run(args)
}

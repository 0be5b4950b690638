//! argconfig demo: accumulate integers with options layered from defaults,
//! a config file, the environment and the command line.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}

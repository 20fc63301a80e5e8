//! resource-filter: check resource names against a YAML rule file

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}

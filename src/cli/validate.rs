//! Validate command implementation

use anyhow::Result;
use clap::Args;
use resource_filter::{ResourceCategory, RuleKind};
use std::path::PathBuf;

use super::utils::load;

#[derive(Args)]
pub struct ValidateArgs {
    /// Rule file to load
    #[arg(short, long, value_name = "PATH", env = "RESOURCE_FILTER_CONFIG")]
    pub config: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let config = load(&args.config)?;

    println!("Rule file: {}", args.config.display());
    for category in ResourceCategory::ALL {
        let resource = config.resource(category);
        for kind in [RuleKind::Include, RuleKind::Exclude] {
            println!("  {}.{}: {} patterns", category, kind, resource.rule(kind).len());
        }
    }

    Ok(())
}

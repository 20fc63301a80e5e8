//! Check command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use resource_filter::ResourceCategory;
use serde::Serialize;
use std::path::PathBuf;

use super::utils::{load, parse_csv};

#[derive(Args)]
pub struct CheckArgs {
    /// Rule file to load
    #[arg(short, long, value_name = "PATH", env = "RESOURCE_FILTER_CONFIG")]
    pub config: PathBuf,

    /// Resource category whose rules apply (s3, IAMUsers)
    #[arg(short = 't', long, value_name = "CATEGORY")]
    pub category: ResourceCategory,

    /// Resource names to check
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Additional resource names (comma-separated)
    #[arg(long, value_name = "NAMES")]
    pub names_csv: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Decision<'a> {
    name: &'a str,
    category: ResourceCategory,
    include: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let mut names = args.names;
    if let Some(extra) = parse_csv(&args.names_csv) {
        names.extend(extra);
    }
    if names.is_empty() {
        anyhow::bail!("No resource names given (pass NAME arguments or --names-csv)");
    }

    let config = load(&args.config)?;
    let rules = config.resource(args.category);

    let decisions: Vec<Decision<'_>> = names
        .iter()
        .map(|name| Decision {
            name,
            category: args.category,
            include: rules.should_include(name),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            for d in &decisions {
                println!("{} {}", if d.include { "include" } else { "skip" }, d.name);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&decisions)?),
    }

    Ok(())
}

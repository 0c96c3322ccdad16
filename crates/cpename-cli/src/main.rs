//! CpeName CLI - parse, inspect, and convert CPE platform identifiers
//!
//! A thin collaborator over the naming crate: it only calls the public
//! parse, accessor, and serializer API.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use cpename_common::{Config, LogConfig, LogFormat};
use cpename_naming::{package, positional, uri, wfn, CpeName};
use tracing::debug;

/// CPE name parser and converter
#[derive(Parser, Debug)]
#[command(name = "cpename")]
#[command(version)]
#[command(about = "Parse, validate, and convert CPE platform identifiers", long_about = None)]
struct Args {
    /// CPE name string to parse
    name: String,

    /// Input syntax (auto-detected from the prefix by default)
    #[arg(long, value_enum, default_value = "auto")]
    syntax: Syntax,

    /// Print the values of a single attribute, one per line
    #[arg(long)]
    attribute: Option<String>,

    /// Print the canonical WFN projection only
    #[arg(long)]
    wfn: bool,

    /// Print the parsed name as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "/etc/cpename/config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (pretty, json, compact)
    #[arg(long)]
    log_format: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Syntax {
    Auto,
    #[value(name = "1.1")]
    V1_1,
    #[value(name = "2.2")]
    V2_2,
    #[value(name = "p-cpe")]
    PCpe,
    Wfn,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = if std::path::Path::new(&args.config).exists() {
        Config::from_file(&args.config)?
    } else {
        Config::default()
    };
    let config = config.merge_env();

    let level = args.log_level.unwrap_or(config.logging.level);
    let format = args.log_format.unwrap_or(config.logging.format);
    let log_config = LogConfig::new()
        .level(level)
        .format(LogFormat::from_name(&format));
    cpename_common::init_logging_with_config(log_config);

    debug!(name = %args.name, syntax = ?args.syntax, "parsing input");

    let name: CpeName = match args.syntax {
        Syntax::Auto => cpename_naming::parse(&args.name)?,
        Syntax::V1_1 => positional::parse(&args.name)?,
        Syntax::V2_2 => uri::parse(&args.name)?,
        Syntax::PCpe => package::parse(&args.name)?,
        Syntax::Wfn => wfn::parse(&args.name)?,
    };

    if let Some(attribute) = args.attribute {
        for value in name.get_attribute_values(&attribute)? {
            println!("{value}");
        }
    } else if args.wfn {
        println!("{}", name.as_wfn()?);
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&name.to_json())?);
    } else {
        println!("version: {}", name.version());
        println!("{name}");
        if name.version().supports_wfn() {
            println!("wfn: {}", name.as_wfn()?);
        }
    }

    Ok(())
}

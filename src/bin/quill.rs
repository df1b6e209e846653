//! CLI tool for quill weighted edit distances.
//!
//! Costs come from an optional JSON configuration file and are then
//! overridden by command-line flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use quill::prelude::*;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Weighted edit distances between two strings", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    costs: CostArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CostArgs {
    /// Cost of inserting a character
    #[arg(long, global = true)]
    addition: Option<f64>,

    /// Cost of deleting a character
    #[arg(long, global = true)]
    deletion: Option<f64>,

    /// Default cost of substituting a character
    #[arg(long, global = true)]
    substitution: Option<f64>,

    /// Cost of swapping two adjacent characters
    #[arg(long, global = true)]
    transposition: Option<f64>,

    /// Substitution override as `a:b:cost` (repeatable)
    #[arg(short = 'o', long = "override", global = true, value_parser = parse_override)]
    overrides: Vec<OverrideRule>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the distance between two strings
    Distance {
        /// String to transform
        source: String,

        /// String to transform into
        target: String,

        /// Distance variant (defaults to the configured one)
        #[arg(short, long, value_enum)]
        variant: Option<VariantChoice>,

        /// Print the distance for every variant
        #[arg(short, long, conflicts_with = "variant")]
        all: bool,
    },

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum VariantChoice {
    /// Longest-common-subsequence weight
    Lcs,
    /// Insert, delete, substitute
    Levenshtein,
    /// Levenshtein plus non-overlapping adjacent swaps
    Osa,
    /// Levenshtein plus adjacent swaps
    DamerauLevenshtein,
}

impl From<VariantChoice> for Variant {
    fn from(choice: VariantChoice) -> Self {
        match choice {
            VariantChoice::Lcs => Variant::Lcs,
            VariantChoice::Levenshtein => Variant::Levenshtein,
            VariantChoice::Osa => Variant::OptimalStringAlignment,
            VariantChoice::DamerauLevenshtein => Variant::DamerauLevenshtein,
        }
    }
}

fn parse_override(value: &str) -> std::result::Result<OverrideRule, String> {
    let mut parts = value.splitn(3, ':');
    let (Some(a), Some(b), Some(cost)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected a:b:cost, got '{}'", value));
    };

    let single = |s: &str| {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(format!("'{}' is not a single character", s)),
        }
    };
    let cost = cost
        .parse::<f64>()
        .map_err(|e| format!("invalid cost '{}': {}", cost, e))?;

    Ok(OverrideRule {
        a: single(a)?,
        b: single(b)?,
        cost,
    })
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    apply_flags(&mut config, &cli.costs)?;

    debug!("effective configuration: {:?}", config);
    Ok(config)
}

/// Layer command-line costs and overrides on top of `config`.
fn apply_flags(config: &mut EngineConfig, flags: &CostArgs) -> Result<()> {
    let costs = [
        (Operation::Addition, flags.addition),
        (Operation::Deletion, flags.deletion),
        (Operation::Substitution, flags.substitution),
        (Operation::Transposition, flags.transposition),
    ];
    for (operation, cost) in costs {
        if let Some(cost) = cost {
            config
                .costs
                .set(operation, cost)
                .with_context(|| format!("Invalid --{} value", operation))?;
        }
    }
    config.overrides.extend(flags.overrides.iter().copied());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let engine = config.build_engine().context("Invalid configuration")?;

    match cli.command {
        Commands::Distance {
            source,
            target,
            variant,
            all,
        } => {
            if all {
                for variant in Variant::ALL {
                    let distance = engine.compute(&source, &target, variant)?;
                    println!("{}\t{}", variant, distance);
                }
            } else {
                let variant = variant.map(Variant::from).unwrap_or(config.variant);
                println!("{}", engine.compute(&source, &target, variant)?);
            }
        }

        Commands::Config => {
            let mut effective = EngineConfig::from(&engine);
            effective.variant = config.variant;
            println!("{}", effective.to_json_string()?);
        }
    }

    Ok(())
}

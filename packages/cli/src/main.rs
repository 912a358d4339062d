#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the cybercrime admin console tooling.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cybercrime_console::{
    CliError, SummaryScope, interactive, load_config, read_case, read_cases, render_fields,
    render_officer_stats, render_summary, render_unit_stats, summarize,
};
use cybercrime_console_analytics::progress::case_progress;
use cybercrime_console_analytics::stats::{officer_stats, unit_stats};
use cybercrime_console_analytics_models::CaseCounts;
use cybercrime_console_case::{resolve_case_fields, resolve_fields};
use cybercrime_console_crime_models::{
    CrimeCategory, FieldKey, all_crime_types, category_of, crime_types_for, humanize_crime_type,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "cybercrime_console", about = "Cybercrime admin console tools")]
struct Cli {
    /// Path to a TOML config file (overrides `CYBERCRIME_CONSOLE_CONFIG`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List crime categories and their detail fields
    Categories {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List crime type identifiers
    CrimeTypes {
        /// Only list types in this category (e.g., "Harassment & Threats")
        #[arg(long)]
        category: Option<String>,
    },
    /// Resolve the detail fields of a case exported as JSON
    Resolve {
        /// Path to the case JSON file
        path: PathBuf,
        /// Resolve against this crime type instead of the case's own
        #[arg(long)]
        crime_type: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score investigation progress for a case exported as JSON
    Progress {
        /// Path to the case JSON file
        path: PathBuf,
        /// Number of evidence files attached to the case
        #[arg(long, default_value = "0")]
        evidence: u32,
    },
    /// Compute unit statistics from case counts
    UnitStats {
        #[arg(long)]
        active: u64,
        #[arg(long)]
        resolved: u64,
        /// Officers assigned to the unit
        #[arg(long)]
        officers: u64,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute officer statistics from case counts
    OfficerStats {
        #[arg(long)]
        active: u64,
        #[arg(long)]
        resolved: u64,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize a JSON array of cases
    Summarize {
        /// Path to the cases JSON file
        path: PathBuf,
        /// Only count cases assigned to this unit
        #[arg(long, conflicts_with = "officer")]
        unit: Option<String>,
        /// Only count cases assigned to this officer (measured as one officer)
        #[arg(long, conflicts_with = "officers")]
        officer: Option<String>,
        /// Officers handling the cases, for workload and response time
        #[arg(long, default_value = "1")]
        officers: u64,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryListing {
    category: CrimeCategory,
    crime_types: Vec<&'static str>,
    fields: &'static [FieldKey],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        interactive::run()?;
        return Ok(());
    };

    match command {
        Commands::Categories { json } => list_categories(json)?,
        Commands::CrimeTypes { category } => list_crime_types(category.as_deref())?,
        Commands::Resolve {
            path,
            crime_type,
            json,
        } => {
            let case = read_case(&path)?;
            let fields = match crime_type.as_deref() {
                Some(crime_type) => resolve_fields(&case, crime_type),
                None => resolve_case_fields(&case),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&fields)?);
            } else {
                print!("{}", render_fields(fields));
            }
        }
        Commands::Progress { path, evidence } => {
            let config = load_config(cli.config.as_deref())?;
            let case = read_case(&path)?;
            let score = case_progress(&case, evidence, &config.progress);
            println!("{score}%");
        }
        Commands::UnitStats {
            active,
            resolved,
            officers,
            json,
        } => {
            let stats = unit_stats(
                CaseCounts {
                    active,
                    resolved,
                    dismissed: 0,
                },
                officers,
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render_unit_stats(&stats));
            }
        }
        Commands::OfficerStats {
            active,
            resolved,
            json,
        } => {
            let stats = officer_stats(CaseCounts {
                active,
                resolved,
                dismissed: 0,
            });
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print!("{}", render_officer_stats(&stats));
            }
        }
        Commands::Summarize {
            path,
            unit,
            officer,
            officers,
            json,
        } => {
            let cases = read_cases(&path)?;
            let scope = match (unit.as_deref(), officer.as_deref()) {
                (Some(unit_id), _) => SummaryScope::Unit(unit_id),
                (None, Some(officer_id)) => SummaryScope::Officer(officer_id),
                (None, None) => SummaryScope::All,
            };
            let summary = summarize(&cases, scope, officers);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_summary(&summary));
            }
        }
    }

    Ok(())
}

fn list_categories(json: bool) -> Result<(), CliError> {
    if json {
        let listings: Vec<CategoryListing> = CrimeCategory::all()
            .iter()
            .map(|&category| CategoryListing {
                category,
                crime_types: crime_types_for(category),
                fields: category.fields(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    for category in CrimeCategory::all() {
        let labels: Vec<&str> = category.fields().iter().map(|k| k.label()).collect();
        println!("{category}");
        println!("  {} crime types", crime_types_for(*category).len());
        println!("  Fields: {}", labels.join(", "));
    }
    Ok(())
}

fn list_crime_types(category: Option<&str>) -> Result<(), CliError> {
    let crime_types = match category {
        Some(name) => {
            let category =
                CrimeCategory::from_display(name).ok_or_else(|| CliError::UnknownCategory {
                    name: name.to_string(),
                })?;
            crime_types_for(category)
        }
        None => all_crime_types(),
    };

    for crime_type in crime_types {
        let category = category_of(crime_type).map(|c| c.to_string()).unwrap_or_default();
        println!(
            "{crime_type:<28} {:<32} {category}",
            humanize_crime_type(crime_type)
        );
    }
    Ok(())
}

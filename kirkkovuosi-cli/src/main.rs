mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use kirkkovuosi_core::computus::{parse_date, validate_year};
use kirkkovuosi_core::{DateResolver, EntryType, KirkkovuosiConfig, ReferenceData};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "kirkkovuosi")]
#[command(about = "Look up the church year: holy days, readings and propers for any date")]
struct Cli {
    /// Directory holding the reference data (overrides data_dir in the config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log lookup details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a date to its holy day, readings and propers
    Day {
        /// Date to resolve (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// List the observances of the church year starting in Advent of START_YEAR
    Calendar {
        start_year: i32,

        /// Only list entries of this type (feast, special, sunday, weekday, service)
        #[arg(long = "type")]
        entry_type: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Show the reference record of one holy day
    Show {
        slug: String,

        #[arg(long)]
        json: bool,
    },
    /// List every holy day in the reference data
    Days,
    /// Easter and the moveable feasts of a year
    Easter { year: i32 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    match cli.command {
        Commands::Day { date, json } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };
            let resolver = load_resolver(cli.data_dir)?;
            commands::day::run(&resolver, date, json)
        }
        Commands::Calendar { start_year, entry_type, json } => {
            let start_year = validate_year(start_year)?;
            let entry_type = parse_entry_type(entry_type)?;
            commands::calendar::run(start_year, entry_type, json)
        }
        Commands::Show { slug, json } => {
            let resolver = load_resolver(cli.data_dir)?;
            commands::show::run(&resolver, &slug, json)
        }
        Commands::Days => {
            let resolver = load_resolver(cli.data_dir)?;
            commands::days::run(&resolver)
        }
        Commands::Easter { year } => commands::easter::run(validate_year(year)?),
    }
}

fn parse_entry_type(value: Option<String>) -> Result<Option<EntryType>> {
    value
        .map(|t| t.parse::<EntryType>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))
}

fn load_resolver(data_dir: Option<PathBuf>) -> Result<DateResolver<ReferenceData>> {
    let mut config = KirkkovuosiConfig::load()?;
    if let Some(dir) = data_dir {
        config = config.with_data_dir(dir);
    }

    let data_path = config.data_path();
    if !data_path.is_dir() {
        let config_path = KirkkovuosiConfig::config_path()?;
        anyhow::bail!(
            "Reference data directory {} not found.\n\n\
            Point kirkkovuosi at it with:\n  \
            kirkkovuosi --data-dir <DIR> day\n\n\
            or set data_dir in {}",
            data_path.display(),
            config_path.display()
        );
    }

    tracing::debug!("Reading reference data from {}", data_path.display());
    let data = config
        .load_reference_data()
        .with_context(|| format!("Could not load reference data from {}", data_path.display()))?;

    Ok(DateResolver::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("Arguments should parse")
    }

    // --- calendar --type ---

    #[test]
    fn calendar_type_flag_parses() {
        let cli = parse(&["kirkkovuosi", "calendar", "2025", "--type", "sunday"]);
        let Commands::Calendar { start_year, entry_type, json } = cli.command else {
            panic!("Expected the calendar command");
        };
        assert_eq!(start_year, 2025);
        assert!(!json);
        assert_eq!(parse_entry_type(entry_type).unwrap(), Some(EntryType::Sunday));
    }

    #[test]
    fn calendar_without_type_lists_everything() {
        let cli = parse(&["kirkkovuosi", "calendar", "2025", "--json"]);
        let Commands::Calendar { entry_type, json, .. } = cli.command else {
            panic!("Expected the calendar command");
        };
        assert!(json);
        assert_eq!(parse_entry_type(entry_type).unwrap(), None);
    }

    #[test]
    fn every_entry_type_name_is_accepted() {
        for name in ["feast", "special", "sunday", "weekday", "service"] {
            let parsed = parse_entry_type(Some(name.to_string())).unwrap();
            assert_eq!(parsed.map(|t| t.to_string()), Some(name.to_string()));
        }
    }

    #[test]
    fn unknown_entry_type_is_rejected() {
        let err = parse_entry_type(Some("holiday".to_string())).unwrap_err();
        assert!(err.to_string().contains("Unknown entry type 'holiday'"));

        // Names are lowercase only
        assert!(parse_entry_type(Some("Sunday".to_string())).is_err());
    }

    // --- validate_year ---

    #[test]
    fn year_bounds_are_inclusive() {
        assert_eq!(validate_year(1900).unwrap(), 1900);
        assert_eq!(validate_year(2100).unwrap(), 2100);
    }

    #[test]
    fn years_outside_bounds_are_rejected() {
        assert!(validate_year(1899).is_err());
        assert!(validate_year(2101).is_err());
    }

    // --- global flags ---

    #[test]
    fn data_dir_is_global() {
        let cli = parse(&["kirkkovuosi", "show", "loppiainen", "--data-dir", "/srv/pyhat"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/pyhat")));
        assert!(!cli.verbose);
        let Commands::Show { slug, json } = cli.command else {
            panic!("Expected the show command");
        };
        assert_eq!(slug, "loppiainen");
        assert!(!json);
    }

    #[test]
    fn easter_requires_a_numeric_year() {
        assert!(Cli::try_parse_from(["kirkkovuosi", "easter", "ensi-vuonna"]).is_err());
        let cli = parse(&["kirkkovuosi", "-v", "easter", "2026"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Easter { year: 2026 }));
    }
}

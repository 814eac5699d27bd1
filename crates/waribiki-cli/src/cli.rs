//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use waribiki_types::{DisabilityClass, OutputFormat, TravelMode};

#[derive(Parser)]
#[command(name = "waribiki")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Disability fare discount calculator for Japanese rail")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Operator rule table (TOML). Uses config value, then built-in rules.
    #[arg(long, global = true)]
    pub rules: Option<PathBuf>,

    /// Route fare table (TOML or CSV). Uses config value, then built-in fares.
    #[arg(long, global = true)]
    pub fares: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate discounted fares
    Calc {
        /// Operator identifier (e.g. JR, Kintetsu, Seibu). Uses config value if not specified.
        #[arg(long, short = 'o')]
        operator: Option<String>,

        /// Disability certificate class
        #[arg(long, short = 'c', value_enum, default_value_t = DisabilityClass::First)]
        class: DisabilityClass,

        /// Travel mode
        #[arg(long, short = 'm', value_enum, default_value_t = TravelMode::WithCaregiver)]
        mode: TravelMode,

        /// Base fare (運賃). Non-numeric text counts as 0.
        #[arg(long, short = 'b', allow_hyphen_values = true)]
        base: Option<String>,

        /// Limited express fare (特急料金). Non-numeric text counts as 0.
        #[arg(long, short = 'e', allow_hyphen_values = true)]
        express: Option<String>,

        /// Departure station, prefills JR fares together with --to (e.g. "東京")
        #[arg(long, requires = "to")]
        from: Option<String>,

        /// Arrival station (e.g. "名古屋")
        #[arg(long, requires = "from")]
        to: Option<String>,

        /// One-way distance exceeds the operator's threshold
        #[arg(long, short = 'd')]
        over_distance: bool,
    },

    /// Look up the published fare between two stations
    Fare {
        /// Station
        from: String,

        /// Station
        to: String,
    },

    /// List operators and their discount rules
    Operators,

    /// List the route fare table
    Routes {
        /// Only routes serving this station
        #[arg(long, short = 's')]
        station: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default operator
        #[arg(long)]
        set_operator: Option<String>,

        /// Set operator rule table file
        #[arg(long)]
        set_rules: Option<PathBuf>,

        /// Set route fare table file
        #[arg(long)]
        set_fares: Option<PathBuf>,

        /// Go back to the built-in tables
        #[arg(long)]
        clear_tables: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc() {
        let cli = Cli::try_parse_from([
            "waribiki", "calc", "--operator", "JR", "--class", "second", "--mode", "solo", "--base",
            "105", "--express", "50", "-d",
        ])
        .unwrap();
        match cli.command {
            Commands::Calc {
                operator,
                class,
                mode,
                base,
                over_distance,
                ..
            } => {
                assert_eq!(operator.as_deref(), Some("JR"));
                assert_eq!(class, DisabilityClass::Second);
                assert_eq!(mode, TravelMode::Solo);
                assert_eq!(base.as_deref(), Some("105"));
                assert!(over_distance);
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_from_requires_to() {
        assert!(Cli::try_parse_from(["waribiki", "calc", "--from", "東京"]).is_err());
    }

    #[test]
    fn test_calc_defaults() {
        let cli = Cli::try_parse_from(["waribiki", "calc"]).unwrap();
        match cli.command {
            Commands::Calc { class, mode, .. } => {
                assert_eq!(class, DisabilityClass::First);
                assert_eq!(mode, TravelMode::WithCaregiver);
            }
            _ => panic!("expected calc"),
        }
    }
}

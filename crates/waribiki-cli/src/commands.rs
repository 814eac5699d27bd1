//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_fare, output_operators, output_quote, output_routes};
use std::path::PathBuf;
use waribiki_app::app::{distance_notice, FareRequest, FareService, Quote};
use waribiki_app::config::Config;
use waribiki_domain::model::RouteFare;
use waribiki_types::{Error, OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    let output_format = cli.format.unwrap_or(config.output_format);

    // Override from CLI args
    if cli.rules.is_some() {
        config.rules_file = cli.rules;
    }
    if cli.fares.is_some() {
        config.fares_file = cli.fares;
    }

    match cli.command {
        Commands::Calc {
            operator,
            class,
            mode,
            base,
            express,
            from,
            to,
            over_distance,
        } => {
            let request = FareRequest {
                operator: operator.unwrap_or_else(|| config.default_operator.clone()),
                disability_class: class,
                travel_mode: mode,
                base_fare: base,
                express_fare: express,
                from,
                to,
                over_distance,
            };
            cmd_calc(&open_service(&config)?, &request, output_format)
        }
        Commands::Fare { from, to } => cmd_fare(&open_service(&config)?, &from, &to, output_format),
        Commands::Operators => cmd_operators(&open_service(&config)?, output_format),
        Commands::Routes { station } => {
            cmd_routes(&open_service(&config)?, station.as_deref(), output_format)
        }
        Commands::Config {
            show,
            set_output,
            set_operator,
            set_rules,
            set_fares,
            clear_tables,
            reset,
        } => cmd_config(show, set_output, set_operator, set_rules, set_fares, clear_tables, reset),
    }
}

fn open_service(config: &Config) -> Result<FareService> {
    tracing::debug!(rules = ?config.rules_file, fares = ?config.fares_file, "opening fare tables");
    FareService::from_config(config)
}

fn cmd_calc(service: &FareService, request: &FareRequest, output_format: OutputFormat) -> Result<()> {
    let quote = service.calculate(request);
    for warning in calc_warnings(request, &quote) {
        eprintln!("{}", warning);
    }
    output_quote(output_format, &quote)
}

/// Messages for inputs the calculation could not honor
fn calc_warnings(request: &FareRequest, quote: &Quote) -> Vec<String> {
    let mut warnings = Vec::new();

    if let (Some(from), Some(to)) = (request.from.as_deref(), request.to.as_deref()) {
        if quote.prefill.is_none() {
            if quote.rule.operator.publishes_fixed_fares() {
                warnings.push(format!("Warning: no fare registered between {} and {}", from, to));
            } else {
                warnings.push(format!(
                    "Warning: route fares are only prefilled for JR; enter --base/--express for {}",
                    quote.rule.operator.display_name()
                ));
            }
        }
    }
    if request.over_distance && !quote.input.is_over_distance {
        warnings.push(format!("Note: {}", distance_notice(&quote.rule).note));
    }

    warnings
}

fn cmd_fare(service: &FareService, from: &str, to: &str, output_format: OutputFormat) -> Result<()> {
    let fare = service.lookup_fare(from, to).ok_or_else(|| Error::UnknownRoute {
        from: from.to_string(),
        to: to.to_string(),
    })?;
    output_fare(output_format, from, to, &fare)
}

fn cmd_operators(service: &FareService, output_format: OutputFormat) -> Result<()> {
    output_operators(output_format, &service.rules())
}

fn cmd_routes(service: &FareService, station: Option<&str>, output_format: OutputFormat) -> Result<()> {
    output_routes(output_format, &routes_serving(service, station))
}

/// All routes, or only those with `station` at either end
fn routes_serving(service: &FareService, station: Option<&str>) -> Vec<RouteFare> {
    service
        .routes()
        .into_iter()
        .filter(|r| station.is_none_or(|s| r.serves(s)))
        .collect()
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_operator: Option<String>,
    set_rules: Option<PathBuf>,
    set_fares: Option<PathBuf>,
    clear_tables: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(operator) = set_operator {
        config.default_operator = operator;
        modified = true;
    }

    if clear_tables {
        config.rules_file = None;
        config.fares_file = None;
        modified = true;
    }

    if let Some(path) = set_rules {
        let path = std::fs::canonicalize(&path)
            .map_err(|_| Error::FileNotFound(path.display().to_string()))?;
        // Fail now rather than on the next calc
        waribiki_app::repository::open_rule_repository(Some(&path))?;
        config.rules_file = Some(path);
        modified = true;
    }

    if let Some(path) = set_fares {
        let path = std::fs::canonicalize(&path)
            .map_err(|_| Error::FileNotFound(path.display().to_string()))?;
        waribiki_app::repository::open_fare_repository(Some(&path))?;
        config.fares_file = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}

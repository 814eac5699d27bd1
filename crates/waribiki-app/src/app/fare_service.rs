//! Fare calculation use case
//!
//! Sits between a front end and the domain engine: resolves the operator rule,
//! prefills JR fares from the route table, coerces raw fare text and then hands
//! clean integers to the calculator.

use serde::Serialize;
use waribiki_domain::model::{CalculationInput, CalculationResult, FarePair, OperatorRule, RouteFare};
use waribiki_domain::repository::{FareRepository, RuleRepository};
use waribiki_domain::service::calculate;
use waribiki_types::{DisabilityClass, Result, TravelMode};

use crate::config::Config;
use crate::input::parse_fare_input;
use crate::repository::{open_fare_repository, open_rule_repository};

/// Raw request as a front end collects it
#[derive(Debug, Clone, Default)]
pub struct FareRequest {
    pub operator: String,
    pub disability_class: DisabilityClass,
    pub travel_mode: TravelMode,
    /// Fare text as typed; overrides a prefilled fare
    pub base_fare: Option<String>,
    pub express_fare: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub over_distance: bool,
}

/// Fares taken from the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prefill {
    pub fare: FarePair,
    /// Every published route is longer than the distance threshold
    pub over_distance: bool,
}

/// Result of one calculation together with what it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub rule: OperatorRule,
    pub prefill: Option<Prefill>,
    pub input: CalculationInput,
    pub result: CalculationResult,
}

pub struct FareService {
    rules: Box<dyn RuleRepository>,
    fares: Box<dyn FareRepository>,
}

impl FareService {
    pub fn new(rules: Box<dyn RuleRepository>, fares: Box<dyn FareRepository>) -> Self {
        Self { rules, fares }
    }

    /// Service over the built-in tables
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(open_rule_repository(None)?, open_fare_repository(None)?))
    }

    /// Service over the tables named in the config, built-in where none is set
    pub fn from_config(config: &Config) -> Result<Self> {
        let rules = open_rule_repository(config.rules_file.as_deref())?;
        let fares = open_fare_repository(config.fares_file.as_deref())?;
        Ok(Self::new(rules, fares))
    }

    pub fn rule(&self, operator_id: &str) -> OperatorRule {
        self.rules.lookup_rule(operator_id)
    }

    pub fn rules(&self) -> Vec<OperatorRule> {
        self.rules.rules()
    }

    pub fn lookup_fare(&self, station_a: &str, station_b: &str) -> Option<FarePair> {
        self.fares.lookup_fare(station_a, station_b)
    }

    pub fn routes(&self) -> Vec<RouteFare> {
        self.fares.routes()
    }

    pub fn stations(&self) -> Vec<String> {
        self.fares.stations()
    }

    /// Route fares for the operator, if it is one that publishes fixed fares
    pub fn prefill(&self, rule: &OperatorRule, from: &str, to: &str) -> Option<Prefill> {
        if !rule.operator.publishes_fixed_fares() {
            tracing::debug!(operator = %rule.operator, "route table not used for this operator");
            return None;
        }
        let fare = self.fares.lookup_fare(from, to)?;
        tracing::debug!(from, to, base = fare.base, express = fare.express, "prefilled route fare");
        Some(Prefill {
            fare,
            over_distance: true,
        })
    }

    pub fn calculate(&self, request: &FareRequest) -> Quote {
        let rule = self.rule(&request.operator);

        let prefill = match (request.from.as_deref(), request.to.as_deref()) {
            (Some(from), Some(to)) => self.prefill(&rule, from, to),
            _ => None,
        };

        let base_fare = request
            .base_fare
            .as_deref()
            .map(parse_fare_input)
            .or(prefill.map(|p| p.fare.base))
            .unwrap_or(0);
        let express_fare = request
            .express_fare
            .as_deref()
            .map(parse_fare_input)
            .or(prefill.map(|p| p.fare.express))
            .unwrap_or(0);

        let requested_over = request.over_distance || prefill.is_some_and(|p| p.over_distance);
        let is_over_distance = rule.has_distance_discount() && requested_over;
        if requested_over && !is_over_distance {
            tracing::debug!(operator = %rule.operator, "operator has no distance discount; flag cleared");
        }

        let input = CalculationInput {
            base_fare,
            express_fare,
            rule,
            is_over_distance,
            disability_class: request.disability_class,
            travel_mode: request.travel_mode,
        };
        let result = calculate(&input);
        tracing::debug!(?input, total = result.grand_total(), "calculated fares");

        Quote {
            rule,
            prefill,
            input,
            result,
        }
    }
}

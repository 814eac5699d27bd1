//! Repository traits for the rule registry and the route fare table
//!
//! Lookups never fail: an unknown operator resolves to the fallback rule and an
//! unknown route is `None`. Loading errors belong to the implementations.

use crate::model::{FarePair, FareTable, OperatorRule, RouteFare, RuleBook};

/// Source of operator discount rules
pub trait RuleRepository {
    /// Rule for an operator identifier
    fn lookup_rule(&self, operator_id: &str) -> OperatorRule;

    /// One rule per known operator
    fn rules(&self) -> Vec<OperatorRule>;
}

/// Source of published route fares
pub trait FareRepository {
    /// Fare between two stations in either order
    fn lookup_fare(&self, station_a: &str, station_b: &str) -> Option<FarePair>;

    /// All rows
    fn routes(&self) -> Vec<RouteFare>;

    /// Distinct station names, sorted
    fn stations(&self) -> Vec<String>;
}

impl RuleRepository for RuleBook {
    fn lookup_rule(&self, operator_id: &str) -> OperatorRule {
        self.lookup(operator_id)
    }

    fn rules(&self) -> Vec<OperatorRule> {
        RuleBook::rules(self)
    }
}

impl FareRepository for FareTable {
    fn lookup_fare(&self, station_a: &str, station_b: &str) -> Option<FarePair> {
        self.lookup(station_a, station_b)
    }

    fn routes(&self) -> Vec<RouteFare> {
        FareTable::routes(self).to_vec()
    }

    fn stations(&self) -> Vec<String> {
        FareTable::stations(self)
    }
}

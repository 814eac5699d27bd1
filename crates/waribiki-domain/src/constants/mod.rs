//! Built-in rule registry and route fare table

pub mod operator_rules;
pub mod route_fares;

pub use operator_rules::{lookup_rule, BUILTIN_RULES, OPERATOR_RULES};
pub use route_fares::{lookup_fare, BUILTIN_FARES, ROUTE_FARES};

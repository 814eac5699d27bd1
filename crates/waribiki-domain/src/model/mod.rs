//! Domain model types

pub mod calculation;
pub mod fare_table;
pub mod operator;
pub mod route;
pub mod rule_book;

pub use calculation::{CalculationInput, CalculationResult};
pub use fare_table::FareTable;
pub use operator::{Operator, OperatorRule};
pub use route::{FarePair, RouteFare};
pub use rule_book::RuleBook;

//! File-backed implementations of the repository traits

mod file_fare_repo;
mod file_rule_repo;

pub use file_fare_repo::FileFareRepository;
pub use file_rule_repo::FileRuleRepository;

//! File-based implementation of RuleRepository

use std::path::{Path, PathBuf};

use waribiki_domain::model::{OperatorRule, RuleBook};
use waribiki_domain::repository::RuleRepository;

use crate::error::TableError;
use crate::rule_loader::load_rules_from_file;

/// Operator rule registry read from a TOML file
pub struct FileRuleRepository {
    path: PathBuf,
    book: RuleBook,
}

impl FileRuleRepository {
    /// Load the registry from a TOML file path
    pub fn open(path: PathBuf) -> Result<Self, TableError> {
        let book = load_rules_from_file(&path)?;
        Ok(Self { path, book })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuleRepository for FileRuleRepository {
    fn lookup_rule(&self, operator_id: &str) -> OperatorRule {
        self.book.lookup(operator_id)
    }

    fn rules(&self) -> Vec<OperatorRule> {
        self.book.rules()
    }
}

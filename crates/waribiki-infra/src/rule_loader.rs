//! Operator rule registry loader from TOML
//!
//! ```toml
//! [[operators]]
//! id = "JR"
//! distance_limit_km = 100
//! rounding = "down"
//!
//! [[operators]]
//! id = "Keihan"          # no distance_limit_km: no solo discount
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use waribiki_domain::model::{Operator, OperatorRule, RuleBook};
use waribiki_types::RoundingMode;

use crate::error::TableError;

/// Container for parsing operator_rules.toml
#[derive(Debug, Deserialize)]
struct RuleFile {
    #[serde(default)]
    operators: Vec<RuleRow>,
}

#[derive(Debug, Deserialize)]
struct RuleRow {
    id: String,
    #[serde(default)]
    distance_limit_km: Option<u32>,
    #[serde(default)]
    rounding: RoundingMode,
}

/// Load a rule registry from a TOML file
pub fn load_rules_from_file(path: &Path) -> Result<RuleBook, TableError> {
    let content = fs::read_to_string(path)?;
    let book = load_rules_from_str(&content)?;
    tracing::debug!(path = %path.display(), operators = book.len(), "loaded operator rules");
    Ok(book)
}

/// Load a rule registry from TOML text
pub fn load_rules_from_str(toml_content: &str) -> Result<RuleBook, TableError> {
    let file: RuleFile = toml::from_str(toml_content)?;

    let mut book = RuleBook::new();
    for (idx, row) in file.operators.into_iter().enumerate() {
        let row_num = idx + 1;
        let operator = Operator::from_id(&row.id).ok_or_else(|| TableError::UnknownOperator {
            row: row_num,
            id: row.id.clone(),
        })?;
        let rule = OperatorRule::new(operator, row.distance_limit_km, row.rounding);
        if book.insert(rule).is_some() {
            return Err(TableError::DuplicateOperator {
                row: row_num,
                id: row.id,
            });
        }
    }

    Ok(book)
}

//! Repository selection: built-in tables or file overrides

use std::path::Path;

use waribiki_domain::constants::{BUILTIN_FARES, BUILTIN_RULES};
use waribiki_domain::repository::{FareRepository, RuleRepository};
use waribiki_infra::persistence::{FileFareRepository, FileRuleRepository};
use waribiki_types::{Error, Result};

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// Open the operator rule registry, from `path` when given
pub fn open_rule_repository(path: Option<&Path>) -> Result<Box<dyn RuleRepository>> {
    match path {
        Some(path) => {
            ensure_exists(path)?;
            let repo = FileRuleRepository::open(path.to_path_buf())?;
            tracing::debug!(path = %repo.path().display(), "using operator rules file");
            Ok(Box::new(repo))
        }
        None => Ok(Box::new(BUILTIN_RULES.clone())),
    }
}

/// Open the route fare table, from `path` when given
pub fn open_fare_repository(path: Option<&Path>) -> Result<Box<dyn FareRepository>> {
    match path {
        Some(path) => {
            ensure_exists(path)?;
            let repo = FileFareRepository::open(path.to_path_buf())?;
            tracing::debug!(path = %repo.path().display(), "using route fares file");
            Ok(Box::new(repo))
        }
        None => Ok(Box::new(BUILTIN_FARES.clone())),
    }
}

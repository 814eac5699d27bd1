//! Route fare table loader from TOML
//!
//! ```toml
//! [[routes]]
//! from = "東京"
//! to = "名古屋"
//! base = 6380
//! express = 4920
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use waribiki_domain::model::{FareTable, RouteFare};

use crate::error::TableError;

#[derive(Debug, Deserialize)]
struct FareFile {
    #[serde(default)]
    routes: Vec<RouteFare>,
}

/// Load a fare table from a TOML file
pub fn load_fares_from_file(path: &Path) -> Result<FareTable, TableError> {
    let content = fs::read_to_string(path)?;
    let table = load_fares_from_str(&content)?;
    tracing::debug!(path = %path.display(), routes = table.len(), "loaded route fares");
    Ok(table)
}

/// Load a fare table from TOML text
pub fn load_fares_from_str(toml_content: &str) -> Result<FareTable, TableError> {
    let file: FareFile = toml::from_str(toml_content)?;

    let mut table = FareTable::new();
    for (idx, route) in file.routes.into_iter().enumerate() {
        push_route(&mut table, idx + 1, route)?;
    }
    Ok(table)
}

/// Validate one row and add it to the table
pub(crate) fn push_route(table: &mut FareTable, row: usize, route: RouteFare) -> Result<(), TableError> {
    if route.from.is_empty() || route.to.is_empty() || route.from == route.to {
        return Err(TableError::InvalidRoute {
            row,
            from: route.from,
            to: route.to,
        });
    }
    if route.base == 0 {
        return Err(TableError::InvalidFare {
            row,
            column: "base".to_string(),
            value: route.base.to_string(),
        });
    }
    if route.express == 0 {
        return Err(TableError::InvalidFare {
            row,
            column: "express".to_string(),
            value: route.express.to_string(),
        });
    }
    if table.contains(&route.from, &route.to) {
        return Err(TableError::DuplicateRoute {
            row,
            from: route.from,
            to: route.to,
        });
    }
    table.insert(route);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fares() {
        let toml = r#"
[[routes]]
from = "東京"
to = "名古屋"
base = 6380
express = 4920

[[routes]]
from = "名古屋"
to = "新大阪"
base = 3410
express = 3270
"#;
        let table = load_fares_from_str(toml).unwrap();
        assert_eq!(table.len(), 2);
        let fare = table.lookup("名古屋", "東京").unwrap();
        assert_eq!((fare.base, fare.express), (6380, 4920));
    }

    #[test]
    fn test_reversed_duplicate_rejected() {
        let toml = r#"
[[routes]]
from = "東京"
to = "名古屋"
base = 6380
express = 4920

[[routes]]
from = "名古屋"
to = "東京"
base = 6380
express = 4920
"#;
        let err = load_fares_from_str(toml).unwrap_err();
        assert!(matches!(err, TableError::DuplicateRoute { row: 2, .. }));
    }

    #[test]
    fn test_same_station_rejected() {
        let toml = "[[routes]]\nfrom = \"東京\"\nto = \"東京\"\nbase = 100\nexpress = 100\n";
        let err = load_fares_from_str(toml).unwrap_err();
        assert!(matches!(err, TableError::InvalidRoute { row: 1, .. }));
    }

    #[test]
    fn test_zero_fare_rejected() {
        let toml = "[[routes]]\nfrom = \"東京\"\nto = \"長野\"\nbase = 4070\nexpress = 0\n";
        let err = load_fares_from_str(toml).unwrap_err();
        match err {
            TableError::InvalidFare { row, column, .. } => {
                assert_eq!(row, 1);
                assert_eq!(column, "express");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_fare_is_parse_error() {
        let toml = "[[routes]]\nfrom = \"東京\"\nto = \"長野\"\nbase = -1\nexpress = 10\n";
        assert!(matches!(load_fares_from_str(toml), Err(TableError::Toml(_))));
    }
}

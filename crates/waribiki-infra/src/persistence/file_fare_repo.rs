//! File-based implementation of FareRepository

use std::path::{Path, PathBuf};

use waribiki_domain::model::{FarePair, FareTable, RouteFare};
use waribiki_domain::repository::FareRepository;

use crate::error::TableError;
use crate::fare_csv::load_fares_from_csv;
use crate::fare_loader::load_fares_from_file;

/// Route fare table read from a `.csv` or TOML file
pub struct FileFareRepository {
    path: PathBuf,
    table: FareTable,
}

fn load(path: &Path) -> Result<FareTable, TableError> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_fares_from_csv(path)
    } else {
        load_fares_from_file(path)
    }
}

impl FileFareRepository {
    /// Load the table; the format follows the file extension
    pub fn open(path: PathBuf) -> Result<Self, TableError> {
        let table = load(&path)?;
        Ok(Self { path, table })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FareRepository for FileFareRepository {
    fn lookup_fare(&self, station_a: &str, station_b: &str) -> Option<FarePair> {
        self.table.lookup(station_a, station_b)
    }

    fn routes(&self) -> Vec<RouteFare> {
        self.table.routes().to_vec()
    }

    fn stations(&self) -> Vec<String> {
        self.table.stations()
    }
}

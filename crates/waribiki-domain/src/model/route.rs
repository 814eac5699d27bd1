//! Route fare type definitions

use serde::{Deserialize, Serialize};
use waribiki_types::Yen;

/// Base fare (運賃) and limited express fare (特急料金) of one route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarePair {
    pub base: Yen,
    pub express: Yen,
}

/// One row of the route fare table. Station order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFare {
    /// 発駅
    pub from: String,
    /// 着駅
    pub to: String,
    pub base: Yen,
    pub express: Yen,
}

impl RouteFare {
    pub fn new(from: &str, to: &str, base: Yen, express: Yen) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            base,
            express,
        }
    }

    pub fn fare(&self) -> FarePair {
        FarePair {
            base: self.base,
            express: self.express,
        }
    }

    pub fn serves(&self, station: &str) -> bool {
        self.from == station || self.to == station
    }
}

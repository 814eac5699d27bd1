//! Shinkansen route fares (JR only)

use std::sync::LazyLock;

use waribiki_types::Yen;

use crate::model::{FarePair, FareTable, RouteFare};

/// (station, station, 運賃, 特急料金)
pub const ROUTE_FARES: [(&str, &str, Yen, Yen); 15] = [
    // 東海道・山陽
    ("東京", "名古屋", 6380, 4920),
    ("東京", "京都", 8360, 5810),
    ("東京", "新大阪", 8910, 5810),
    ("東京", "新神戸", 9460, 5920),
    ("東京", "岡山", 10670, 7030),
    ("東京", "広島", 11880, 7460),
    ("東京", "博多", 14080, 9310),
    ("名古屋", "新大阪", 3410, 3270),
    ("新大阪", "博多", 9790, 5810),
    // 東北
    ("東京", "仙台", 6050, 5360),
    ("東京", "盛岡", 8580, 6430),
    ("東京", "新青森", 10340, 7520),
    ("仙台", "新青森", 6050, 5360),
    // 北陸
    ("東京", "金沢", 7480, 6900),
    ("東京", "長野", 4070, 4200),
];

pub static BUILTIN_FARES: LazyLock<FareTable> = LazyLock::new(|| {
    FareTable::from_routes(
        ROUTE_FARES
            .iter()
            .map(|&(from, to, base, express)| RouteFare::new(from, to, base, express)),
    )
});

/// Fare between two stations in either order
pub fn lookup_fare(station_a: &str, station_b: &str) -> Option<FarePair> {
    BUILTIN_FARES.lookup(station_a, station_b)
}

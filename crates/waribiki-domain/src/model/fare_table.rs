//! In-memory route fare table keyed by unordered station pair

use std::collections::{BTreeSet, HashMap};

use super::route::{FarePair, RouteFare};

/// Route fare table (運賃表)
///
/// A–B and B–A address the same entry.
#[derive(Debug, Clone, Default)]
pub struct FareTable {
    routes: Vec<RouteFare>,
    index: HashMap<(String, String), usize>,
}

fn route_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl FareTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows; a later row for the same pair replaces the earlier one
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = RouteFare>,
    {
        let mut table = Self::new();
        for route in routes {
            table.insert(route);
        }
        table
    }

    /// Insert a row, returning the row it replaced
    pub fn insert(&mut self, route: RouteFare) -> Option<RouteFare> {
        let key = route_key(&route.from, &route.to);
        match self.index.get(&key) {
            Some(&idx) => Some(std::mem::replace(&mut self.routes[idx], route)),
            None => {
                self.index.insert(key, self.routes.len());
                self.routes.push(route);
                None
            }
        }
    }

    pub fn contains(&self, station_a: &str, station_b: &str) -> bool {
        self.index.contains_key(&route_key(station_a, station_b))
    }

    /// Fare between two stations in either order.
    ///
    /// `None` when a station is empty, both stations are the same, or the pair is unknown.
    pub fn lookup(&self, station_a: &str, station_b: &str) -> Option<FarePair> {
        if station_a.is_empty() || station_b.is_empty() || station_a == station_b {
            return None;
        }
        self.index
            .get(&route_key(station_a, station_b))
            .map(|&idx| self.routes[idx].fare())
    }

    pub fn routes(&self) -> &[RouteFare] {
        &self.routes
    }

    /// Distinct station names, sorted
    pub fn stations(&self) -> Vec<String> {
        self.routes
            .iter()
            .flat_map(|r| [r.from.as_str(), r.to.as_str()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FareTable {
        FareTable::from_routes(vec![
            RouteFare::new("東京", "名古屋", 6380, 4920),
            RouteFare::new("名古屋", "新大阪", 3410, 3270),
        ])
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let table = sample();
        let forward = table.lookup("東京", "名古屋");
        let backward = table.lookup("名古屋", "東京");
        assert_eq!(forward, Some(FarePair { base: 6380, express: 4920 }));
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_lookup_rejects_empty_and_same_station() {
        let table = sample();
        assert_eq!(table.lookup("", "東京"), None);
        assert_eq!(table.lookup("東京", ""), None);
        assert_eq!(table.lookup("東京", "東京"), None);
    }

    #[test]
    fn test_lookup_unknown_pair() {
        let table = sample();
        assert_eq!(table.lookup("東京", "新大阪"), None);
    }

    #[test]
    fn test_insert_reversed_pair_replaces() {
        let mut table = sample();
        let replaced = table.insert(RouteFare::new("名古屋", "東京", 6500, 5000));
        assert_eq!(replaced.map(|r| r.base), Some(6380));
        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("東京", "名古屋").map(|f| f.base), Some(6500));
    }

    #[test]
    fn test_stations_sorted_and_distinct() {
        let table = sample();
        let stations = table.stations();
        assert_eq!(stations.len(), 3);
        let mut sorted = stations.clone();
        sorted.sort();
        assert_eq!(stations, sorted);
    }

    #[test]
    fn test_empty_table() {
        let table = FareTable::new();
        assert!(table.is_empty());
        assert!(!table.contains("東京", "名古屋"));
        assert!(table.stations().is_empty());
    }
}

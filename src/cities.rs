//! Road networks between cities, as a search domain.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use lazy_static::lazy_static;

use searcher::{Cost, SearchDomain, SearchError, SearchProblem, SearchResult, SearchTree, Strategy};

mod parse;
mod portugal;

lazy_static! {
    /// The road network of mainland Portugal.
    pub static ref PORTUGAL: Cities = Cities::from_tables(portugal::ROADS, portugal::COORDINATES);
}

/// Travel along a road, from one city to the next.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Road {
    pub from: String,
    pub to: String,
}

impl Road {
    pub fn new<S: Into<String>>(from: S, to: S) -> Self {
        Road {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Does this road join these two cities, in either direction?
    fn joins(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.from, self.to)
    }
}

/// Undirected roads between cities, with optional map coordinates
/// for each city which provide a straight-line heuristic.
#[derive(Debug, Clone, Default)]
pub struct Cities {
    connections: Vec<(String, String, Cost)>,
    coordinates: HashMap<String, (f64, f64)>,
}

impl Cities {
    pub fn new(
        connections: Vec<(String, String, Cost)>,
        coordinates: HashMap<String, (f64, f64)>,
    ) -> Self {
        Cities {
            connections,
            coordinates,
        }
    }

    fn from_tables(roads: &[(&str, &str, Cost)], coordinates: &[(&str, f64, f64)]) -> Self {
        let mut cities = Cities::default();
        for &(a, b, distance) in roads {
            cities.connect(a, b, distance);
        }
        for &(city, x, y) in coordinates {
            cities.locate(city, x, y);
        }
        cities
    }

    /// Add a road between two cities.
    pub fn connect(&mut self, a: &str, b: &str, distance: Cost) {
        self.connections
            .push((a.to_string(), b.to_string(), distance));
    }

    /// Set the map coordinates of a city.
    pub fn locate(&mut self, city: &str, x: f64, y: f64) {
        self.coordinates.insert(city.to_string(), (x, y));
    }

    pub fn roads(&self) -> impl Iterator<Item = (&str, &str, Cost)> {
        self.connections
            .iter()
            .map(|(a, b, d)| (a.as_str(), b.as_str(), *d))
    }

    pub fn coordinates(&self, city: &str) -> Option<(f64, f64)> {
        self.coordinates.get(city).copied()
    }

    /// Names of all cities which appear in the network, sorted.
    pub fn cities(&self) -> Vec<String> {
        let names: BTreeSet<&String> = self
            .connections
            .iter()
            .flat_map(|(a, b, _)| vec![a, b])
            .chain(self.coordinates.keys())
            .collect();
        names.into_iter().cloned().collect()
    }

    pub fn contains(&self, city: &str) -> bool {
        self.coordinates.contains_key(city)
            || self
                .connections
                .iter()
                .any(|(a, b, _)| a == city || b == city)
    }
}

impl SearchDomain for Cities {
    type State = String;
    type Action = Road;

    fn actions(&self, city: &String) -> Vec<Road> {
        self.connections
            .iter()
            .filter_map(|(a, b, _)| {
                if a == city {
                    Some(Road::new(a.as_str(), b.as_str()))
                } else if b == city {
                    Some(Road::new(b.as_str(), a.as_str()))
                } else {
                    None
                }
            })
            .collect()
    }

    fn result(&self, city: &String, road: &Road) -> SearchResult<String> {
        if &road.from == city {
            Ok(road.to.clone())
        } else {
            Err(SearchError::invalid_action(city, road))
        }
    }

    fn cost(&self, city: &String, road: &Road) -> SearchResult<Cost> {
        self.connections
            .iter()
            .find(|(a, b, _)| road.joins(a, b))
            .map(|(_, _, distance)| *distance)
            .ok_or_else(|| SearchError::invalid_action(city, road))
    }

    /// Straight-line distance, or zero when either city has no coordinates.
    fn heuristic(&self, city: &String, goal: &String) -> Cost {
        match (self.coordinates.get(city), self.coordinates.get(goal)) {
            (Some(&(x, y)), Some(&(gx, gy))) => (x - gx).abs().hypot((y - gy).abs()),
            _ => 0.0,
        }
    }

    fn satisfies(&self, city: &String, goal: &String) -> bool {
        city == goal
    }
}

/// Find a path between two cities using the given strategy.
pub fn search_path(
    cities: &Cities,
    from: &str,
    to: &str,
    strategy: Strategy,
) -> SearchResult<Option<Vec<String>>> {
    let problem = SearchProblem::new(cities, from.to_string(), to.to_string());
    SearchTree::new(problem, strategy).search(None)
}

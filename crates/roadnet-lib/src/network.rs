//! Road network datasets: the serialisable description a [`Graph`] is built from.
//!
//! A dataset lists locations (with optional coordinates used only by
//! renderers) and the roads between them. Files are JSON:
//!
//! ```json
//! {
//!   "name": "triangle",
//!   "unit": "km",
//!   "locations": [{ "name": "A" }, { "name": "B", "position": { "lon": 1.0, "lat": 2.0 } }],
//!   "roads": [{ "from": "A", "to": "B", "distance": 5.0 }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::graph::Graph;

const DEFAULT_UNIT: &str = "km";

/// Geographic coordinates of a location, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
}

/// Location entry within a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Road entry within a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadRecord {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Complete road network description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub name: String,
    /// Distance unit label used in renderings.
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub locations: Vec<LocationRecord>,
    #[serde(default)]
    pub roads: Vec<RoadRecord>,
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

const EAST_JAVA_LOCATIONS: [(&str, f64, f64); 10] = [
    ("Surabaya", 112.75, -7.25),
    ("Malang", 112.63, -7.98),
    ("Batu", 112.52, -7.87),
    ("Kediri", 112.01, -7.82),
    ("Blitar", 112.16, -8.10),
    ("Jember", 113.70, -8.17),
    ("Banyuwangi", 114.36, -8.22),
    ("Madiun", 111.52, -7.62),
    ("Lamongan", 112.41, -7.12),
    ("Tuban", 111.90, -6.90),
];

const EAST_JAVA_ROADS: [(&str, &str, f64); 31] = [
    ("Surabaya", "Malang", 90.0),
    ("Malang", "Batu", 20.0),
    ("Batu", "Kediri", 60.0),
    ("Kediri", "Blitar", 30.0),
    ("Blitar", "Jember", 120.0),
    ("Jember", "Banyuwangi", 100.0),
    ("Banyuwangi", "Madiun", 250.0),
    ("Madiun", "Lamongan", 110.0),
    ("Lamongan", "Tuban", 40.0),
    ("Tuban", "Surabaya", 110.0),
    ("Surabaya", "Lamongan", 50.0),
    ("Surabaya", "Tuban", 110.0),
    ("Malang", "Blitar", 80.0),
    ("Malang", "Jember", 120.0),
    ("Batu", "Blitar", 70.0),
    ("Batu", "Jember", 140.0),
    ("Kediri", "Madiun", 90.0),
    ("Kediri", "Lamongan", 120.0),
    ("Blitar", "Madiun", 100.0),
    ("Jember", "Madiun", 200.0),
    ("Jember", "Lamongan", 180.0),
    ("Banyuwangi", "Lamongan", 220.0),
    ("Banyuwangi", "Tuban", 260.0),
    ("Madiun", "Tuban", 120.0),
    ("Lamongan", "Batu", 100.0),
    ("Tuban", "Kediri", 130.0),
    ("Surabaya", "Batu", 100.0),
    ("Malang", "Kediri", 70.0),
    ("Blitar", "Banyuwangi", 150.0),
    ("Jember", "Tuban", 210.0),
    ("Batu", "Madiun", 130.0),
];

impl RoadNetwork {
    /// Built-in ten-city East Java network with distances in kilometres.
    pub fn east_java() -> Self {
        Self {
            name: "East Java".to_string(),
            unit: DEFAULT_UNIT.to_string(),
            locations: EAST_JAVA_LOCATIONS
                .iter()
                .map(|&(name, lon, lat)| LocationRecord {
                    name: name.to_string(),
                    position: Some(Position { lon, lat }),
                })
                .collect(),
            roads: EAST_JAVA_ROADS
                .iter()
                .map(|&(from, to, distance)| RoadRecord {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance,
                })
                .collect(),
        }
    }

    /// Register every listed location, then every road.
    ///
    /// Later roads between the same pair replace earlier ones.
    pub fn build_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for location in &self.locations {
            graph.add_location(location.name.as_str());
        }
        for road in &self.roads {
            graph.add_edge(&road.from, &road.to, road.distance)?;
        }
        Ok(graph)
    }

    /// Coordinates for a named location, if the dataset carries them.
    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.locations
            .iter()
            .find(|location| location.name == name)
            .and_then(|location| location.position)
    }
}

/// Load a road network description from a JSON file.
pub fn load_network(path: &Path) -> Result<RoadNetwork> {
    let contents = fs::read_to_string(path)?;
    let network: RoadNetwork =
        serde_json::from_str(&contents).map_err(|err| Error::NetworkParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    info!(
        path = %path.display(),
        name = %network.name,
        locations = network.locations.len(),
        roads = network.roads.len(),
        "loaded road network"
    );
    Ok(network)
}

/// Load the network at `path`, or the built-in East Java network when no path is given.
pub fn load_network_or_default(path: Option<&Path>) -> Result<RoadNetwork> {
    match path {
        Some(path) => load_network(path),
        None => Ok(RoadNetwork::east_java()),
    }
}

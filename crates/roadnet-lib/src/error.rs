use std::path::PathBuf;

use thiserror::Error;

use crate::graph::LocationId;

/// Convenient result alias for the road network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name was never registered in the graph.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a location identifier does not belong to the graph.
    #[error("unknown location id: {id}")]
    UnknownLocationId { id: LocationId },

    /// Raised when an edge weight is negative, NaN, or infinite.
    #[error("invalid distance {weight} for road {from} - {to}; expected a finite non-negative number")]
    InvalidEdgeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Raised when an edge would connect a location to itself.
    #[error("refusing to connect {location} to itself")]
    SelfLoop { location: String },

    /// Raised when the travel-time speed is zero, negative, or not finite.
    #[error("invalid average speed {speed}; expected a finite positive number")]
    InvalidAverageSpeed { speed: f64 },

    /// Raised when exhaustive tour search is requested on a graph above the configured limit.
    #[error("tour search over {locations} locations exceeds the configured limit of {limit}")]
    TourTooLarge { locations: usize, limit: usize },

    /// Raised when a network file could not be parsed.
    #[error("failed to parse road network from {path}: {message}")]
    NetworkParse { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

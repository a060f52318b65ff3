// Module exports for CLI subcommands
//
// Each module handles a specific group of subcommands. main.rs parses the
// arguments, builds a `CommandContext`, and dispatches to these handlers.

pub mod network;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};

use roadnet_lib::{load_network_or_default, Graph, QueryOptions, RoadNetwork, RouteQueries};

use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Everything a handler needs: the loaded network, its graph, and presentation settings.
#[derive(Debug)]
pub struct CommandContext {
    pub network: RoadNetwork,
    pub graph: Graph,
    pub options: QueryOptions,
    pub format: OutputFormat,
    pub palette: ColorPalette,
}

impl CommandContext {
    /// Load the network (or the built-in one) and build its graph.
    pub fn load(
        network_path: Option<&Path>,
        options: QueryOptions,
        format: OutputFormat,
    ) -> Result<Self> {
        let network = load_network_or_default(network_path).with_context(|| match network_path {
            Some(path) => format!("failed to load road network from {}", path.display()),
            None => "failed to load the built-in road network".to_string(),
        })?;
        let graph = network
            .build_graph()
            .with_context(|| format!("road network '{}' is invalid", network.name))?;
        options.validate()?;

        Ok(Self {
            network,
            graph,
            options,
            format,
            palette: ColorPalette::detect(),
        })
    }

    /// Query surface over the loaded graph.
    pub fn queries(&self) -> Result<RouteQueries<'_>> {
        Ok(RouteQueries::new(&self.graph, self.options)?)
    }

    /// Map a typed location name onto its registered spelling.
    ///
    /// Exact names pass through; otherwise a single case-insensitive match
    /// is used. Anything else is returned unchanged so the query reports it
    /// as unknown.
    pub fn canonical_name<'a>(&'a self, input: &'a str) -> &'a str {
        if self.graph.location_id(input).is_some() {
            return input;
        }

        let mut matches = self
            .graph
            .locations()
            .filter(|candidate| candidate.to_lowercase() == input.to_lowercase());
        match (matches.next(), matches.next()) {
            (Some(name), None) => name,
            _ => input,
        }
    }
}

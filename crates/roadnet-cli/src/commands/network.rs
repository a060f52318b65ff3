//! Handlers that describe the loaded network.

use anyhow::Result;

use roadnet_lib::ConnectionTable;

use super::CommandContext;
use crate::output::{format_connections, format_locations};

/// Handle the `locations` subcommand.
pub fn handle_locations(ctx: &CommandContext) -> Result<String> {
    let names: Vec<&str> = ctx.graph.locations().collect();
    format_locations(&ctx.network.name, &names, ctx.format, &ctx.palette)
}

/// Handle the `connections` subcommand.
pub fn handle_connections(ctx: &CommandContext) -> Result<String> {
    let table = ConnectionTable::from_graph(&ctx.graph, &ctx.network.unit);
    format_connections(&table, ctx.format, &ctx.palette)
}

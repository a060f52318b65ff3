//! Route and tour handlers.

use anyhow::Result;
use tracing::info;

use roadnet_lib::{RoutePlan, RouteSummary};

use super::network::handle_connections;
use super::CommandContext;
use crate::output::{format_summary, OutputFormat};

/// Handle the `route` subcommand: shortest path between two locations.
pub fn handle_route(ctx: &CommandContext, from: &str, to: &str) -> Result<String> {
    let plan = ctx
        .queries()?
        .shortest_path(ctx.canonical_name(from), ctx.canonical_name(to))?;
    render_plan(ctx, &plan)
}

/// Handle the `tour` subcommand: cheapest open tour from one location.
pub fn handle_tour(ctx: &CommandContext, from: &str) -> Result<String> {
    info!(
        locations = ctx.graph.len(),
        "starting exhaustive tour search; this may take a while"
    );
    let plan = ctx.queries()?.optimal_tour(ctx.canonical_name(from))?;
    render_plan(ctx, &plan)
}

/// Handle the `plan` subcommand: connections, shortest path, then tour.
///
/// Nothing is returned unless both queries succeed.
pub fn handle_plan(ctx: &CommandContext, from: &str, to: &str) -> Result<String> {
    let queries = ctx.queries()?;
    let (from, to) = (ctx.canonical_name(from), ctx.canonical_name(to));

    let path = queries.shortest_path(from, to)?;
    let tour = queries.optimal_tour(from)?;

    if ctx.format == OutputFormat::Json {
        let combined = serde_json::json!({
            "shortest_path": summarize(ctx, &path)?,
            "tour": summarize(ctx, &tour)?,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&combined)?));
    }

    let mut buffer = handle_connections(ctx)?;
    buffer.push('\n');
    buffer.push_str(&render_plan(ctx, &path)?);
    buffer.push('\n');
    buffer.push_str(&render_plan(ctx, &tour)?);
    Ok(buffer)
}

fn summarize(ctx: &CommandContext, plan: &RoutePlan) -> Result<RouteSummary> {
    Ok(RouteSummary::from_plan(&ctx.graph, plan, &ctx.network.unit)?)
}

fn render_plan(ctx: &CommandContext, plan: &RoutePlan) -> Result<String> {
    let summary = summarize(ctx, plan)?;
    format_summary(&summary, ctx.format, &ctx.palette)
}

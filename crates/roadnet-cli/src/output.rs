//! Output formatting for query results and network listings.
//!
//! Every formatter returns a `String` so the handlers decide where it goes
//! and tests can inspect it without capturing stdout.

use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use roadnet_lib::{ConnectionTable, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Numbered steps with cumulative distances.
    #[default]
    Text,
    /// Arrow-joined path and totals only.
    Basic,
    /// Pretty-printed JSON.
    Json,
}

/// Render a query summary.
pub fn format_summary(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<String> {
    let body = match format {
        OutputFormat::Json => return Ok(format!("{}\n", summary.to_json()?)),
        OutputFormat::Text => summary.render(RouteRenderMode::PlainText),
        OutputFormat::Basic => summary.render(RouteRenderMode::Basic),
    };
    Ok(highlight_first_line(&body, palette))
}

/// Render the adjacency table.
pub fn format_connections(
    table: &ConnectionTable,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json_line(table);
    }

    let mut buffer = String::new();
    let _ = writeln!(buffer, "{}Connections{}", palette.white_bold, palette.reset);
    buffer.push_str(&table.render());
    Ok(buffer)
}

/// Render the list of registered locations.
pub fn format_locations(
    network_name: &str,
    names: &[&str],
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json_line(&names);
    }

    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{}Locations in {}{}",
        palette.white_bold, network_name, palette.reset
    );
    for name in names {
        let _ = writeln!(buffer, "{}•{} {}", palette.gray, palette.reset, name);
    }
    Ok(buffer)
}

fn to_json_line<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}

fn highlight_first_line(body: &str, palette: &ColorPalette) -> String {
    match body.split_once('\n') {
        Some((first, rest)) => {
            format!("{}{}{}\n{}", palette.white_bold, first, palette.reset, rest)
        }
        None => body.to_string(),
    }
}

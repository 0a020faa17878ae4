//! Output formatting for route and snap results.
//!
//! `text` and `plain` share one layout; `text` adds ANSI colour when the
//! palette carries it. `markdown` reuses the library's rich renderer and
//! `json` is the serde form written to stdout.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use roadroute_lib::{Coordinate, NodeId, RouteRenderMode, RouteSummary, Snap};

use crate::terminal::ColorPalette;

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable directions, coloured when the terminal allows it.
    #[default]
    Text,
    /// Same layout as `text`, never coloured.
    Plain,
    /// Markdown list of steps.
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

/// Snap result together with the query it answers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NearestReport {
    pub query: Coordinate,
    pub node: NodeId,
    pub coordinate: Coordinate,
    pub distance_meters: f64,
}

impl NearestReport {
    pub fn new(query: Coordinate, snap: Snap, coordinate: Coordinate) -> Self {
        Self {
            query,
            node: snap.node,
            coordinate,
            distance_meters: snap.distance_meters,
        }
    }
}

/// Format a route summary as directions.
///
/// With [`ColorPalette::plain`] the result is identical to
/// `summary.render(RouteRenderMode::PlainText)`.
pub fn format_route_text(summary: &RouteSummary, palette: &ColorPalette) -> String {
    let p = palette;
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Shortest path found! Total distance: {}{:.2} km{}",
        p.white_bold,
        summary.total_distance_meters() / 1000.0,
        p.reset
    );
    for (index, step) in summary.steps.iter().enumerate() {
        let _ = writeln!(
            buffer,
            "Step {}: {}{}{} on {}{}{} for {:.0} meters",
            index + 1,
            p.instruction(step.instruction),
            step.instruction,
            p.reset,
            p.white_bold,
            step.street_label(),
            p.reset,
            step.length_meters
        );
    }
    let _ = writeln!(buffer);
    let _ = writeln!(buffer, "Route coordinates:");
    for coordinate in &summary.coordinates {
        let _ = writeln!(buffer, "{}{coordinate}{}", p.gray, p.reset);
    }
    buffer
}

/// Format a snap result as a single line.
pub fn format_nearest_text(report: &NearestReport, palette: &ColorPalette) -> String {
    let p = palette;
    format!(
        "Nearest node to {}: {}{}{} at {} ({:.1} meters away)\n",
        report.query,
        p.white_bold,
        report.node,
        p.reset,
        report.coordinate,
        report.distance_meters
    )
}

/// Print a route summary in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_route(
    summary: &RouteSummary,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_route_text(summary, palette)),
        OutputFormat::Plain => print!("{}", summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Markdown => print!("{}", summary.render(RouteRenderMode::RichText)),
        OutputFormat::Json => render_json(summary)?,
    }
    Ok(())
}

/// Print a snap result in the requested format.
///
/// Markdown has no dedicated layout for a single node and falls back to plain text.
pub fn render_nearest(
    report: &NearestReport,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_nearest_text(report, palette)),
        OutputFormat::Plain | OutputFormat::Markdown => {
            print!("{}", format_nearest_text(report, &ColorPalette::plain()))
        }
        OutputFormat::Json => render_json(report)?,
    }
    Ok(())
}

/// Write any serialisable value to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

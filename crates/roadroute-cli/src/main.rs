mod commands;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadroute_cli::input::parse_coordinate;
use roadroute_cli::output::OutputFormat;
use roadroute_cli::terminal::ColorPalette;
use roadroute_lib::{Coordinate, Endpoint, NodeId, RouteAlgorithm};

use commands::nearest::handle_nearest_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest routes and turn-by-turn directions over road networks"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Clone)]
struct GlobalOptions {
    /// Disable ANSI colour even when the terminal supports it.
    #[arg(long, global = true)]
    no_color: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,
}

impl GlobalOptions {
    fn palette(&self) -> ColorPalette {
        if self.no_color {
            ColorPalette::plain()
        } else {
            ColorPalette::detect()
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute directions between two nodes or coordinates.
    Route(RouteArgs),
    /// Snap a coordinate to the closest node of the road network.
    Nearest(NearestArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("origin").required(true).args(["from", "from_coord"])))]
#[command(group(ArgGroup::new("target").required(true).args(["to", "to_coord"])))]
struct RouteArgs {
    /// Road network JSON file (defaults to $ROADROUTE_GRAPH).
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Starting node id.
    #[arg(long, allow_negative_numbers = true)]
    from: Option<NodeId>,

    /// Starting position as LAT,LON; snapped to the nearest node.
    #[arg(long, value_name = "LAT,LON", value_parser = parse_coordinate, allow_hyphen_values = true)]
    from_coord: Option<Coordinate>,

    /// Destination node id.
    #[arg(long, allow_negative_numbers = true)]
    to: Option<NodeId>,

    /// Destination position as LAT,LON; snapped to the nearest node.
    #[arg(long, value_name = "LAT,LON", value_parser = parse_coordinate, allow_hyphen_values = true)]
    to_coord: Option<Coordinate>,

    /// Search algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::AStar)]
    algorithm: AlgorithmArg,

    /// Give up after expanding this many nodes.
    #[arg(long)]
    max_expansions: Option<usize>,
}

#[derive(Args, Debug)]
struct NearestArgs {
    /// Road network JSON file (defaults to $ROADROUTE_GRAPH).
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Position to snap, as LAT,LON.
    #[arg(long, value_name = "LAT,LON", value_parser = parse_coordinate, allow_hyphen_values = true)]
    coord: Coordinate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    #[value(name = "a-star")]
    AStar,
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::AStar => RouteAlgorithm::AStar,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

impl RouteArgs {
    fn into_command_args(self) -> Result<RouteCommandArgs> {
        Ok(RouteCommandArgs {
            graph: self.graph,
            from: endpoint("--from", self.from, self.from_coord)?,
            to: endpoint("--to", self.to, self.to_coord)?,
            algorithm: self.algorithm.into(),
            max_expansions: self.max_expansions,
        })
    }
}

fn endpoint(flag: &str, node: Option<NodeId>, coordinate: Option<Coordinate>) -> Result<Endpoint> {
    match (node, coordinate) {
        (Some(node), _) => Ok(Endpoint::Node(node)),
        (None, Some(coordinate)) => Ok(Endpoint::Coordinate(coordinate)),
        (None, None) => bail!("{flag} or {flag}-coord is required"),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let format = cli.global.format;
    let palette = cli.global.palette();

    match cli.command {
        Command::Route(args) => handle_route_command(&args.into_command_args()?, format, &palette),
        Command::Nearest(args) => handle_nearest_command(args.graph, args.coord, format, &palette),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

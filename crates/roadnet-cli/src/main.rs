use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadnet_cli::commands::network::{handle_connections, handle_locations};
use roadnet_cli::commands::route::{handle_plan, handle_route, handle_tour};
use roadnet_cli::commands::CommandContext;
use roadnet_cli::output::OutputFormat;
use roadnet_lib::{QueryOptions, TourStrategy, DEFAULT_AVERAGE_SPEED, DEFAULT_TOUR_LOCATION_LIMIT};

#[derive(Parser, Debug)]
#[command(author, version, about = "Road network shortest paths and tours")]
struct Cli {
    /// JSON road network file; the built-in East Java network is used when omitted.
    #[arg(long, env = "ROADNET_NETWORK", global = true)]
    network: Option<PathBuf>,

    /// Average speed used for travel-time estimates (distance units per hour).
    #[arg(
        long,
        env = "ROADNET_AVERAGE_SPEED",
        default_value_t = DEFAULT_AVERAGE_SPEED,
        global = true
    )]
    speed: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Refuse tours over more locations than this; 0 disables the limit.
    #[arg(long, default_value_t = DEFAULT_TOUR_LOCATION_LIMIT, global = true)]
    max_tour_locations: usize,

    /// Enumerate tours on a single thread.
    #[arg(long, global = true)]
    sequential: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the locations in the network.
    Locations,
    /// Print every location with its roads and distances.
    Connections,
    /// Compute the shortest path between two locations.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
    },
    /// Compute the cheapest tour visiting every location once, without returning.
    Tour {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
    },
    /// Print connections, the shortest path, and the tour from the origin.
    Plan {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
    },
}

impl Cli {
    fn query_options(&self) -> QueryOptions {
        QueryOptions {
            average_speed: self.speed,
            tour_location_limit: (self.max_tour_locations > 0).then_some(self.max_tour_locations),
            tour_strategy: if self.sequential {
                TourStrategy::Sequential
            } else {
                TourStrategy::Parallel
            },
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let ctx = CommandContext::load(cli.network.as_deref(), cli.query_options(), cli.format)?;
    let rendered = match &cli.command {
        Command::Locations => handle_locations(&ctx)?,
        Command::Connections => handle_connections(&ctx)?,
        Command::Route { from, to } => handle_route(&ctx, from, to)?,
        Command::Tour { from } => handle_tour(&ctx, from)?,
        Command::Plan { from, to } => handle_plan(&ctx, from, to)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

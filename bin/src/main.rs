//! ranportal CLI - 5G RAN throughput and latency estimates.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use ranportal_types::DuplexMode;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "ranportal")]
#[command(about = "5G RAN throughput and latency estimates", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "RANPORTAL_PORT", default_value_t = ranportal_server::DEFAULT_PORT)]
        port: u16,

        /// Address to bind
        #[arg(long, env = "RANPORTAL_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Directory for stored configurations. Defaults to the user data directory.
        #[arg(short, long, env = "RANPORTAL_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Keep configurations in memory only
        #[arg(long, env = "RANPORTAL_EPHEMERAL", conflicts_with = "data_dir")]
        ephemeral: bool,

        /// External simulator executable. The built-in estimator is used when absent or failing.
        #[arg(long, env = "RANPORTAL_SIMULATOR")]
        simulator: Option<PathBuf>,

        /// Simulator timeout in seconds
        #[arg(long, env = "RANPORTAL_SIMULATOR_TIMEOUT", default_value = "30")]
        simulator_timeout: u64,

        /// Disable CORS headers
        #[arg(long, env = "RANPORTAL_NO_CORS")]
        no_cors: bool,
    },

    /// Estimate throughput and latency for one configuration
    Estimate {
        /// Carrier frequency in Hz (e.g., 3.5e9)
        #[arg(short, long)]
        frequency: f64,

        /// Channel bandwidth in Hz (e.g., 20e6)
        #[arg(short, long)]
        bandwidth: f64,

        /// Duplex mode (TDD or FDD)
        #[arg(short, long)]
        duplex_mode: DuplexMode,

        /// Transmit power in dBm
        #[arg(short, long, allow_negative_numbers = true)]
        transmit_power: f64,

        /// Show intermediate terms
        #[arg(long)]
        explain: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List stored configurations, newest first
    List {
        /// Directory for stored configurations
        #[arg(short, long, env = "RANPORTAL_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Show a stored configuration
    Show {
        /// Configuration ID
        id: String,

        /// Directory for stored configurations
        #[arg(short, long, env = "RANPORTAL_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_filter = match (quiet, verbose) {
        (true, _) => "ranportal=warn,tower_http=warn",
        (false, 0) => "ranportal=info,tower_http=info",
        (false, 1) => "ranportal=debug,tower_http=debug",
        (false, _) => "ranportal=trace,tower_http=trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            host,
            data_dir,
            ephemeral,
            simulator,
            simulator_timeout,
            no_cors,
        } => {
            commands::serve::serve(commands::serve::ServeOptions {
                host,
                port,
                data_dir,
                ephemeral,
                simulator,
                simulator_timeout,
                cors: !no_cors,
            })
            .await
        }
        Commands::Estimate {
            frequency,
            bandwidth,
            duplex_mode,
            transmit_power,
            explain,
            json,
        } => commands::estimate::estimate(
            frequency,
            bandwidth,
            duplex_mode,
            transmit_power,
            explain,
            json,
        ),
        Commands::List { data_dir } => commands::list::list_configurations(data_dir),
        Commands::Show { id, data_dir } => commands::show::show_configuration(&id, data_dir),
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};

/// cedarheights - Cedar Heights Music Academy website
#[derive(Parser)]
#[command(name = "cedarheights")]
#[command(about = "Marketing and enrollment site for Cedar Heights Music Academy", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cedarheights::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    cedarheights::observability::init_observability(
        "cedarheights",
        &config.observability.log_level,
        config.observability.json_logs,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cedarheights::cli::serve(config, host, port).await,
    }
}

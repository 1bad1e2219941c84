use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wolweb_cli::cli;
use wolweb_cli::client::DeviceClient;
use wolweb_cli::config::Config;

#[derive(Parser)]
#[command(name = "wolweb-cli")]
#[command(about = "A command line interface to trigger devices with wolweb")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available devices
    List,

    /// Wake device
    Wake {
        /// Device name as known to the wolweb server
        name: String,
    },

    /// Write a config file pointing at a wolweb server
    Init {
        /// Base URL of the wolweb server
        #[arg(short, long)]
        server: String,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::default_path);

    match cli.command {
        Commands::List => {
            let config = Config::load(&config_path)?;
            let client = DeviceClient::new(&config.server, config.timeout())?;
            cli::list_devices(&client).await?;
        }

        Commands::Wake { name } => {
            let config = Config::load(&config_path)?;
            let client = DeviceClient::new(&config.server, config.timeout())?;
            cli::wake_device(&client, &name).await?;
        }

        Commands::Init {
            server,
            timeout_secs,
        } => {
            let mut config = Config::new(server);
            if let Some(secs) = timeout_secs.filter(|s| *s > 0) {
                config.timeout_secs = secs;
            }
            config.save(&config_path)?;
            println!("Initialized wolweb-cli");
            println!("Server: {}", config.server);
            println!("Config saved to: {}", config_path.display());
        }
    }

    Ok(())
}

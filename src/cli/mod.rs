pub mod client;
pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "orgctl")]
#[command(about = "orgctl - Command-line client for the Org Hierarchy API")]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "ORG_API_URL",
        default_value = "http://localhost:3000",
        help = "Base URL of the API server"
    )]
    pub server: String,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create employees and inspect hierarchies")]
    Employee {
        #[command(subcommand)]
        cmd: commands::employee::EmployeeCommands,
    },

    #[command(about = "Check server health status from the /health endpoint")]
    Health,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let client = client::ApiClient::new(&cli.server)?;

    match cli.command {
        Commands::Employee { cmd } => commands::employee::handle(cmd, &client, output_format).await,
        Commands::Health => commands::health::handle(&client, output_format).await,
    }
}

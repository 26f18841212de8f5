pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "login-api")]
#[command(about = "Credential check service backed by a flat users file")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Serve flags for the bare `login-api` form
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(about = "Serve POST /api/login (default)")]
    Serve(ServeArgs),

    #[command(about = "Load the users file once and summarize it")]
    CheckUsers(CheckUsersArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    #[arg(long, help = "Address to bind (overrides LOGIN_API_HOST)")]
    pub host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides LOGIN_API_PORT)")]
    pub port: Option<u16>,

    #[arg(long, help = "Path to users file (overrides LOGIN_API_USERS_FILE)")]
    pub users_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckUsersArgs {
    #[arg(long, help = "Path to users file (overrides LOGIN_API_USERS_FILE)")]
    pub users_file: Option<PathBuf>,

    #[arg(long, help = "Output in JSON format")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl Cli {
    /// The subcommand to run; no subcommand means serve with the top-level flags
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::Serve(self.serve))
    }
}

impl Commands {
    /// Command-line flags win over environment values
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        match self {
            Commands::Serve(args) => {
                if let Some(host) = &args.host {
                    config.server.host = host.clone();
                }
                if let Some(port) = args.port {
                    config.server.port = port;
                }
                if let Some(path) = &args.users_file {
                    config.store.users_file = path.clone();
                }
            }
            Commands::CheckUsers(args) => {
                if let Some(path) = &args.users_file {
                    config.store.users_file = path.clone();
                }
            }
        }
        config
    }
}

pub async fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve(_) => commands::serve::handle(config).await,
        Commands::CheckUsers(args) => {
            commands::check_users::handle(config, OutputFormat::from_flag(args.json)).await
        }
    }
}

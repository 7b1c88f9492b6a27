//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use tix_core::config::Config;
use tix_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "tix")]
#[command(version)]
#[command(about = "FasTicket terminal client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        /// Username or email
        #[arg(long)]
        identifier: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create a new account
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Phone number (10-15 digits)
        #[arg(long)]
        phone: String,

        #[arg(long = "first-name")]
        first_name: String,

        #[arg(long = "last-name")]
        last_name: String,

        #[arg(long)]
        company: String,
    },

    /// Log out (remove the stored session)
    Logout,

    /// Show the stored session
    Whoami,

    /// List upcoming events
    Events,

    /// List partner hotels
    Hotels,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Set the backend base URL
    SetUrl {
        /// Base URL, e.g. https://fasticket.onrender.com
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("load config")?;

    // Log to a file so the TUI screen stays clean; keep the guard alive
    // for the lifetime of the process.
    let _log_guard = logging::init(&config.log_filter).context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli, config).await })
}

async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    // default to the interactive UI
    let Some(command) = cli.command else {
        return tix_tui::run_interactive(&config).await;
    };

    match command {
        Commands::Login {
            identifier,
            password,
        } => commands::auth::login(&config, identifier, password).await,

        Commands::Signup {
            username,
            email,
            password,
            phone,
            first_name,
            last_name,
            company,
        } => {
            commands::auth::signup(
                &config,
                tix_core::auth::Registration {
                    username,
                    email,
                    password,
                    phone,
                    first_name,
                    last_name,
                    company,
                },
            )
            .await
        }

        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(),

        Commands::Events => commands::pages::events(),
        Commands::Hotels => commands::pages::hotels(),

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}

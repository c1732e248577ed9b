//! Order Desk CLI - Terminal order-entry view.
//!
//! # Usage
//!
//! ```bash
//! # Interactive prompt (default)
//! order-desk
//!
//! # Against a local API, with transport failures shown and logout enabled
//! order-desk --api-url http://127.0.0.1:8080 --surface-transport-failures --allow-logout
//!
//! # Log in, add items and submit one order
//! order-desk submit -e a@b.com -p x -n "Ada" -m ada@example.com \
//!     --item Widget:3:9.99 --item Gadget:1:24.50
//! ```
//!
//! # Commands
//!
//! - `interactive` - Prompt-driven login and order entry
//! - `submit` - One-shot login and order submission for scripts

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use order_desk_client::ClientConfig;
use order_desk_client::config::parse_api_url;
use order_desk_core::LineItem;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod repl;
mod view;

use error::CliError;

#[derive(Parser)]
#[command(name = "order-desk")]
#[command(author, version, about = "Order entry against a remote order API")]
struct Cli {
    /// API base URL (overrides `ORDER_DESK_API_URL`)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Show network failures as notifications instead of only logging them
    #[arg(long, global = true)]
    surface_transport_failures: bool,

    /// Allow ending the session with `logout`
    #[arg(long, global = true)]
    allow_logout: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and enter orders at a prompt
    Interactive,
    /// Log in, add items and submit a single order
    Submit {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "ORDER_DESK_PASSWORD", hide_env_values = true)]
        password: String,

        /// Customer name
        #[arg(short = 'n', long)]
        customer_name: String,

        /// Customer email
        #[arg(short = 'm', long)]
        customer_email: String,

        /// Line item, repeatable
        #[arg(long = "item", value_name = "NAME:QTY:PRICE")]
        items: Vec<LineItem>,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the tracing subscriber on stderr so prompt output stays clean.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set; set
/// `ORDER_DESK_LOG_FORMAT=json` for structured output.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "order_desk=info,order_desk_client=info,order_desk_core=warn".into());

    let is_json = std::env::var("ORDER_DESK_LOG_FORMAT").is_ok_and(|v| v == "json");
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn load_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_env()?;

    if let Some(api_url) = &cli.api_url {
        config.api_url = parse_api_url(api_url)?;
    }
    if cli.surface_transport_failures {
        config.compatibility.silent_transport_failures = false;
    }
    if cli.allow_logout {
        config.compatibility.one_way_session = false;
    }

    tracing::debug!(api_url = %config.api_url, compatibility = ?config.compatibility, "Configuration loaded");
    Ok(config)
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => commands::interactive::run(&config).await?,
        Commands::Submit {
            email,
            password,
            customer_name,
            customer_email,
            items,
        } => {
            let request = commands::submit::SubmitRequest {
                email,
                password,
                customer_name,
                customer_email,
                items,
            };
            commands::submit::run(&config, request).await?;
        }
    }
    Ok(())
}

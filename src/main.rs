//! snippet-store entry point.

use std::net::IpAddr;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;

use snippet_store::api::{build_app, serve, ApiDoc, AppState};
use snippet_store::config::Config;
use snippet_store::metrics;
use snippet_store::store::SnippetStore;

/// In-memory code snippet store.
#[derive(Parser, Debug)]
#[command(name = "snippet-store")]
#[command(about = "Serve an in-memory code snippet store over a JSON REST API")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// Listen address (overrides SNIPPETS_HOST).
    #[arg(long)]
    host: Option<IpAddr>,

    /// Listen port (overrides SNIPPETS_PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

impl Args {
    /// Listen overrides for `serve`; subcommand flags win over top-level ones.
    fn listen_overrides(&self) -> (Option<IpAddr>, Option<u16>) {
        match &self.command {
            Some(Command::Serve { host, port }) => (host.or(self.host), port.or(self.port)),
            _ => (self.host, self.port),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Listen address (overrides SNIPPETS_HOST).
        #[arg(long)]
        host: Option<IpAddr>,

        /// Listen port (overrides SNIPPETS_PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Print the OpenAPI document as JSON.
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Configuration errors surface after logging is up
    let config = Config::load();
    let log_json = config.as_ref().map(|c| c.log_json).unwrap_or(false);
    init_logging(args.verbose, log_json);

    let (host, port) = args.listen_overrides();
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Openapi) => cmd_openapi(),
        Some(Command::Serve { .. }) | None => cmd_serve(config?, host, port).await,
    }
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("snippet_store=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: snippet_store::Result<Config>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("SNIPPET STORE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match config {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.socket_addr());
    println!("  Max Body Size: {} bytes", config.max_body_bytes);
    println!("  CORS: {}", if config.cors_permissive { "Permissive" } else { "Disabled" });
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("  Swagger UI: {}", if config.swagger_ui { "Enabled" } else { "Disabled" });
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Print the OpenAPI document.
fn cmd_openapi() -> anyhow::Result<()> {
    let doc = ApiDoc::openapi().to_pretty_json()?;
    println!("{}", doc);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(
    mut config: Config,
    host_override: Option<IpAddr>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    // Override with CLI args if provided
    if let Some(host) = host_override {
        config.host = host;
    }
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let store = SnippetStore::seeded();
    info!("Loaded {} seed snippets", store.len());

    let mut app_state = AppState::new(store);
    if config.metrics_enabled {
        let handle = metrics::init_metrics()?;
        metrics::set_snippets_stored(app_state.store.read().await.len());
        app_state = app_state.with_metrics(handle);
    }

    let router = build_app(app_state, &config);
    serve(&config, router).await?;

    Ok(())
}

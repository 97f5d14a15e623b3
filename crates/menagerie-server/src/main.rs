//! Menagerie: semantic search over a fixed animal catalog.

use std::sync::Arc;

use menagerie_core::MenagerieConfig;
use menagerie_runtime::BootstrapOutcome;
use menagerie_store::SqliteStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn print_usage() {
    println!("Menagerie: semantic search over a fixed animal catalog");
    println!();
    println!("Usage: menagerie [command]");
    println!();
    println!("Commands:");
    println!("  (none)                   Prepare the catalog and start the server");
    println!("  prepare                  Prepare the catalog and exit");
    println!("  search <query>           Run one query and print the results as JSON");
    println!("  help                     Show this help message");
    println!();
    println!("Configuration is read from APP_* environment variables and .env.");
}

async fn build_state() -> anyhow::Result<Arc<AppState>> {
    let config = MenagerieConfig::from_env()?;

    let store = SqliteStore::open(&config.database_path)
        .map_err(|e| anyhow::anyhow!("Failed to open store: {}", e))?;
    let embedder = menagerie_infer::create_embedder(&config.embedding)?;

    let state = Arc::new(AppState::new(config, Arc::new(store), embedder));

    match state.catalog_loader().prepare().await? {
        BootstrapOutcome::AlreadyPrepared => info!("Catalog ready"),
        BootstrapOutcome::Bootstrapped { items } => {
            info!("Catalog bootstrapped with {} items", items)
        }
    }

    Ok(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "prepare" | "--prepare" => {
                build_state().await?;
                return Ok(());
            }
            "search" => {
                if args.len() < 3 {
                    eprintln!("Usage: menagerie search <query>");
                    std::process::exit(1);
                }
                let query = args[2..].join(" ");
                let state = build_state().await?;
                let items = state.orchestrator.search(&query).await?;
                println!("{}", serde_json::to_string_pretty(&items)?);
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'menagerie help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let state = build_state().await?;
    let port = state.config.port;

    let app = routes::build_router(state.clone(), &state.config.static_dir);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Menagerie server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

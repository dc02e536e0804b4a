//! optic_shop - entry point
//!
//! Loads YAML config, initializes logging, connects PostgreSQL, and runs
//! the HTTP gateway until shutdown.

use std::sync::Arc;

use optic_shop::config::AppConfig;
use optic_shop::db::Database;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let mut app_config = AppConfig::load(&env);
    let _log_guard = optic_shop::logging::init_logging(&app_config);

    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    tracing::info!("Starting optic_shop gateway in {} mode", env);
    println!("=== optic_shop: storefront + back office ===");

    let db = match Database::connect(&app_config.postgres_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("❌ FATAL: Failed to connect to PostgreSQL: {}", e);
            eprintln!("   Hint: check postgres_url in config/{}.yaml", env);
            std::process::exit(1);
        }
    };

    if let Err(e) = db.health_check().await {
        eprintln!("❌ FATAL: Database health check failed: {}", e);
        std::process::exit(1);
    }
    println!("✅ PostgreSQL connected");

    optic_shop::gateway::run_server(&app_config, db.clone()).await;

    // Unreached under normal operation (the server runs until killed),
    // but keeps pool teardown explicit if run_server ever returns.
    db.close().await;
}

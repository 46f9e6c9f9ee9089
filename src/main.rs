use appetite_console::{
    client::ApiClient,
    config::Config,
    session::{FileStorage, Session},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to initialise HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let storage = FileStorage::new(config.session_path.clone());
    let session = match Session::load(&storage) {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("Ignoring unreadable session: {}", e);
            Session::anonymous()
        }
    };

    tracing::info!(
        base_url = %client.base_url(),
        environment = ?config.environment,
        authenticated = session.is_authenticated(),
        operator = session.user().map(|user| user.name.as_str()).unwrap_or("-"),
        "Starting Appetite console"
    );

    if client.check_connection().await {
        tracing::info!("Backend reachable at {}", client.base_url());
    } else {
        tracing::error!("Backend not reachable at {}", client.base_url());
    }
}

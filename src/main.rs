use std::net::SocketAddr;
use std::sync::Arc;
use theft_api::app::create_app;
use theft_api::config::{load_config, save_default_config};
use theft_api::constants::CONFIG_PATH;
use theft_api::logging::{init_logging, install_panic_hook};
use theft_api::provider::BikeIndexProvider;
use tracing::info;

#[tokio::main]
async fn main() {
    if std::env::args().any(|arg| arg == "--init-config") {
        match save_default_config(&CONFIG_PATH) {
            Ok(_) => {
                println!("Default configuration saved to {:?}", *CONFIG_PATH);
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("Failed to save default configuration: {}", e);
                std::process::exit(1);
            }
        }
    }

    init_logging();
    install_panic_hook();

    let config = Arc::new(load_config(&CONFIG_PATH));

    let provider = BikeIndexProvider::new(&config.upstream)
        .expect("Failed to build upstream client");

    let app = create_app(Arc::clone(&config), Arc::new(provider));

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .expect("Invalid server address");
    info!("Starting Theft API on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server failed");
}

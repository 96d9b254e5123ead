//! Server startup utilities.

use quill_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
   ____        _ _ _
  / __ \__  __(_) | |
 / / / / / / / / | |
/ /_/ / /_/ / / /| |
\___\_\__,_/_/_/ |_|
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let addr = config.server.addr();
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/v1", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!(
        "Cache:     {}",
        if config.redis.enabled {
            format!("redis ({}s TTL)", config.cache.ttl_secs)
        } else {
            "disabled".to_string()
        }
    );
    info!("{}", separator);
}

//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
   __  __                      _
  / / / /______  ______ ______(_)___  _____
 / / / / ___/ / / / __ `/ ___/ / __ \/ ___/
/ /_/ (__  ) /_/ / /_/ / /  / / /_/ (__  )
\____/____/\__,_/\__,_/_/  /_/\____/____/

                         Rust Edition
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(rest_port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}/usuarios", rest_port);
    info!("Health:    http://0.0.0.0:{}/health", rest_port);
    info!("{}", separator);
}

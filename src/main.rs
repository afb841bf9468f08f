// SPDX-License-Identifier: Apache-2.0
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use contact_relay::config::{MailConfig, ServerConfig};
use contact_relay::logging;
use contact_relay::middleware::Cors;
use contact_relay::routes::{self, MailSetup};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    if let Err(e) = logging::init_from_env("contact_relay") {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    info!("🚪 Starting contact relay...");

    let server_config = ServerConfig::from_env();
    let mail_setup = web::Data::new(MailSetup::from_config(MailConfig::from_env()));

    if !std::path::Path::new(&server_config.static_dir).is_dir() {
        warn!(static_dir = %server_config.static_dir, "Static directory not found; landing page disabled");
    }
    let static_dir = server_config.static_dir.clone();

    info!(bind_addr = %server_config.bind_addr, "Listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::new())
            .wrap(TracingLogger::default())
            .app_data(mail_setup.clone())
            .configure(routes::configure)
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(&server_config.bind_addr)?
    .client_request_timeout(Duration::from_secs(60))
    .run()
    .await
}

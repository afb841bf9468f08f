// SPDX-License-Identifier: Apache-2.0
use std::env;
use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Selects JSON output when set to `json`
pub const LOG_FORMAT_ENV: &str = "CONTACT_RELAY_LOG_FORMAT";

fn env_filter(name: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info,actix_web=info", name)))
}

/// Install a Bunyan (JSON) subscriber writing to `sink`
pub fn init_tracing<Sink>(name: &str, sink: Sink) -> Result<(), SetGlobalDefaultError>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // Already set when called twice, e.g. from tests
    let _ = LogTracer::init();

    let formatting_layer = BunyanFormattingLayer::new(name.into(), sink);

    let subscriber = Registry::default()
        .with(env_filter(name))
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber)?;
    tracing::info!("Tracing initialized with Bunyan formatter");
    Ok(())
}

/// Install a human-readable subscriber for development
pub fn init_console_tracing(name: &str) -> Result<(), SetGlobalDefaultError> {
    let _ = LogTracer::init();

    let subscriber = tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(env_filter(name))
        .finish();

    set_global_default(subscriber)?;
    tracing::info!("Console tracing initialized");
    Ok(())
}

/// Pick the output format from the environment
pub fn init_from_env(name: &str) -> Result<(), SetGlobalDefaultError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(format) if format.eq_ignore_ascii_case("json") => init_tracing(name, std::io::stdout),
        _ => init_console_tracing(name),
    }
}

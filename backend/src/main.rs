//! Gateway entry-point: loads settings, wires the Moodle adapter and serves
//! the HTTP surface.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use lms_gateway::inbound::http::health::HealthState;
use lms_gateway::inbound::http::state::HttpState;
use lms_gateway::outbound::moodle::MoodleHttpClient;
use lms_gateway::outbound::observer::TracingRequestObserver;
use lms_gateway::settings::GatewaySettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = GatewaySettings::load_from_iter(std::env::args_os())
        .wrap_err("failed to load gateway settings")?;
    let config = settings.validate().wrap_err("invalid gateway settings")?;
    info!(?config, "gateway configured");

    let client = MoodleHttpClient::new(
        config.endpoint.clone(),
        config.token.clone(),
        config.request_timeout,
        &config.user_agent,
    )
    .wrap_err("failed to build Moodle client")?;
    let http_state =
        HttpState::new(Arc::new(client)).with_observer(Arc::new(TracingRequestObserver));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(config.bind_addr, http_state),
    )
    .wrap_err_with(|| format!("failed to bind {}", config.bind_addr))?;

    server.await.wrap_err("server terminated abnormally")
}

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod database;
pub mod dependencies;
pub mod domain;
pub mod routes;
pub mod services;

use std::{net::SocketAddr, path::Path, str::FromStr};

use axum::{
	http::{HeaderValue, Method},
	Router,
};
use tower_http::{
	cors::{AllowOrigin, CorsLayer},
	trace::TraceLayer,
};

use crate::{bootstrap::Bootstrap, config::Config, routes::create_routes, services::response::ServiceError};

/// Full application router with CORS and request tracing.
pub async fn app(config: &Config) -> Result<Router, ServiceError> {
	let stores = Bootstrap::stores(config).await?;
	let state = Bootstrap::app_state(config, stores);

	let origins = allowed_origins(&config.allow_origins)?;

	Ok(create_routes(state, Path::new(&config.upload_dir), config.max_upload_bytes)
		.layer(
			CorsLayer::new()
				.allow_origin(origins)
				.allow_methods([Method::GET, Method::POST]),
		)
		.layer(TraceLayer::new_for_http()))
}

/// A lone `*` allows any origin. Otherwise a comma-separated list of exact origins,
/// in which `*` is refused.
fn allowed_origins(value: &str) -> Result<AllowOrigin, ServiceError> {
	let invalid = || ServiceError::ConfigError("ALLOW_ORIGINS".to_string());
	if value.trim() == "*" {
		return Ok(AllowOrigin::any());
	}

	let origins = value
		.split(',')
		.map(str::trim)
		.map(|origin| match origin {
			"*" => Err(invalid()),
			origin => origin.parse::<HeaderValue>().map_err(|_| invalid()),
		})
		.collect::<Result<Vec<_>, _>>()?;
	Ok(AllowOrigin::list(origins))
}

pub async fn run(config: &Config) -> Result<(), ServiceError> {
	let app = app(config).await?;

	let addr = SocketAddr::from_str(&config.server_ip_port).map_err(|_| ServiceError::ConfigError("SERVER_IP_PORT".to_string()))?;
	tracing::info!("listening on {}", addr);
	axum::Server::bind(&addr)
		.serve(app.into_make_service())
		.await
		.map_err(|err| ServiceError::HttpError(Box::new(err)))
}

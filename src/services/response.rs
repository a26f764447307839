use std::fmt::Display;

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
};

pub type AnyError = dyn std::error::Error + Send + Sync;

#[derive(Debug)]
pub enum ServiceError {
	/// Caller supplied something the service refuses to store.
	ValidationError(String),
	BadRequest,
	DatabaseError(Box<AnyError>),
	StorageError(Box<AnyError>),
	HttpError(Box<AnyError>),
	ConfigError(String),
}

impl Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ServiceError::ValidationError(reason) => write!(f, "{}", reason),
			ServiceError::BadRequest => write!(f, "BadRequest"),
			// Driver and io details stay in the logs.
			ServiceError::DatabaseError(_) => write!(f, "DatabaseError"),
			ServiceError::StorageError(_) => write!(f, "StorageError"),
			ServiceError::HttpError(_) => write!(f, "HttpError"),
			ServiceError::ConfigError(key) => write!(f, "ConfigError: {}", key),
		}
	}
}

impl std::error::Error for ServiceError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ServiceError::DatabaseError(err) | ServiceError::StorageError(err) | ServiceError::HttpError(err) => Some(err.as_ref()),
			_ => None,
		}
	}
}

impl From<sqlx::Error> for ServiceError {
	fn from(value: sqlx::Error) -> Self {
		tracing::error!("database error: {:?}", value);
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl From<sqlx::migrate::MigrateError> for ServiceError {
	fn from(value: sqlx::migrate::MigrateError) -> Self {
		tracing::error!("migration error: {:?}", value);
		ServiceError::DatabaseError(Box::new(value))
	}
}

impl From<std::io::Error> for ServiceError {
	fn from(value: std::io::Error) -> Self {
		tracing::error!("storage error: {:?}", value);
		ServiceError::StorageError(Box::new(value))
	}
}

impl ServiceError {
	pub fn status_code(&self) -> StatusCode {
		match self {
			ServiceError::ValidationError(_) | ServiceError::BadRequest => StatusCode::BAD_REQUEST,
			ServiceError::DatabaseError(_)
			| ServiceError::StorageError(_)
			| ServiceError::HttpError(_)
			| ServiceError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for ServiceError {
	fn into_response(self) -> Response {
		(self.status_code(), self.to_string()).into_response()
	}
}

use sqlx::postgres::PgPool;

use crate::{dependencies::connection_pool, services::response::ServiceError};

/// Shared handle on the Postgres pool. Every repository call borrows a
/// connection for exactly one statement; nothing here opens a transaction.
pub struct DatabaseExecutor {
	pool: &'static PgPool,
}

impl DatabaseExecutor {
	pub async fn new(url: &str) -> Result<Self, ServiceError> {
		Ok(Self {
			pool: connection_pool(url).await?,
		})
	}

	/// Executor on a dedicated pool, so each test runtime owns its connections.
	#[cfg(test)]
	pub(crate) async fn connect_for_test(url: &str) -> Result<Self, ServiceError> {
		let pool = sqlx::postgres::PgPoolOptions::new().max_connections(2).connect(url).await?;
		Ok(Self {
			pool: Box::leak(Box::new(pool)),
		})
	}

	pub fn connection(&self) -> &PgPool {
		self.pool
	}

	/// Creates the `messages`, `posts` and `users` tables when missing.
	pub async fn migrate(&self) -> Result<(), ServiceError> {
		sqlx::migrate!("./migrations").run(self.pool).await?;
		tracing::info!("database migrations applied");
		Ok(())
	}
}

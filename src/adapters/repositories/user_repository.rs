use async_trait::async_trait;

use super::{Repository, UserDirectory};
use crate::{domain::user::User, services::response::ServiceError};

#[async_trait]
impl UserDirectory for Repository<User> {
	async fn find_by_email(
		&self,
		email: &str,
	) -> Result<Option<User>, ServiceError> {
		let user = sqlx::query_as::<_, User>("SELECT email FROM users WHERE email = $1")
			.bind(email)
			.fetch_optional(self.executor.connection())
			.await?;
		Ok(user)
	}
}

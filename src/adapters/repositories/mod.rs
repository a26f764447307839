pub(crate) mod memory;
pub(crate) mod message_repository;
pub(crate) mod post_repository;
pub(crate) mod user_repository;

use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

pub use memory::MemoryStore;

use crate::{
	database::DatabaseExecutor,
	domain::{
		message::{Message, SendMessage},
		post::{entity::Post, NewPost},
		user::User,
	},
	services::response::ServiceError,
};

#[async_trait]
pub trait MessageStore: Send + Sync {
	/// Stores the message and returns it with its assigned id.
	async fn save(
		&self,
		message: SendMessage,
	) -> Result<Message, ServiceError>;

	/// Messages sent from `sender` to `receiver` only, in no particular order.
	async fn find_by_sender_and_receiver(
		&self,
		sender: &str,
		receiver: &str,
	) -> Result<Vec<Message>, ServiceError>;

	/// Messages in either direction between the two users, in no particular order.
	async fn find_conversation(
		&self,
		user1: &str,
		user2: &str,
	) -> Result<Vec<Message>, ServiceError>;

	/// Same as `find_by_sender_and_receiver` but sorted by the raw timestamp string.
	async fn find_by_sender_and_receiver_ordered(
		&self,
		sender: &str,
		receiver: &str,
	) -> Result<Vec<Message>, ServiceError>;
}

#[async_trait]
pub trait PostStore: Send + Sync {
	async fn save(
		&self,
		post: NewPost,
	) -> Result<Post, ServiceError>;

	/// Case-insensitive partial match on the community id.
	async fn find_by_community_id(
		&self,
		community_id: &str,
	) -> Result<Vec<Post>, ServiceError>;

	async fn find_by_visibility(
		&self,
		visibility: &str,
	) -> Result<Vec<Post>, ServiceError>;

	/// Newest first, at most `limit` posts.
	async fn find_recent_by_author(
		&self,
		user_email: &str,
		limit: i64,
	) -> Result<Vec<Post>, ServiceError>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
	async fn find_by_email(
		&self,
		email: &str,
	) -> Result<Option<User>, ServiceError>;
}

/// Postgres-backed store for one record kind.
pub struct Repository<A> {
	pub executor: Arc<DatabaseExecutor>,
	pub _phantom: PhantomData<A>,
}

impl<A> Repository<A> {
	pub fn new(executor: Arc<DatabaseExecutor>) -> Self {
		Self {
			executor,
			_phantom: Default::default(),
		}
	}
}

#[cfg(test)]
pub(crate) mod postgres {
	use std::sync::Arc;

	use super::Repository;
	use crate::database::DatabaseExecutor;

	/// Repository on a migrated database named by `DATABASE_URL`, or `None` when unset.
	pub(crate) async fn repository<A>() -> Option<Repository<A>> {
		let url = std::env::var("DATABASE_URL").ok().filter(|url| !url.is_empty())?;
		let executor = DatabaseExecutor::connect_for_test(&url).await.unwrap();
		executor.migrate().await.unwrap();
		Some(Repository::new(Arc::new(executor)))
	}

	/// Suffix keeping rows of one test run apart from earlier runs.
	pub(crate) fn unique(prefix: &str) -> String {
		format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
	}
}

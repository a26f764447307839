use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{MessageStore, PostStore, UserDirectory};
use crate::{
	domain::{
		message::{Message, SendMessage},
		post::{entity::Post, NewPost},
		user::User,
	},
	services::response::ServiceError,
};

/// Process-local store with the same query semantics as the Postgres
/// repositories. Used when no database is configured, and in tests.
#[derive(Default)]
pub struct MemoryStore {
	messages: RwLock<Vec<Message>>,
	posts: RwLock<Vec<Post>>,
	users: RwLock<HashSet<String>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Default::default()
	}

	pub async fn register_user(
		&self,
		email: impl Into<String>,
	) {
		self.users.write().await.insert(email.into());
	}
}

#[async_trait]
impl MessageStore for MemoryStore {
	async fn save(
		&self,
		message: SendMessage,
	) -> Result<Message, ServiceError> {
		let message = message.into_message(Uuid::new_v4());
		self.messages.write().await.push(message.clone());
		Ok(message)
	}

	async fn find_by_sender_and_receiver(
		&self,
		sender: &str,
		receiver: &str,
	) -> Result<Vec<Message>, ServiceError> {
		Ok(self
			.messages
			.read()
			.await
			.iter()
			.filter(|m| m.sender_email == sender && m.receiver_email == receiver)
			.cloned()
			.collect())
	}

	async fn find_conversation(
		&self,
		user1: &str,
		user2: &str,
	) -> Result<Vec<Message>, ServiceError> {
		Ok(self
			.messages
			.read()
			.await
			.iter()
			.filter(|m| {
				(m.sender_email == user1 && m.receiver_email == user2) || (m.sender_email == user2 && m.receiver_email == user1)
			})
			.cloned()
			.collect())
	}

	async fn find_by_sender_and_receiver_ordered(
		&self,
		sender: &str,
		receiver: &str,
	) -> Result<Vec<Message>, ServiceError> {
		let mut messages = self.find_by_sender_and_receiver(sender, receiver).await?;
		messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
		Ok(messages)
	}
}

#[async_trait]
impl PostStore for MemoryStore {
	async fn save(
		&self,
		post: NewPost,
	) -> Result<Post, ServiceError> {
		let post = post.into_post(Uuid::new_v4());
		self.posts.write().await.push(post.clone());
		Ok(post)
	}

	async fn find_by_community_id(
		&self,
		community_id: &str,
	) -> Result<Vec<Post>, ServiceError> {
		let needle = community_id.to_lowercase();
		Ok(self
			.posts
			.read()
			.await
			.iter()
			.filter(|p| p.community_id.to_lowercase().contains(&needle))
			.cloned()
			.collect())
	}

	async fn find_by_visibility(
		&self,
		visibility: &str,
	) -> Result<Vec<Post>, ServiceError> {
		Ok(self.posts.read().await.iter().filter(|p| p.visibility == visibility).cloned().collect())
	}

	async fn find_recent_by_author(
		&self,
		user_email: &str,
		limit: i64,
	) -> Result<Vec<Post>, ServiceError> {
		let mut posts: Vec<Post> = self
			.posts
			.read()
			.await
			.iter()
			.rev()
			.filter(|p| p.user_email == user_email)
			.cloned()
			.collect();
		posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
		posts.truncate(usize::try_from(limit).unwrap_or(0));
		Ok(posts)
	}
}

#[async_trait]
impl UserDirectory for MemoryStore {
	async fn find_by_email(
		&self,
		email: &str,
	) -> Result<Option<User>, ServiceError> {
		Ok(self.users.read().await.get(email).map(|email| User { email: email.clone() }))
	}
}

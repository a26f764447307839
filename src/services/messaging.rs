use std::sync::Arc;

use crate::{
	adapters::repositories::{MessageStore, UserDirectory},
	domain::message::{Message, SendMessage},
};

use super::response::ServiceError;

#[derive(Clone)]
pub struct MessagingService {
	messages: Arc<dyn MessageStore>,
	users: Arc<dyn UserDirectory>,
}

impl MessagingService {
	pub fn new(
		messages: Arc<dyn MessageStore>,
		users: Arc<dyn UserDirectory>,
	) -> Self {
		Self { messages, users }
	}

	pub async fn send_message(
		&self,
		message: SendMessage,
	) -> Result<Message, ServiceError> {
		message.validate()?;
		let message = self.messages.save(message).await?;
		tracing::info!(id = %message.id, sender = %message.sender_email, receiver = %message.receiver_email, "message stored");
		Ok(message)
	}

	/// One direction only: a reply from `receiver` to `sender` is not included.
	pub async fn get_messages(
		&self,
		sender_email: &str,
		receiver_email: &str,
	) -> Result<Vec<Message>, ServiceError> {
		self.messages.find_by_sender_and_receiver(sender_email, receiver_email).await
	}

	/// Both directions between the two users, oldest first by timestamp string.
	pub async fn get_conversation(
		&self,
		user1: &str,
		user2: &str,
	) -> Result<Vec<Message>, ServiceError> {
		let mut conversation = self.messages.find_by_sender_and_receiver_ordered(user1, user2).await?;
		if user1 != user2 {
			conversation.extend(self.messages.find_by_sender_and_receiver_ordered(user2, user1).await?);
		}
		// Stable: on equal timestamps user1's messages stay first.
		conversation.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
		Ok(conversation)
	}

	pub async fn user_exists(
		&self,
		email: &str,
	) -> Result<bool, ServiceError> {
		Ok(self.users.find_by_email(email).await?.is_some())
	}

	pub async fn users_exist(
		&self,
		email1: &str,
		email2: &str,
	) -> Result<bool, ServiceError> {
		Ok(self.user_exists(email1).await? && self.user_exists(email2).await?)
	}
}

#[cfg(test)]
mod test {
	use std::sync::Arc;

	use super::MessagingService;
	use crate::{
		adapters::repositories::{MemoryStore, MessageStore},
		domain::message::SendMessage,
		services::response::ServiceError,
	};

	fn message(
		sender: &str,
		receiver: &str,
		content: &str,
		timestamp: &str,
	) -> SendMessage {
		SendMessage {
			sender_email: sender.into(),
			receiver_email: receiver.into(),
			content: content.into(),
			timestamp: timestamp.into(),
			..Default::default()
		}
	}

	fn service() -> (Arc<MemoryStore>, MessagingService) {
		let store = Arc::new(MemoryStore::new());
		(store.clone(), MessagingService::new(store.clone(), store))
	}

	#[tokio::test]
	async fn test_get_messages_is_directional() {
		'_given: {
			let (_, service) = service();
			service
				.send_message(message("a@x.com", "b@x.com", "hi", "2024-01-01T00:00:00"))
				.await
				.unwrap();

			'_when: {
				let forward = service.get_messages("a@x.com", "b@x.com").await.unwrap();
				let backward = service.get_messages("b@x.com", "a@x.com").await.unwrap();

				assert_eq!(forward.len(), 1);
				assert_eq!(forward[0].content, "hi");
				assert!(backward.is_empty());
			}
		}
	}

	#[tokio::test]
	async fn test_reply_does_not_show_up_in_original_direction() {
		let (_, service) = service();
		service.send_message(message("a@x.com", "b@x.com", "ping", "1")).await.unwrap();
		service.send_message(message("b@x.com", "a@x.com", "pong", "2")).await.unwrap();

		let forward = service.get_messages("a@x.com", "b@x.com").await.unwrap();
		assert!(forward.iter().all(|m| m.sender_email == "a@x.com"));
	}

	#[tokio::test]
	async fn test_conversation_is_symmetric_and_ordered() {
		'_given: {
			let (_, service) = service();
			for m in [
				message("b@x.com", "a@x.com", "second", "2024-01-01T10:00:00"),
				message("a@x.com", "b@x.com", "third", "2024-01-01T11:00:00"),
				message("a@x.com", "b@x.com", "first", "2024-01-01T09:00:00"),
				message("a@x.com", "c@x.com", "elsewhere", "2024-01-01T09:30:00"),
			] {
				service.send_message(m).await.unwrap();
			}

			'_when: {
				let ab = service.get_conversation("a@x.com", "b@x.com").await.unwrap();
				let ba = service.get_conversation("b@x.com", "a@x.com").await.unwrap();

				let contents: Vec<_> = ab.iter().map(|m| m.content.as_str()).collect();
				assert_eq!(contents, vec!["first", "second", "third"]);
				assert_eq!(ab.len(), ba.len());
			}
		}
	}

	#[tokio::test]
	async fn test_conversation_matches_symmetric_lookup() {
		let (store, service) = service();
		for (i, (s, r)) in [("a@x.com", "b@x.com"), ("b@x.com", "a@x.com"), ("b@x.com", "a@x.com")].into_iter().enumerate() {
			service.send_message(message(s, r, "x", &i.to_string())).await.unwrap();
		}

		let mut expected: Vec<_> = store.find_conversation("a@x.com", "b@x.com").await.unwrap().into_iter().map(|m| m.id).collect();
		let mut actual: Vec<_> = service.get_conversation("a@x.com", "b@x.com").await.unwrap().into_iter().map(|m| m.id).collect();
		expected.sort();
		actual.sort();
		assert_eq!(expected, actual);
	}

	#[tokio::test]
	async fn test_conversation_orders_timestamps_as_strings() {
		let (_, service) = service();
		service.send_message(message("a@x.com", "b@x.com", "nine", "9")).await.unwrap();
		service.send_message(message("b@x.com", "a@x.com", "ten", "10")).await.unwrap();

		let contents: Vec<_> = service
			.get_conversation("a@x.com", "b@x.com")
			.await
			.unwrap()
			.into_iter()
			.map(|m| m.content)
			.collect();
		assert_eq!(contents, vec!["ten", "nine"]);
	}

	#[tokio::test]
	async fn test_conversation_with_self_is_not_duplicated() {
		let (_, service) = service();
		service.send_message(message("a@x.com", "a@x.com", "note", "1")).await.unwrap();

		assert_eq!(service.get_conversation("a@x.com", "a@x.com").await.unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_send_message_rejects_empty_participants() {
		let (store, service) = service();
		let result = service.send_message(message("", "b@x.com", "hi", "1")).await;

		assert!(matches!(result, Err(ServiceError::ValidationError(_))));
		assert!(store.find_by_sender_and_receiver("", "b@x.com").await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_users_exist_requires_both() {
		let (store, service) = service();
		store.register_user("a@x.com").await;

		assert!(service.user_exists("a@x.com").await.unwrap());
		assert!(!service.users_exist("a@x.com", "b@x.com").await.unwrap());

		store.register_user("b@x.com").await;
		assert!(service.users_exist("a@x.com", "b@x.com").await.unwrap());
	}
}

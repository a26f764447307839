use async_trait::async_trait;
use uuid::Uuid;

use super::{MessageStore, Repository};
use crate::{
	domain::message::{Message, SendMessage},
	services::response::ServiceError,
};

const MESSAGE_COLUMNS: &str = r#"id, sender_email, receiver_email, content, "timestamp", reply_to_email, reply_to_content"#;

#[async_trait]
impl MessageStore for Repository<Message> {
	async fn save(
		&self,
		message: SendMessage,
	) -> Result<Message, ServiceError> {
		let message = message.into_message(Uuid::new_v4());
		sqlx::query(
			r#"INSERT INTO messages (id, sender_email, receiver_email, content, "timestamp", reply_to_email, reply_to_content)
			VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
		)
		.bind(message.id)
		.bind(&message.sender_email)
		.bind(&message.receiver_email)
		.bind(&message.content)
		.bind(&message.timestamp)
		.bind(&message.reply_to_email)
		.bind(&message.reply_to_content)
		.execute(self.executor.connection())
		.await?;

		Ok(message)
	}

	async fn find_by_sender_and_receiver(
		&self,
		sender: &str,
		receiver: &str,
	) -> Result<Vec<Message>, ServiceError> {
		let messages = sqlx::query_as::<_, Message>(&format!(
			"SELECT {MESSAGE_COLUMNS} FROM messages WHERE sender_email = $1 AND receiver_email = $2"
		))
		.bind(sender)
		.bind(receiver)
		.fetch_all(self.executor.connection())
		.await?;
		Ok(messages)
	}

	async fn find_conversation(
		&self,
		user1: &str,
		user2: &str,
	) -> Result<Vec<Message>, ServiceError> {
		let messages = sqlx::query_as::<_, Message>(&format!(
			"SELECT {MESSAGE_COLUMNS} FROM messages
			WHERE (sender_email = $1 AND receiver_email = $2) OR (sender_email = $2 AND receiver_email = $1)"
		))
		.bind(user1)
		.bind(user2)
		.fetch_all(self.executor.connection())
		.await?;
		Ok(messages)
	}

	async fn find_by_sender_and_receiver_ordered(
		&self,
		sender: &str,
		receiver: &str,
	) -> Result<Vec<Message>, ServiceError> {
		// "C" collation keeps the ordering bytewise, independent of the database locale.
		let messages = sqlx::query_as::<_, Message>(&format!(
			r#"SELECT {MESSAGE_COLUMNS} FROM messages
			WHERE sender_email = $1 AND receiver_email = $2
			ORDER BY "timestamp" COLLATE "C" ASC"#
		))
		.bind(sender)
		.bind(receiver)
		.fetch_all(self.executor.connection())
		.await?;
		Ok(messages)
	}
}

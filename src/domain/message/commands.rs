use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Message;
use crate::services::response::ServiceError;

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessage {
	pub sender_email: String,
	pub receiver_email: String,
	#[serde(default)]
	pub content: String,
	#[serde(default)]
	pub timestamp: String,
	#[serde(default)]
	pub reply_to_email: Option<String>,
	#[serde(default)]
	pub reply_to_content: Option<String>,
}

impl SendMessage {
	pub fn validate(&self) -> Result<(), ServiceError> {
		if self.sender_email.trim().is_empty() {
			return Err(ServiceError::ValidationError("senderEmail must not be empty".into()));
		}
		if self.receiver_email.trim().is_empty() {
			return Err(ServiceError::ValidationError("receiverEmail must not be empty".into()));
		}
		Ok(())
	}

	pub(crate) fn into_message(
		self,
		id: Uuid,
	) -> Message {
		Message {
			id,
			sender_email: self.sender_email,
			receiver_email: self.receiver_email,
			content: self.content,
			timestamp: self.timestamp,
			reply_to_email: self.reply_to_email,
			reply_to_content: self.reply_to_content,
		}
	}
}

#[test]
fn test_send_message_wire_format() {
	let cmd: SendMessage = serde_json::from_str(
		r#"{"senderEmail":"a@x.com","receiverEmail":"b@x.com","content":"hi","timestamp":"2024-01-01T00:00:00","replyToEmail":"b@x.com","replyToContent":"hey"}"#,
	)
	.unwrap();

	assert_eq!(cmd.sender_email, "a@x.com");
	assert_eq!(cmd.reply_to_content.as_deref(), Some("hey"));
	assert!(cmd.validate().is_ok());
}

#[test]
fn test_blank_participants_are_rejected() {
	let cmd = SendMessage {
		sender_email: "a@x.com".into(),
		receiver_email: "  ".into(),
		..Default::default()
	};
	assert!(matches!(cmd.validate(), Err(ServiceError::ValidationError(_))));
}

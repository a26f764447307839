use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A direct message between two users. Immutable once stored.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
	pub id: Uuid,
	pub sender_email: String,
	pub receiver_email: String,
	pub content: String,

	/// Supplied by the sender and compared as a plain string, so callers need a
	/// sortable format such as ISO-8601.
	pub timestamp: String,

	/// Sender of the quoted message, copied by value.
	pub reply_to_email: Option<String>,
	pub reply_to_content: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visibility value that puts a post in the public feed. Compared exactly.
pub const PUBLIC_VISIBILITY: &str = "Public";

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	pub id: Uuid,
	pub content: String,
	#[serde(rename = "type")]
	#[sqlx(rename = "type")]
	pub post_type: String,
	pub community_id: String,
	pub user_email: String,
	pub visibility: String,

	/// Generated file name inside the upload directory, never a path.
	pub image_url: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// A post as handed to the store, before an id is assigned.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct NewPost {
	pub content: String,
	pub post_type: String,
	pub community_id: String,
	pub user_email: String,
	pub visibility: String,
	pub image_url: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

impl NewPost {
	pub(crate) fn into_post(
		self,
		id: Uuid,
	) -> Post {
		Post {
			id,
			content: self.content,
			post_type: self.post_type,
			community_id: self.community_id,
			user_email: self.user_email,
			visibility: self.visibility,
			image_url: self.image_url,
			created_at: self.created_at,
			updated_at: self.updated_at,
		}
	}
}

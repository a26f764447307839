use serde::{Deserialize, Serialize};
use uuid::Uuid;

use self::entity::Post;
pub mod commands;
pub mod entity;

pub use commands::{CreatePost, ImageUpload};
pub use entity::{NewPost, PUBLIC_VISIBILITY};

/// What a client sees after creating a post. Visibility and timestamps are
/// deliberately left out.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
	pub id: Uuid,
	pub content: String,
	#[serde(rename = "type")]
	pub post_type: String,
	pub community_id: String,
	pub user_email: String,
	pub image_url: Option<String>,
}

impl From<Post> for PostResponse {
	fn from(value: Post) -> Self {
		Self {
			id: value.id,
			content: value.content,
			post_type: value.post_type,
			community_id: value.community_id,
			user_email: value.user_email,
			image_url: value.image_url,
		}
	}
}

#[test]
fn test_response_projection_omits_visibility_and_timestamps() {
	let now = chrono::Utc::now();
	let post = NewPost {
		content: "hello".into(),
		post_type: "Question".into(),
		community_id: "TeamA".into(),
		user_email: "a@x.com".into(),
		visibility: "Private".into(),
		image_url: None,
		created_at: now,
		updated_at: now,
	}
	.into_post(Uuid::new_v4());

	let json = serde_json::to_value(PostResponse::from(post)).unwrap();
	let object = json.as_object().unwrap();

	assert_eq!(object["type"], "Question");
	assert_eq!(object["communityId"], "TeamA");
	assert!(object["imageUrl"].is_null());
	for hidden in ["visibility", "createdAt", "updatedAt"] {
		assert!(!object.contains_key(hidden), "{} leaked", hidden);
	}
}

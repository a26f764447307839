use std::sync::Arc;

use chrono::Utc;

use crate::{
	adapters::{repositories::PostStore, uploads::ImageStore},
	domain::post::{entity::Post, CreatePost, NewPost, PostResponse, PUBLIC_VISIBILITY},
};

use super::response::ServiceError;

#[derive(Clone)]
pub struct PostingService {
	posts: Arc<dyn PostStore>,
	images: Arc<dyn ImageStore>,
}

impl PostingService {
	pub fn new(
		posts: Arc<dyn PostStore>,
		images: Arc<dyn ImageStore>,
	) -> Self {
		Self { posts, images }
	}

	pub async fn create_post(
		&self,
		cmd: CreatePost,
	) -> Result<PostResponse, ServiceError> {
		let now = Utc::now();

		let image_url = match cmd.image.as_ref().filter(|image| !image.is_empty()) {
			Some(image) => {
				let file_name = image.generate_file_name()?;
				self.images.write(&file_name, &image.bytes).await?;
				Some(file_name)
			}
			None => None,
		};

		let post = self
			.posts
			.save(NewPost {
				content: cmd.content,
				post_type: cmd.post_type,
				community_id: cmd.community_id,
				user_email: cmd.user_email,
				visibility: cmd.visibility,
				image_url,
				created_at: now,
				updated_at: now,
			})
			.await?;

		tracing::info!(id = %post.id, community = %post.community_id, image = ?post.image_url, "post created");
		Ok(post.into())
	}

	pub async fn find_by_community_id(
		&self,
		community_id: &str,
	) -> Result<Vec<Post>, ServiceError> {
		self.posts.find_by_community_id(community_id).await
	}

	pub async fn get_all_public_posts(&self) -> Result<Vec<Post>, ServiceError> {
		self.posts.find_by_visibility(PUBLIC_VISIBILITY).await
	}

	pub async fn get_recent_posts(
		&self,
		user_email: &str,
		limit: i64,
	) -> Result<Vec<Post>, ServiceError> {
		self.posts.find_recent_by_author(user_email, limit).await
	}
}

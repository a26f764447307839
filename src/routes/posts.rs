use axum::{
	extract::{multipart::Field, Multipart, Path, Query, State},
	http::StatusCode,
	routing::{get, post},
	Json, Router,
};
use serde::Deserialize;

use super::AppState;
use crate::{
	domain::post::{entity::Post, CreatePost, ImageUpload, PostResponse},
	services::response::ServiceError,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPostsQuery {
	user_email: String,
	limit: Option<i64>,
}

async fn read_text(field: Field<'_>) -> Result<String, ServiceError> {
	field.text().await.map_err(|err| {
		tracing::warn!("unreadable multipart field: {}", err);
		ServiceError::BadRequest
	})
}

async fn create_post(
	State(state): State<AppState>,
	mut multipart: Multipart,
) -> Result<(StatusCode, Json<PostResponse>), ServiceError> {
	let mut content = None;
	let mut post_type = None;
	let mut community_id = None;
	let mut user_email = None;
	let mut visibility = None;
	let mut image = None;

	while let Some(field) = multipart.next_field().await.map_err(|err| {
		tracing::warn!("malformed multipart body: {}", err);
		ServiceError::BadRequest
	})? {
		let name = field.name().map(str::to_string);
		match name.as_deref() {
			Some("content") => content = Some(read_text(field).await?),
			Some("type") => post_type = Some(read_text(field).await?),
			Some("communityId") => community_id = Some(read_text(field).await?),
			Some("userEmail") => user_email = Some(read_text(field).await?),
			Some("visibility") => visibility = Some(read_text(field).await?),
			Some("image") => {
				let file_name = field.file_name().map(str::to_string);
				let bytes = field.bytes().await.map_err(|err| {
					tracing::warn!("unreadable image upload: {}", err);
					ServiceError::BadRequest
				})?;
				image = Some(ImageUpload {
					file_name,
					bytes: bytes.to_vec(),
				});
			}
			_ => continue,
		}
	}

	let required = |value: Option<String>, name: &str| value.ok_or_else(|| ServiceError::ValidationError(format!("missing field `{}`", name)));
	let cmd = CreatePost {
		content: required(content, "content")?,
		post_type: required(post_type, "type")?,
		community_id: required(community_id, "communityId")?,
		user_email: required(user_email, "userEmail")?,
		visibility: required(visibility, "visibility")?,
		image,
	};

	let response = state.posting.create_post(cmd).await?;
	Ok((StatusCode::CREATED, Json(response)))
}

async fn get_public_posts(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ServiceError> {
	Ok(Json(state.posting.get_all_public_posts().await?))
}

async fn get_community_posts(
	State(state): State<AppState>,
	Path(community_id): Path<String>,
) -> Result<Json<Vec<Post>>, ServiceError> {
	Ok(Json(state.posting.find_by_community_id(&community_id).await?))
}

async fn get_recent_posts(
	State(state): State<AppState>,
	Query(query): Query<RecentPostsQuery>,
) -> Result<Json<Vec<Post>>, ServiceError> {
	let limit = query.limit.unwrap_or(state.recent_posts_limit);
	Ok(Json(state.posting.get_recent_posts(&query.user_email, limit).await?))
}

pub fn post_routers() -> Router<AppState> {
	Router::new()
		.route("/", post(create_post))
		.route("/public", get(get_public_posts))
		.route("/community/:community_id", get(get_community_posts))
		.route("/recent", get(get_recent_posts))
}

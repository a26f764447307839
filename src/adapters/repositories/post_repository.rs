use async_trait::async_trait;
use uuid::Uuid;

use super::{PostStore, Repository};
use crate::{
	domain::post::{entity::Post, NewPost},
	services::response::ServiceError,
};

const POST_COLUMNS: &str = r#"id, content, "type", community_id, user_email, visibility, image_url, created_at, updated_at"#;

#[async_trait]
impl PostStore for Repository<Post> {
	async fn save(
		&self,
		post: NewPost,
	) -> Result<Post, ServiceError> {
		let post = post.into_post(Uuid::new_v4());
		sqlx::query(
			r#"INSERT INTO posts (id, content, "type", community_id, user_email, visibility, image_url, created_at, updated_at)
			VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"#,
		)
		.bind(post.id)
		.bind(&post.content)
		.bind(&post.post_type)
		.bind(&post.community_id)
		.bind(&post.user_email)
		.bind(&post.visibility)
		.bind(&post.image_url)
		.bind(post.created_at)
		.bind(post.updated_at)
		.execute(self.executor.connection())
		.await?;

		Ok(post)
	}

	async fn find_by_community_id(
		&self,
		community_id: &str,
	) -> Result<Vec<Post>, ServiceError> {
		// The pattern is matched literally; strpos avoids LIKE/regex metacharacters.
		let posts = sqlx::query_as::<_, Post>(&format!(
			"SELECT {POST_COLUMNS} FROM posts WHERE strpos(lower(community_id), lower($1)) > 0"
		))
		.bind(community_id)
		.fetch_all(self.executor.connection())
		.await?;
		Ok(posts)
	}

	async fn find_by_visibility(
		&self,
		visibility: &str,
	) -> Result<Vec<Post>, ServiceError> {
		let posts = sqlx::query_as::<_, Post>(&format!("SELECT {POST_COLUMNS} FROM posts WHERE visibility = $1"))
			.bind(visibility)
			.fetch_all(self.executor.connection())
			.await?;
		Ok(posts)
	}

	async fn find_recent_by_author(
		&self,
		user_email: &str,
		limit: i64,
	) -> Result<Vec<Post>, ServiceError> {
		let posts = sqlx::query_as::<_, Post>(&format!(
			"SELECT {POST_COLUMNS} FROM posts WHERE user_email = $1 ORDER BY created_at DESC LIMIT $2"
		))
		.bind(user_email)
		.bind(limit.max(0))
		.fetch_all(self.executor.connection())
		.await?;
		Ok(posts)
	}
}

#[cfg(test)]
mod test {
	use chrono::{Duration, DurationRound, Utc};

	use crate::{
		adapters::repositories::{
			postgres::{repository, unique},
			PostStore,
		},
		domain::post::{entity::Post, NewPost},
	};

	fn post(
		user_email: &str,
		community_id: &str,
		visibility: &str,
		minutes_ago: i64,
	) -> NewPost {
		// Postgres keeps microseconds.
		let at = (Utc::now() - Duration::minutes(minutes_ago)).duration_trunc(Duration::microseconds(1)).unwrap();
		NewPost {
			content: format!("{minutes_ago} minutes ago"),
			post_type: "Collaboration".into(),
			community_id: community_id.into(),
			user_email: user_email.into(),
			visibility: visibility.into(),
			image_url: Some("cover.png".into()),
			created_at: at,
			updated_at: at,
		}
	}

	fn ids(posts: Vec<Post>) -> Vec<uuid::Uuid> {
		let mut ids: Vec<_> = posts.into_iter().map(|p| p.id).collect();
		ids.sort();
		ids
	}

	#[tokio::test]
	#[ignore = "needs DATABASE_URL pointing at Postgres"]
	async fn test_saved_post_reads_back_with_type_column() {
		let Some(repo) = repository::<Post>().await else { return };
		let community = unique("TeamA");
		let saved = repo.save(post("a@x.com", &community, "Public", 0)).await.unwrap();

		let found = repo.find_by_community_id(&community).await.unwrap();

		assert_eq!(found, vec![saved]);
		assert_eq!(found[0].post_type, "Collaboration");
	}

	#[tokio::test]
	#[ignore = "needs DATABASE_URL pointing at Postgres"]
	async fn test_community_lookup_is_case_insensitive_partial() {
		let Some(repo) = repository::<Post>().await else { return };
		'_given: {
			let tag = unique("TeamA");
			for community in [tag.clone(), format!("{tag}-Design"), unique("TeamB")] {
				repo.save(post("a@x.com", &community, "Public", 0)).await.unwrap();
			}

			'_when: {
				let upper = ids(repo.find_by_community_id(&tag).await.unwrap());
				let lower = ids(repo.find_by_community_id(&tag.to_lowercase()).await.unwrap());

				assert_eq!(upper.len(), 2);
				assert_eq!(upper, lower);
				assert!(repo.find_by_community_id(&format!("{tag}%")).await.unwrap().is_empty());
			}
		}
	}

	#[tokio::test]
	#[ignore = "needs DATABASE_URL pointing at Postgres"]
	async fn test_visibility_lookup_is_exact() {
		let Some(repo) = repository::<Post>().await else { return };
		let community = unique("TeamA");
		let mut saved = Vec::new();
		for visibility in ["Public", "public", "PUBLIC", "Private"] {
			saved.push(repo.save(post("a@x.com", &community, visibility, 0)).await.unwrap());
		}

		let public: Vec<_> = repo
			.find_by_visibility("Public")
			.await
			.unwrap()
			.into_iter()
			.filter(|p| p.community_id == community)
			.collect();

		assert_eq!(public, vec![saved[0].clone()]);
	}

	#[tokio::test]
	#[ignore = "needs DATABASE_URL pointing at Postgres"]
	async fn test_recent_posts_are_newest_first_and_limited() {
		let Some(repo) = repository::<Post>().await else { return };
		let (author, other) = (unique("a@x.com"), unique("b@x.com"));
		for minutes_ago in [30, 10, 20, 5] {
			repo.save(post(&author, "TeamA", "Public", minutes_ago)).await.unwrap();
		}
		repo.save(post(&other, "TeamA", "Public", 1)).await.unwrap();

		let recent = repo.find_recent_by_author(&author, 3).await.unwrap();
		let contents: Vec<_> = recent.iter().map(|p| p.content.as_str()).collect();

		assert_eq!(contents, vec!["5 minutes ago", "10 minutes ago", "20 minutes ago"]);
		assert!(repo.find_recent_by_author(&author, -1).await.unwrap().is_empty());
	}
}

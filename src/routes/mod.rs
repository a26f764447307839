mod chat;
mod posts;

use std::path::Path;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::services::ServeDir;

use crate::services::{MessagingService, PostingService};

pub use chat::chat_routers;
pub use posts::post_routers;

#[derive(Clone)]
pub struct AppState {
	pub messaging: MessagingService,
	pub posting: PostingService,

	/// Page size of `/posts/recent` when the caller gives none
	pub recent_posts_limit: i64,
}

pub fn create_routes(
	state: AppState,
	upload_dir: &Path,
	max_upload_bytes: usize,
) -> Router {
	Router::new()
		.nest("/api/chat", chat_routers())
		.nest("/api/posts", post_routers())
		.nest_service("/uploads", ServeDir::new(upload_dir))
		.layer(DefaultBodyLimit::max(max_upload_bytes))
		.with_state(state)
}

#[cfg(test)]
pub(crate) mod testing {
	use std::{path::PathBuf, sync::Arc};

	use axum::{body::Body, http::Request, response::Response, Router};
	use tower::ServiceExt;

	use super::{create_routes, AppState};
	use crate::{
		adapters::{
			repositories::{MemoryStore, MessageStore},
			uploads::UploadDirectory,
		},
		services::{MessagingService, PostingService},
	};

	pub(crate) struct TestApp {
		pub store: Arc<MemoryStore>,
		pub upload_dir: PathBuf,
		pub router: Router,
	}

	impl TestApp {
		pub fn new() -> Self {
			let store = Arc::new(MemoryStore::new());
			Self::with_message_store(store.clone(), store)
		}

		pub fn with_message_store(
			store: Arc<MemoryStore>,
			messages: Arc<dyn MessageStore>,
		) -> Self {
			let upload_dir = std::env::temp_dir().join(format!("community-routes-{}", uuid::Uuid::new_v4()));
			let state = AppState {
				messaging: MessagingService::new(messages, store.clone()),
				posting: PostingService::new(store.clone(), Arc::new(UploadDirectory::new(&upload_dir))),
				recent_posts_limit: 10,
			};
			let router = create_routes(state, &upload_dir, 1024 * 1024);
			Self { store, upload_dir, router }
		}

		pub async fn send(
			&self,
			request: Request<Body>,
		) -> Response {
			self.router.clone().oneshot(request).await.unwrap()
		}
	}

	impl Drop for TestApp {
		fn drop(&mut self) {
			let _ = std::fs::remove_dir_all(&self.upload_dir);
		}
	}

	pub(crate) async fn body_bytes(response: Response) -> Vec<u8> {
		hyper::body::to_bytes(response.into_body()).await.unwrap().to_vec()
	}

	pub(crate) async fn body_json(response: Response) -> serde_json::Value {
		serde_json::from_slice(&body_bytes(response).await).unwrap()
	}
}

use std::sync::Arc;

use crate::{
	adapters::{
		repositories::{MemoryStore, MessageStore, PostStore, Repository, UserDirectory},
		uploads::{ImageStore, UploadDirectory},
	},
	config::Config,
	database::DatabaseExecutor,
	domain::{message::Message, post::entity::Post, user::User},
	routes::AppState,
	services::{response::ServiceError, MessagingService, PostingService},
};

/// The three capabilities the services run on, whichever backend provides them.
pub struct Stores {
	pub messages: Arc<dyn MessageStore>,
	pub posts: Arc<dyn PostStore>,
	pub users: Arc<dyn UserDirectory>,
}

impl Stores {
	pub async fn postgres(url: &str) -> Result<Self, ServiceError> {
		let executor = Arc::new(DatabaseExecutor::new(url).await?);
		executor.migrate().await?;

		Ok(Self {
			messages: Arc::new(Repository::<Message>::new(executor.clone())),
			posts: Arc::new(Repository::<Post>::new(executor.clone())),
			users: Arc::new(Repository::<User>::new(executor)),
		})
	}

	pub fn memory(store: Arc<MemoryStore>) -> Self {
		Self {
			messages: store.clone(),
			posts: store.clone(),
			users: store,
		}
	}
}

pub struct Bootstrap;
impl Bootstrap {
	pub async fn stores(config: &Config) -> Result<Stores, ServiceError> {
		match config.database_url.as_deref() {
			Some(url) => Stores::postgres(url).await,
			None => {
				tracing::warn!("DATABASE_URL is not set, keeping messages and posts in memory");
				let store = Arc::new(MemoryStore::new());
				for email in &config.seed_users {
					store.register_user(email.clone()).await;
				}
				Ok(Stores::memory(store))
			}
		}
	}

	pub fn app_state(
		config: &Config,
		stores: Stores,
	) -> AppState {
		let images: Arc<dyn ImageStore> = Arc::new(UploadDirectory::new(&config.upload_dir));
		AppState {
			messaging: MessagingService::new(stores.messages, stores.users),
			posting: PostingService::new(stores.posts, images),
			recent_posts_limit: config.recent_posts_limit,
		}
	}
}

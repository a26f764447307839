use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::services::response::ServiceError;

#[async_trait]
pub trait ImageStore: Send + Sync {
	/// Writes `bytes` under `file_name`, replacing nothing else.
	async fn write(
		&self,
		file_name: &str,
		bytes: &[u8],
	) -> Result<(), ServiceError>;
}

/// Post images on the local filesystem, one flat directory.
#[derive(Clone, Debug)]
pub struct UploadDirectory {
	root: PathBuf,
}

impl UploadDirectory {
	pub fn new(root: impl AsRef<Path>) -> Self {
		Self {
			root: root.as_ref().to_path_buf(),
		}
	}

	fn file_path(
		&self,
		file_name: &str,
	) -> PathBuf {
		self.root.join(file_name)
	}
}

#[async_trait]
impl ImageStore for UploadDirectory {
	async fn write(
		&self,
		file_name: &str,
		bytes: &[u8],
	) -> Result<(), ServiceError> {
		fs::create_dir_all(&self.root).await?;

		let path = self.file_path(file_name);
		fs::write(&path, bytes).await?;
		tracing::debug!(path = ?path, size_bytes = bytes.len(), "image written");
		Ok(())
	}
}

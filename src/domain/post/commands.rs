use std::path::Path;

use uuid::Uuid;

use crate::services::response::ServiceError;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct CreatePost {
	pub content: String,
	pub post_type: String,
	pub community_id: String,
	pub user_email: String,
	pub visibility: String,
	pub image: Option<ImageUpload>,
}

/// Raw image attached to a post.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ImageUpload {
	pub file_name: Option<String>,
	pub bytes: Vec<u8>,
}

impl ImageUpload {
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Everything from the last `.` of the original file name, dot included.
	/// Only the final path component counts. Names without a `.` are refused.
	pub fn extension(&self) -> Result<&str, ServiceError> {
		let name = self
			.file_name
			.as_deref()
			.and_then(|name| Path::new(name).file_name())
			.and_then(|name| name.to_str())
			.ok_or_else(|| ServiceError::ValidationError("image must have a file name".into()))?;

		name.rfind('.')
			.map(|idx| &name[idx..])
			.ok_or_else(|| ServiceError::ValidationError(format!("image `{}` has no file extension", name)))
	}

	/// Fresh random name carrying the original extension.
	pub fn generate_file_name(&self) -> Result<String, ServiceError> {
		Ok(format!("{}{}", Uuid::new_v4(), self.extension()?))
	}
}

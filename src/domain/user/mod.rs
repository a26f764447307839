// Users belong to a separate directory; this core only looks them up.
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
	pub email: String,
}

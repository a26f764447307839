use std::str::FromStr;

use crate::services::response::ServiceError;

pub struct Config {
	/// Which errors we want to log
	pub log_level: String,

	/// Port server is listening to
	pub server_ip_port: String,

	/// Postgres connection string. Without it the server keeps everything in memory.
	pub database_url: Option<String>,
	pub allow_origins: String,

	/// Directory uploaded post images are written to
	pub upload_dir: String,
	pub max_upload_bytes: usize,
	pub recent_posts_limit: i64,

	/// Users known to the in-memory directory. Ignored with a database.
	pub seed_users: Vec<String>,
}

impl Config {
	pub fn new() -> Result<Config, ServiceError> {
		dotenv::dotenv().ok();
		let log_level = std::env::var("LOG_LEVEL").unwrap_or("warn".to_string());
		let server_ip_port = std::env::var("SERVER_IP_PORT").unwrap_or("0.0.0.0:80".into());
		let database_url = std::env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
		let allow_origins = std::env::var("ALLOW_ORIGINS").unwrap_or("http://localhost:3000".to_string());
		let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or("uploads".to_string());
		let max_upload_bytes = parse_var("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?;
		let recent_posts_limit = parse_var("RECENT_POSTS_LIMIT", 10)?;
		let seed_users = std::env::var("SEED_USERS")
			.map(|users| users.split(',').map(str::trim).filter(|u| !u.is_empty()).map(str::to_string).collect())
			.unwrap_or_default();

		Ok(Config {
			log_level,
			server_ip_port,
			database_url,
			allow_origins,
			upload_dir,
			max_upload_bytes,
			recent_posts_limit,
			seed_users,
		})
	}
}

fn parse_var<T: FromStr>(
	key: &str,
	default: T,
) -> Result<T, ServiceError> {
	match std::env::var(key) {
		Ok(value) => value.trim().parse::<T>().map_err(|_| ServiceError::ConfigError(key.to_string())),
		Err(_) => Ok(default),
	}
}

#[test]
fn test_parse_var_falls_back_and_rejects_garbage() {
	assert_eq!(parse_var::<usize>("COMMUNITY_TEST_UNSET_VARIABLE", 7).unwrap(), 7);

	std::env::set_var("COMMUNITY_TEST_BAD_LIMIT", "ten");
	match parse_var::<i64>("COMMUNITY_TEST_BAD_LIMIT", 10) {
		Err(ServiceError::ConfigError(key)) => assert_eq!(key, "COMMUNITY_TEST_BAD_LIMIT"),
		other => panic!("unexpected {:?}", other),
	}
}

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	/// "uniform" answers every non-auth failure with 500; "distinct" adds 400 and 404.
	#[serde(default = "default_status_codes")]
	pub status_codes: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub backend: String,
	#[serde(default = "default_notes_table")]
	pub notes_table: String,
	#[serde(default = "default_counter_table")]
	pub counter_table: String,
	pub postgres: Option<Postgres>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
	/// Header the upstream authenticator uses to carry the verified identity id.
	#[serde(default = "default_identity_header")]
	pub identity_header: String,
}
impl Default for Security {
	fn default() -> Self {
		Self { bind_localhost_only: true, identity_header: default_identity_header() }
	}
}

fn default_status_codes() -> String {
	"uniform".to_string()
}

fn default_notes_table() -> String {
	"notes".to_string()
}

fn default_counter_table() -> String {
	"counter".to_string()
}

fn default_identity_header() -> String {
	"X-Memo-Identity-Id".to_string()
}

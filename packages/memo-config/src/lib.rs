mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Security, Service, Storage};

use std::{
	env, fs,
	path::{Path, PathBuf},
};

/// Deployment tooling binds the notes table name through this variable.
pub const ENV_NOTES_TABLE: &str = "SST_Table_tableName_Notes";
/// Deployment tooling binds the counter table name through this variable.
pub const ENV_COUNTER_TABLE: &str = "SST_Table_tableName_counter";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	apply_env_overrides(&mut cfg, |key| env::var(key).ok());
	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if !matches!(cfg.service.status_codes.as_str(), "uniform" | "distinct") {
		return Err(Error::Validation {
			message: "service.status_codes must be one of uniform or distinct.".to_string(),
		});
	}

	match cfg.storage.backend.as_str() {
		"memory" => {},
		"postgres" => {
			let Some(postgres) = cfg.storage.postgres.as_ref() else {
				return Err(Error::Validation {
					message: "storage.postgres is required when storage.backend is postgres."
						.to_string(),
				});
			};

			if postgres.dsn.trim().is_empty() {
				return Err(Error::Validation {
					message: "storage.postgres.dsn must be non-empty.".to_string(),
				});
			}
			if postgres.pool_max_conns == 0 {
				return Err(Error::Validation {
					message: "storage.postgres.pool_max_conns must be greater than zero."
						.to_string(),
				});
			}
		},
		_ => {
			return Err(Error::Validation {
				message: "storage.backend must be one of postgres or memory.".to_string(),
			});
		},
	}

	for (label, table) in [
		("storage.notes_table", &cfg.storage.notes_table),
		("storage.counter_table", &cfg.storage.counter_table),
	] {
		if !is_plain_identifier(table) {
			return Err(Error::Validation {
				message: format!(
					"{label} must start with a letter or underscore and contain only ASCII letters, digits, or underscores."
				),
			});
		}
	}

	if cfg.storage.notes_table == cfg.storage.counter_table {
		return Err(Error::Validation {
			message: "storage.notes_table and storage.counter_table must differ.".to_string(),
		});
	}
	if cfg.security.identity_header.trim().is_empty() {
		return Err(Error::Validation {
			message: "security.identity_header must be non-empty.".to_string(),
		});
	}

	Ok(())
}

/// Parses a config document without touching the environment or the filesystem.
pub fn from_toml_str(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: PathBuf::from("<inline>"), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn apply_env_overrides<F>(cfg: &mut Config, lookup: F)
where
	F: Fn(&str) -> Option<String>,
{
	if let Some(table) = lookup(ENV_NOTES_TABLE).filter(|value| !value.trim().is_empty()) {
		cfg.storage.notes_table = table;
	}
	if let Some(table) = lookup(ENV_COUNTER_TABLE).filter(|value| !value.trim().is_empty()) {
		cfg.storage.counter_table = table;
	}
}

fn normalize(cfg: &mut Config) {
	cfg.storage.backend = cfg.storage.backend.trim().to_ascii_lowercase();
	cfg.storage.notes_table = cfg.storage.notes_table.trim().to_string();
	cfg.storage.counter_table = cfg.storage.counter_table.trim().to_string();
	cfg.service.status_codes = cfg.service.status_codes.trim().to_ascii_lowercase();
	cfg.security.identity_header = cfg.security.identity_header.trim().to_string();
}

fn is_plain_identifier(value: &str) -> bool {
	let mut chars = value.chars();

	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() || first == '_' => {},
		_ => return false,
	}

	value.len() <= 63 && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

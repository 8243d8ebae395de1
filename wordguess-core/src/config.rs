use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{Category, Difficulty, ParseSettingError};

/// Errors raised while building a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("cannot read config file: {0}")]
	Io(#[from] std::io::Error),
	#[error("invalid config file: {0}")]
	Json(#[from] serde_json::Error),
	#[error(transparent)]
	Setting(#[from] ParseSettingError),
	#[error("invalid argument '{0}', expected key=value with key one of: difficulty, category, seed, config")]
	Argument(String),
	#[error("seed must be an unsigned integer, got '{0}'")]
	Seed(String),
}

/// Settings a game starts with.
///
/// Every field is optional in the JSON form:
/// `{"difficulty": "hard", "category": "food", "seed": 42}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
	/// Initial prediction policy (default: medium).
	pub difficulty: Difficulty,

	/// Initial corpus (default: nature).
	pub category: Category,

	/// Seed for a reproducible random source. `None` seeds from the OS.
	pub seed: Option<u64>,
}

impl GameConfig {
	/// Parses a JSON configuration.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Reads and parses a JSON configuration file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
		Self::from_json(&fs::read_to_string(path)?)
	}

	/// Builds a configuration from `key=value` arguments.
	///
	/// - `config=<path>` loads a JSON file first; other keys override it
	///   regardless of their position.
	/// - `difficulty=<easy|medium|hard>`, `category=<name>`, `seed=<u64>`
	/// - Unset keys keep their default value.
	pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut pairs = Vec::new();
		for arg in args {
			let arg = arg.as_ref();
			match arg.split_once('=') {
				Some((key, value)) => pairs.push((key.trim().to_lowercase(), value.trim().to_owned())),
				None => return Err(ConfigError::Argument(arg.to_owned())),
			}
		}

		let mut config = match pairs.iter().find(|(key, _)| key == "config") {
			Some((_, path)) => Self::from_file(path)?,
			None => Self::default(),
		};

		for (key, value) in &pairs {
			match key.as_str() {
				"config" => (),
				"difficulty" => config.difficulty = value.parse()?,
				"category" => config.category = value.parse()?,
				"seed" => {
					let seed = value.parse::<u64>().map_err(|_| ConfigError::Seed(value.clone()))?;
					config.seed = Some(seed);
				}
				_ => return Err(ConfigError::Argument(format!("{key}={value}"))),
			}
		}

		Ok(config)
	}

	/// Random source matching `seed`.
	pub fn make_rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

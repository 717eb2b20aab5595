use crate::error::ConfigError;
use crate::tokenizer::MAX_ARGS;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Serialized;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use std::path::PathBuf;

/// Prefix of the environment variables that override the defaults.
pub const ENV_PREFIX: &str = "MYSH_";

// --- Default Values ---
fn default_prompt() -> String {
  "mysh> ".to_string()
}

fn default_search_paths() -> Vec<String> {
  vec![
    "/bin/".to_string(),
    "/usr/bin/".to_string(),
    "/usr/local/bin/".to_string(),
  ]
}

/// Either a list of prefixes or a single `:`-separated string.
#[derive(Deserialize)]
#[serde(untagged)]
enum PrefixList {
  List(Vec<String>),
  Joined(String),
}

fn deserialize_search_paths<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match PrefixList::deserialize(deserializer)? {
    PrefixList::List(prefixes) => prefixes,
    PrefixList::Joined(joined) => joined.split(':').map(str::to_string).collect(),
  })
}

/// Fully validated and resolved configuration.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Text printed (without a newline) before each read.
  pub prompt: String,

  /// Directory prefixes tried, in order, after the name as given.
  ///
  /// From the environment this is `/opt/bin/:/bin/` or `[/opt/bin/, /bin/]`.
  #[serde(deserialize_with = "deserialize_search_paths")]
  pub search_paths: Vec<String>,

  /// Maximum number of tokens kept from one line.
  pub max_args: usize,

  /// Write diagnostic logs to this file instead of stderr.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub log_file: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      prompt: default_prompt(),
      search_paths: default_search_paths(),
      max_args: MAX_ARGS,
      log_file: None,
    }
  }
}

impl Config {
  /// The defaults layered under `MYSH_*` environment variables.
  pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
  }

  /// Loads the configuration from [`Config::figment`].
  pub fn load() -> Result<Self, ConfigError> {
    Self::from_figment(Self::figment())
  }

  pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> Result<(), ConfigError> {
    if self.max_args == 0 {
      return Err(ConfigError::ZeroMaxArgs);
    }
    if let Some(index) = self.search_paths.iter().position(String::is_empty) {
      return Err(ConfigError::EmptySearchPath { index });
    }
    Ok(())
  }
}

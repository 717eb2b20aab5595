// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use thiserror::Error;

/// Top-level error enum for the mysh library.
#[derive(Error, Debug)]
pub enum ShellError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to extract configuration: {0}")]
  Extract(#[from] figment::Error),

  #[error("max_args must be at least 1")]
  ZeroMaxArgs,

  #[error("search_paths entry {index} is empty")]
  EmptySearchPath { index: usize },
}

/// Failure outcomes of running one command (src/runner.rs).
///
/// None of these end the session. The driver prints them and prompts again.
#[derive(Error, Debug)]
pub enum RunError {
  #[error("spawn: {source}")]
  SpawnFailed {
    #[source]
    source: std::io::Error,
  },

  #[error("wait: {source}")]
  WaitFailed {
    #[source]
    source: std::io::Error,
  },

  #[error("command not found: {name}")]
  CommandNotFound { name: String },
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::ErrorKind;

  #[test]
  fn run_errors_carry_an_operation_label() {
    let spawn = RunError::SpawnFailed {
      source: std::io::Error::from(ErrorKind::WouldBlock),
    };
    assert!(spawn.to_string().starts_with("spawn: "), "{spawn}");
    assert_eq!(
      spawn.to_string(),
      format!("spawn: {}", std::io::Error::from(ErrorKind::WouldBlock))
    );

    let wait = RunError::WaitFailed {
      source: std::io::Error::from(ErrorKind::Interrupted),
    };
    assert_eq!(
      wait.to_string(),
      format!("wait: {}", std::io::Error::from(ErrorKind::Interrupted))
    );
  }

  #[test]
  fn run_error_sources_are_kept() {
    use std::error::Error as _;

    let err = RunError::WaitFailed {
      source: std::io::Error::from(ErrorKind::Interrupted),
    };
    let source = err.source().and_then(|s| s.downcast_ref::<std::io::Error>());
    assert_eq!(source.map(std::io::Error::kind), Some(ErrorKind::Interrupted));

    let err = RunError::CommandNotFound {
      name: "nope".to_string(),
    };
    assert!(err.source().is_none());
  }
}

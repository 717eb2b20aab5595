use crate::config::Config;
use crate::error::RunError;
use crate::tokenizer::Argv;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::path::PathBuf;
use tokio::process::Child;
use tokio::process::Command;
use tracing::Instrument;

/// Ordered directory prefixes tried after the command name as given.
///
/// Resolution is linear: the first candidate that launches wins, even when a
/// later prefix holds an executable of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
  prefixes: Vec<String>,
}

impl Default for SearchPath {
  fn default() -> Self {
    SearchPath::from(&Config::default())
  }
}

impl From<&Config> for SearchPath {
  fn from(config: &Config) -> Self {
    SearchPath::new(config.search_paths.clone())
  }
}

impl SearchPath {
  pub fn new(prefixes: Vec<String>) -> Self {
    SearchPath { prefixes }
  }

  pub fn prefixes(&self) -> &[String] {
    &self.prefixes
  }

  /// Every path `name` may resolve to, in the order they are tried.
  ///
  /// The first candidate is `name` itself. A bare name is taken relative to
  /// the working directory and never looked up through `PATH`. The remaining
  /// candidates are each prefix with `name` appended verbatim.
  pub fn candidates(&self, name: &OsStr) -> Vec<PathBuf> {
    let exact = if name.as_bytes().contains(&b'/') {
      PathBuf::from(name)
    } else {
      Path::new(".").join(name)
    };

    std::iter::once(exact)
      .chain(self.prefixes.iter().map(|prefix| {
        let mut path = OsString::from(prefix);
        path.push(name);
        PathBuf::from(path)
      }))
      .collect()
  }
}

/// Resolves, launches and waits for one command at a time.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
  search_path: SearchPath,
}

impl CommandRunner {
  pub fn new(search_path: SearchPath) -> Self {
    CommandRunner { search_path }
  }

  pub fn search_path(&self) -> &SearchPath {
    &self.search_path
  }

  /// Runs `argv` as a child process and blocks until it terminates.
  ///
  /// Any termination counts as success; the child's exit status is logged
  /// but not returned. An empty `argv` is a no-op.
  pub async fn run(&self, argv: &Argv) -> Result<(), RunError> {
    let Some(program) = argv.program() else {
      return Ok(());
    };

    let span = tracing::info_span!("run", program = %program.to_string_lossy());
    self.run_to_completion(program, argv.args()).instrument(span).await
  }

  async fn run_to_completion(&self, program: &OsStr, args: &[OsString]) -> Result<(), RunError> {
    let mut child = self.spawn(program, args)?;

    let status = child
      .wait()
      .await
      .map_err(|source| RunError::WaitFailed { source })?;

    tracing::debug!(code = ?status.code(), %status, "Child process terminated");
    Ok(())
  }

  /// Launches the first candidate that can be executed.
  fn spawn(&self, program: &OsStr, args: &[OsString]) -> Result<Child, RunError> {
    for candidate in self.search_path.candidates(program) {
      let mut cmd = Command::new(&candidate);
      cmd.arg0(program).args(args).kill_on_drop(true);

      tracing::trace!(candidate = %candidate.display(), "Trying candidate");
      match cmd.spawn() {
        Ok(child) => {
          tracing::debug!(path = %candidate.display(), pid = ?child.id(), "Resolved command");
          return Ok(child);
        }
        Err(source) if is_resource_exhaustion(&source) => {
          tracing::error!(error = %source, "Failed to create child process");
          return Err(RunError::SpawnFailed { source });
        }
        Err(e) => {
          tracing::trace!(candidate = %candidate.display(), error = %e, "Candidate rejected");
        }
      }
    }

    tracing::warn!("No candidate could be executed");
    Err(RunError::CommandNotFound {
      name: program.to_string_lossy().into_owned(),
    })
  }
}

/// Process creation itself failed, so trying further candidates is pointless.
fn is_resource_exhaustion(err: &std::io::Error) -> bool {
  matches!(err.kind(), ErrorKind::WouldBlock | ErrorKind::OutOfMemory)
}

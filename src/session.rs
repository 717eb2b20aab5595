use crate::config::Config;
use crate::error::RunError;
use crate::error::ShellError;
use crate::runner::CommandRunner;
use crate::runner::SearchPath;
use crate::tokenizer::tokenize_with_limit;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncWrite;
use tokio::io::AsyncWriteExt;
use tracing::Instrument;

/// First token that ends the session instead of running a command.
pub const EXIT_KEYWORD: &str = "exit";

/// Printed on its own line when the session ends through [`EXIT_KEYWORD`].
pub const FAREWELL: &str = "Exiting mysh...";

/// How an interactive session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
  /// The user typed `exit`.
  ExitKeyword,
  /// No more input lines were available.
  EndOfInput,
}

/// The prompt / read / tokenize / run loop.
#[derive(Debug, Clone)]
pub struct Session {
  prompt: String,
  max_args: usize,
  runner: CommandRunner,
}

impl Session {
  pub fn new(config: &Config) -> Self {
    Session {
      prompt: config.prompt.clone(),
      max_args: config.max_args,
      runner: CommandRunner::new(SearchPath::from(config)),
    }
  }

  pub fn runner(&self) -> &CommandRunner {
    &self.runner
  }

  /// Runs commands read from `input` until `exit` or end of input.
  ///
  /// The prompt goes to `output`. Children inherit the process's own
  /// stdio, and run failures are reported on stderr without ending the loop.
  pub async fn run<R, W>(&self, mut input: R, mut output: W) -> Result<SessionEnd, ShellError>
  where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
  {
    let span = tracing::info_span!("session", prompt = ?self.prompt);
    self.repl(&mut input, &mut output).instrument(span).await
  }

  async fn repl<R, W>(&self, input: &mut R, output: &mut W) -> Result<SessionEnd, ShellError>
  where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
  {
    tracing::info!("--- Session started ---");
    let mut line = Vec::new();

    loop {
      output.write_all(self.prompt.as_bytes()).await?;
      output.flush().await?;

      line.clear();
      if input.read_until(b'\n', &mut line).await? == 0 {
        output.write_all(b"\n").await?;
        output.flush().await?;
        tracing::info!("End of input");
        return Ok(SessionEnd::EndOfInput);
      }

      let argv = tokenize_with_limit(&line, self.max_args);
      match argv.program() {
        None => continue,
        Some(program) if program == EXIT_KEYWORD => {
          output.write_all(format!("{FAREWELL}\n").as_bytes()).await?;
          output.flush().await?;
          tracing::info!("Exit requested");
          return Ok(SessionEnd::ExitKeyword);
        }
        Some(program) => {
          if let Err(e) = self.runner.run(&argv).await {
            tracing::warn!(program = %program.to_string_lossy(), error = %e, "Command failed");
            eprintln!("{}", report(&e));
          }
        }
      }
    }
  }
}

/// The line printed on stderr for a failed command.
fn report(err: &RunError) -> String {
  format!("mysh: {err}")
}

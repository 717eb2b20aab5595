use clap::Parser;

/// Command-line surface of `mysh`.
///
/// There are no options: the shell starts straight into its interactive
/// loop. Only clap's built-in `--help` and `--version` are recognised.
#[derive(Debug, Parser)]
#[command(
  version,
  about = "A minimal interactive shell",
  long_about = "A minimal interactive shell.\n\n\
    Reads one line at a time, splits it on spaces and tabs, and runs the named \
    program from the current directory, /bin, /usr/bin or /usr/local/bin. \
    Type `exit` or send end-of-input to leave.\n\n\
    Settings can be overridden with MYSH_PROMPT, MYSH_MAX_ARGS, MYSH_LOG_FILE and \
    MYSH_SEARCH_PATHS (a `:`-separated list of directory prefixes such as \
    `/opt/bin/:/bin/`)."
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn verify_cli() {
    Cli::command().debug_assert();
  }

  #[test]
  fn rejects_arguments() {
    assert!(Cli::try_parse_from(["mysh", "ls"]).is_err());
    assert!(Cli::try_parse_from(["mysh"]).is_ok());
  }
}

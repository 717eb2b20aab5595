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
use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

fn mysh() -> Command {
  let mut cmd = Command::from_std(std::process::Command::new(cargo::cargo_bin!("mysh")));
  cmd
    .env_remove("MYSH_PROMPT")
    .env_remove("MYSH_MAX_ARGS")
    .env_remove("MYSH_LOG_FILE")
    .env_remove("MYSH_SEARCH_PATHS")
    .env_remove("RUST_LOG")
    .env("CLICOLOR", "0");
  cmd
}

#[test]
fn test_echo_then_exit() {
  mysh()
    .write_stdin("echo hello\nexit\n")
    .assert()
    .success()
    .stdout("mysh> hello\nmysh> Exiting mysh...\n");
}

#[test]
fn test_end_of_input() {
  mysh()
    .write_stdin("")
    .assert()
    .success()
    .stdout("mysh> \n");
}

#[test]
fn test_blank_lines_only_reprompt() {
  mysh()
    .write_stdin("\n  \t  \n")
    .assert()
    .success()
    .stdout("mysh> mysh> mysh> \n");
}

#[test]
fn test_command_not_found_keeps_session() {
  mysh()
    .write_stdin("mysh-test-definitely-missing-command --flag\nexit\n")
    .assert()
    .success()
    .stdout("mysh> mysh> Exiting mysh...\n")
    .stderr(predicate::str::contains(
      "mysh: command not found: mysh-test-definitely-missing-command",
    ));
}

#[test]
fn test_child_exit_status_is_not_propagated() {
  mysh()
    .write_stdin("sh -c false\nexit\n")
    .assert()
    .success()
    .stdout("mysh> mysh> Exiting mysh...\n");
}

#[test]
fn test_runs_same_command_twice() {
  mysh()
    .write_stdin("echo again\necho again\n")
    .assert()
    .success()
    .stdout("mysh> again\nmysh> again\nmysh> \n");
}

#[test]
fn test_relative_path_from_working_directory() {
  let temp = tempdir().unwrap();
  let script = temp.path().join("local-tool");
  fs::write(&script, "#!/bin/sh\necho local \"$1\"\n").unwrap();
  fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

  mysh()
    .current_dir(temp.path())
    .write_stdin("local-tool ok\nexit\n")
    .assert()
    .success()
    .stdout("mysh> local ok\nmysh> Exiting mysh...\n");
}

#[test]
fn test_search_paths_from_env() {
  let temp = tempdir().unwrap();
  let bin = temp.path().join("bin");
  fs::create_dir(&bin).unwrap();
  let script = bin.join("only-here");
  fs::write(&script, "#!/bin/sh\necho found \"$1\"\n").unwrap();
  fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

  mysh()
    .env("MYSH_SEARCH_PATHS", format!("/nonexistent/:{}/", bin.display()))
    .write_stdin("only-here it\nexit\n")
    .assert()
    .success()
    .stdout("mysh> found it\nmysh> Exiting mysh...\n");
}

#[test]
fn test_prompt_from_env() {
  mysh()
    .env("MYSH_PROMPT", "sh>")
    .write_stdin("exit\n")
    .assert()
    .success()
    .stdout("sh>Exiting mysh...\n");
}

#[test]
fn test_invalid_config_fails_startup() {
  mysh()
    .env("MYSH_MAX_ARGS", "0")
    .write_stdin("exit\n")
    .assert()
    .failure()
    .stderr(predicate::str::contains("max_args must be at least 1"));
}

#[test]
fn test_log_file() {
  let temp = tempdir().unwrap();
  let log_file = temp.path().join("mysh.log");

  mysh()
    .env("MYSH_LOG_FILE", &log_file)
    .env("RUST_LOG", "debug")
    .write_stdin("echo logged\nexit\n")
    .assert()
    .success()
    .stdout("mysh> logged\nmysh> Exiting mysh...\n")
    .stderr(predicate::str::is_empty());

  let log = fs::read_to_string(&log_file).unwrap();
  assert!(log.contains("Resolved command"), "log was: {log}");
  assert!(log.contains("Exit requested"), "log was: {log}");
}

#[test]
fn test_rejects_arguments() {
  mysh().arg("extra").assert().failure();
}

#[test]
fn test_version() {
  mysh()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

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

use std::ffi::OsStr;
use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;

/// Default cap on the number of tokens kept from one input line.
///
/// Tokens past the cap are dropped silently, never reported as an error.
pub const MAX_ARGS: usize = 63;

/// An owned argument vector: the command name followed by its arguments.
///
/// Tokens are raw bytes, so names and arguments that are not valid UTF-8
/// reach the child unchanged. Nothing borrows from the parsed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argv(Vec<OsString>);

impl Argv {
  /// The command name (element 0), or `None` for an empty line.
  pub fn program(&self) -> Option<&OsStr> {
    self.0.first().map(OsString::as_os_str)
  }

  /// Everything after the command name.
  pub fn args(&self) -> &[OsString] {
    self.0.get(1..).unwrap_or_default()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn as_slice(&self) -> &[OsString] {
    &self.0
  }
}

impl From<Vec<OsString>> for Argv {
  fn from(tokens: Vec<OsString>) -> Self {
    Argv(tokens)
  }
}

impl<'a> From<&'a [&'a str]> for Argv {
  fn from(tokens: &'a [&'a str]) -> Self {
    Argv(tokens.iter().map(OsString::from).collect())
  }
}

/// Splits a raw input line into an [`Argv`], keeping at most [`MAX_ARGS`] tokens.
pub fn tokenize(line: impl AsRef<[u8]>) -> Argv {
  tokenize_with_limit(line, MAX_ARGS)
}

/// Splits a raw input line into an [`Argv`] of at most `max_args` tokens.
///
/// A trailing `\n` (or `\r\n`) is removed first. Runs of spaces and tabs
/// separate tokens; there is no quoting or escaping.
pub fn tokenize_with_limit(line: impl AsRef<[u8]>, max_args: usize) -> Argv {
  let line = strip_line_terminator(line.as_ref());

  line
    .split(|byte| matches!(*byte, b' ' | b'\t'))
    .filter(|token| !token.is_empty())
    .take(max_args)
    .map(|token| OsStr::from_bytes(token).to_os_string())
    .collect::<Vec<_>>()
    .into()
}

fn strip_line_terminator(line: &[u8]) -> &[u8] {
  match line.strip_suffix(b"\n") {
    Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
    None => line,
  }
}

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

//! # mysh
//!
//! `mysh` is a minimal interactive shell. It reads a line, splits it into an
//! argument vector, resolves the command name against a short fixed list of
//! locations, runs it as a child process and waits for it before prompting
//! again.
//!
//! This crate contains the library logic for the `mysh` binary; the
//! tokenizer and runner can be used on their own.
//!
//! ## Core Modules
//!
//! * [`tokenizer`]: Splits a raw line into an [`tokenizer::Argv`] on spaces
//!   and tabs, with a cap on the number of tokens.
//! * [`runner`]: Resolves a command name through a [`runner::SearchPath`],
//!   spawns the child and waits for it to terminate.
//! * [`session`]: The prompt / read / run loop, including the `exit` keyword.
//! * [`config`]: Layered `figment` configuration (defaults + `MYSH_*` env vars).
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod session;
pub mod tokenizer;

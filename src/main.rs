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
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use mysh::cli::Cli;
use mysh::config::Config;
use mysh::logging::setup_tracing;
use mysh::session::Session;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  let Cli {} = Cli::parse();

  let config = Config::load().context("Failed to load configuration")?;
  let _guard = setup_tracing(config.log_file.as_deref())?;

  tracing::debug!(?config, "Configuration resolved");

  let session = Session::new(&config);
  let end = session
    .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    .await?;

  tracing::info!(?end, "Session ended");

  Ok(())
}

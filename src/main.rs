// Copyright 2025 JiangLong.
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

use clap::Parser;
use karbor_cli::cli::{commands::Commands, CliArgs, Session};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Initialize tracing
    let filter = if args.global.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let session = Session::from_args(&args.global)?;
    let mut out = std::io::stdout();

    match args.command {
        Commands::PlanList(cmd) => cmd.execute(&session, &mut out).await,
        Commands::PlanCreate(cmd) => cmd.execute(&session, &mut out).await,
        Commands::PlanShow(cmd) => cmd.execute(&session, &mut out).await,
        Commands::PlanDelete(cmd) => cmd.execute(&session, &mut out).await,
        Commands::PlanUpdate(cmd) => cmd.execute(&session, &mut out).await,
        Commands::RestoreCreate(cmd) => cmd.execute(&session, &mut out).await,
        Commands::RestoreList(cmd) => cmd.execute(&session, &mut out).await,
        Commands::RestoreShow(cmd) => cmd.execute(&session, &mut out).await,
        Commands::RestoreDelete(cmd) => cmd.execute(&session, &mut out).await,
    }
}

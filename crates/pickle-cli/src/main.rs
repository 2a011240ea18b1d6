// Dweve PickLE - Pick List Document Parser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! PickLE Command Line Interface

use clap::Parser;
use pickle_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// PickLE - pick list document toolkit
///
/// # Examples
///
/// ```bash
/// # Check a pick list
/// pickle validate board.pkl
///
/// # Print it as JSON
/// pickle show board.pkl --json
/// ```
#[derive(Parser)]
#[command(name = "pickle")]
#[command(author, version, about = "PickLE - pick list document toolkit", long_about = None)]
struct Cli {
    /// Enable parser debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "pickle_core=debug,pickle_cli=debug"
    } else {
        "pickle_core=warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

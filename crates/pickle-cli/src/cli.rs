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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// PickLE CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print the properties, categories and components of a document
    ///
    /// Components are listed under their category with their pick state,
    /// reference designators, value, package and description.
    Show {
        /// Input PickLE file
        #[arg(value_name = "FILE")]
        file: String,

        /// Print the document as pretty JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate PickLE document syntax
    ///
    /// Exits with a non-zero status when the document is malformed.
    Validate {
        /// Input PickLE file
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Show { file, json } => commands::show(&file, json),
            Commands::Validate { file } => commands::validate(&file),
        }
    }
}

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

//! Structured error types for the PickLE CLI.

use pickle_core::PickleError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for PickLE CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Configuration from the environment could not be used.
    #[error("invalid value '{value}' for {var}: expected a positive integer")]
    Config {
        /// The environment variable name
        var: &'static str,
        /// The rejected value
        value: String,
    },

    /// Parsing the document failed.
    #[error("{path}: {source}")]
    Parse {
        /// The file that failed to parse
        path: PathBuf,
        /// The underlying parser error
        #[source]
        source: PickleError,
    },

    /// JSON output failed.
    #[error("JSON output error: {0}")]
    Json(String),
}

impl CliError {
    /// Wrap a parser error with the file it came from.
    pub fn parse(path: impl Into<PathBuf>, source: PickleError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

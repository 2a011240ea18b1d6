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

//! CLI command implementations

mod show;
mod validate;

pub use show::{render_document, show};
pub use validate::validate;

use crate::error::CliError;
use pickle_core::{Document, OpenMode, ParseOptions, PickleFile};
use tracing::debug;

/// Environment variable overriding the maximum line length.
pub const MAX_LINE_LENGTH_VAR: &str = "PICKLE_MAX_LINE_LENGTH";

/// Build parser options, honoring `PICKLE_MAX_LINE_LENGTH` when set.
pub fn parse_options() -> Result<ParseOptions, CliError> {
    let mut builder = ParseOptions::builder();

    if let Ok(raw) = std::env::var(MAX_LINE_LENGTH_VAR) {
        let length = raw
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| CliError::Config {
                var: MAX_LINE_LENGTH_VAR,
                value: raw.clone(),
            })?;
        builder = builder.max_line_length(length);
    }

    Ok(builder.build())
}

/// Open, parse and close a document file.
pub fn load_document(path: &str) -> Result<Document, CliError> {
    let options = parse_options()?;
    let mut file = PickleFile::new();

    file.open(path, OpenMode::Read)
        .map_err(|e| CliError::parse(path, e))?;
    debug!(path, "document opened");

    let document = file
        .parse_with_options(options)
        .map_err(|e| CliError::parse(path, e))?;
    file.close().map_err(|e| CliError::parse(path, e))?;

    Ok(document)
}

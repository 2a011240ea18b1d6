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

//! Centralized error message constructors for PickLE parsing.
//!
//! Every error the parser raises is built here so wording stays consistent.

use crate::error::PickleError;
use std::path::Path;

// ==================== Reader Errors ====================

/// Line exceeds maximum length limit.
pub fn line_too_long(limit: usize, line: usize) -> PickleError {
    PickleError::io(
        format!("line too long: exceeds limit of {} bytes", limit),
        line,
    )
}

/// Line is not valid UTF-8.
pub fn invalid_utf8(line: usize) -> PickleError {
    PickleError::io("line is not valid UTF-8", line)
}

/// Underlying stream failed while reading a line.
pub fn read_failed(err: &std::io::Error, line: usize) -> PickleError {
    PickleError::io(format!("an error occurred while reading a line: {}", err), line)
}

// ==================== Property Errors ====================

/// Property line starts with a dash but is not the terminator.
pub fn property_starts_with_dash(line: usize) -> PickleError {
    PickleError::malformed("a property can't start with a dash", line)
}

/// Property line starts with a colon.
pub fn property_starts_with_colon(line: usize) -> PickleError {
    PickleError::malformed("property line must not start with a colon", line)
}

/// Property line has no colon at all.
pub fn property_missing_colon(line: usize) -> PickleError {
    PickleError::malformed("property line does not contain a colon", line)
}

/// Property line has nothing after the colon.
pub fn property_missing_value(line: usize) -> PickleError {
    PickleError::malformed("property line does not contain a value", line)
}

/// Document ended before the `---` terminator.
pub fn missing_separator(line: usize) -> PickleError {
    PickleError::malformed("missing separator '---' after properties", line)
}

// ==================== Category Errors ====================

/// Category line starts with a colon.
pub fn category_starts_with_colon(line: usize) -> PickleError {
    PickleError::malformed("category line must not start with a colon", line)
}

/// Category line has no colon.
pub fn category_missing_colon(line: usize) -> PickleError {
    PickleError::malformed("category line does not contain a colon", line)
}

// ==================== Component Errors ====================

/// Component line has a malformed checkbox marker.
pub fn invalid_checkbox(marker: &str, line: usize) -> PickleError {
    PickleError::malformed(
        format!("invalid checkbox '{}', expected '[ ]' or '[x]'", marker),
        line,
    )
}

/// Component line is missing one of its mandatory fields.
pub fn component_missing_field(field: &str, line: usize) -> PickleError {
    PickleError::malformed(format!("component line is missing its {}", field), line)
}

/// Reference designator list has an empty entry.
pub fn empty_refdes(line: usize) -> PickleError {
    PickleError::malformed("reference designator list contains an empty entry", line)
}

/// Component line appears before any category line.
pub fn component_without_category(line: usize) -> PickleError {
    PickleError::malformed("component found before any category", line)
}

/// Component added to a category the document does not have.
pub fn unknown_category(index: usize) -> PickleError {
    PickleError::malformed(format!("no category with index {}", index), 0)
}

// ==================== Limit Errors ====================

/// Too many properties.
pub fn too_many_properties(limit: usize, line: usize) -> PickleError {
    PickleError::limit(format!("too many properties: limit is {}", limit), line)
}

/// Too many categories.
pub fn too_many_categories(limit: usize, line: usize) -> PickleError {
    PickleError::limit(format!("too many categories: limit is {}", limit), line)
}

/// Too many components.
pub fn too_many_components(limit: usize, line: usize) -> PickleError {
    PickleError::limit(format!("too many components: limit is {}", limit), line)
}

// ==================== File Errors ====================

/// A document is already open on this handle.
pub fn already_open(path: &Path) -> PickleError {
    PickleError::already_open(format!(
        "a document is already open (\"{}\"), close it before opening another one",
        path.display()
    ))
}

/// Operation requires an open document.
pub fn not_open(action: &str) -> PickleError {
    PickleError::not_open(format!(
        "can't {} a document that hasn't been opened yet",
        action
    ))
}

/// Opening a file failed.
pub fn open_failed(path: &Path, err: &std::io::Error) -> PickleError {
    PickleError::io(format!("couldn't open file \"{}\": {}", path.display(), err), 0)
}

/// Parsing was requested on a handle opened for writing.
pub fn parse_write_mode(path: &Path) -> PickleError {
    PickleError::unsupported(format!(
        "\"{}\" was opened for writing; writing documents is not supported",
        path.display()
    ))
}

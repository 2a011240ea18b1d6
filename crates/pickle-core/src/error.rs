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

//! Error types for PickLE parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred while handling a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickleErrorKind {
    /// Stream open/read/close failure, including over-long lines.
    Io,
    /// Grammar violation at a specific line.
    Malformed,
    /// Operation the library deliberately does not implement.
    Unsupported,
    /// A document file is already open on this handle.
    AlreadyOpen,
    /// The operation needs an open document file.
    NotOpen,
    /// A configured resource limit was exceeded.
    LimitExceeded,
}

impl fmt::Display for PickleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IOError"),
            Self::Malformed => write!(f, "MalformedError"),
            Self::Unsupported => write!(f, "UnsupportedError"),
            Self::AlreadyOpen => write!(f, "AlreadyOpenError"),
            Self::NotOpen => write!(f, "NotOpenError"),
            Self::LimitExceeded => write!(f, "LimitError"),
        }
    }
}

/// An error raised while reading or parsing a PickLE document.
///
/// Every fallible operation returns its own error value; there is no shared
/// "last error" state to consult afterwards.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct PickleError {
    /// The kind of error.
    pub kind: PickleErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when no line applies).
    pub line: usize,
    /// Raw text of the offending line, when there is one.
    pub context: Option<String>,
}

impl PickleError {
    /// Create a new error.
    pub fn new(kind: PickleErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: None,
        }
    }

    /// Attach the raw line the error was raised for.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn io(message: impl Into<String>, line: usize) -> Self {
        Self::new(PickleErrorKind::Io, message, line)
    }

    pub fn malformed(message: impl Into<String>, line: usize) -> Self {
        Self::new(PickleErrorKind::Malformed, message, line)
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(PickleErrorKind::Unsupported, message, 0)
    }

    pub fn already_open(message: impl Into<String>) -> Self {
        Self::new(PickleErrorKind::AlreadyOpen, message, 0)
    }

    pub fn not_open(message: impl Into<String>) -> Self {
        Self::new(PickleErrorKind::NotOpen, message, 0)
    }

    pub fn limit(message: impl Into<String>, line: usize) -> Self {
        Self::new(PickleErrorKind::LimitExceeded, message, line)
    }

    /// Print this error to stderr as `ERROR: <message>`.
    ///
    /// This is the only place the library writes to a terminal on its own.
    pub fn print(&self) {
        eprintln!("{}", self.report());
    }

    /// The line [`print`](Self::print) writes, without the newline.
    pub fn report(&self) -> String {
        format!("ERROR: {}", self)
    }
}

impl From<std::io::Error> for PickleError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), 0)
    }
}

/// Result type for PickLE operations.
pub type PickleResult<T> = Result<T, PickleError>;

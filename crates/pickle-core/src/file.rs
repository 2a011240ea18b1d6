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

//! File handle lifecycle for PickLE documents.
//!
//! A [`PickleFile`] pairs a path with an open file and enforces the
//! open -> parse -> close order. The scanner itself only ever sees a byte stream.

use crate::document::Document;
use crate::error::PickleResult;
use crate::errors::messages;
use crate::parser::{parse_with_options, ParseOptions};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How a document file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Open an existing file for parsing.
    #[default]
    Read,
    /// Create or truncate a file.
    Write,
    /// Create a file or append to it.
    Append,
}

impl OpenMode {
    fn options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            Self::Read => options.read(true),
            Self::Write => options.write(true).create(true).truncate(true),
            Self::Append => options.append(true).create(true),
        };
        options
    }
}

/// A PickLE document file handle.
///
/// # Examples
///
/// ```rust,no_run
/// use pickle_core::{OpenMode, PickleFile};
///
/// # fn main() -> pickle_core::PickleResult<()> {
/// let mut file = PickleFile::new();
/// file.open("board.pkl", OpenMode::Read)?;
/// let doc = file.parse()?;
/// file.close()?;
///
/// println!("{} categories", doc.categories().len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PickleFile {
    path: Option<PathBuf>,
    mode: OpenMode,
    handle: Option<File>,
}

impl PickleFile {
    /// Create a handle with no file open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document file.
    ///
    /// Fails with `AlreadyOpen` if this handle already has a file open.
    pub fn open(&mut self, path: impl AsRef<Path>, mode: OpenMode) -> PickleResult<()> {
        let path = path.as_ref();
        if let Some(current) = self.handle.as_ref().and(self.path.as_deref()) {
            return Err(messages::already_open(current));
        }

        let handle = mode
            .options()
            .open(path)
            .map_err(|e| messages::open_failed(path, &e))?;

        debug!(path = %path.display(), ?mode, "opened document");
        self.path = Some(path.to_path_buf());
        self.mode = mode;
        self.handle = Some(handle);
        Ok(())
    }

    /// Close the open file.
    ///
    /// Nothing is ever written through the handle, so there is nothing to flush
    /// and the only possible failure is `NotOpen`.
    pub fn close(&mut self) -> PickleResult<()> {
        match self.handle.take() {
            Some(handle) => {
                drop(handle);
                debug!(path = ?self.path, "closed document");
                Ok(())
            }
            None => Err(messages::not_open("close")),
        }
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Path of the most recently opened file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Parse the open file with default options.
    pub fn parse(&mut self) -> PickleResult<Document> {
        self.parse_with_options(ParseOptions::default())
    }

    /// Parse the open file.
    ///
    /// Fails with `NotOpen` before [`open`](Self::open) and with `Unsupported`
    /// when the file was opened for writing.
    pub fn parse_with_options(&mut self, options: ParseOptions) -> PickleResult<Document> {
        let (Some(handle), Some(path)) = (self.handle.as_mut(), self.path.as_deref()) else {
            return Err(messages::not_open("parse"));
        };

        if self.mode != OpenMode::Read {
            return Err(messages::parse_write_mode(path));
        }

        parse_with_options(handle, options)
    }
}

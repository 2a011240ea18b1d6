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

//! Line reader for the document scanner.
//!
//! Pulls one logical line at a time from any byte stream. The line terminator
//! is stripped, carriage returns are dropped wherever they appear, and the end
//! of the stream is reported as `None` so it can't be confused with a blank
//! line. A stream that ends without a trailing newline still yields its last
//! line.

use crate::error::PickleResult;
use crate::errors::messages;
use memchr::memchr;
use std::io::{self, BufRead, BufReader, Read};
use tracing::{trace, warn};

/// Default read buffer size.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Buffered line reader with line number tracking.
///
/// Lines are assembled incrementally from the underlying buffer, so a line
/// longer than `max_line_length` is rejected without ever being held in memory
/// in full.
///
/// # Examples
///
/// ```rust
/// use pickle_core::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("Title: Demo\r\n\n---"));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "Title: Demo".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((3, "---".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    max_line_length: usize,
    buffer: Vec<u8>,
    exhausted: bool,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader with the default line length limit.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(reader, DEFAULT_BUFFER_SIZE)
    }

    /// Create with a specific buffer capacity.
    ///
    /// A capacity of 0 is raised to 1 byte; an empty buffer would read as end of stream.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity.max(1), reader),
            line_number: 0,
            max_line_length: crate::Limits::default().max_line_length,
            buffer: Vec::new(),
            exhausted: false,
        }
    }

    /// Set the maximum accepted line length in bytes.
    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Get the number of the last line read (0 before the first read).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A line over the length
    /// limit is an `Io` error for that read only: the rest of the line is
    /// discarded and the next call continues with the following line.
    pub fn next_line(&mut self) -> PickleResult<Option<(usize, String)>> {
        if self.exhausted {
            return Ok(None);
        }

        self.buffer.clear();
        let mut saw_bytes = false;
        let mut overflowed = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(messages::read_failed(&e, self.line_number + 1)),
            };

            if available.is_empty() {
                self.exhausted = true;
                if !saw_bytes {
                    return Ok(None);
                }
                break;
            }
            saw_bytes = true;

            let (chunk, consumed, found_newline) = match memchr(b'\n', available) {
                Some(pos) => (&available[..pos], pos + 1, true),
                None => (available, available.len(), false),
            };

            if !overflowed {
                self.buffer
                    .extend(chunk.iter().copied().filter(|&b| b != b'\r'));
                if self.buffer.len() > self.max_line_length {
                    overflowed = true;
                    self.buffer.clear();
                }
            }

            self.reader.consume(consumed);
            if found_newline {
                break;
            }
        }

        self.line_number += 1;

        if overflowed {
            warn!(
                line = self.line_number,
                limit = self.max_line_length,
                "line exceeds maximum length"
            );
            return Err(messages::line_too_long(self.max_line_length, self.line_number));
        }

        let line = std::str::from_utf8(&self.buffer)
            .map_err(|_| messages::invalid_utf8(self.line_number))?
            .to_owned();

        trace!(line = self.line_number, text = %line, "read line");
        Ok(Some((self.line_number, line)))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = PickleResult<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

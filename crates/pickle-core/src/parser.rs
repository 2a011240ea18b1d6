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

//! Document scanner for PickLE documents.
//!
//! A document is scanned in a single pass over its lines:
//!
//! ```text
//! Start -> InProperties -> InBody -> Done
//!                 \           \
//!                  +-----------+--> Error
//! ```
//!
//! While in the header every non-blank line is a property until the `---`
//! terminator. In the body a line whose last character is `:` opens a category
//! and any other non-blank line is a component of the current category. Blank
//! lines are skipped in both sections. The first error aborts the scan; there is
//! no resynchronization.

use crate::category::{is_category_line, parse_category};
use crate::component::{parse_component, ComponentLine};
use crate::document::{CategoryId, Document};
use crate::error::PickleResult;
use crate::errors::messages;
use crate::lex::is_blank;
use crate::limits::Limits;
use crate::property::{parse_property, PropertyLine};
use crate::reader::{LineReader, DEFAULT_BUFFER_SIZE};
use std::io::Read;
use tracing::debug;

/// Parsing options for PickLE documents.
///
/// # Examples
///
/// ```rust
/// use pickle_core::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .max_line_length(4096)
///     .max_components(500)
///     .build();
///
/// assert_eq!(opts.limits.max_line_length, 4096);
/// assert_eq!(opts.limits.max_components, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
    /// Read buffer size in bytes.
    pub buffer_size: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    buffer_size: usize,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            limits: Limits::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the maximum line length in bytes (default: 1024).
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    /// Set the maximum number of properties (default: 10k).
    pub fn max_properties(mut self, count: usize) -> Self {
        self.limits.max_properties = count;
        self
    }

    /// Set the maximum number of categories (default: 10k).
    pub fn max_categories(mut self, count: usize) -> Self {
        self.limits.max_categories = count;
        self
    }

    /// Set the maximum number of components (default: 1M).
    pub fn max_components(mut self, count: usize) -> Self {
        self.limits.max_components = count;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the read buffer size in bytes (default: 8KB, minimum: 1).
    pub fn buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            buffer_size: self.buffer_size,
        }
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Nothing read yet.
    Start,
    /// Reading header properties.
    InProperties,
    /// Reading categories and components.
    InBody,
    /// The whole document was parsed.
    Done,
    /// Parsing failed; the document holds whatever was parsed before.
    Error,
}

/// Single-pass scanner that populates a [`Document`] from a byte stream.
///
/// Most callers want [`parse`]; the scanner is public so the partially
/// populated document can still be inspected after a failure.
///
/// # Examples
///
/// ```rust
/// use pickle_core::{ParseOptions, ScanState, Scanner};
///
/// let input = "Title: Demo\n---\nR1 10k 0805\n";
/// let mut scanner = Scanner::new(input.as_bytes(), ParseOptions::default());
///
/// assert!(scanner.run().is_err()); // component before any category
/// assert_eq!(scanner.state(), ScanState::Error);
/// assert_eq!(scanner.document().properties().len(), 1);
/// ```
pub struct Scanner<R: Read> {
    reader: LineReader<R>,
    limits: Limits,
    state: ScanState,
    document: Document,
    current_category: Option<CategoryId>,
    components: usize,
}

impl<R: Read> Scanner<R> {
    /// Create a scanner over `reader`.
    pub fn new(reader: R, options: ParseOptions) -> Self {
        let reader = LineReader::with_capacity(reader, options.buffer_size)
            .with_max_line_length(options.limits.max_line_length);

        Self {
            reader,
            limits: options.limits,
            state: ScanState::Start,
            document: Document::new(),
            current_category: None,
            components: 0,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// The document as populated so far.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Scan the rest of the stream.
    ///
    /// Any error moves the scanner to [`ScanState::Error`], where it stays.
    pub fn run(&mut self) -> PickleResult<()> {
        loop {
            let step = match self.state {
                ScanState::Start => {
                    self.transition(ScanState::InProperties);
                    Ok(())
                }
                ScanState::InProperties => self.scan_property(),
                ScanState::InBody => self.scan_body(),
                ScanState::Done | ScanState::Error => return Ok(()),
            };

            if let Err(e) = step {
                self.transition(ScanState::Error);
                return Err(e);
            }
        }
    }

    fn transition(&mut self, next: ScanState) {
        debug!(
            from = ?self.state,
            to = ?next,
            line = self.reader.line_number(),
            "scanner transition"
        );
        self.state = next;
    }

    /// Consume lines until one property or the terminator has been handled.
    fn scan_property(&mut self) -> PickleResult<()> {
        loop {
            let Some((line_num, line)) = self.reader.next_line()? else {
                return Err(messages::missing_separator(self.reader.line_number()));
            };

            if is_blank(&line) {
                continue;
            }

            match parse_property(&line, line_num)? {
                PropertyLine::Property(property) => {
                    if self.document.properties().len() >= self.limits.max_properties {
                        return Err(messages::too_many_properties(
                            self.limits.max_properties,
                            line_num,
                        ));
                    }
                    debug!(line = line_num, name = property.name(), "property");
                    self.document.add_property(property);
                }
                PropertyLine::Terminator => self.transition(ScanState::InBody),
            }
            return Ok(());
        }
    }

    /// Consume lines until one category or component has been handled, or
    /// the stream ends.
    fn scan_body(&mut self) -> PickleResult<()> {
        loop {
            let Some((line_num, line)) = self.reader.next_line()? else {
                self.transition(ScanState::Done);
                return Ok(());
            };

            if is_blank(&line) {
                continue;
            }

            if is_category_line(&line) {
                let category = parse_category(&line, line_num)?;
                if self.document.categories().len() >= self.limits.max_categories {
                    return Err(messages::too_many_categories(self.limits.max_categories, line_num));
                }
                debug!(line = line_num, name = category.name(), "category");
                self.current_category = Some(self.document.add_category(category));
                return Ok(());
            }

            let category = self.current_category.ok_or_else(|| {
                messages::component_without_category(line_num).with_context(line.as_str())
            })?;

            match parse_component(&line, line_num, category)? {
                ComponentLine::Component(component) => {
                    if self.components >= self.limits.max_components {
                        return Err(messages::too_many_components(
                            self.limits.max_components,
                            line_num,
                        ));
                    }
                    debug!(line = line_num, refdes = ?component.refdes(), "component");
                    self.document.add_component(category, component)?;
                    self.components += 1;
                }
                ComponentLine::EndOfRun => {}
            }
            return Ok(());
        }
    }
}

/// Parse a PickLE document from a byte stream with default options.
///
/// # Examples
///
/// ```rust
/// let input = "Title: Demo Board\nRev: A\n---\nResistors:\nR1,R2 10k 0805 pull-ups\n";
/// let doc = pickle_core::parse(input.as_bytes()).unwrap();
///
/// assert_eq!(doc.properties().len(), 2);
/// assert_eq!(doc.categories()[0].name(), "Resistors");
/// assert_eq!(doc.categories()[0].components()[0].refdes(), ["R1", "R2"]);
/// ```
pub fn parse<R: Read>(reader: R) -> PickleResult<Document> {
    parse_with_options(reader, ParseOptions::default())
}

/// Parse a PickLE document from a byte stream.
pub fn parse_with_options<R: Read>(reader: R, options: ParseOptions) -> PickleResult<Document> {
    let mut scanner = Scanner::new(reader, options);
    scanner.run()?;

    let document = scanner.into_document();
    debug!(
        properties = document.properties().len(),
        categories = document.categories().len(),
        components = document.len_components(),
        "document parsed"
    );
    Ok(document)
}

/// Parse a PickLE document held in memory.
pub fn parse_str(input: &str) -> PickleResult<Document> {
    parse(input.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PickleErrorKind;

    const DEMO: &str = "Title: Demo Board\nRev: A\n---\nResistors:\nR1,R2 10k 0805 pull-ups\n";

    // ==================== Options tests ====================

    #[test]
    fn test_default_options() {
        let opts = ParseOptions::default();
        assert_eq!(opts.limits, Limits::default());
        assert_eq!(opts.buffer_size, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn test_builder_matches_default() {
        assert_eq!(ParseOptions::builder().build(), ParseOptions::default());
    }

    #[test]
    fn test_builder_overrides() {
        let opts = ParseOptions::builder()
            .max_properties(3)
            .max_categories(2)
            .buffer_size(16)
            .build();
        assert_eq!(opts.limits.max_properties, 3);
        assert_eq!(opts.limits.max_categories, 2);
        assert_eq!(opts.buffer_size, 16);
    }

    // ==================== State machine tests ====================

    #[test]
    fn test_scanner_reaches_done() {
        let mut scanner = Scanner::new(DEMO.as_bytes(), ParseOptions::default());
        assert_eq!(scanner.state(), ScanState::Start);
        scanner.run().unwrap();
        assert_eq!(scanner.state(), ScanState::Done);
    }

    #[test]
    fn test_run_after_done_is_noop() {
        let mut scanner = Scanner::new(DEMO.as_bytes(), ParseOptions::default());
        scanner.run().unwrap();
        scanner.run().unwrap();
        assert_eq!(scanner.document().len_components(), 1);
    }

    #[test]
    fn test_error_state_is_absorbing() {
        let mut scanner = Scanner::new("Bad line\n---\n".as_bytes(), ParseOptions::default());
        assert!(scanner.run().is_err());
        assert_eq!(scanner.state(), ScanState::Error);
        assert!(scanner.run().is_ok());
        assert_eq!(scanner.state(), ScanState::Error);
    }

    #[test]
    fn test_partial_document_after_error() {
        let input = "A: 1\n---\nCaps:\nC1 1u 0603\nbroken\n";
        let mut scanner = Scanner::new(input.as_bytes(), ParseOptions::default());
        let err = scanner.run().unwrap_err();
        assert_eq!(err.line, 5);
        assert_eq!(scanner.document().categories().len(), 1);
        assert_eq!(scanner.document().len_components(), 1);
    }

    // ==================== Section tests ====================

    #[test]
    fn test_demo_document() {
        let doc = parse_str(DEMO).unwrap();
        assert_eq!(doc.properties().len(), 2);
        assert_eq!(doc.categories().len(), 1);
        let comp = &doc.categories()[0].components()[0];
        assert_eq!(doc.category(comp.category()).unwrap().name(), "Resistors");
    }

    #[test]
    fn test_blank_lines_everywhere() {
        let input = "\n  \nA: 1\n\n---\n\n\t\nCaps:\n\nC1 1u 0603\n\n";
        let doc = parse_str(input).unwrap();
        assert_eq!(doc.properties().len(), 1);
        assert_eq!(doc.len_components(), 1);
    }

    #[test]
    fn test_component_after_blank_stays_in_category() {
        let doc = parse_str("---\nCaps:\nC1 1u 0603\n\nC2 1u 0603\n").unwrap();
        assert_eq!(doc.categories()[0].components().len(), 2);
    }

    #[test]
    fn test_empty_body() {
        let doc = parse_str("A: 1\n---\n").unwrap();
        assert_eq!(doc.properties().len(), 1);
        assert!(doc.categories().is_empty());
    }

    #[test]
    fn test_terminator_only() {
        assert!(parse_str("---").unwrap().is_empty());
    }

    #[test]
    fn test_empty_category() {
        let doc = parse_str("---\nEmpty:\nFull:\nR1 1k 0402\n").unwrap();
        assert!(doc.categories()[0].components().is_empty());
        assert_eq!(doc.categories()[1].components().len(), 1);
    }

    #[test]
    fn test_trailing_colon_description_is_a_category() {
        let doc = parse_str("---\nMisc:\nJ1 conn 2x5 see note:\n").unwrap();
        assert_eq!(doc.categories().len(), 2);
        assert_eq!(doc.categories()[1].name(), "J1 conn 2x5 see note");
        assert_eq!(doc.len_components(), 0);
    }

    // ==================== Error tests ====================

    #[test]
    fn test_empty_input_is_missing_separator() {
        let err = parse_str("").unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::Malformed);
        assert!(err.message.contains("---"));
    }

    #[test]
    fn test_missing_separator_reports_last_line() {
        let err = parse_str("A: 1\nB: 2\n").unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::Malformed);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_component_before_category() {
        let err = parse_str("---\nR1 10k 0805\n").unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::Malformed);
        assert_eq!(err.line, 2);
        assert_eq!(err.context.as_deref(), Some("R1 10k 0805"));
    }

    #[test]
    fn test_bad_category_line() {
        let err = parse_str("---\n:\n").unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::Malformed);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_long_line_aborts_parse() {
        let opts = ParseOptions::builder().max_line_length(8).build();
        let input = "A: 1\n---\nThis category name is long:\n";
        let err = parse_with_options(input.as_bytes(), opts).unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::Io);
        assert_eq!(err.line, 3);
    }

    // ==================== Limit tests ====================

    #[test]
    fn test_property_limit() {
        let opts = ParseOptions::builder().max_properties(1).build();
        let err = parse_with_options("A: 1\nB: 2\n---\n".as_bytes(), opts).unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::LimitExceeded);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_category_limit() {
        let opts = ParseOptions::builder().max_categories(1).build();
        let err = parse_with_options("---\nA:\nB:\n".as_bytes(), opts).unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::LimitExceeded);
    }

    #[test]
    fn test_component_limit_spans_categories() {
        let opts = ParseOptions::builder().max_components(2).build();
        let input = "---\nA:\nR1 1k 0402\nB:\nR2 1k 0402\nR3 1k 0402\n";
        let err = parse_with_options(input.as_bytes(), opts).unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::LimitExceeded);
        assert_eq!(err.line, 6);
    }
}

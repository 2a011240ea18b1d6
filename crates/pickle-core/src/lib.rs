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

//! Parser and document model for PickLE pick list documents.
//!
//! A PickLE document is a flat text file describing an electronics bill of
//! materials: a header of `name: value` properties, a `---` terminator, and
//! then named categories of components that are ticked off while picking parts.
//!
//! ```text
//! Title: Demo Board
//! Rev: A
//! ---
//! Resistors:
//! [ ] R1,R2 10k 0805 pull-ups
//! [x] R3    1k  0603 LED current limit
//! ```
//!
//! # Parsing
//!
//! ```rust
//! use pickle_core::parse_str;
//!
//! let doc = parse_str("Title: Demo Board\n---\nResistors:\n[x] R3 1k 0603 LED\n").unwrap();
//!
//! assert_eq!(doc.property("Title").unwrap().value(), "Demo Board");
//! let comp = doc.components().next().unwrap();
//! assert!(comp.picked());
//! assert_eq!(doc.category(comp.category()).unwrap().name(), "Resistors");
//! ```
//!
//! # Structure
//!
//! - [`LineReader`] pulls lines from any [`std::io::Read`].
//! - [`parse_property`], [`parse_category`] and [`parse_component`] each
//!   handle one line of their construct.
//! - [`Scanner`] drives them through the header and body sections and builds
//!   the [`Document`].
//! - [`PickleFile`] wraps the open/parse/close lifecycle of a file on disk.
//!
//! Errors are returned as [`PickleError`] values carrying their own message,
//! line number and offending line. The library logs through `tracing` and never
//! prints unless [`PickleError::print`] is called.

mod category;
mod component;
mod document;
mod error;
pub mod errors;
mod file;
pub mod lex;
mod limits;
mod parser;
mod property;
mod reader;

pub use category::{is_category_line, parse_category, Category};
pub use component::{parse_component, Component, ComponentLine};
pub use document::{CategoryId, Document};
pub use error::{PickleError, PickleErrorKind, PickleResult};
pub use file::{OpenMode, PickleFile};
pub use limits::Limits;
pub use parser::{
    parse, parse_str, parse_with_options, ParseOptions, ParseOptionsBuilder, ScanState, Scanner,
};
pub use property::{parse_property, Property, PropertyLine, SECTION_TERMINATOR};
pub use reader::LineReader;

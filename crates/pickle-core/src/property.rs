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

//! Document properties and the property line parser.

use crate::error::PickleResult;
use crate::errors::messages;
use crate::lex::{skip_any, split_at_char};

/// Section terminator that ends the property header.
pub const SECTION_TERMINATOR: &str = "---";

/// Characters skipped between a property name and its value.
const VALUE_SEPARATORS: &[char] = &[':', ' ', '\t'];

/// A document-level `name: value` metadata entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    name: String,
    value: String,
}

impl Property {
    /// Create a new property.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// Outcome of parsing one line of the property header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyLine {
    /// A `name: value` property.
    Property(Property),
    /// The `---` section terminator.
    Terminator,
}

/// Parse a single non-blank line of the property header.
///
/// The name is everything before the first colon, verbatim. The value is what
/// follows once a run of colons, spaces and tabs has been skipped; trailing
/// whitespace is kept.
///
/// # Examples
///
/// ```rust
/// use pickle_core::{parse_property, Property, PropertyLine};
///
/// let parsed = parse_property("Title: Demo Board", 1).unwrap();
/// assert_eq!(parsed, PropertyLine::Property(Property::new("Title", "Demo Board")));
///
/// assert_eq!(parse_property("---", 2).unwrap(), PropertyLine::Terminator);
/// assert!(parse_property("Name:", 3).is_err());
/// ```
pub fn parse_property(line: &str, line_num: usize) -> PickleResult<PropertyLine> {
    if line.starts_with('-') {
        if line == SECTION_TERMINATOR {
            return Ok(PropertyLine::Terminator);
        }
        return Err(messages::property_starts_with_dash(line_num).with_context(line));
    }

    if line.starts_with(':') {
        return Err(messages::property_starts_with_colon(line_num).with_context(line));
    }

    let (name, rest) = split_at_char(line, ':')
        .ok_or_else(|| messages::property_missing_colon(line_num).with_context(line))?;

    let value = skip_any(rest, VALUE_SEPARATORS);
    if value.is_empty() {
        return Err(messages::property_missing_value(line_num).with_context(line));
    }

    Ok(PropertyLine::Property(Property::new(name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PickleErrorKind;

    fn property(line: &str) -> Property {
        match parse_property(line, 1).unwrap() {
            PropertyLine::Property(prop) => prop,
            PropertyLine::Terminator => panic!("expected a property for {:?}", line),
        }
    }

    fn error_message(line: &str) -> String {
        let err = parse_property(line, 4).unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::Malformed);
        assert_eq!(err.line, 4);
        assert_eq!(err.context.as_deref(), Some(line));
        err.message
    }

    // ==================== Successful parses ====================

    #[test]
    fn test_simple_property() {
        let prop = property("Title: Demo Board");
        assert_eq!(prop.name(), "Title");
        assert_eq!(prop.value(), "Demo Board");
    }

    #[test]
    fn test_value_without_space() {
        assert_eq!(property("Rev:A").value(), "A");
    }

    #[test]
    fn test_skips_run_of_colons_and_whitespace() {
        assert_eq!(property("Rev: \t:: A").value(), "A");
    }

    #[test]
    fn test_value_keeps_trailing_whitespace() {
        assert_eq!(property("Rev: A  ").value(), "A  ");
    }

    #[test]
    fn test_value_may_contain_colons() {
        assert_eq!(property("Time: 12:30").value(), "12:30");
    }

    #[test]
    fn test_name_is_verbatim_before_colon() {
        assert_eq!(property("Board Name : X").name(), "Board Name ");
    }

    #[test]
    fn test_dash_inside_name_is_fine() {
        assert_eq!(property("Part-Count: 12").name(), "Part-Count");
    }

    // ==================== Terminator ====================

    #[test]
    fn test_terminator() {
        assert_eq!(parse_property("---", 1).unwrap(), PropertyLine::Terminator);
    }

    #[test]
    fn test_terminator_must_be_exact() {
        assert!(error_message("----").contains("dash"));
        assert!(error_message("--- ").contains("dash"));
        assert!(error_message("-Name: x").contains("dash"));
    }

    // ==================== Errors ====================

    #[test]
    fn test_leading_colon() {
        assert!(error_message(":value").contains("start with a colon"));
    }

    #[test]
    fn test_missing_colon() {
        assert!(error_message("Title Demo").contains("does not contain a colon"));
    }

    #[test]
    fn test_missing_value() {
        assert!(error_message("Name:").contains("does not contain a value"));
        assert!(error_message("Name: \t ").contains("does not contain a value"));
        assert!(error_message("Name:::").contains("does not contain a value"));
    }

    // ==================== Setters ====================

    #[test]
    fn test_setters() {
        let mut prop = Property::default();
        prop.set_name("Title");
        prop.set_value("Board");
        assert_eq!(prop, Property::new("Title", "Board"));
    }
}

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

//! Components and the component line parser.
//!
//! A component line has the shape
//!
//! ```text
//! [<checkbox>] <refdes-list> <value> <package> [<description>]
//! ```
//!
//! - `<checkbox>` is an optional `[ ]` (not picked) or `[x]`/`[X]` (picked).
//! - `<refdes-list>` is a comma-separated run of designators, e.g. `R1,R2,R3`.
//! - `<value>` and `<package>` are single whitespace-delimited tokens.
//! - `<description>` is the rest of the line, verbatim.

use crate::document::CategoryId;
use crate::error::PickleResult;
use crate::errors::messages;
use crate::lex::{enclosed, is_blank, is_whitespace, next_token, skip_whitespace};

/// One part entry of a pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Component {
    picked: bool,
    name: Option<String>,
    value: Option<String>,
    description: Option<String>,
    package: Option<String>,
    refdes: Vec<String>,
    category: CategoryId,
}

impl Component {
    /// Create an empty, unpicked component belonging to `category`.
    pub fn new(category: CategoryId) -> Self {
        Self {
            picked: false,
            name: None,
            value: None,
            description: None,
            package: None,
            refdes: Vec::new(),
            category,
        }
    }

    pub fn picked(&self) -> bool {
        self.picked
    }

    pub fn set_picked(&mut self, picked: bool) {
        self.picked = picked;
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn set_package(&mut self, package: impl Into<String>) {
        self.package = Some(package.into());
    }

    /// Reference designators in source order, duplicates kept.
    pub fn refdes(&self) -> &[String] {
        &self.refdes
    }

    pub fn add_refdes(&mut self, refdes: impl Into<String>) {
        self.refdes.push(refdes.into());
    }

    /// The category this component belongs to.
    ///
    /// Resolve it with [`Document::category`](crate::Document::category).
    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub(crate) fn set_category(&mut self, category: CategoryId) {
        self.category = category;
    }
}

/// Outcome of parsing one line inside a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentLine {
    /// A component record.
    Component(Component),
    /// A blank line: the current run of components is over.
    EndOfRun,
}

/// Parse a component line for the category `category`.
///
/// # Examples
///
/// ```rust
/// use pickle_core::{parse_component, CategoryId, ComponentLine};
///
/// let parsed = parse_component("[x] R1,R2 10k 0805 pull-ups", 7, CategoryId::new(0)).unwrap();
/// let ComponentLine::Component(comp) = parsed else { panic!() };
/// assert!(comp.picked());
/// assert_eq!(comp.refdes(), ["R1", "R2"]);
/// assert_eq!(comp.value(), Some("10k"));
/// assert_eq!(comp.package(), Some("0805"));
/// assert_eq!(comp.description(), Some("pull-ups"));
/// ```
pub fn parse_component(
    line: &str,
    line_num: usize,
    category: CategoryId,
) -> PickleResult<ComponentLine> {
    if is_blank(line) {
        return Ok(ComponentLine::EndOfRun);
    }

    let mut component = Component::new(category);
    let mut rest = skip_whitespace(line);

    if rest.starts_with('[') {
        let (picked, after) = parse_checkbox(rest, line_num).map_err(|e| e.with_context(line))?;
        component.picked = picked;
        rest = after;
    }

    let (refdes, after) = next_token(rest).ok_or_else(|| {
        messages::component_missing_field("reference designators", line_num).with_context(line)
    })?;
    for designator in refdes.split(',') {
        if designator.is_empty() {
            return Err(messages::empty_refdes(line_num).with_context(line));
        }
        component.add_refdes(designator);
    }

    let (value, after) = next_token(after)
        .ok_or_else(|| messages::component_missing_field("value", line_num).with_context(line))?;
    component.value = Some(value.to_owned());

    let (package, after) = next_token(after)
        .ok_or_else(|| messages::component_missing_field("package", line_num).with_context(line))?;
    component.package = Some(package.to_owned());

    let description = skip_whitespace(after);
    if !description.is_empty() {
        component.description = Some(description.to_owned());
    }

    Ok(ComponentLine::Component(component))
}

/// Parse a leading `[ ]`/`[x]` marker and return the picked state and the
/// text after it.
fn parse_checkbox(s: &str, line_num: usize) -> PickleResult<(bool, &str)> {
    let marker = &s[..s.find(is_whitespace).unwrap_or(s.len())];
    let invalid = || messages::invalid_checkbox(marker, line_num);

    let (mark, after) = enclosed(s, '[', ']').ok_or_else(invalid)?;
    if !after.is_empty() && !after.starts_with(is_whitespace) {
        return Err(invalid());
    }

    match mark {
        " " => Ok((false, after)),
        "x" | "X" => Ok((true, after)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PickleErrorKind;

    fn component(line: &str) -> Component {
        match parse_component(line, 1, CategoryId::new(0)).unwrap() {
            ComponentLine::Component(comp) => comp,
            ComponentLine::EndOfRun => panic!("expected a component for {:?}", line),
        }
    }

    fn error_message(line: &str) -> String {
        let err = parse_component(line, 12, CategoryId::new(0)).unwrap_err();
        assert_eq!(err.kind, PickleErrorKind::Malformed);
        assert_eq!(err.line, 12);
        assert_eq!(err.context.as_deref(), Some(line));
        err.message
    }

    // ==================== Field extraction ====================

    #[test]
    fn test_full_line() {
        let comp = component("R1,R2 10k 0805 pull-ups");
        assert!(!comp.picked());
        assert_eq!(comp.refdes(), ["R1", "R2"]);
        assert_eq!(comp.value(), Some("10k"));
        assert_eq!(comp.package(), Some("0805"));
        assert_eq!(comp.description(), Some("pull-ups"));
        assert_eq!(comp.name(), None);
        assert_eq!(comp.category(), CategoryId::new(0));
    }

    #[test]
    fn test_description_is_optional() {
        let comp = component("C1 100n 0603");
        assert_eq!(comp.description(), None);
        assert_eq!(component("C1 100n 0603 \t").description(), None);
    }

    #[test]
    fn test_description_kept_verbatim() {
        let comp = component("U1 ATmega328P TQFP-32   main MCU,  5V  ");
        assert_eq!(comp.description(), Some("main MCU,  5V  "));
    }

    #[test]
    fn test_tabs_separate_fields() {
        let comp = component("D1\tred\t0805\tpower LED");
        assert_eq!(comp.refdes(), ["D1"]);
        assert_eq!(comp.value(), Some("red"));
        assert_eq!(comp.package(), Some("0805"));
        assert_eq!(comp.description(), Some("power LED"));
    }

    #[test]
    fn test_leading_whitespace_ignored() {
        let comp = component("   R5 1k 0402");
        assert_eq!(comp.refdes(), ["R5"]);
    }

    #[test]
    fn test_duplicate_refdes_kept_in_order() {
        assert_eq!(component("R3,R1,R3 1k 0402").refdes(), ["R3", "R1", "R3"]);
    }

    // ==================== Checkbox ====================

    #[test]
    fn test_unchecked_box() {
        let comp = component("[ ] R1 10k 0805");
        assert!(!comp.picked());
        assert_eq!(comp.refdes(), ["R1"]);
    }

    #[test]
    fn test_checked_box() {
        assert!(component("[x] R1 10k 0805").picked());
        assert!(component("[X] R1 10k 0805").picked());
    }

    #[test]
    fn test_invalid_checkbox_marks() {
        assert!(error_message("[?] R1 10k 0805").contains("'[?]'"));
        assert!(error_message("[] R1 10k 0805").contains("checkbox"));
        assert!(error_message("[xx] R1 10k 0805").contains("checkbox"));
    }

    #[test]
    fn test_checkbox_must_be_followed_by_whitespace() {
        assert!(error_message("[x]R1 10k 0805").contains("checkbox"));
    }

    #[test]
    fn test_unterminated_checkbox() {
        assert!(error_message("[x R1 10k 0805").contains("checkbox"));
    }

    // ==================== Missing fields ====================

    #[test]
    fn test_missing_value_and_package() {
        assert!(error_message("R1").contains("value"));
        assert!(error_message("R1 10k").contains("package"));
    }

    #[test]
    fn test_checkbox_only() {
        assert!(error_message("[x]").contains("reference designators"));
    }

    #[test]
    fn test_empty_refdes_entries() {
        assert!(error_message("R1,,R2 10k 0805").contains("empty entry"));
        assert!(error_message("R1, 10k 0805").contains("empty entry"));
        assert!(error_message(",R1 10k 0805").contains("empty entry"));
    }

    // ==================== End of run ====================

    #[test]
    fn test_blank_line_ends_run() {
        let parsed = parse_component("  \t", 3, CategoryId::new(1)).unwrap();
        assert_eq!(parsed, ComponentLine::EndOfRun);
        assert_eq!(parse_component("", 3, CategoryId::new(1)).unwrap(), ComponentLine::EndOfRun);
    }

    // ==================== Setters ====================

    #[test]
    fn test_programmatic_construction() {
        let mut comp = Component::new(CategoryId::new(2));
        comp.set_picked(true);
        comp.set_name("Bypass");
        comp.set_value("100n");
        comp.set_package("0402");
        comp.set_description("decoupling");
        comp.add_refdes("C1");
        comp.add_refdes("C2");

        assert!(comp.picked());
        assert_eq!(comp.name(), Some("Bypass"));
        assert_eq!(comp.refdes(), ["C1", "C2"]);
        assert_eq!(comp.category(), CategoryId::new(2));
    }
}

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

//! Component categories and the category line parser.

use crate::component::Component;
use crate::error::PickleResult;
use crate::errors::messages;
use crate::lex::split_at_char;

/// A named group of components, e.g. `Resistors`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category {
    name: String,
    components: Vec<Component>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Components in the order they were added.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub(crate) fn push_component(&mut self, component: Component) {
        self.components.push(component);
    }
}

/// Check if a raw body line opens a category.
///
/// Only the last character counts, so a component whose description ends in a
/// colon is classified as a category.
#[inline]
pub fn is_category_line(line: &str) -> bool {
    line.ends_with(':')
}

/// Parse a category line such as `Resistors:`.
///
/// The name is everything before the first colon.
///
/// # Examples
///
/// ```rust
/// use pickle_core::parse_category;
///
/// assert_eq!(parse_category("Resistors:", 5).unwrap().name(), "Resistors");
/// assert!(parse_category(":", 6).is_err());
/// ```
pub fn parse_category(line: &str, line_num: usize) -> PickleResult<Category> {
    if line.starts_with(':') {
        return Err(messages::category_starts_with_colon(line_num).with_context(line));
    }

    let (name, _) = split_at_char(line, ':')
        .ok_or_else(|| messages::category_missing_colon(line_num).with_context(line))?;

    Ok(Category::new(name))
}

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

//! Resource limits for PickLE parsing.

/// Configurable limits for parser resources.
///
/// The line limit bounds the reader's buffer; the count limits bound the size
/// of the document tree built from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum line length in bytes, terminator excluded (default: 1024).
    pub max_line_length: usize,
    /// Maximum number of properties (default: 10k).
    pub max_properties: usize,
    /// Maximum number of categories (default: 10k).
    pub max_categories: usize,
    /// Maximum number of components across all categories (default: 1M).
    pub max_components: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_line_length: 1024,
            max_properties: 10_000,
            max_categories: 10_000,
            max_components: 1_000_000,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_line_length: usize::MAX,
            max_properties: usize::MAX,
            max_categories: usize::MAX,
            max_components: usize::MAX,
        }
    }
}

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

//! Document structure for parsed pick lists.

use crate::category::Category;
use crate::component::Component;
use crate::error::PickleResult;
use crate::errors::messages;
use crate::property::Property;

/// Index of a category inside its [`Document`].
///
/// Components refer back to their category through this id instead of holding
/// a reference, so the document stays the single owner of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategoryId(usize);

impl CategoryId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A parsed PickLE document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Header properties in document order.
    properties: Vec<Property>,
    /// Categories in document order, each owning its components.
    categories: Vec<Category>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Get the first property called `name`.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Append a property.
    pub fn add_property(&mut self, property: Property) {
        self.properties.push(property);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolve a component's back reference.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(id.index())
    }

    /// Get the first category called `name`.
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    /// Append a category and return its id.
    pub fn add_category(&mut self, category: Category) -> CategoryId {
        self.categories.push(category);
        CategoryId::new(self.categories.len() - 1)
    }

    /// Append a component to the category `id`, pointing the component at it.
    pub fn add_component(&mut self, id: CategoryId, mut component: Component) -> PickleResult<()> {
        let category = self
            .categories
            .get_mut(id.index())
            .ok_or_else(|| messages::unknown_category(id.index()))?;
        component.set_category(id);
        category.push_component(component);
        Ok(())
    }

    /// All components in document order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.categories.iter().flat_map(|c| c.components().iter())
    }

    /// Total number of components across all categories.
    pub fn len_components(&self) -> usize {
        self.categories.iter().map(|c| c.components().len()).sum()
    }

    /// Check if the document has no properties and no categories.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.categories.is_empty()
    }
}

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

//! Show command - print the parsed contents of a PickLE document

use super::load_document;
use crate::error::CliError;
use colored::Colorize;
use pickle_core::{Component, Document};

/// Parse a document and print its properties, categories and components.
///
/// With `json` set the document is printed as pretty JSON instead.
pub fn show(file: &str, json: bool) -> Result<(), CliError> {
    let doc = load_document(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", render_document(&doc));
    }
    Ok(())
}

/// Render a document as the human-readable listing used by `show`.
pub fn render_document(doc: &Document) -> String {
    let mut out = format!("{} {}\n", "Properties:".bold(), doc.properties().len());
    for prop in doc.properties() {
        out.push_str(&format!("\t{} = {}\n", prop.name(), prop.value()));
    }

    out.push_str(&format!("{} {}\n", "Categories:".bold(), doc.categories().len()));
    for category in doc.categories() {
        out.push_str(&format!("\t- {}\n", category.name().cyan()));
        for comp in category.components() {
            out.push_str(&format!("\t    {}\n", render_component(comp)));
        }
    }

    out
}

fn render_component(comp: &Component) -> String {
    let mark = if comp.picked() { "[x]" } else { "[ ]" };
    let mut line = format!(
        "{} {} {} {}",
        mark,
        comp.refdes().join(", "),
        comp.value().unwrap_or("-"),
        comp.package().unwrap_or("-"),
    );
    if let Some(description) = comp.description() {
        line.push_str(" (");
        line.push_str(description);
        line.push(')');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document() {
        let doc = pickle_core::parse_str(
            "Title: Demo Board\n---\nResistors:\n[x] R1,R2 10k 0805 pull-ups\nR3 1k 0603\n",
        )
        .unwrap();
        let out = render_document(&doc);

        assert!(out.contains("\tTitle = Demo Board"));
        assert!(out.contains("Resistors"));
        assert!(out.contains("[x] R1, R2 10k 0805 (pull-ups)"));
        assert!(out.contains("[ ] R3 1k 0603\n"));
    }

    #[test]
    fn test_render_empty_document() {
        let out = render_document(&Document::new());
        assert!(out.contains(" 0\n"));
    }
}

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

//! PickLE CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **show**: Print a parsed pick list, or its JSON form with `--json`
//! - **validate**: Check document syntax and report counts
//!
//! # Configuration
//!
//! `PICKLE_MAX_LINE_LENGTH` overrides the longest line the parser accepts.
//! Logging goes to stderr and follows `RUST_LOG`; `--verbose` turns on
//! parser debug output.

pub mod cli;
pub mod commands;
pub mod error;

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

//! Lexical helpers shared by the line parsers.
//!
//! Whitespace in PickLE is only space and tab. Everything here works on
//! borrowed slices of the current line and never allocates.

/// Check if a character is PickLE whitespace.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Check if a line is blank (empty or whitespace only).
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_whitespace)
}

/// Skip a leading run of whitespace.
#[inline]
pub fn skip_whitespace(s: &str) -> &str {
    s.trim_start_matches(is_whitespace)
}

/// Skip a leading run of any of the characters in `set`.
#[inline]
pub fn skip_any<'a>(s: &'a str, set: &[char]) -> &'a str {
    s.trim_start_matches(|c| set.contains(&c))
}

/// Split `s` at the first occurrence of `delim`.
///
/// Returns the text before the delimiter and the text after it, both
/// excluding the delimiter itself.
#[inline]
pub fn split_at_char(s: &str, delim: char) -> Option<(&str, &str)> {
    let pos = s.find(delim)?;
    Some((&s[..pos], &s[pos + delim.len_utf8()..]))
}

/// Extract the next whitespace-delimited token.
///
/// Leading whitespace is skipped. Returns the token and the remainder that
/// follows it (not trimmed), or `None` if only whitespace is left.
pub fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = skip_whitespace(s);
    if s.is_empty() {
        return None;
    }

    let end = s.find(is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

/// Extract text enclosed between `open` and `close` at the start of `s`.
///
/// Returns the enclosed text and whatever follows the closing delimiter.
/// Returns `None` if `s` does not start with `open` or `close` never appears.
pub fn enclosed(s: &str, open: char, close: char) -> Option<(&str, &str)> {
    let inner = s.strip_prefix(open)?;
    let end = inner.find(close)?;
    Some((&inner[..end], &inner[end + close.len_utf8()..]))
}

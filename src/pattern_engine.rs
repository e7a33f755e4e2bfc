// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, sync::Arc};

use log::error;
use regex::Regex;

use crate::{
    regex_util::{RegexConsume, RegexFullMatch, RegexSubstitute},
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub type Result<T> = std::result::Result<T, InvalidRegexError>;

/// Matching and substitution primitives over a shared cache of compiled
/// patterns.
///
/// All patterns are compiled case-insensitively. Byte offsets are returned
/// for positions.
pub struct PatternEngine {
    cache: RegexCache,
}

impl PatternEngine {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(128) }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { cache: RegexCache::with_capacity(capacity) }
    }

    /// Returns the compiled matcher for `pattern`, reusing the cached one if
    /// this text was compiled before.
    pub fn compile(&self, pattern: &str) -> Result<Arc<Regex>> {
        self.cache.get_regex(pattern)
    }

    /// Number of distinct patterns compiled so far.
    pub fn cached_patterns(&self) -> usize {
        self.cache.len()
    }

    /// True iff some match of `pattern` spans the whole of `text`.
    /// An absent pattern never matches.
    pub fn matches_entirely(&self, pattern: Option<&str>, text: &str) -> Result<bool> {
        let Some(pattern) = pattern else {
            return Ok(false)
        };
        Ok(self.compile(pattern)?.full_match(text))
    }

    /// True if `pattern` matches anywhere in `text`. An absent pattern never
    /// matches.
    pub fn matches_exist(&self, pattern: Option<&str>, text: &str) -> Result<bool> {
        let Some(pattern) = pattern else {
            return Ok(false)
        };
        Ok(self.compile(pattern)?.is_match(text))
    }

    pub fn position_of_first_match(&self, pattern: &str, text: &str) -> Result<Option<usize>> {
        Ok(self.compile(pattern)?.find(text).map(|found| found.start()))
    }

    pub fn matches_at_start(&self, pattern: &str, text: &str) -> Result<bool> {
        Ok(self.compile(pattern)?.matches_start(text))
    }

    /// Substitutes `template` for matches of `pattern` in `text`.
    ///
    /// Zero matches leave `text` untouched, a single match rewrites only the
    /// matched span and two or more rewrite every match.
    pub fn substitute_all<'a>(
        &self,
        pattern: &str,
        text: &'a str,
        template: &str,
    ) -> Result<Cow<'a, str>> {
        Ok(self.compile(pattern)?.substitute_by_match_count(text, template))
    }

    /// Substitutes `template` for the first match only.
    ///
    /// An invalid pattern yields an empty string instead of an error.
    pub fn substitute_first<'a>(&self, pattern: &str, text: &'a str, template: &str) -> Cow<'a, str> {
        match self.compile(pattern) {
            Ok(regex) => regex.substitute_first_match(text, template),
            Err(err) => {
                error!("Invalid regex! {}: {}", pattern, err);
                Cow::Borrowed("")
            }
        }
    }

    pub fn remove_all<'a>(&self, pattern: &str, text: &'a str) -> Result<Cow<'a, str>> {
        self.substitute_all(pattern, text, "")
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new()
    }
}

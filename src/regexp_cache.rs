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

use std::sync::Arc;

use dashmap::DashMap;
use log::trace;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// The pattern text is not a valid regular expression.
#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Cache of case-insensitive compiled patterns keyed by their source text.
///
/// Entries are never evicted. Patterns come from territory metadata, which is
/// a closed set, so the map stops growing once every rule has been seen.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the cached matcher for `pattern`, compiling it on first use.
    ///
    /// Compilation runs outside of any shard lock. If two threads race on the
    /// same new pattern, the first insert wins and the other compiled copy is
    /// dropped, so every caller ends up holding the same `Arc`.
    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            trace!("Pattern '{}' found in cache", pattern);
            return Ok(regex.value().clone());
        }
        trace!("Compiling pattern '{}'", pattern);
        let compiled = Arc::new(
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()?,
        );
        let entry = self
            .cache
            .entry(pattern.to_string())
            .or_insert(compiled);
        Ok(entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

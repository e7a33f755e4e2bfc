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

use std::collections::HashMap;

use crate::interfaces::MetadataProvider;

/// One candidate formatting rule of a territory.
///
/// Templates use `$n` references to the capture groups of `pattern`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormat {
    pattern: String,
    format: Option<String>,
    intl_format: Option<String>,
    national_prefix_formatting_rule: Option<String>,
    /// Only the last entry is consulted when choosing a rule. Earlier entries
    /// are the less detailed variants kept in the source data.
    leading_digits_pattern: Vec<String>,
}

impl NumberFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_intl_format(mut self, intl_format: impl Into<String>) -> Self {
        self.intl_format = Some(intl_format.into());
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.set_national_prefix_formatting_rule(rule);
        self
    }

    pub fn with_leading_digits_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.leading_digits_pattern.push(pattern.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn intl_format(&self) -> Option<&str> {
        self.intl_format.as_deref()
    }

    pub fn national_prefix_formatting_rule(&self) -> Option<&str> {
        self.national_prefix_formatting_rule.as_deref()
    }

    pub fn set_national_prefix_formatting_rule(&mut self, rule: impl Into<String>) {
        self.national_prefix_formatting_rule = Some(rule.into());
    }

    pub fn leading_digits_pattern(&self) -> &[String] {
        &self.leading_digits_pattern
    }
}

/// Formatting data of one country calling code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerritoryMetadata {
    country_code: i32,
    national_prefix: Option<String>,
    preferred_extn_prefix: Option<String>,
    /// Table order matters, the first applicable rule is used.
    number_format: Vec<NumberFormat>,
}

impl TerritoryMetadata {
    pub fn new(country_code: i32) -> Self {
        Self {
            country_code,
            ..Default::default()
        }
    }

    pub fn with_national_prefix(mut self, national_prefix: impl Into<String>) -> Self {
        self.national_prefix = Some(national_prefix.into());
        self
    }

    pub fn with_preferred_extn_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.preferred_extn_prefix = Some(prefix.into());
        self
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format.push(number_format);
        self
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn national_prefix(&self) -> Option<&str> {
        self.national_prefix.as_deref()
    }

    pub fn preferred_extn_prefix(&self) -> Option<&str> {
        self.preferred_extn_prefix.as_deref()
    }

    pub fn number_format(&self) -> &[NumberFormat] {
        &self.number_format
    }
}

/// In-memory metadata provider keyed by country calling code.
#[derive(Debug, Clone, Default)]
pub struct MetadataCollection {
    metadata: HashMap<i32, TerritoryMetadata>,
}

impl MetadataCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `metadata`, replacing any territory already stored under the same
    /// country calling code.
    pub fn insert(&mut self, metadata: TerritoryMetadata) -> Option<TerritoryMetadata> {
        self.metadata.insert(metadata.country_code(), metadata)
    }

    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }
}

impl FromIterator<TerritoryMetadata> for MetadataCollection {
    fn from_iter<T: IntoIterator<Item = TerritoryMetadata>>(iter: T) -> Self {
        let mut collection = Self::new();
        for metadata in iter {
            collection.insert(metadata);
        }
        collection
    }
}

impl MetadataProvider for MetadataCollection {
    fn lookup(&self, country_calling_code: i32) -> Option<&TerritoryMetadata> {
        self.metadata.get(&country_calling_code)
    }
}

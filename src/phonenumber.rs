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

/// A parsed phone number as handed over by the parser.
///
/// The national significant number never stores a leading zero; numbers that
/// are displayed with one (Italian fixed lines, for example) carry
/// `italian_leading_zero` instead and the zero is put back when formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: String,
    extension: Option<String>,
    italian_leading_zero: bool,
}

impl PhoneNumber {
    pub fn new(country_code: i32, national_number: impl Into<String>) -> Self {
        Self {
            country_code,
            national_number: national_number.into(),
            extension: None,
            italian_leading_zero: false,
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_italian_leading_zero(mut self, italian_leading_zero: bool) -> Self {
        self.italian_leading_zero = italian_leading_zero;
        self
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }
}

// Copyright (C) 2009 The Libphonenumber Authors
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

use log::{debug, trace, warn};

use super::{
    PhoneNumberFormat,
    helper_constants::SEPARATOR_PATTERN,
    helper_functions::{
        apply_national_prefix_rule, build_national_prefix_rule, get_formatted_extension,
        get_national_significant_number, prefix_number_with_country_calling_code,
    },
};
use crate::{
    interfaces::MetadataProvider,
    macros::owned_from_cow_or,
    pattern_engine::{self, PatternEngine},
    phonemetadata::{NumberFormat, TerritoryMetadata},
    phonenumber::PhoneNumber,
    regex_util::RegexConsume,
    string_util::has_value,
};

/// Renders phone numbers using the formatting rules of a metadata provider.
///
/// Formatting never fails. Missing metadata, a territory without a matching
/// rule or a rule without a template all fall back to the national
/// significant number as is.
pub struct NumberFormatter<P: MetadataProvider> {
    /// Compiled pattern cache, possibly shared with other formatters.
    patterns: Arc<PatternEngine>,

    metadata: P,
}

impl<P: MetadataProvider> NumberFormatter<P> {
    pub fn new(metadata: P) -> Self {
        Self::with_pattern_engine(metadata, Arc::new(PatternEngine::new()))
    }

    pub fn with_pattern_engine(metadata: P, patterns: Arc<PatternEngine>) -> Self {
        Self { patterns, metadata }
    }

    pub fn pattern_engine(&self) -> &Arc<PatternEngine> {
        &self.patterns
    }

    pub fn metadata(&self) -> &P {
        &self.metadata
    }

    /// Formats a phone number in E164 format, e.g. `+33612345678`.
    pub fn to_e164(&self, phone_number: &PhoneNumber) -> String {
        self.format(phone_number, PhoneNumberFormat::E164)
    }

    /// Formats a phone number in international format, e.g. `+33 6 12 34 56 78`.
    pub fn to_international(&self, phone_number: &PhoneNumber) -> String {
        self.format(phone_number, PhoneNumberFormat::International)
    }

    /// Formats a phone number in the local national format, e.g. `06 12 34 56 78`.
    pub fn to_national(&self, phone_number: &PhoneNumber) -> String {
        self.format(phone_number, PhoneNumberFormat::National)
    }

    /// Formats a phone number as a `tel:` URI, e.g. `tel:+33-6-12-34-56-78`.
    pub fn to_rfc3966(&self, phone_number: &PhoneNumber) -> String {
        self.format(phone_number, PhoneNumberFormat::RFC3966)
    }

    pub fn format(&self, phone_number: &PhoneNumber, number_format: PhoneNumberFormat) -> String {
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = get_national_significant_number(phone_number);

        if matches!(number_format, PhoneNumberFormat::E164) {
            // Early exit for E164 case (even if the country calling code is
            // unknown) since no formatting of the national number is applied.
            // Extensions are not formatted.
            prefix_number_with_country_calling_code(
                country_calling_code,
                number_format,
                &mut formatted_number,
            );
            return formatted_number;
        }

        if let Some(metadata) = self.metadata.lookup(country_calling_code) {
            if let Cow::Owned(s) = self.format_nsn(&formatted_number, metadata, number_format) {
                formatted_number = s;
            }
            if let Some(formatted_extension) =
                get_formatted_extension(phone_number, metadata, number_format)
            {
                formatted_number.push_str(&formatted_extension);
            }
        } else {
            debug!("No metadata for country calling code {}", country_calling_code);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        formatted_number
    }

    /// Formats a number with caller supplied rules instead of the ones in the
    /// territory metadata. The territory still supplies the national prefix.
    pub fn format_by_pattern(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> String {
        let country_calling_code = phone_number.country_code();
        let mut national_significant_number = get_national_significant_number(phone_number);
        if matches!(number_format, PhoneNumberFormat::E164) {
            // User rules carry display layouts only, E164 never uses them.
            prefix_number_with_country_calling_code(
                country_calling_code,
                number_format,
                &mut national_significant_number,
            );
            return national_significant_number;
        }
        let Some(metadata) = self.metadata.lookup(country_calling_code) else {
            return national_significant_number;
        };

        let formatting_pattern = self
            .choose_formatting_pattern_for_number(user_defined_formats, &national_significant_number);

        let mut formatted_number = if let Some(formatting_pattern) = formatting_pattern {
            owned_from_cow_or!(
                self.format_nsn_using_pattern(
                    &national_significant_number,
                    formatting_pattern,
                    metadata,
                    number_format,
                ),
                national_significant_number
            )
        } else {
            national_significant_number
        };
        if let Some(extension) =
            get_formatted_extension(phone_number, metadata, PhoneNumberFormat::National)
        {
            formatted_number.push_str(&extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        formatted_number
    }

    fn format_nsn<'b>(
        &self,
        national_number: &'b str,
        metadata: &TerritoryMetadata,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        let formatting_pattern =
            self.choose_formatting_pattern_for_number(metadata.number_format(), national_number);
        if let Some(formatting_pattern) = formatting_pattern {
            self.format_nsn_using_pattern(national_number, formatting_pattern, metadata, number_format)
        } else {
            trace!("No format rule applies to '{}'", national_number);
            Cow::Borrowed(national_number)
        }
    }

    /// Picks the first rule in table order that applies to `national_number`.
    fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Option<&'b NumberFormat> {
        available_formats.iter().find(|format| {
            match self.is_format_applicable(format, national_number) {
                Ok(applicable) => applicable,
                Err(err) => {
                    warn!("Skipping format rule '{}': {}", format.pattern(), err);
                    false
                }
            }
        })
    }

    fn is_format_applicable(
        &self,
        format: &NumberFormat,
        national_number: &str,
    ) -> pattern_engine::Result<bool> {
        // Only the last leading digits pattern is consulted, the earlier ones
        // are less detailed versions of it.
        if let Some(last) = format.leading_digits_pattern().last() {
            if !self.patterns.matches_at_start(last, national_number)? {
                return Ok(false);
            }
        }
        let applicable = self
            .patterns
            .matches_entirely(Some(format.pattern()), national_number)?;
        if applicable {
            trace!("Number '{}' matches format '{}'", national_number, format.pattern());
        }
        Ok(applicable)
    }

    fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        metadata: &TerritoryMetadata,
        number_format: PhoneNumberFormat,
    ) -> Cow<'b, str> {
        let template = match number_format {
            PhoneNumberFormat::International | PhoneNumberFormat::RFC3966 => formatting_pattern
                .intl_format()
                .or(formatting_pattern.format()),
            _ => formatting_pattern.format(),
        };
        let Some(template) = template else {
            return Cow::Borrowed(national_number);
        };
        let mut number_format_rule = Cow::Borrowed(template);

        if matches!(number_format, PhoneNumberFormat::National) {
            if let (Some(national_prefix_formatting_rule), Some(national_prefix)) = (
                formatting_pattern.national_prefix_formatting_rule(),
                metadata.national_prefix(),
            ) {
                match build_national_prefix_rule(
                    &self.patterns,
                    national_prefix_formatting_rule,
                    national_prefix,
                ) {
                    Ok(prefix_rule) if has_value(&prefix_rule) => {
                        number_format_rule = Cow::Owned(
                            apply_national_prefix_rule(&self.patterns, &number_format_rule, &prefix_rule)
                                .into_owned(),
                        );
                    }
                    Ok(_) => {}
                    Err(err) => warn!(
                        "Ignoring national prefix rule '{}': {}",
                        national_prefix_formatting_rule, err
                    ),
                }
            }
        }

        let formatted_number = match self.patterns.substitute_all(
            formatting_pattern.pattern(),
            national_number,
            &number_format_rule,
        ) {
            Ok(formatted_number) => formatted_number,
            Err(err) => {
                warn!("Invalid format pattern '{}': {}", formatting_pattern.pattern(), err);
                return Cow::Borrowed(national_number);
            }
        };

        if matches!(number_format, PhoneNumberFormat::RFC3966) {
            return Cow::Owned(self.hyphenate(&formatted_number));
        }
        formatted_number
    }

    /// Drops leading separators and turns every remaining run of them into a
    /// single hyphen.
    fn hyphenate(&self, formatted_number: &str) -> String {
        let separators = match self.patterns.compile(SEPARATOR_PATTERN) {
            Ok(separators) => separators,
            Err(err) => {
                warn!("Invalid separator pattern: {}", err);
                return formatted_number.to_owned();
            }
        };
        let rest = separators
            .find_start(formatted_number)
            .map_or(formatted_number, |leading| &formatted_number[leading.end()..]);
        separators.replace_all(rest, "-").into_owned()
    }
}

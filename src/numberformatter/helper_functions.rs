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

use std::borrow::Cow;

use crate::{
    pattern_engine::{self, PatternEngine},
    phonemetadata::TerritoryMetadata,
    phonenumber::PhoneNumber,
};

use super::{
    PhoneNumberFormat,
    helper_constants::{
        DEFAULT_EXTN_PREFIX, FIRST_GROUP_PATTERN, FIRST_GROUP_PLACEHOLDER, FIRST_GROUP_TEMPLATE,
        NATIONAL_PREFIX_PLACEHOLDER, PLUS_SIGN, RFC3966_EXTN_PREFIX, RFC3966_PREFIX,
    },
};

/// Returns the national significant number with the leading zero put back
/// when the number carries one.
pub(super) fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
    let zero = if phone_number.italian_leading_zero() { "0" } else { "" };
    fast_cat::concat_str!(zero, phone_number.national_number())
}

/// A helper function that is used by Format and FormatByPattern.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so we'l do it once
    // with capacity of resulting string
    let new_str = match number_format {
        PhoneNumberFormat::E164 => {
            fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, formatted_number.as_str())
        }
        PhoneNumberFormat::International => fast_cat::concat_str!(
            PLUS_SIGN,
            country_calling_code_str,
            " ",
            formatted_number.as_str()
        ),
        PhoneNumberFormat::RFC3966 => fast_cat::concat_str!(
            RFC3966_PREFIX,
            PLUS_SIGN,
            country_calling_code_str,
            "-",
            formatted_number.as_str()
        ),
        PhoneNumberFormat::National => return,
    };
    *formatted_number = new_str;
}

/// Returns the formatted extension of a phone number, if the phone number had
/// an extension specified, else `None`.
pub(super) fn get_formatted_extension(
    phone_number: &PhoneNumber,
    metadata: &TerritoryMetadata,
    number_format: PhoneNumberFormat,
) -> Option<String> {
    let extension = phone_number.extension()?;
    let prefix = if matches!(number_format, PhoneNumberFormat::RFC3966) {
        RFC3966_EXTN_PREFIX
    } else {
        metadata.preferred_extn_prefix().unwrap_or(DEFAULT_EXTN_PREFIX)
    };
    Some(fast_cat::concat_str!(prefix, extension))
}

/// Expands a national prefix formatting rule such as `"$NP $FG"` into a
/// substitution fragment: `$NP` becomes `national_prefix` and `$FG` becomes
/// the literal reference `$1`.
pub fn build_national_prefix_rule(
    patterns: &PatternEngine,
    national_prefix_formatting_rule: &str,
    national_prefix: &str,
) -> pattern_engine::Result<String> {
    let with_prefix = patterns.substitute_all(
        NATIONAL_PREFIX_PLACEHOLDER,
        national_prefix_formatting_rule,
        national_prefix,
    )?;
    let rule = patterns.substitute_all(FIRST_GROUP_PLACEHOLDER, &with_prefix, FIRST_GROUP_TEMPLATE)?;
    Ok(rule.into_owned())
}

/// Splices `prefix_rule` into `template` in place of its first group
/// reference, e.g. `"$1 $2"` with `"0$1"` gives `"0$1 $2"`.
pub fn apply_national_prefix_rule<'a>(
    patterns: &PatternEngine,
    template: &'a str,
    prefix_rule: &str,
) -> Cow<'a, str> {
    patterns.substitute_first(FIRST_GROUP_PATTERN, template, prefix_rule)
}

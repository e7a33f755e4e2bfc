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

//! Small hand written territories used across the formatter tests. They are
//! loosely modelled on real countries but only carry the rules the tests need.

use crate::{MetadataCollection, NumberFormat, TerritoryMetadata};

pub const FR: i32 = 33;
pub const GB: i32 = 44;
pub const IT: i32 = 39;
pub const RU: i32 = 7;
pub const US: i32 = 1;
pub const OVERLAP: i32 = 800;
pub const SEMICOLON_EXT: i32 = 808;
pub const BROKEN: i32 = 979;
pub const NO_TEMPLATE: i32 = 882;
pub const BROKEN_LEADING_DIGITS: i32 = 883;
pub const INTL_ONLY: i32 = 884;

/// One rule, no national prefix formatting rule.
pub fn france_plain() -> TerritoryMetadata {
    TerritoryMetadata::new(FR)
        .with_number_format(
            NumberFormat::new(r"(\d{1})(\d{2})(\d{2})(\d{2})(\d{2})")
                .with_format("$1 $2 $3 $4 $5"),
        )
}

pub fn france_with_prefix() -> TerritoryMetadata {
    TerritoryMetadata::new(FR)
        .with_national_prefix("0")
        .with_number_format(
            NumberFormat::new(r"(\d{1})(\d{2})(\d{2})(\d{2})(\d{2})")
                .with_format("$1 $2 $3 $4 $5")
                .with_national_prefix_formatting_rule("$NP$FG"),
        )
}

pub fn great_britain() -> TerritoryMetadata {
    TerritoryMetadata::new(GB)
        .with_national_prefix("0")
        .with_number_format(
            // "[1-9]" would match mobile numbers too, but only "2" counts.
            NumberFormat::new(r"(\d{2})(\d{4})(\d{4})")
                .with_format("$1 $2 $3")
                .with_leading_digits_pattern("[1-9]")
                .with_leading_digits_pattern("2")
                .with_national_prefix_formatting_rule("$NP$FG"),
        )
        .with_number_format(
            NumberFormat::new(r"(\d{4})(\d{6})")
                .with_format("$1 $2")
                .with_leading_digits_pattern("7")
                .with_national_prefix_formatting_rule("$NP$FG"),
        )
}

pub fn italy() -> TerritoryMetadata {
    TerritoryMetadata::new(IT)
        .with_number_format(
            NumberFormat::new(r"(\d{2})(\d{4})(\d{4})")
                .with_format("$1 $2 $3")
                .with_leading_digits_pattern("0"),
        )
}

pub fn russia() -> TerritoryMetadata {
    TerritoryMetadata::new(RU)
        .with_national_prefix("8")
        .with_number_format(
            NumberFormat::new(r"(\d{3})(\d{3})(\d{2})(\d{2})")
                .with_format("$1 $2-$3-$4")
                .with_national_prefix_formatting_rule("$NP ($FG)"),
        )
}

pub fn united_states() -> TerritoryMetadata {
    TerritoryMetadata::new(US)
        .with_national_prefix("1")
        .with_number_format(
            NumberFormat::new(r"(\d{3})(\d{3})(\d{4})")
                .with_format("($1) $2-$3")
                .with_intl_format("$1-$2-$3"),
        )
}

/// Two rules where the first is the broader one.
pub fn overlapping() -> TerritoryMetadata {
    TerritoryMetadata::new(OVERLAP)
        .with_number_format(NumberFormat::new(r"(\d{3})(\d+)").with_format("$1-$2"))
        .with_number_format(NumberFormat::new(r"(\d{3})(\d{4})").with_format("$1 $2"))
}

pub fn semicolon_extension() -> TerritoryMetadata {
    TerritoryMetadata::new(SEMICOLON_EXT)
        .with_preferred_extn_prefix(";")
        .with_number_format(NumberFormat::new(r"(\d{4})(\d{4})").with_format("$1 $2"))
}

/// First rule carries a pattern that does not compile.
pub fn broken() -> TerritoryMetadata {
    TerritoryMetadata::new(BROKEN)
        .with_national_prefix("0")
        .with_number_format(NumberFormat::new(r"(\d{3}").with_format("$1"))
        .with_number_format(
            NumberFormat::new(r"(\d{3})(\d{3})")
                .with_format("$1 $2")
                .with_national_prefix_formatting_rule(" "),
        )
}

/// First rule's last leading digits pattern does not compile. The earlier
/// entry is valid but never consulted.
pub fn broken_leading_digits() -> TerritoryMetadata {
    TerritoryMetadata::new(BROKEN_LEADING_DIGITS)
        .with_number_format(
            NumberFormat::new(r"(\d{3})(\d{3})")
                .with_format("$1-$2")
                .with_leading_digits_pattern("1")
                .with_leading_digits_pattern("[2"),
        )
        .with_number_format(NumberFormat::new(r"(\d{3})(\d{3})").with_format("$1 $2"))
}

/// The only rule has an international template and no national one.
pub fn intl_only() -> TerritoryMetadata {
    TerritoryMetadata::new(INTL_ONLY)
        .with_national_prefix("0")
        .with_number_format(
            NumberFormat::new(r"(\d{3})(\d{3})")
                .with_intl_format("$1.$2")
                .with_national_prefix_formatting_rule("$NP$FG"),
        )
}

pub fn no_template() -> TerritoryMetadata {
    TerritoryMetadata::new(NO_TEMPLATE)
        .with_number_format(NumberFormat::new(r"(\d{2})(\d{4})"))
}

pub fn test_metadata() -> MetadataCollection {
    [
        france_with_prefix(),
        great_britain(),
        italy(),
        russia(),
        united_states(),
        overlapping(),
        semicolon_extension(),
        broken(),
        broken_leading_digits(),
        intl_only(),
        no_template(),
    ]
    .into_iter()
    .collect()
}

mod interfaces;
mod numberformatter;
mod pattern_engine;
mod regexp_cache;
pub mod phonemetadata;
pub mod phonenumber;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// Small helpers for the `Cow` juggling done by the formatter.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::MetadataProvider;
pub use numberformatter::{
    NumberFormatter, PhoneNumberFormat,
    helper_functions::{apply_national_prefix_rule, build_national_prefix_rule},
};
pub use pattern_engine::PatternEngine;
pub use phonemetadata::{MetadataCollection, NumberFormat, TerritoryMetadata};
pub use phonenumber::PhoneNumber;
pub use regexp_cache::InvalidRegexError;

pub const PLUS_SIGN: &'static str = "+";
pub const RFC3966_EXTN_PREFIX: &'static str = ";ext=";
pub const RFC3966_PREFIX: &'static str = "tel:";

// Default extension prefix to use when formatting. This will be put in front of
// any extension component of the number, after the main national number is
// formatted. Territories may override it with their preferred prefix.
pub const DEFAULT_EXTN_PREFIX: &'static str = " ext. ";

// Placeholders used in national prefix formatting rules.
pub const NATIONAL_PREFIX_PLACEHOLDER: &'static str = "\\$NP";
pub const FIRST_GROUP_PLACEHOLDER: &'static str = "\\$FG";

// The literal group reference a $FG placeholder expands to. The doubled dollar
// escapes it so that the substitution emits "$1" instead of group 1.
pub const FIRST_GROUP_TEMPLATE: &'static str = "$$1";

// Matches the first group reference in a template. This is \d rather than 1
// since some territories do not use group 1 first in their national pattern.
pub const FIRST_GROUP_PATTERN: &'static str = "(\\$\\d)";

// Runs of punctuation that separate digit groups in a formatted number. These
// all become "-" in RFC3966 output.
pub const SEPARATOR_PATTERN: &'static str = "[-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}]+";

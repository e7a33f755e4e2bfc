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

use regex::{Match, Regex};

pub trait RegexFullMatch {
    /// True if any match covers the whole of `s`, not just a prefix of it.
    fn full_match(&self, s: &str) -> bool;
}

pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

pub trait RegexSubstitute {
    /// Replaces matches of `self` in `s` with `template`.
    ///
    /// With no match `s` comes back borrowed. With exactly one match only
    /// that span is rewritten; with more, every match is.
    fn substitute_by_match_count<'a>(&self, s: &'a str, template: &str) -> Cow<'a, str>;

    /// Replaces the first match only.
    fn substitute_first_match<'a>(&self, s: &'a str, template: &str) -> Cow<'a, str>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        self.find_iter(s)
            .any(|matched| matched.start() == 0 && matched.end() == s.len())
    }
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None
        }
        Some(found)
    }
}

/// Rewrites `$n` group references of a metadata template into the braced
/// `${n}` form, so that `"$1x"` means group 1 followed by `x` rather than a
/// group named `1x`.
///
/// Digits are taken while they still name an existing group of `regex`, the
/// first digit always is. `$$` stays an escaped dollar and any other `$` is
/// left as it is.
fn brace_group_references<'t>(regex: &Regex, template: &'t str) -> Cow<'t, str> {
    if !template.contains('$') {
        return Cow::Borrowed(template);
    }
    let group_count = regex.captures_len();
    let mut braced = String::with_capacity(template.len() + 4);
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            braced.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('$') => {
                chars.next();
                braced.push_str("$$");
            }
            Some(first) if first.is_ascii_digit() => {
                chars.next();
                let mut group = first.to_digit(10).unwrap_or(0) as usize;
                braced.push_str("${");
                braced.push(first);
                while let Some(next) = chars.peek().and_then(|d| d.to_digit(10)) {
                    let extended = group * 10 + next as usize;
                    if extended >= group_count {
                        break;
                    }
                    group = extended;
                    braced.push(chars.next().unwrap_or('0'));
                }
                braced.push('}');
            }
            _ => braced.push('$'),
        }
    }
    Cow::Owned(braced)
}

impl RegexSubstitute for Regex {
    fn substitute_by_match_count<'a>(&self, s: &'a str, template: &str) -> Cow<'a, str> {
        let template = brace_group_references(self, template);
        match self.find_iter(s).take(2).count() {
            0 => Cow::Borrowed(s),
            1 => self.replace(s, &*template),
            _ => self.replace_all(s, &*template),
        }
    }

    fn substitute_first_match<'a>(&self, s: &'a str, template: &str) -> Cow<'a, str> {
        let template = brace_group_references(self, template);
        self.replace(s, &*template)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use regex::Regex;

    use super::{RegexConsume, RegexFullMatch, RegexSubstitute, brace_group_references};

    #[test]
    fn full_match_requires_whole_string() {
        let regex = Regex::new(r"\d{3}").unwrap();
        assert!(regex.full_match("123"));
        assert!(!regex.full_match("1234"));
        assert!(!regex.full_match("a123"));
    }

    #[test]
    fn full_match_checks_every_match() {
        // The first match "1" is short, the alternation never yields a full
        // span here since matching is leftmost-first.
        let regex = Regex::new(r"\d|\d{3}").unwrap();
        assert!(!regex.full_match("123"));
        let regex = Regex::new(r"\d{3}|\d").unwrap();
        assert!(regex.full_match("123"));
    }

    #[test]
    fn find_start_only_at_zero() {
        let regex = Regex::new("6").unwrap();
        assert!(regex.matches_start("612"));
        assert!(!regex.matches_start("126"));
    }

    #[test]
    fn substitute_without_match_borrows() {
        let regex = Regex::new("x").unwrap();
        let result = regex.substitute_by_match_count("123", "-");
        assert!(matches!(result, Cow::Borrowed("123")));
    }

    #[test]
    fn substitute_single_match_keeps_surroundings() {
        let regex = Regex::new(r"(\d{2})(\d{2})").unwrap();
        let result = regex.substitute_by_match_count("a1234b", "$1 $2");
        assert_eq!(result, "a12 34b");
    }

    #[test]
    fn group_reference_followed_by_text() {
        let regex = Regex::new(r"(\d{2})(\d{2})").unwrap();
        assert_eq!(regex.substitute_by_match_count("1234", "$1x$2"), "12x34");
        assert_eq!(regex.substitute_first_match("1234", "$2a$1"), "34a12");
    }

    #[test]
    fn group_references_are_braced() {
        let regex = Regex::new(r"(\d)(\d)").unwrap();
        assert_eq!(brace_group_references(&regex, "$1 $2"), "${1} ${2}");
        // Only two groups, so "$12" is group 1 followed by "2".
        assert_eq!(brace_group_references(&regex, "$12"), "${1}2");
        assert_eq!(brace_group_references(&regex, "$$1"), "$$1");
        assert_eq!(brace_group_references(&regex, "$NP"), "$NP");
        assert!(matches!(brace_group_references(&regex, "plain"), Cow::Borrowed("plain")));

        let regex = Regex::new(r"(\d)(\d)(\d)(\d)(\d)(\d)(\d)(\d)(\d)(\d)(\d)(\d)").unwrap();
        assert_eq!(brace_group_references(&regex, "$12"), "${12}");
    }

    #[test]
    fn substitute_many_matches_replaces_all() {
        let regex = Regex::new(r"\d").unwrap();
        assert_eq!(regex.substitute_by_match_count("1a2b3", "#"), "#a#b#");
        assert_eq!(regex.substitute_first_match("1a2b3", "#"), "#a2b3");
    }
}

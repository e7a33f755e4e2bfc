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

/// Returns `true` if the string holds anything besides whitespace.
///
/// No-break space (U+00A0) counts as whitespace, which `char::is_whitespace`
/// already covers.
pub fn has_value(s: &str) -> bool {
    s.chars().any(|c| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use crate::string_util::has_value;

    #[test]
    fn test_usage() {
        assert!(has_value("0$1"));
        assert!(has_value(" ($1) "));
        assert!(!has_value(""));
        assert!(!has_value(" \t\n"));
        assert!(!has_value("\u{00A0} "));
    }
}

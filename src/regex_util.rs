// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 The Kashin Vladislav (Rust adaptation author)
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

use regex::Regex;

/// Wraps `pattern` so that it only matches a whole haystack.
///
/// `find` based checks are not enough for this: with leftmost-first
/// semantics `1|12` finds `"1"` in `"12"` and would reject it.
pub fn full_match_pattern(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

/// Wraps `pattern` so that it only matches at the start of a haystack.
pub fn prefix_match_pattern(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")")
}

/// Eq of C fullMatch. Only correct for regexes built from
/// [`full_match_pattern`].
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        self.is_match(s)
    }
}

/// Metadata formats reference groups as `$1`; the regex crate would read
/// `$1x` as a group named `1x`, so every reference is braced.
pub fn to_regex_replacement(format: &str) -> Cow<'_, str> {
    if !format.contains('$') {
        return Cow::Borrowed(format);
    }
    let mut replacement = String::with_capacity(format.len() + 8);
    let mut chars = format.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('$', Some(d)) if d.is_ascii_digit() => {
                replacement.push_str("${");
                while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
                    replacement.push(d);
                    chars.next();
                }
                replacement.push('}');
            }
            _ => replacement.push(c),
        }
    }
    Cow::Owned(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braces_group_references() {
        assert_eq!(to_regex_replacement("$1 $2-$3"), "${1} ${2}-${3}");
        assert_eq!(to_regex_replacement("($1)$2"), "(${1})${2}");
        assert!(matches!(to_regex_replacement("no groups"), Cow::Borrowed(_)));
    }

    #[test]
    fn full_match_needs_whole_haystack() {
        let regex = Regex::new(&full_match_pattern("1|12")).unwrap();
        assert!(regex.full_match("12"));
        assert!(regex.full_match("1"));
        assert!(!regex.full_match("123"));
        let prefix = Regex::new(&prefix_match_pattern(r"\d{2}")).unwrap();
        assert!(prefix.is_match("123"));
        assert!(!prefix.is_match("a123"));
    }
}

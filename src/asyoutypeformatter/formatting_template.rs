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

use regex::Regex;

use crate::{
    phonenumberutil::{DIGIT_PATTERN_SAMPLE, DIGIT_PLACEHOLDER},
    regex_util::to_regex_replacement,
};

/// Display pattern of the chosen format with one placeholder per digit,
/// e.g. `"\u{2008}\u{2008}\u{2008} \u{2008}\u{2008}\u{2008}"` for `$1 $2`.
#[derive(Debug, Default, Clone)]
pub(super) struct FormattingTemplate {
    chars: Vec<char>,
    /// Index of the placeholder filled last.
    last_match_position: usize,
}

impl FormattingTemplate {
    /// Builds the template for `number_pattern` and `format`, or returns
    /// `None` when the longest number the pattern accepts is still shorter
    /// than `national_number_len`.
    pub fn build(number_pattern: &Regex, format: &str, national_number_len: usize) -> Option<Self> {
        // Creates a phone number consisting only of the digit 9 that matches the
        // number_pattern by applying the pattern to the longest phone number.
        let a_phone_number = number_pattern.find(DIGIT_PATTERN_SAMPLE)?.as_str();
        // No formatting template can be created if the number of digits entered so
        // far is longer than the maximum the current formatting rule can
        // accommodate.
        if a_phone_number.len() < national_number_len {
            return None;
        }
        let template = number_pattern.replace_all(a_phone_number, &*to_regex_replacement(format));
        Some(Self {
            chars: template
                .chars()
                .map(|c| if c == '9' { DIGIT_PLACEHOLDER } else { c })
                .collect(),
            last_match_position: 0,
        })
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.last_match_position = 0;
    }

    /// Puts `digit` into the next free placeholder and returns the template
    /// up to and including it. `None` once every placeholder is taken.
    pub fn fill_next_placeholder(&mut self, digit: char) -> Option<String> {
        let position = self.chars[self.last_match_position..]
            .iter()
            .position(|&c| c == DIGIT_PLACEHOLDER)?
            + self.last_match_position;
        self.chars[position] = digit;
        self.last_match_position = position;
        Some(self.chars[..=position].iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_placeholders_for_every_digit() {
        let pattern = Regex::new(r"(\d{3})(\d{3})(\d{4})").unwrap();
        let template = FormattingTemplate::build(&pattern, "($1) $2-$3", 3).unwrap();
        let expected: String = "(999) 999-9999"
            .chars()
            .map(|c| if c == '9' { DIGIT_PLACEHOLDER } else { c })
            .collect();
        assert_eq!(template.chars.iter().collect::<String>(), expected);
    }

    #[test]
    fn rejects_numbers_longer_than_the_pattern() {
        let pattern = Regex::new(r"(\d{2})(\d{3})").unwrap();
        assert!(FormattingTemplate::build(&pattern, "$1 $2", 5).is_some());
        assert!(FormattingTemplate::build(&pattern, "$1 $2", 6).is_none());
    }

    #[test]
    fn rejects_patterns_that_never_match_nines() {
        let pattern = Regex::new(r"(0\d)(\d{3})").unwrap();
        assert!(FormattingTemplate::build(&pattern, "$1 $2", 1).is_none());
    }

    #[test]
    fn fills_placeholders_in_order() {
        let pattern = Regex::new(r"(\d{2})(\d{2})").unwrap();
        let mut template = FormattingTemplate::build(&pattern, "$1-$2", 1).unwrap();
        assert_eq!(template.fill_next_placeholder('1').as_deref(), Some("1"));
        assert_eq!(template.fill_next_placeholder('2').as_deref(), Some("12"));
        assert_eq!(template.fill_next_placeholder('3').as_deref(), Some("12-3"));
        assert_eq!(template.fill_next_placeholder('4').as_deref(), Some("12-34"));
        assert_eq!(template.fill_next_placeholder('5'), None);
    }
}

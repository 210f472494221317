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

use std::collections::HashMap;

use regex::Regex;

use crate::{
    phonenumberutil::helper_constants::{
        DIGITS, PLUS_SIGN, RFC3966_VISUAL_SEPARATOR, VALID_ALPHA_INCL_UPPERCASE,
        VALID_PUNCTUATION,
    },
    regex_util::full_match_pattern,
    regexp_cache::RegexCache,
};

pub(crate) struct PhoneNumberRegExpsAndMappings {
    pub regexp_cache: RegexCache,

    /// A map that contains characters that are essential when dialling. That means
    /// any of the characters in this map must not be removed from a number when
    /// dialing, otherwise the call will not reach the intended destination.
    pub diallable_char_mappings: HashMap<char, char>,

    /// Regular expression of valid global-number-digits for the phone-context
    /// parameter, following the syntax defined in RFC3966.
    pub rfc3966_global_number_digits_pattern: Regex,

    /// Regular expression of valid domainname for the phone-context parameter,
    /// following the syntax defined in RFC3966.
    pub rfc3966_domainname_pattern: Regex,

    /// A pattern that is used to determine if a numberFormat under
    /// availableFormats is eligible to be used by the AYTF. It is eligible when
    /// the format element under numberFormat contains groups of the dollar sign
    /// followed by a single digit, separated by valid phone number punctuation.
    /// This prevents invalid punctuation (such as the star sign in Israeli star
    /// numbers) getting into the output of the AYTF.
    pub is_format_eligible_as_you_type_formatting_regex: Regex,

    /// A pattern that is used to determine if the national prefix formatting rule
    /// has the first group only, i.e., does not start with the national prefix.
    /// Note that the pattern explicitly allows for unbalanced parentheses.
    pub formatting_rule_has_first_group_only_regex: Regex,

    /// Formatting rules containing one of these put a space between the
    /// national prefix and the rest of the number.
    pub national_prefix_separators_pattern: Regex,
}

impl PhoneNumberRegExpsAndMappings {
    fn initialize_regexp_mappings(&mut self) {
        let mut diallable_char_map = HashMap::with_capacity(13);
        for d in '0'..='9' {
            diallable_char_map.insert(d, d);
        }
        diallable_char_map.insert('+', '+');
        diallable_char_map.insert('*', '*');
        diallable_char_map.insert('#', '#');
        self.diallable_char_mappings = diallable_char_map;
    }

    pub fn new(max_cached_patterns: usize) -> Self {
        let alphanum = fast_cat::concat_str!(VALID_ALPHA_INCL_UPPERCASE, DIGITS);
        let rfc3966_phone_digit = format!("({}|{})", DIGITS, RFC3966_VISUAL_SEPARATOR);
        let rfc3966_domainlabel = format!("[{}]+((\\-)*[{}])*", alphanum, alphanum);
        let rfc3966_toplabel = format!("[{}]+((\\-)*[{}])*", VALID_ALPHA_INCL_UPPERCASE, alphanum);

        // All patterns below are constants, a failure here is a bug in this file.
        let mut instance = Self {
            regexp_cache: RegexCache::with_max_entries(max_cached_patterns),
            diallable_char_mappings: Default::default(),
            rfc3966_global_number_digits_pattern: Regex::new(&format!(
                "^\\{}{}*{}{}*$",
                PLUS_SIGN, rfc3966_phone_digit, DIGITS, rfc3966_phone_digit
            ))
            .unwrap(),
            rfc3966_domainname_pattern: Regex::new(&format!(
                "^({}\\.)*{}\\.?$",
                rfc3966_domainlabel, rfc3966_toplabel
            ))
            .unwrap(),
            is_format_eligible_as_you_type_formatting_regex: Regex::new(&full_match_pattern(
                &format!(
                    "[{}]*\\$1[{}]*(\\$\\d[{}]*)*",
                    VALID_PUNCTUATION, VALID_PUNCTUATION, VALID_PUNCTUATION
                ),
            ))
            .unwrap(),
            formatting_rule_has_first_group_only_regex: Regex::new(&full_match_pattern(
                "\\(?\\$1\\)?",
            ))
            .unwrap(),
            national_prefix_separators_pattern: Regex::new("[- ]").unwrap(),
        };
        instance.initialize_regexp_mappings();
        instance
    }
}

#[cfg(test)]
mod tests {
    use crate::regex_util::RegexFullMatch;

    use super::PhoneNumberRegExpsAndMappings;

    #[test]
    fn check_regexps_are_compiling() {
        PhoneNumberRegExpsAndMappings::new(8);
    }

    #[test]
    fn eligible_formats() {
        let regexps = PhoneNumberRegExpsAndMappings::new(8);
        let eligible = &regexps.is_format_eligible_as_you_type_formatting_regex;
        assert!(eligible.full_match("$1 $2 $3"));
        assert!(eligible.full_match("($1) $2-$3"));
        assert!(eligible.full_match("$1/$2.$3"));
        assert!(eligible.full_match("[$1] $2"));
        assert!(!eligible.full_match("*$1"));
        assert!(!eligible.full_match("$2 $1"));
    }

    #[test]
    fn first_group_only_rules() {
        let regexps = PhoneNumberRegExpsAndMappings::new(8);
        let first_group_only = &regexps.formatting_rule_has_first_group_only_regex;
        assert!(first_group_only.full_match("$1"));
        assert!(first_group_only.full_match("($1)"));
        assert!(first_group_only.full_match("($1"));
        assert!(!first_group_only.full_match("0$1"));
        assert!(!first_group_only.full_match("(0$1)"));
    }
}

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

use std::collections::HashSet;

use log::error;
use regex_automata::{
    Anchored, Input, MatchKind,
    dfa::{Automaton, StartKind, dense},
    util::primitives::StateID,
};

use crate::{
    interfaces,
    phonenumberutil::MatchResult,
    regexp_cache::{CompilePattern, InvalidRegexError, PatternCache},
};

type NumberDfa = dense::DFA<Vec<u32>>;

impl CompilePattern for NumberDfa {
    fn compile(pattern: &str) -> Result<Self, InvalidRegexError> {
        // `All` keeps every alternative alive after the first match, so a
        // longer alternative is still found once a shorter one has matched.
        dense::Builder::new()
            .configure(
                dense::DFA::config()
                    .start_kind(StartKind::Anchored)
                    .match_kind(MatchKind::All),
            )
            .build(pattern)
            .map_err(|err| InvalidRegexError::new(pattern, err))
    }
}

/// Matcher walking an anchored DFA over the number, so that a partial number
/// can be told apart from one that has already outgrown the pattern.
pub struct RegexBasedMatcher {
    cache: PatternCache<NumberDfa>,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: PatternCache::new() }
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self { cache: PatternCache::with_max_entries(max_entries) }
    }

    fn match_number(
        &self,
        phone_number: &str,
        number_pattern: &str,
        allow_prefix_match: bool,
    ) -> Result<MatchResult, InvalidRegexError> {
        let dfa = self.cache.get(number_pattern)?;
        let input = Input::new(phone_number).anchored(Anchored::Yes);
        let mut state = dfa
            .start_state_forward(&input)
            .map_err(|err| InvalidRegexError::new(number_pattern, err))?;

        // Matches are reported one byte late: a match state reached after
        // byte `i` means `phone_number[..i]` was accepted.
        let mut matched_prefix = false;
        for &byte in phone_number.as_bytes() {
            state = dfa.next_state(state, byte);
            if dfa.is_match_state(state) {
                matched_prefix = true;
            }
            if dfa.is_dead_state(state) || dfa.is_quit_state(state) {
                return Ok(Self::outgrown_or_invalid(matched_prefix));
            }
        }

        if dfa.is_match_state(dfa.next_eoi_state(state)) {
            return Ok(MatchResult::Matched);
        }
        if Self::can_be_extended(&dfa, state) {
            return Ok(if allow_prefix_match {
                MatchResult::Matched
            } else {
                MatchResult::Invalid
            });
        }
        Ok(Self::outgrown_or_invalid(matched_prefix))
    }

    fn outgrown_or_invalid(matched_prefix: bool) -> MatchResult {
        if matched_prefix {
            MatchResult::TooLong
        } else {
            MatchResult::Invalid
        }
    }

    /// Whether appending one or more digits to the consumed input can lead to
    /// a full match.
    fn can_be_extended(dfa: &NumberDfa, from: StateID) -> bool {
        let mut visited = HashSet::new();
        let mut pending = vec![from];
        while let Some(state) = pending.pop() {
            for digit in b'0'..=b'9' {
                let next = dfa.next_state(state, digit);
                if dfa.is_dead_state(next) || dfa.is_quit_state(next) {
                    continue;
                }
                if dfa.is_match_state(dfa.next_eoi_state(next)) {
                    return true;
                }
                if visited.insert(next) {
                    pending.push(next);
                }
            }
        }
        false
    }
}

impl Default for RegexBasedMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        national_number_pattern: &str,
        allow_prefix_match: bool,
    ) -> MatchResult {
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return MatchResult::Invalid;
        }
        match self.match_number(number, national_number_pattern, allow_prefix_match) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}", err);
                MatchResult::Invalid
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::MatcherApi;

    fn matcher() -> RegexBasedMatcher {
        RegexBasedMatcher::new()
    }

    #[test]
    fn empty_pattern_is_invalid() {
        assert_eq!(matcher().match_national_number("123", "", true), MatchResult::Invalid);
        assert_eq!(matcher().match_national_number("", "", false), MatchResult::Invalid);
    }

    #[test]
    fn exact_match() {
        let m = matcher();
        assert_eq!(m.match_national_number("6502532222", r"\d{10}", false), MatchResult::Matched);
        assert_eq!(m.match_national_number("6502532222", r"[2-9]\d{9}", true), MatchResult::Matched);
    }

    #[test]
    fn partial_number_depends_on_prefix_flag() {
        let m = matcher();
        assert_eq!(m.match_national_number("650", r"\d{10}", true), MatchResult::Matched);
        assert_eq!(m.match_national_number("650", r"\d{10}", false), MatchResult::Invalid);
    }

    #[test]
    fn too_long_after_complete_match() {
        let m = matcher();
        assert_eq!(m.match_national_number("12345", r"\d{4}", true), MatchResult::TooLong);
        assert_eq!(m.match_national_number("12345", r"\d{4}", false), MatchResult::TooLong);
        assert_eq!(
            m.match_national_number("123456789", r"(\d{3})(\d{3})", false),
            MatchResult::TooLong
        );
    }

    #[test]
    fn longer_alternative_is_not_shadowed() {
        let m = matcher();
        assert_eq!(m.match_national_number("12345", r"\d{3}|\d{5}", false), MatchResult::Matched);
        assert_eq!(m.match_national_number("1234", r"\d{3}|\d{5}", false), MatchResult::Invalid);
        assert_eq!(m.match_national_number("1234", r"\d{3}|\d{5}", true), MatchResult::Matched);
        assert_eq!(m.match_national_number("123456", r"\d{3}|\d{5}", true), MatchResult::TooLong);
    }

    #[test]
    fn mismatch_is_invalid() {
        let m = matcher();
        assert_eq!(m.match_national_number("0123", r"[1-9]\d{3}", true), MatchResult::Invalid);
        assert_eq!(m.match_national_number("a1", r"\d+", true), MatchResult::Invalid);
    }

    #[test]
    fn invalid_regex_is_invalid() {
        assert_eq!(matcher().match_national_number("123", r"(\d", true), MatchResult::Invalid);
    }
}

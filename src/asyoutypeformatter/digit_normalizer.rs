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

use dec_from_char::DecimalExtended;

use crate::phonenumberutil::PLUS_CHARS;

/// How a single typed character takes part in as-you-type formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitOutcome {
    /// A digit, already converted to ASCII. `*` and `#` are kept as they are
    /// and may fill template placeholders like any digit.
    Digit(char),
    /// A plus sign typed as the very first character.
    PlusSign,
    /// An ASCII letter of a vanity number. Kept verbatim, never mapped.
    Letter(char),
    /// Punctuation or anything else. Turns formatting off for the session.
    Separator,
}

impl DigitOutcome {
    /// Whether the character can still be formatted.
    pub fn is_formattable(self) -> bool {
        matches!(self, DigitOutcome::Digit(_) | DigitOutcome::PlusSign)
    }
}

/// Classifies `unit`. `is_first_unit` tells whether it is the first character
/// of the session; only then is a plus sign accepted.
pub fn classify(unit: char, is_first_unit: bool) -> DigitOutcome {
    match unit {
        '0'..='9' | '*' | '#' => DigitOutcome::Digit(unit),
        c if PLUS_CHARS.contains(c) => {
            if is_first_unit {
                DigitOutcome::PlusSign
            } else {
                DigitOutcome::Separator
            }
        }
        c if c.is_ascii_alphabetic() => DigitOutcome::Letter(c),
        c if c.is_decimal_utf8() => to_ascii_digit(c)
            .map(DigitOutcome::Digit)
            .unwrap_or(DigitOutcome::Separator),
        _ => DigitOutcome::Separator,
    }
}

fn to_ascii_digit(c: char) -> Option<char> {
    let mut buf = [0u8; 4];
    dec_from_char::normalize_decimals(c.encode_utf8(&mut buf))
        .chars()
        .next()
        .filter(char::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_digits_and_star_codes() {
        assert_eq!(classify('7', false), DigitOutcome::Digit('7'));
        assert_eq!(classify('*', true), DigitOutcome::Digit('*'));
        assert_eq!(classify('#', false), DigitOutcome::Digit('#'));
    }

    #[test]
    fn non_ascii_decimals_become_ascii() {
        // Full-width and Arabic-Indic digits.
        assert_eq!(classify('\u{FF15}', false), DigitOutcome::Digit('5'));
        assert_eq!(classify('\u{0663}', false), DigitOutcome::Digit('3'));
    }

    #[test]
    fn plus_only_at_start() {
        assert_eq!(classify('+', true), DigitOutcome::PlusSign);
        assert_eq!(classify('\u{FF0B}', true), DigitOutcome::PlusSign);
        assert_eq!(classify('+', false), DigitOutcome::Separator);
    }

    #[test]
    fn letters_and_punctuation() {
        assert_eq!(classify('a', false), DigitOutcome::Letter('a'));
        assert_eq!(classify('Z', true), DigitOutcome::Letter('Z'));
        for c in [' ', '-', ';', '(', '\u{1F600}'] {
            assert_eq!(classify(c, false), DigitOutcome::Separator);
            assert!(!classify(c, false).is_formattable());
        }
    }
}

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

use std::collections::HashMap;

use dec_from_char::DecimalExtended;

/// Normalizes a string of characters representing a phone number by replacing
/// all characters found in the accompanying map with the values therein, and
/// stripping all other characters if `remove_non_matches` is true.
///
/// ### Arguments
/// * `normalization_replacements` - a mapping of characters to what they should be
///   replaced by in the normalized version of the phone number
/// * `remove_non_matches` - indicates whether characters that are not able to be
///   replaced should be stripped from the number. If this is false, they will be
///   left unchanged in the number.
/// * `phone_number` - a string of characters representing a phone number.
pub(super) fn normalize_helper(
    normalization_replacements: &HashMap<char, char>,
    remove_non_matches: bool,
    phone_number: &str,
) -> String {
    let mut normalized_number = String::with_capacity(phone_number.len());
    for phone_char in phone_number.chars() {
        if let Some(replacement) = normalization_replacements.get(&phone_char.to_ascii_uppercase()) {
            normalized_number.push(*replacement);
        } else if !remove_non_matches {
            normalized_number.push(phone_char);
        }
        // If neither of the above are true, we remove this character.
    }
    normalized_number
}

/// Keeps the decimal digits of `s` only, converted to ASCII.
pub(crate) fn decimal_digits_only(s: &str) -> String {
    let digits: String = s.chars().filter(|c| c.is_decimal_utf8()).collect();
    dec_from_char::normalize_decimals(&digits).to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn normalize_helper_strips_or_keeps() {
        let mappings: HashMap<char, char> = [('1', '1'), ('A', '2')].into_iter().collect();
        assert_eq!(normalize_helper(&mappings, true, "1a-1"), "121");
        assert_eq!(normalize_helper(&mappings, false, "1a-1"), "12-1");
    }

    #[test]
    fn keeps_decimal_digits() {
        assert_eq!(decimal_digits_only("+(6\u{FF14})-3"), "643");
        assert_eq!(decimal_digits_only("abc"), "");
    }
}

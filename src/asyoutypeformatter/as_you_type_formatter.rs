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

use std::sync::Arc;

use log::{error, trace};
use regex::Regex;
use strum::{Display, IntoStaticStr};

use super::{
    digit_normalizer::{DigitOutcome, classify},
    formatting_template::FormattingTemplate,
};
use crate::{
    metadata::{NumberFormat, PhoneMetadata},
    phonenumberutil::{
        MIN_LEADING_DIGITS_LENGTH, PhoneNumberUtil, SEPARATOR_BEFORE_NATIONAL_NUMBER,
    },
};

/// Where a formatting session currently is.
#[derive(Debug, Display, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterState {
    /// Nothing typed yet.
    Empty,
    /// Digits are laid out with a formatting template.
    CollectingWithTemplate,
    /// Digits are collected, but no template fits them. The output is the
    /// extracted prefix followed by the plain digits.
    CollectingNoTemplate,
    /// A character that can not be formatted was typed. Everything is echoed
    /// as typed until [`AsYouTypeFormatter::clear`].
    RawPassthrough,
}

/// A formatter which formats phone numbers as they are entered.
///
/// An `AsYouTypeFormatter` is obtained from
/// [`PhoneNumberUtil::get_as_you_type_formatter`]. Digits are added with
/// [`Self::input_digit`] and after each one the number typed so far is
/// returned in its formatted form. [`Self::clear`] starts a new number.
///
/// ```ignore
/// let mut formatter = phone_util.get_as_you_type_formatter("US");
/// for c in "6502532222".chars() {
///     formatter.input_digit(c);
/// }
/// assert_eq!(formatter.current_output(), "650 253 2222");
/// ```
pub struct AsYouTypeFormatter<'a> {
    pub(super) phone_util: &'a PhoneNumberUtil,
    pub(super) default_country: String,
    pub(super) default_metadata: &'a PhoneMetadata,
    pub(super) current_metadata: &'a PhoneMetadata,

    pub(super) current_output: String,
    pub(super) formatting_template: FormattingTemplate,
    /// The pattern from the number format that is currently used to create
    /// `formatting_template`.
    pub(super) current_formatting_pattern: &'a str,

    /// Everything typed so far, as typed.
    pub(super) accrued_input: String,
    /// Length of `accrued_input` in characters.
    pub(super) accrued_input_len: usize,
    /// Digits (ASCII), `*`, `#` and the leading plus sign typed so far.
    pub(super) accrued_input_without_formatting: String,

    /// Set to false once no formatting template fits, or once a character
    /// that can not be formatted was typed.
    pub(super) able_to_format: bool,
    /// Set to true when a character that can not be formatted was typed, e.g.
    /// a separator. Formatting is never turned back on after that.
    pub(super) input_has_formatting: bool,
    /// Whether the number was typed with a plus sign, an international
    /// prefix or a national prefix. Such numbers are formatted with the
    /// international formats when available.
    pub(super) is_complete_number: bool,
    pub(super) is_expecting_country_calling_code: bool,
    pub(super) should_add_space_after_national_prefix: bool,
    /// Set once the national prefix was put back because no format fits the
    /// number without it. The number is then read as having no prefix.
    pub(super) national_prefix_revoked: bool,

    /// The national prefix (or carrier selection digits captured along with
    /// it) stripped off the national number.
    pub(super) extracted_national_prefix: String,
    pub(super) extracted_carrier_code: String,
    pub(super) national_number: String,
    /// Plus sign, international prefix, country calling code or national
    /// prefix, with the separators that go after them.
    pub(super) prefix_before_national_number: String,
    pub(super) possible_formats: Vec<&'a NumberFormat>,

    /// Position in `accrued_input_without_formatting` of the remembered digit.
    pub(super) position_to_remember: usize,
    /// Position in `accrued_input` of the remembered character.
    pub(super) original_position: Option<usize>,
}

impl<'a> AsYouTypeFormatter<'a> {
    /// Constructs an as-you-type formatter for `region_code`. Unknown
    /// regions only format numbers typed with a leading plus sign.
    pub fn new(phone_util: &'a PhoneNumberUtil, region_code: &str) -> Self {
        let default_metadata = Self::metadata_for_region(phone_util, region_code);
        Self {
            phone_util,
            default_country: region_code.to_owned(),
            default_metadata,
            current_metadata: default_metadata,
            current_output: String::new(),
            formatting_template: FormattingTemplate::default(),
            current_formatting_pattern: "",
            accrued_input: String::new(),
            accrued_input_len: 0,
            accrued_input_without_formatting: String::new(),
            able_to_format: true,
            input_has_formatting: false,
            is_complete_number: false,
            is_expecting_country_calling_code: false,
            should_add_space_after_national_prefix: false,
            national_prefix_revoked: false,
            extracted_national_prefix: String::new(),
            extracted_carrier_code: String::new(),
            national_number: String::new(),
            prefix_before_national_number: String::new(),
            possible_formats: Vec::new(),
            position_to_remember: 0,
            original_position: None,
        }
    }

    /// The metadata of the main country of `region_code`'s calling code, or
    /// the empty metadata for unknown regions.
    pub(super) fn metadata_for_region(
        phone_util: &'a PhoneNumberUtil,
        region_code: &str,
    ) -> &'a PhoneMetadata {
        phone_util
            .get_country_code_for_region(region_code)
            .map(|country_code| phone_util.get_region_code_for_country_code(country_code))
            .and_then(|main_country| phone_util.get_metadata_for_region(main_country))
            .unwrap_or_else(|| phone_util.empty_metadata())
    }

    /// Clears the internal state of the formatter, so it can be reused.
    pub fn clear(&mut self) {
        self.current_output.clear();
        self.accrued_input.clear();
        self.accrued_input_len = 0;
        self.accrued_input_without_formatting.clear();
        self.formatting_template.clear();
        self.current_formatting_pattern = "";
        self.prefix_before_national_number.clear();
        self.extracted_national_prefix.clear();
        self.extracted_carrier_code.clear();
        self.national_number.clear();
        self.able_to_format = true;
        self.input_has_formatting = false;
        self.position_to_remember = 0;
        self.original_position = None;
        self.is_complete_number = false;
        self.is_expecting_country_calling_code = false;
        self.possible_formats.clear();
        self.should_add_space_after_national_prefix = false;
        self.national_prefix_revoked = false;
        self.current_metadata = self.default_metadata;
    }

    /// Formats a phone number on-the-fly as each digit is entered.
    ///
    /// `next_char` is the most recently entered character. Returns the
    /// partially formatted phone number.
    pub fn input_digit(&mut self, next_char: char) -> &str {
        self.current_output = self.input_digit_with_option_to_remember_position(next_char, false);
        &self.current_output
    }

    /// Same as [`Self::input_digit`], but remembers the position where
    /// `next_char` is inserted, so that it can be retrieved later by using
    /// [`Self::get_remembered_position`]. The remembered position will be
    /// automatically adjusted if additional formatting characters are later
    /// inserted/removed in front of `next_char`.
    pub fn input_digit_and_remember_position(&mut self, next_char: char) -> &str {
        self.current_output = self.input_digit_with_option_to_remember_position(next_char, true);
        &self.current_output
    }

    /// Returns the character index in the current output just past the
    /// remembered character, or `None` if no position was remembered since
    /// the last [`Self::clear`].
    pub fn get_remembered_position(&self) -> Option<usize> {
        let original_position = self.original_position?;
        if !self.able_to_format {
            return Some(original_position);
        }
        let accrued_input_without_formatting = self.accrued_input_without_formatting.as_bytes();
        let mut accrued_input_index = 0;
        let mut current_output_index = 0;
        for output_char in self.current_output.chars() {
            if accrued_input_index >= self.position_to_remember {
                break;
            }
            if char::from(accrued_input_without_formatting[accrued_input_index]) == output_char {
                accrued_input_index += 1;
            }
            current_output_index += 1;
        }
        Some(current_output_index)
    }

    /// The output of the last `input_digit*` call.
    pub fn current_output(&self) -> &str {
        &self.current_output
    }

    /// The national prefix stripped off the number typed so far, or `""`.
    pub fn get_extracted_national_prefix(&self) -> &str {
        &self.extracted_national_prefix
    }

    /// The carrier selection code captured together with the national
    /// prefix, or `""`.
    pub fn get_extracted_carrier_code(&self) -> &str {
        &self.extracted_carrier_code
    }

    pub fn state(&self) -> FormatterState {
        if self.accrued_input.is_empty() {
            FormatterState::Empty
        } else if self.input_has_formatting {
            FormatterState::RawPassthrough
        } else if self.able_to_format && !self.current_formatting_pattern.is_empty() {
            FormatterState::CollectingWithTemplate
        } else {
            FormatterState::CollectingNoTemplate
        }
    }

    fn input_digit_with_option_to_remember_position(
        &mut self,
        next_char: char,
        remember_position: bool,
    ) -> String {
        self.accrued_input.push(next_char);
        self.accrued_input_len += 1;
        if remember_position {
            self.original_position = Some(self.accrued_input_len);
        }
        // We do formatting on-the-fly only when each character entered is either a
        // digit, or a plus sign (accepted at the start of the number only).
        let next_char = match classify(next_char, self.accrued_input_len == 1) {
            DigitOutcome::Digit(digit) => {
                self.accrue_digit_or_plus_sign(digit, remember_position);
                digit
            }
            DigitOutcome::PlusSign => {
                self.accrue_digit_or_plus_sign('+', remember_position);
                '+'
            }
            outcome @ (DigitOutcome::Letter(_) | DigitOutcome::Separator) => {
                if !self.input_has_formatting {
                    trace!("{:?} turns formatting off", outcome);
                }
                self.able_to_format = false;
                self.input_has_formatting = true;
                next_char
            }
        };

        if !self.able_to_format {
            // When we are unable to format because of reasons other than that
            // formatting chars have been entered, it can be due to really long IDDs or
            // NDDs. If that is the case, we might be able to do formatting again after
            // extracting them.
            if self.input_has_formatting {
                return self.accrued_input.clone();
            } else if self.attempt_to_extract_idd() {
                if self.attempt_to_extract_country_calling_code() {
                    return self.attempt_to_choose_pattern_with_prefix_extracted();
                }
            } else if self.able_to_extract_longer_ndd() {
                // Add an additional space to separate long NDD and national significant
                // number for readability. We don't set
                // should_add_space_after_national_prefix to true, since we don't want
                // this to change later when we choose formatting templates.
                self.prefix_before_national_number
                    .push(SEPARATOR_BEFORE_NATIONAL_NUMBER);
                return self.attempt_to_choose_pattern_with_prefix_extracted();
            } else if self.able_to_revoke_national_prefix() {
                // Neither the national prefix nor a longer one leads to a format, so
                // the digits are read as the start of the national number instead.
                return self.attempt_to_choose_pattern_with_prefix_extracted();
            }
            return self.accrued_input.clone();
        }

        // We start to attempt to format only when at least MIN_LEADING_DIGITS_LENGTH
        // digits (the plus sign is counted as a digit as well for this purpose) have
        // been entered.
        match self.accrued_input_without_formatting.len() {
            0..=2 => return self.accrued_input.clone(),
            3 => {
                if self.attempt_to_extract_idd() {
                    self.is_expecting_country_calling_code = true;
                } else {
                    // No IDD or plus sign is found, might be entering in national format.
                    self.extracted_national_prefix = self.remove_national_prefix_from_national_number();
                    return self.attempt_to_choose_formatting_pattern();
                }
            }
            _ => {}
        }

        if self.is_expecting_country_calling_code {
            if self.attempt_to_extract_country_calling_code() {
                self.is_expecting_country_calling_code = false;
            }
            return fast_cat::concat_str!(&self.prefix_before_national_number, &self.national_number);
        }
        if self.possible_formats.is_empty() {
            return self.attempt_to_choose_formatting_pattern();
        }

        // The formatting patterns are already chosen.
        let temp_national_number = self.input_digit_helper(next_char);
        // See if the accrued digits can be formatted properly already. If not, use
        // the results from input_digit_helper, which does formatting based on the
        // formatting pattern chosen.
        if let Some(formatted_number) = self.attempt_to_format_accrued_digits() {
            return formatted_number;
        }
        self.narrow_down_possible_formats();
        if self.maybe_create_new_template() {
            return self.input_accrued_national_number();
        }
        if self.able_to_format {
            self.append_national_number(&temp_national_number)
        } else {
            self.accrued_input.clone()
        }
    }

    fn accrue_digit_or_plus_sign(&mut self, normalized_char: char, remember_position: bool) {
        self.accrued_input_without_formatting.push(normalized_char);
        if normalized_char != '+' {
            self.national_number.push(normalized_char);
        }
        if remember_position {
            self.position_to_remember = self.accrued_input_without_formatting.len();
        }
    }

    pub(super) fn attempt_to_choose_pattern_with_prefix_extracted(&mut self) -> String {
        self.able_to_format = true;
        self.is_expecting_country_calling_code = false;
        self.possible_formats.clear();
        self.formatting_template.clear();
        self.current_formatting_pattern = "";
        self.attempt_to_choose_formatting_pattern()
    }

    /// Attempts to set the formatting template and returns a string which
    /// contains the formatted version of the digits entered so far.
    pub(super) fn attempt_to_choose_formatting_pattern(&mut self) -> String {
        // We start to attempt to format only when at least MIN_LEADING_DIGITS_LENGTH
        // digits of national number (excluding national prefix) have been entered.
        if self.national_number.len() < MIN_LEADING_DIGITS_LENGTH {
            return self.append_national_number(&self.national_number);
        }
        self.get_available_formats();
        // See if the accrued digits can be formatted properly already.
        if let Some(formatted_number) = self.attempt_to_format_accrued_digits() {
            return formatted_number;
        }
        if self.maybe_create_new_template() {
            self.input_accrued_national_number()
        } else {
            self.accrued_input.clone()
        }
    }

    /// Invokes input_digit_helper on each digit of the national number
    /// accrued, and returns a formatted string in the end.
    pub(super) fn input_accrued_national_number(&mut self) -> String {
        if self.national_number.is_empty() {
            return self.prefix_before_national_number.clone();
        }
        let national_number = std::mem::take(&mut self.national_number);
        let mut temp_national_number = String::new();
        for digit in national_number.chars() {
            temp_national_number = self.input_digit_helper(digit);
        }
        self.national_number = national_number;
        if self.able_to_format {
            self.append_national_number(&temp_national_number)
        } else {
            self.accrued_input.clone()
        }
    }

    /// Combines the national number with any prefix (IDD/+ and country code
    /// or national prefix) that was collected. A space will be inserted
    /// between them if the current formatting template indicates this to be
    /// suitable.
    pub(super) fn append_national_number(&self, national_number: &str) -> String {
        // We want to add a space after the national prefix if the national prefix
        // formatting rule indicates that this would normally be done, with the
        // exception of the case where we already appended a space because the NDD
        // was surprisingly long.
        if self.should_add_space_after_national_prefix
            && !self.prefix_before_national_number.is_empty()
            && !self
                .prefix_before_national_number
                .ends_with(SEPARATOR_BEFORE_NATIONAL_NUMBER)
        {
            let mut output = String::with_capacity(
                self.prefix_before_national_number.len() + 1 + national_number.len(),
            );
            output.push_str(&self.prefix_before_national_number);
            output.push(SEPARATOR_BEFORE_NATIONAL_NUMBER);
            output.push_str(national_number);
            output
        } else {
            fast_cat::concat_str!(&self.prefix_before_national_number, national_number)
        }
    }

    pub(super) fn input_digit_helper(&mut self, next_char: char) -> String {
        // Note that formatting_template is not guaranteed to have a value, it
        // could be empty, e.g. when the next digit is entered after extracting an
        // IDD or NDD.
        if let Some(formatted) = self.formatting_template.fill_next_placeholder(next_char) {
            return formatted;
        }
        if self.possible_formats.len() == 1 {
            // More digits are entered than we could handle, and there are no
            // other valid patterns to try.
            trace!("No room left in the only template, formatting is turned off");
            self.able_to_format = false;
        } // else, we just reset the formatting pattern.
        self.current_formatting_pattern = "";
        self.accrued_input.clone()
    }

    /// Regex matching `pattern` at the start of the haystack only. Invalid
    /// metadata patterns are logged and never match.
    pub(super) fn prefix_regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        self.phone_util
            .regexp_cache()
            .get_prefix_regex(pattern)
            .inspect_err(|err| error!("Invalid regex in metadata: {}", err))
            .ok()
    }

    /// Regex matching `pattern` against the whole haystack only.
    pub(super) fn full_match_regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        self.phone_util
            .regexp_cache()
            .get_full_match_regex(pattern)
            .inspect_err(|err| error!("Invalid regex in metadata: {}", err))
            .ok()
    }

    pub(super) fn regex(&self, pattern: &str) -> Option<Arc<Regex>> {
        self.phone_util
            .regexp_cache()
            .get_regex(pattern)
            .inspect_err(|err| error!("Invalid regex in metadata: {}", err))
            .ok()
    }
}

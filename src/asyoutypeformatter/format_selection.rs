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

use log::trace;

use super::{AsYouTypeFormatter, formatting_template::FormattingTemplate};
use crate::{
    metadata::NumberFormat,
    phonenumberutil::{MIN_LEADING_DIGITS_LENGTH, MatchResult},
    regex_util::to_regex_replacement,
};

impl<'a> AsYouTypeFormatter<'a> {
    /// Collects the formats of the current metadata that fit how the number
    /// was typed, then narrows them down by leading digits.
    pub(super) fn get_available_formats(&mut self) {
        // First decide whether we should use international or national number rules.
        let is_international_number =
            self.is_complete_number && self.extracted_national_prefix.is_empty();
        let metadata = self.current_metadata;
        let format_list = if is_international_number && !metadata.intl_number_format.is_empty() {
            &metadata.intl_number_format
        } else {
            &metadata.number_format
        };
        for format in format_list {
            let has_first_group_only = self
                .phone_util
                .formatting_rule_has_first_group_only(format.national_prefix_formatting_rule());
            // Discard a few formats that we know are not relevant based on the presence
            // of the national prefix.
            if !self.extracted_national_prefix.is_empty()
                && has_first_group_only
                && !format.national_prefix_optional_when_formatting()
                && !format.has_domestic_carrier_code_formatting_rule()
            {
                // If it is a national number that had a national prefix, any rules that
                // aren't valid with a national prefix should be excluded. A rule that has
                // a carrier-code formatting rule is kept since the national prefix might
                // actually be an extracted carrier code - we don't distinguish between
                // these when extracting it in the AYTF.
                continue;
            } else if self.extracted_national_prefix.is_empty()
                && !self.is_complete_number
                && !has_first_group_only
                && !format.national_prefix_optional_when_formatting()
            {
                // This number was entered without a national prefix, and this formatting
                // rule requires one, so we discard it.
                continue;
            }
            if self
                .phone_util
                .is_format_eligible_for_as_you_type_formatter(format.format())
            {
                self.possible_formats.push(format);
            }
        }
        trace!(
            "{} candidate formats for {:?} in {}",
            self.possible_formats.len(),
            self.national_number,
            metadata.id()
        );
        self.narrow_down_possible_formats();
    }

    /// Drops the formats whose leading digits pattern does not match the
    /// national number. With more digits than the patterns describe, the
    /// last (most detailed) pattern is used.
    pub(super) fn narrow_down_possible_formats(&mut self) {
        let index_of_leading_digits_pattern = self
            .national_number
            .len()
            .saturating_sub(MIN_LEADING_DIGITS_LENGTH);
        let mut index = 0;
        while index < self.possible_formats.len() {
            let format = self.possible_formats[index];
            let Some(last_pattern) = format.leading_digits_pattern.len().checked_sub(1) else {
                // Keep everything that isn't restricted by leading digits.
                index += 1;
                continue;
            };
            let leading_digits_pattern =
                &format.leading_digits_pattern[index_of_leading_digits_pattern.min(last_pattern)];
            let matches = self
                .prefix_regex(leading_digits_pattern)
                .is_some_and(|regex| regex.is_match(&self.national_number));
            if matches {
                index += 1;
            } else {
                self.possible_formats.remove(index);
            }
        }
    }

    /// Moves to the first remaining format that can hold the number. Formats
    /// that can not are removed for good. Returns false if the current
    /// format is kept or none is left.
    pub(super) fn maybe_create_new_template(&mut self) -> bool {
        // When there are multiple available formats, the formatter uses the first
        // format where a formatting template could be created.
        while let Some(&number_format) = self.possible_formats.first() {
            let pattern = number_format.pattern();
            if self.current_formatting_pattern == pattern {
                return false;
            }
            if let Some(template) = self.create_formatting_template(number_format) {
                trace!("Switched to format {:?} -> {:?}", pattern, number_format.format());
                // With a new formatting template, the matched position using the old
                // template needs to be reset.
                self.formatting_template = template;
                self.current_formatting_pattern = pattern;
                self.should_add_space_after_national_prefix =
                    self.national_prefix_is_separated(number_format);
                return true;
            }
            // Remove the current number format from possible_formats.
            self.formatting_template.clear();
            self.possible_formats.remove(0);
        }
        trace!("No format can hold {:?}", self.national_number);
        self.able_to_format = false;
        false
    }

    fn create_formatting_template(&self, format: &NumberFormat) -> Option<FormattingTemplate> {
        let pattern = format.pattern();
        if self
            .phone_util
            .match_national_number(&self.national_number, pattern, true)
            == MatchResult::TooLong
        {
            return None;
        }
        let number_pattern = self.regex(pattern)?;
        FormattingTemplate::build(&number_pattern, format.format(), self.national_number.len())
    }

    /// Formats the whole national number with the first possible format it
    /// matches exactly, as long as no digit is lost or added by doing so.
    pub(super) fn attempt_to_format_accrued_digits(&mut self) -> Option<String> {
        for number_format in self.possible_formats.clone() {
            let Some(pattern) = self.full_match_regex(number_format.pattern()) else {
                continue;
            };
            if !pattern.is_match(&self.national_number) {
                continue;
            }
            self.should_add_space_after_national_prefix =
                self.national_prefix_is_separated(number_format);
            let formatted_number = pattern.replace(
                &self.national_number,
                &*to_regex_replacement(number_format.format()),
            );
            // Check that we did not remove nor add any extra digits when we matched
            // this formatting pattern. This usually happens after we entered the last
            // digit during AYTF. Eg: In case of MX, we swallow mobile token (1) when
            // formatted but AYTF should retain all the number entered and not change
            // in order to match a format (of same leading digits and length) display
            // in that way.
            let full_output = self.append_national_number(&formatted_number);
            let formatted_number_digits_only =
                self.phone_util.normalize_diallable_chars_only(&full_output);
            if formatted_number_digits_only == self.accrued_input_without_formatting {
                // If it's the same (i.e entered number and format is same), then it's
                // safe to return this in formatted number as nothing is lost / added.
                return Some(full_output);
            }
        }
        None
    }

    /// Whether `format` puts a separator after the national prefix. The
    /// domestic carrier code rule decides when a carrier code was typed.
    fn national_prefix_is_separated(&self, format: &NumberFormat) -> bool {
        let formatting_rule = if !self.extracted_carrier_code.is_empty()
            && format.has_domestic_carrier_code_formatting_rule()
        {
            format.domestic_carrier_code_formatting_rule()
        } else {
            format.national_prefix_formatting_rule()
        };
        self.phone_util
            .rule_separates_national_prefix(formatting_rule)
    }
}

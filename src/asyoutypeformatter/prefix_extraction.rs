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

//! Speculative extraction of the international prefix, the country calling
//! code and the national prefix. Every step can be undone without losing
//! digits.

use log::trace;

use super::AsYouTypeFormatter;
use crate::{
    i18n::RegionCode,
    phonenumberutil::{NANPA_COUNTRY_CODE, PLUS_SIGN, SEPARATOR_BEFORE_NATIONAL_NUMBER},
};

impl<'a> AsYouTypeFormatter<'a> {
    /// Extracts IDD and plus sign to prefix_before_national_number when they
    /// are available, and places the remaining input into national_number.
    pub(super) fn attempt_to_extract_idd(&mut self) -> bool {
        let international_prefix = self.current_metadata.international_prefix();
        let idd_pattern = if international_prefix.is_empty() {
            fast_cat::concat_str!("\\", PLUS_SIGN)
        } else {
            fast_cat::concat_str!("\\", PLUS_SIGN, "|", international_prefix)
        };
        let Some(idd_regex) = self.prefix_regex(&idd_pattern) else {
            return false;
        };
        let Some(start_of_country_calling_code) = idd_regex
            .find(&self.accrued_input_without_formatting)
            .map(|m| m.end())
        else {
            return false;
        };

        self.is_complete_number = true;
        let (idd, rest) = self
            .accrued_input_without_formatting
            .split_at(start_of_country_calling_code);
        self.national_number.clear();
        self.national_number.push_str(rest);
        self.prefix_before_national_number.clear();
        self.prefix_before_national_number.push_str(idd);
        if !idd.starts_with(PLUS_SIGN) {
            self.prefix_before_national_number
                .push(SEPARATOR_BEFORE_NATIONAL_NUMBER);
        }
        trace!("Extracted international prefix {:?}", idd);
        true
    }

    /// Extracts the country calling code from the beginning of
    /// national_number to prefix_before_national_number when they are
    /// available, and places the remaining input into national_number.
    pub(super) fn attempt_to_extract_country_calling_code(&mut self) -> bool {
        let phone_util = self.phone_util;
        let Some((country_code, number_without_country_calling_code)) =
            phone_util.extract_country_code(&self.national_number)
        else {
            return false;
        };
        self.national_number = number_without_country_calling_code.to_owned();

        let new_region_code = phone_util.get_region_code_for_country_code(country_code);
        if RegionCode::is_non_geo_entity(new_region_code) {
            self.current_metadata = phone_util
                .get_metadata_for_non_geographical_region(country_code)
                .unwrap_or_else(|| phone_util.empty_metadata());
        } else if new_region_code != self.default_country {
            self.current_metadata = Self::metadata_for_region(phone_util, new_region_code);
        }
        trace!(
            "Extracted country calling code {} of region {}",
            country_code, new_region_code
        );

        let mut buf = itoa::Buffer::new();
        self.prefix_before_national_number
            .push_str(buf.format(country_code));
        self.prefix_before_national_number
            .push(SEPARATOR_BEFORE_NATIONAL_NUMBER);
        // When we have successfully extracted the IDD, the previously extracted
        // NDD should be cleared because it is no longer valid.
        self.extracted_national_prefix.clear();
        self.extracted_carrier_code.clear();
        true
    }

    /// For NANPA numbers beginning with 1[2-9], treat the 1 as the national
    /// prefix. The reason is that national significant numbers in NANPA
    /// always start with [2-9] after the national prefix. Numbers beginning
    /// with 1[01] can only be short/emergency numbers, which don't need the
    /// national prefix.
    fn is_nanpa_number_with_national_prefix(&self) -> bool {
        let digits = self.national_number.as_bytes();
        self.current_metadata.country_code() == NANPA_COUNTRY_CODE
            && digits.len() >= 2
            && digits[0] == b'1'
            && digits[1] != b'0'
            && digits[1] != b'1'
    }

    /// Returns the national prefix extracted, or an empty string if it is
    /// not present.
    pub(super) fn remove_national_prefix_from_national_number(&mut self) -> String {
        let mut start_of_national_number = 0;
        let mut carrier_code = String::new();
        if self.is_nanpa_number_with_national_prefix() {
            start_of_national_number = 1;
            self.prefix_before_national_number.push('1');
            self.prefix_before_national_number
                .push(SEPARATOR_BEFORE_NATIONAL_NUMBER);
            self.is_complete_number = true;
        } else if self.current_metadata.has_national_prefix_for_parsing() {
            let national_prefix_for_parsing =
                self.prefix_regex(self.current_metadata.national_prefix_for_parsing());
            // Since some national prefix patterns are entirely optional, check that a
            // national prefix could actually be extracted.
            if let Some(captures) = national_prefix_for_parsing
                .as_ref()
                .and_then(|regex| regex.captures(&self.national_number))
                .filter(|captures| captures.get(0).is_some_and(|m| m.end() > 0))
            {
                // When the national prefix is detected, we use international formatting
                // rules instead of national ones, because national formatting rules could
                // contain local formatting rules for numbers entered without area code.
                self.is_complete_number = true;
                start_of_national_number = captures.get(0).map_or(0, |m| m.end());
                self.prefix_before_national_number
                    .push_str(&self.national_number[..start_of_national_number]);
                if let Some(carrier) = captures.get(1) {
                    carrier_code.push_str(carrier.as_str());
                }
            }
        }
        self.extracted_carrier_code = carrier_code;
        let national_prefix: String = self
            .national_number
            .drain(..start_of_national_number)
            .collect();
        if !national_prefix.is_empty() {
            trace!(
                "Extracted national prefix {:?} (carrier code {:?})",
                national_prefix, self.extracted_carrier_code
            );
        }
        national_prefix
    }

    /// Some national prefixes are a substring of others. If extracting the
    /// shorter NDD doesn't result in a number we can format, we try to see if
    /// we can extract a longer version here.
    pub(super) fn able_to_extract_longer_ndd(&mut self) -> bool {
        if self.national_prefix_revoked {
            return false;
        }
        if !self.extracted_national_prefix.is_empty() {
            // Put the extracted NDD back to the national number before attempting to
            // extract a new NDD.
            self.national_number
                .insert_str(0, &self.extracted_national_prefix);
            // Remove the previously extracted NDD from prefix_before_national_number.
            // We cannot simply set it to empty string because people sometimes
            // incorrectly enter national prefix after the country code, e.g.
            // +44 (0)20-1234-5678.
            if let Some(index_of_previous_ndd) = self
                .prefix_before_national_number
                .rfind(self.extracted_national_prefix.as_str())
            {
                self.prefix_before_national_number
                    .truncate(index_of_previous_ndd);
            }
        }
        let new_national_prefix = self.remove_national_prefix_from_national_number();
        if new_national_prefix == self.extracted_national_prefix {
            return false;
        }
        trace!(
            "Replaced national prefix {:?} with {:?}",
            self.extracted_national_prefix, new_national_prefix
        );
        self.extracted_national_prefix = new_national_prefix;
        true
    }

    /// Puts the extracted national prefix back in front of the national
    /// number, so the number is formatted as one typed without a prefix.
    /// This happens at most once per number.
    pub(super) fn able_to_revoke_national_prefix(&mut self) -> bool {
        if self.national_prefix_revoked || self.extracted_national_prefix.is_empty() {
            return false;
        }
        trace!(
            "Revoked national prefix {:?}, no format fits the number with it",
            self.extracted_national_prefix
        );
        let national_prefix = std::mem::take(&mut self.extracted_national_prefix);
        self.national_number.insert_str(0, &national_prefix);
        self.prefix_before_national_number.clear();
        self.extracted_carrier_code.clear();
        self.is_complete_number = false;
        self.national_prefix_revoked = true;
        true
    }
}

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

use std::collections::{HashMap, HashSet, VecDeque, hash_map::Entry};

use log::{error, trace, warn};

use super::phone_number_regexps_and_mappings::PhoneNumberRegExpsAndMappings;
use crate::{
    asyoutypeformatter::AsYouTypeFormatter,
    i18n,
    interfaces::MatcherApi,
    metadata::{PhoneMetadata, PhoneMetadataCollection},
    phonecontext::{PhoneContext, PhoneContextParser},
    phonenumberutil::{
        MatchResult,
        errors::{InvalidMetadataError, PhoneContextError},
        helper_constants::{
            EMPTY_METADATA_INTERNATIONAL_PREFIX, MAX_LENGTH_COUNTRY_CODE,
            REGION_CODE_FOR_NON_GEO_ENTITY,
        },
        helper_functions::normalize_helper,
    },
    regex_based_matcher::RegexBasedMatcher,
    regex_util::RegexFullMatch,
    regexp_cache::{DEFAULT_MAX_ENTRIES, RegexCache},
};

/// Read-only accessor over a set of region metadata.
///
/// It is immutable after construction, so one instance can be shared between
/// threads and borrowed by any number of [`AsYouTypeFormatter`] sessions.
pub struct PhoneNumberUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// A mapping from a country calling code to the region codes which denote
    /// the region represented by that country calling code. Note regions under
    /// NANPA share the country calling code 1 and Russia and Kazakhstan share the
    /// country calling code 7. The main country for a code is always listed
    /// first. This is implemented as a sorted vector to achieve better
    /// performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// A mapping from a region code to a PhoneMetadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code for a non-geographical entity to the
    /// PhoneMetadata for that country calling code. Examples of the country
    /// calling codes include 800 (International Toll Free Service) and 808
    /// (International Shared Cost Service).
    country_code_to_non_geographical_metadata_map: HashMap<i32, PhoneMetadata>,

    /// Metadata used by formatters created for unknown regions.
    empty_metadata: PhoneMetadata,
}

impl PhoneNumberUtil {
    /// Builds the accessor. Entries without a country calling code and
    /// repeated regions are logged and skipped.
    pub fn new_for_metadata(metadata_collection: PhoneMetadataCollection) -> Self {
        Self::with_regex_cache_capacity(metadata_collection, DEFAULT_MAX_ENTRIES)
    }

    /// Like [`Self::new_for_metadata`], but bounds both compiled pattern
    /// caches to `max_entries` patterns each.
    pub fn with_regex_cache_capacity(
        metadata_collection: PhoneMetadataCollection,
        max_entries: usize,
    ) -> Self {
        let mut instance = Self::empty(max_entries);
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::new();
        for metadata in metadata_collection.metadata {
            if let Err(err) =
                instance.insert_metadata(&mut country_calling_code_to_region_map, metadata)
            {
                error!("Skipping metadata: {}", err);
            }
        }
        instance.finish_loading(country_calling_code_to_region_map);
        instance
    }

    /// Builds the accessor, rejecting collections with repeated regions or
    /// entries without a country calling code.
    pub fn try_new_for_metadata(
        metadata_collection: PhoneMetadataCollection,
    ) -> Result<Self, InvalidMetadataError> {
        let mut instance = Self::empty(DEFAULT_MAX_ENTRIES);
        let mut country_calling_code_to_region_map = HashMap::new();
        for metadata in metadata_collection.metadata {
            instance.insert_metadata(&mut country_calling_code_to_region_map, metadata)?;
        }
        instance.finish_loading(country_calling_code_to_region_map);
        Ok(instance)
    }

    fn empty(max_entries: usize) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::with_max_entries(max_entries)),
            reg_exps: PhoneNumberRegExpsAndMappings::new(max_entries),
            country_calling_code_to_region_code_map: Default::default(),
            region_to_metadata_map: Default::default(),
            country_code_to_non_geographical_metadata_map: Default::default(),
            empty_metadata: PhoneMetadata {
                id: i18n::RegionCode::get_unknown().to_owned(),
                international_prefix: Some(EMPTY_METADATA_INTERNATIONAL_PREFIX.to_owned()),
                ..Default::default()
            },
        }
    }

    /// Stores one region's metadata and records its region under its calling
    /// code, main country first. `"ZZ"` entries are ignored.
    fn insert_metadata(
        &mut self,
        country_calling_code_to_region_map: &mut HashMap<i32, VecDeque<String>>,
        metadata: PhoneMetadata,
    ) -> Result<(), InvalidMetadataError> {
        let region_code = metadata.id().to_owned();
        if i18n::RegionCode::get_unknown() == region_code {
            return Ok(());
        }
        let Some(country_calling_code) = metadata.country_code else {
            return Err(InvalidMetadataError::MissingCountryCode(region_code));
        };
        let main_country_code = metadata.main_country_for_code();

        if REGION_CODE_FOR_NON_GEO_ENTITY == region_code {
            match self
                .country_code_to_non_geographical_metadata_map
                .entry(country_calling_code)
            {
                Entry::Vacant(entry) => {
                    entry.insert(metadata);
                }
                Entry::Occupied(_) => {
                    return Err(InvalidMetadataError::DuplicateNonGeographicalEntity(
                        country_calling_code,
                    ));
                }
            }
        } else {
            match self.region_to_metadata_map.entry(region_code.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(metadata);
                }
                Entry::Occupied(_) => {
                    return Err(InvalidMetadataError::DuplicateRegion(region_code));
                }
            }
        }

        let regions = country_calling_code_to_region_map
            .entry(country_calling_code)
            .or_default();
        if regions.contains(&region_code) {
            return Ok(());
        }
        if main_country_code {
            regions.push_front(region_code);
        } else {
            regions.push_back(region_code);
        }
        Ok(())
    }

    fn finish_loading(
        &mut self,
        country_calling_code_to_region_map: HashMap<i32, VecDeque<String>>,
    ) {
        self.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .map(|(k, v)| (k, Vec::from(v))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        self.country_calling_code_to_region_code_map
            .sort_by_key(|(a, _)| *a);
        trace!(
            "Loaded metadata for {} regions and {} non-geographical entities",
            self.region_to_metadata_map.len(),
            self.country_code_to_non_geographical_metadata_map.len()
        );
    }

    /// Creates a formatter that formats numbers as they are typed.
    ///
    /// `region_code` is the region where the number is being entered. An
    /// unknown region still accepts numbers typed with a leading `+`.
    pub fn get_as_you_type_formatter(&self, region_code: &str) -> AsYouTypeFormatter<'_> {
        AsYouTypeFormatter::new(self, region_code)
    }

    /// Extracts the `phone-context` parameter of an RFC3966 number.
    pub fn parse_phone_context(
        &self,
        number_to_extract_from: &str,
    ) -> Result<Option<PhoneContext>, PhoneContextError> {
        PhoneContextParser::new(self).parse(number_to_extract_from)
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        let mut regions = Vec::with_capacity(self.region_to_metadata_map.len());
        for k in self.region_to_metadata_map.keys() {
            regions.push(k.as_str());
        }
        regions
    }

    pub fn get_supported_global_network_calling_codes(&self) -> HashSet<i32> {
        self.country_code_to_non_geographical_metadata_map
            .keys()
            .copied()
            .collect()
    }

    pub fn get_supported_calling_codes(&self) -> HashSet<i32> {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(k, _)| *k)
            .collect()
    }

    fn regions_for_country_calling_code(&self, country_calling_code: i32) -> Option<&[String]> {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .ok()
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
    }

    /// Returns the region codes that share `country_calling_code`, main
    /// country first. Unknown codes give an empty list.
    pub fn get_region_codes_for_country_calling_code(&self, country_calling_code: i32) -> Vec<&str> {
        self.regions_for_country_calling_code(country_calling_code)
            .map(|regions| regions.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns the main region for `country_calling_code`, `"001"` for
    /// non-geographical entities, or `"ZZ"` when the code is unknown.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.regions_for_country_calling_code(country_calling_code)
            .and_then(|regions| regions.first())
            .map(String::as_str)
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    pub fn get_country_code_for_region(&self, region_code: &str) -> Option<i32> {
        self.region_to_metadata_map
            .get(region_code)
            .map(PhoneMetadata::country_code)
            .or_else(|| {
                warn!("Invalid or unknown region code ({}) provided.", region_code);
                None
            })
    }

    pub fn get_metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    pub fn get_metadata_for_non_geographical_region(
        &self,
        country_calling_code: i32,
    ) -> Option<&PhoneMetadata> {
        self.country_code_to_non_geographical_metadata_map
            .get(&country_calling_code)
    }

    pub(crate) fn empty_metadata(&self) -> &PhoneMetadata {
        &self.empty_metadata
    }

    /// Splits a known country calling code (1 to 3 digits, never starting
    /// with `0`) off the start of `full_number`.
    ///
    /// Returns the code and the rest of the number.
    pub fn extract_country_code<'b>(&self, full_number: &'b str) -> Option<(i32, &'b str)> {
        if full_number.is_empty() || full_number.starts_with('0') {
            // Country codes do not begin with a '0'.
            return None;
        }
        for i in 1..=MAX_LENGTH_COUNTRY_CODE.min(full_number.len()) {
            let Some(Ok(potential_country_code)) =
                full_number.get(..i).map(str::parse::<i32>)
            else {
                return None;
            };
            if self
                .regions_for_country_calling_code(potential_country_code)
                .is_some()
            {
                return Some((potential_country_code, &full_number[i..]));
            }
        }
        None
    }

    /// Normalizes a string of characters representing a phone number. This
    /// strips all characters which are not diallable on a mobile phone keypad
    /// (including all non-ASCII digits).
    pub fn normalize_diallable_chars_only(&self, phone_number: &str) -> String {
        normalize_helper(&self.reg_exps.diallable_char_mappings, true, phone_number)
    }

    pub fn match_national_number(
        &self,
        number: &str,
        national_number_pattern: &str,
        allow_prefix_match: bool,
    ) -> MatchResult {
        self.matcher_api
            .match_national_number(number, national_number_pattern, allow_prefix_match)
    }

    pub(crate) fn regexp_cache(&self) -> &RegexCache {
        &self.reg_exps.regexp_cache
    }

    pub(crate) fn is_format_eligible_for_as_you_type_formatter(&self, format: &str) -> bool {
        // We require that the first
        // group is present in the output pattern to ensure no data is lost while
        // formatting; when we format as you type, this should always be the case.
        self.reg_exps
            .is_format_eligible_as_you_type_formatting_regex
            .full_match(format)
    }

    pub(crate) fn formatting_rule_has_first_group_only(
        &self,
        national_prefix_formatting_rule: &str,
    ) -> bool {
        national_prefix_formatting_rule.is_empty()
            || self
                .reg_exps
                .formatting_rule_has_first_group_only_regex
                .full_match(national_prefix_formatting_rule)
    }

    /// Whether a formatting rule separates the national prefix from the
    /// first group with a space or a dash.
    pub(crate) fn rule_separates_national_prefix(&self, formatting_rule: &str) -> bool {
        self.reg_exps
            .national_prefix_separators_pattern
            .is_match(formatting_rule)
    }

    pub(crate) fn is_rfc3966_global_number_digits(&self, phone_context: &str) -> bool {
        self.reg_exps
            .rfc3966_global_number_digits_pattern
            .is_match(phone_context)
    }

    pub(crate) fn is_rfc3966_domainname(&self, phone_context: &str) -> bool {
        self.reg_exps
            .rfc3966_domainname_pattern
            .is_match(phone_context)
    }
}

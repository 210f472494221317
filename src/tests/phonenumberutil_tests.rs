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

use crate::{
    InvalidMetadataError, MatchResult, NumberFormat, PhoneMetadata, PhoneMetadataCollection,
    PhoneNumberUtil,
};

use super::{get_phone_util, region_code::RegionCode, test_metadata::test_metadata};

#[test]
fn get_supported_regions() {
    let phone_util = get_phone_util();
    let regions: HashSet<&str> = phone_util.get_supported_regions().into_iter().collect();
    assert!(regions.contains(RegionCode::us()));
    assert!(regions.contains(RegionCode::kr()));
    assert!(!regions.contains(RegionCode::un001()));
    assert!(!regions.contains(RegionCode::zz()));
}

#[test]
fn get_supported_global_network_calling_codes() {
    let phone_util = get_phone_util();
    let calling_codes = phone_util.get_supported_global_network_calling_codes();
    assert_eq!(HashSet::from([800]), calling_codes);
    for calling_code in calling_codes {
        assert_eq!(
            RegionCode::un001(),
            phone_util.get_region_code_for_country_code(calling_code)
        );
    }
}

#[test]
fn get_supported_calling_codes() {
    let phone_util = get_phone_util();
    let calling_codes = phone_util.get_supported_calling_codes();
    assert!(calling_codes.contains(&1));
    assert!(calling_codes.contains(&64));
    assert!(calling_codes.contains(&800));
    assert!(!calling_codes.contains(&999));
}

#[test]
fn get_region_codes_for_country_calling_code() {
    let phone_util = get_phone_util();
    // The main country is always listed first.
    assert_eq!(
        vec![RegionCode::us(), RegionCode::bs()],
        phone_util.get_region_codes_for_country_calling_code(1)
    );
    assert_eq!(
        vec![RegionCode::gb()],
        phone_util.get_region_codes_for_country_calling_code(44)
    );
    assert_eq!(
        vec![RegionCode::un001()],
        phone_util.get_region_codes_for_country_calling_code(800)
    );
    assert!(phone_util.get_region_codes_for_country_calling_code(-1).is_empty());
}

#[test]
fn get_region_code_for_country_code() {
    let phone_util = get_phone_util();
    assert_eq!(RegionCode::us(), phone_util.get_region_code_for_country_code(1));
    assert_eq!(RegionCode::gb(), phone_util.get_region_code_for_country_code(44));
    assert_eq!(RegionCode::de(), phone_util.get_region_code_for_country_code(49));
    assert_eq!(RegionCode::un001(), phone_util.get_region_code_for_country_code(800));
    assert_eq!(RegionCode::zz(), phone_util.get_region_code_for_country_code(999));
}

#[test]
fn get_country_code_for_region() {
    let phone_util = get_phone_util();
    assert_eq!(Some(1), phone_util.get_country_code_for_region(RegionCode::us()));
    assert_eq!(Some(1), phone_util.get_country_code_for_region(RegionCode::bs()));
    assert_eq!(Some(64), phone_util.get_country_code_for_region(RegionCode::nz()));
    assert_eq!(None, phone_util.get_country_code_for_region(RegionCode::zz()));
    assert_eq!(None, phone_util.get_country_code_for_region(RegionCode::un001()));
}

#[test]
fn get_metadata() {
    let phone_util = get_phone_util();
    let metadata = phone_util
        .get_metadata_for_region(RegionCode::de())
        .expect("DE metadata should exist");
    assert_eq!(RegionCode::de(), metadata.id());
    assert_eq!(49, metadata.country_code());
    assert_eq!("00", metadata.international_prefix());
    assert_eq!("0", metadata.national_prefix());
    assert_eq!("0", metadata.national_prefix_for_parsing());
    assert_eq!(4, metadata.number_format.len());
    assert_eq!(r"(\d{2})(\d{3,11})", metadata.number_format[1].pattern());
    assert_eq!("$1/$2", metadata.number_format[1].format());
    assert_eq!("0$1", metadata.number_format[1].national_prefix_formatting_rule());
    assert!(phone_util.get_metadata_for_region(RegionCode::zz()).is_none());

    let metadata = phone_util
        .get_metadata_for_non_geographical_region(800)
        .expect("800 metadata should exist");
    assert_eq!(RegionCode::un001(), metadata.id());
    assert_eq!(800, metadata.country_code());
    assert!(phone_util.get_metadata_for_non_geographical_region(44).is_none());
}

#[test]
fn extract_country_code() {
    let phone_util = get_phone_util();
    assert_eq!(Some((1, "6502532222")), phone_util.extract_country_code("16502532222"));
    assert_eq!(Some((44, "2070313000")), phone_util.extract_country_code("442070313000"));
    assert_eq!(Some((800, "12345678")), phone_util.extract_country_code("80012345678"));
    assert_eq!(Some((998, "")), phone_util.extract_country_code("998"));
    // Country codes never start with 0.
    assert_eq!(None, phone_util.extract_country_code("0441234"));
    assert_eq!(None, phone_util.extract_country_code("999123"));
    assert_eq!(None, phone_util.extract_country_code(""));
}

#[test]
fn normalize_diallable_chars_only() {
    let phone_util = get_phone_util();
    assert_eq!(
        "03*456+1#234",
        phone_util.normalize_diallable_chars_only("03*4-56&+1a#234")
    );
    assert_eq!("", phone_util.normalize_diallable_chars_only("abc"));
}

#[test]
fn match_national_number() {
    let phone_util = get_phone_util();
    let pattern = r"(\d{3})(\d{3})(\d{4})";
    assert_eq!(MatchResult::Matched, phone_util.match_national_number("6502532222", pattern, false));
    assert_eq!(MatchResult::Matched, phone_util.match_national_number("650253", pattern, true));
    assert_eq!(MatchResult::Invalid, phone_util.match_national_number("650253", pattern, false));
    assert_eq!(MatchResult::TooLong, phone_util.match_national_number("65025322221", pattern, true));
    assert_eq!(MatchResult::Invalid, phone_util.match_national_number("6502532222", "", true));
    assert_eq!(MatchResult::Invalid, phone_util.match_national_number("650", "(", true));
}

#[test]
fn unknown_region_accepts_only_plus() {
    let phone_util = get_phone_util();
    let mut formatter = phone_util.get_as_you_type_formatter("");
    for c in "00441234".chars() {
        formatter.input_digit(c);
    }
    assert_eq!("00441234", formatter.current_output());
}

#[test]
fn with_regex_cache_capacity() {
    let phone_util = PhoneNumberUtil::with_regex_cache_capacity(test_metadata(), 2);
    let mut formatter = phone_util.get_as_you_type_formatter(RegionCode::de());
    for c in "0301234".chars() {
        formatter.input_digit(c);
    }
    assert_eq!("030/1234", formatter.current_output());
    assert!(phone_util.regexp_cache().len() <= 2);
}

#[test]
fn lenient_metadata_loading_skips_bad_entries() {
    let collection = PhoneMetadataCollection::new(vec![
        PhoneMetadata::new("GB", 44),
        PhoneMetadata::new("GB", 45),
        PhoneMetadata {
            id: "XX".to_owned(),
            ..Default::default()
        },
        PhoneMetadata::new("001", 800),
        PhoneMetadata::new("001", 800),
        PhoneMetadata::new("ZZ", 0),
    ]);
    let phone_util = PhoneNumberUtil::new_for_metadata(collection);
    assert_eq!(vec![RegionCode::gb()], phone_util.get_supported_regions());
    assert_eq!(Some(44), phone_util.get_country_code_for_region(RegionCode::gb()));
    assert_eq!(HashSet::from([44, 800]), phone_util.get_supported_calling_codes());
}

#[test]
fn strict_metadata_loading() {
    let duplicate = PhoneMetadataCollection::new(vec![
        PhoneMetadata::new("GB", 44),
        PhoneMetadata::new("GB", 44),
    ]);
    assert_eq!(
        Some(InvalidMetadataError::DuplicateRegion("GB".to_owned())),
        PhoneNumberUtil::try_new_for_metadata(duplicate).err()
    );

    let duplicate = PhoneMetadataCollection::new(vec![
        PhoneMetadata::new("001", 800),
        PhoneMetadata::new("001", 800),
    ]);
    assert_eq!(
        Some(InvalidMetadataError::DuplicateNonGeographicalEntity(800)),
        PhoneNumberUtil::try_new_for_metadata(duplicate).err()
    );

    let missing = PhoneMetadataCollection::new(vec![PhoneMetadata {
        id: "XX".to_owned(),
        ..Default::default()
    }]);
    assert_eq!(
        Some(InvalidMetadataError::MissingCountryCode("XX".to_owned())),
        PhoneNumberUtil::try_new_for_metadata(missing).err()
    );

    assert!(PhoneNumberUtil::try_new_for_metadata(test_metadata()).is_ok());
}

#[test]
fn main_country_is_listed_first_regardless_of_order() {
    let collection: PhoneMetadataCollection = [
        PhoneMetadata::new("BS", 1),
        PhoneMetadata::new("US", 1).with_main_country_for_code(true),
        PhoneMetadata::new("CA", 1),
    ]
    .into_iter()
    .collect();
    let phone_util = PhoneNumberUtil::new_for_metadata(collection);
    assert_eq!(
        vec!["US", "BS", "CA"],
        phone_util.get_region_codes_for_country_calling_code(1)
    );
}

#[test]
fn formats_without_first_group_are_not_eligible() {
    let phone_util = get_phone_util();
    let metadata = phone_util.get_metadata_for_region(RegionCode::mx()).unwrap();
    let eligible: Vec<&NumberFormat> = metadata
        .number_format
        .iter()
        .filter(|format| phone_util.is_format_eligible_for_as_you_type_formatter(format.format()))
        .collect();
    assert_eq!(3, eligible.len());
    assert!(!phone_util.is_format_eligible_for_as_you_type_formatter("*$1"));
    assert!(phone_util.is_format_eligible_for_as_you_type_formatter("($1) $2-$3"));
}

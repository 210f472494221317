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

use crate::phonenumberutil::REGION_CODE_FOR_NON_GEO_ENTITY;

pub struct RegionCode {}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    /// Region code of metadata that describes a non-geographical entity,
    /// such as the 800 International Toll Free Service.
    pub fn get_non_geo_entity() -> &'static str {
        REGION_CODE_FOR_NON_GEO_ENTITY
    }

    pub fn is_non_geo_entity(region_code: &str) -> bool {
        region_code == Self::get_non_geo_entity()
    }
}

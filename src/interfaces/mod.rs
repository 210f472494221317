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

use crate::phonenumberutil::MatchResult;

/// Internal phonenumber matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub trait MatcherApi: Send + Sync {
    /// Matches the given national number (a string containing only decimal
    /// digits) against `national_number_pattern`.
    ///
    /// With `allow_prefix_match` a number that could still grow into a match
    /// is reported as [`MatchResult::Matched`]. A number that has already run
    /// past a complete match is [`MatchResult::TooLong`].
    fn match_national_number(
        &self,
        number: &str,
        national_number_pattern: &str,
        allow_prefix_match: bool,
    ) -> MatchResult;
}

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

//! Formats phone numbers digit by digit as they are typed, driven by
//! per-region formatting metadata.

mod asyoutypeformatter;
mod interfaces;
mod metadata;
mod phonecontext;
mod phonenumberutil;
mod regex_based_matcher;
mod regexp_cache;
pub mod i18n;
pub(crate) mod regex_util;

pub use asyoutypeformatter::{AsYouTypeFormatter, DigitOutcome, FormatterState, classify};
pub use interfaces::MatcherApi;
pub use metadata::{NumberFormat, PhoneMetadata, PhoneMetadataCollection};
pub use phonecontext::{PhoneContext, PhoneContextParser};
pub use phonenumberutil::{
    InvalidMetadataError, InvalidRegexError, MatchResult, PhoneContextError, PhoneNumberUtil,
};
pub use regex_based_matcher::RegexBasedMatcher;

#[cfg(test)]
mod tests;

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

use thiserror::Error;

pub use crate::regexp_cache::InvalidRegexError;

/// Error of [`crate::PhoneNumberUtil::parse_phone_context`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneContextError {
    /// The `phone-context` value is empty or is neither a `+` prefixed
    /// number nor a domain name.
    #[error("Invalid phone-context value: {context:?}")]
    InvalidArgument { context: String },
}

/// Problems found while building a [`crate::PhoneNumberUtil`] with
/// [`crate::PhoneNumberUtil::try_new_for_metadata`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMetadataError {
    #[error("Metadata for region {0} is given more than once")]
    DuplicateRegion(String),
    #[error("Metadata for calling code {0} of a non-geographical entity is given more than once")]
    DuplicateNonGeographicalEntity(i32),
    #[error("Metadata for {0} has no country calling code")]
    MissingCountryCode(String),
}

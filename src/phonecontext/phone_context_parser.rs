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

use crate::phonenumberutil::{
    PLUS_SIGN, PhoneContextError, PhoneNumberUtil, RFC3966_PHONE_CONTEXT,
    helper_functions::decimal_digits_only,
};

/// The `phone-context` parameter of an RFC3966 number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneContext {
    /// The value as it appears in the number, e.g. `"+64"` or `"example.com"`.
    pub raw_context: String,
    /// The country calling code a `+` prefixed context starts with, if it is
    /// known to the metadata.
    pub country_code: Option<i32>,
}

/// Parses the `phone-context` parameter of RFC3966 numbers.
///
/// The grammar being checked:
/// ```text
/// context              = ";phone-context=" descriptor
/// descriptor           = domainname / global-number-digits
/// global-number-digits = "+" *phonedigit DIGIT *phonedigit
/// phonedigit           = DIGIT / [ visual-separator ]
/// visual-separator     = "-" / "." / "(" / ")"
/// domainname           = *( domainlabel "." ) toplabel [ "." ]
/// domainlabel          = alphanum / alphanum *( alphanum / "-" ) alphanum
/// toplabel             = ALPHA / ALPHA *( alphanum / "-" ) alphanum
/// ```
pub struct PhoneContextParser<'a> {
    phone_util: &'a PhoneNumberUtil,
}

impl<'a> PhoneContextParser<'a> {
    pub fn new(phone_util: &'a PhoneNumberUtil) -> Self {
        Self { phone_util }
    }

    /// Returns `Ok(None)` if `phone_number` has no `phone-context`
    /// parameter, and an error if the parameter value is empty or invalid.
    pub fn parse(&self, phone_number: &str) -> Result<Option<PhoneContext>, PhoneContextError> {
        let Some(phone_context) = Self::extract_phone_context(phone_number) else {
            return Ok(None);
        };
        if !self.is_valid(phone_context) {
            trace!("Rejected phone-context {:?}", phone_context);
            return Err(PhoneContextError::InvalidArgument {
                context: phone_context.to_owned(),
            });
        }
        Ok(Some(PhoneContext {
            raw_context: phone_context.to_owned(),
            country_code: self.parse_country_code(phone_context),
        }))
    }

    /// Returns the value of the phone-context parameter, or `None` when the
    /// parameter is absent. The value ends at the next `;` or at the end of
    /// the number.
    fn extract_phone_context(phone_number: &str) -> Option<&str> {
        let index_of_phone_context = phone_number.find(RFC3966_PHONE_CONTEXT)?;
        let phone_context_start = index_of_phone_context + RFC3966_PHONE_CONTEXT.len();
        let phone_context = &phone_number[phone_context_start..];
        // If phone-context is not the last parameter.
        Some(match phone_context.find(';') {
            Some(phone_context_end) => &phone_context[..phone_context_end],
            None => phone_context,
        })
    }

    fn is_valid(&self, phone_context: &str) -> bool {
        if phone_context.is_empty() {
            return false;
        }
        // Does phone-context value match the global-number-digits or the
        // domainname production?
        self.phone_util.is_rfc3966_global_number_digits(phone_context)
            || self.phone_util.is_rfc3966_domainname(phone_context)
    }

    fn parse_country_code(&self, phone_context: &str) -> Option<i32> {
        let without_plus = phone_context.strip_prefix(PLUS_SIGN)?;
        let digits = decimal_digits_only(without_plus);
        self.phone_util
            .extract_country_code(&digits)
            .map(|(country_code, _)| country_code)
    }
}

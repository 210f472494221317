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

//! Plain Rust shape of the libphonenumber metadata messages.
//!
//! Only the fields the formatting core reads are modelled. Accessors follow
//! the proto2 convention: unset optional strings read as `""`.

/// One formatting rule of a region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormat {
    pub pattern: String,
    pub format: String,
    /// Ordered from the least to the most detailed pattern. Pattern `i`
    /// describes the first `i + 3` digits of the national number.
    pub leading_digits_pattern: Vec<String>,
    /// Already expanded rule, e.g. `"0$1"` or `"($1)"`.
    pub national_prefix_formatting_rule: Option<String>,
    pub national_prefix_optional_when_formatting: bool,
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn new(pattern: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            format: format.into(),
            ..Default::default()
        }
    }

    pub fn with_leading_digits<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_digits_pattern
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn with_national_prefix_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.national_prefix_formatting_rule = Some(rule.into());
        self
    }

    pub fn with_national_prefix_optional_when_formatting(mut self, optional: bool) -> Self {
        self.national_prefix_optional_when_formatting = optional;
        self
    }

    pub fn with_domestic_carrier_code_formatting_rule(mut self, rule: impl Into<String>) -> Self {
        self.domestic_carrier_code_formatting_rule = Some(rule.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or("")
    }

    pub fn national_prefix_optional_when_formatting(&self) -> bool {
        self.national_prefix_optional_when_formatting
    }

    pub fn has_domestic_carrier_code_formatting_rule(&self) -> bool {
        self.domestic_carrier_code_formatting_rule.is_some()
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        self.domestic_carrier_code_formatting_rule
            .as_deref()
            .unwrap_or("")
    }
}

/// Metadata of a single region or non-geographical entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadata {
    pub id: String,
    pub country_code: Option<i32>,
    pub international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    pub national_prefix_for_parsing: Option<String>,
    pub number_format: Vec<NumberFormat>,
    pub intl_number_format: Vec<NumberFormat>,
    pub main_country_for_code: bool,
    pub leading_digits: Option<String>,
}

impl PhoneMetadata {
    pub fn new(id: impl Into<String>, country_code: i32) -> Self {
        Self {
            id: id.into(),
            country_code: Some(country_code),
            ..Default::default()
        }
    }

    pub fn with_international_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.international_prefix = Some(prefix.into());
        self
    }

    /// Sets the national prefix. The parsing pattern defaults to the prefix
    /// itself, as the metadata build tools do.
    pub fn with_national_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if self.national_prefix_for_parsing.is_none() {
            self.national_prefix_for_parsing = Some(prefix.clone());
        }
        self.national_prefix = Some(prefix);
        self
    }

    pub fn with_national_prefix_for_parsing(mut self, pattern: impl Into<String>) -> Self {
        self.national_prefix_for_parsing = Some(pattern.into());
        self
    }

    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format.push(format);
        self
    }

    pub fn with_intl_number_format(mut self, format: NumberFormat) -> Self {
        self.intl_number_format.push(format);
        self
    }

    pub fn with_main_country_for_code(mut self, main: bool) -> Self {
        self.main_country_for_code = main;
        self
    }

    pub fn with_leading_digits(mut self, leading_digits: impl Into<String>) -> Self {
        self.leading_digits = Some(leading_digits.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code.unwrap_or(0)
    }

    pub fn international_prefix(&self) -> &str {
        self.international_prefix.as_deref().unwrap_or("")
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or("")
    }

    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }

    pub fn has_national_prefix_for_parsing(&self) -> bool {
        self.national_prefix_for_parsing.is_some()
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing.as_deref().unwrap_or("")
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or("")
    }
}

/// Everything a [`crate::PhoneNumberUtil`] is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneMetadataCollection {
    pub metadata: Vec<PhoneMetadata>,
}

impl PhoneMetadataCollection {
    pub fn new(metadata: Vec<PhoneMetadata>) -> Self {
        Self { metadata }
    }
}

impl FromIterator<PhoneMetadata> for PhoneMetadataCollection {
    fn from_iter<T: IntoIterator<Item = PhoneMetadata>>(iter: T) -> Self {
        Self {
            metadata: iter.into_iter().collect(),
        }
    }
}

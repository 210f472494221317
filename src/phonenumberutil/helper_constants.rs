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

/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;
pub const PLUS_CHARS: &str = "+\u{FF0B}";
// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. This consists of
// dash characters, white space characters, full stops, slashes, square
// brackets, parentheses and tildes. It also includes the letter 'x' as that
// is found as a placeholder for carrier information in some phone numbers.
// Full-width variants are also present.
// Square brackets are escaped: the regex crate reads `[` inside a class as
// the start of a nested class.
pub const VALID_PUNCTUATION: &str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub const REGION_CODE_FOR_NON_GEO_ENTITY: &str = "001";

pub const PLUS_SIGN: &str = "+";
pub const RFC3966_PHONE_CONTEXT: &str = ";phone-context=";
pub const RFC3966_VISUAL_SEPARATOR: &str = r"[\-\.\(\)]?";

pub const DIGITS: &str = r"\p{Nd}";

pub const VALID_ALPHA_INCL_UPPERCASE: &str = "A-Za-z";

pub const NANPA_COUNTRY_CODE: i32 = 1;

/// International prefix of the metadata used for unknown regions. It never
/// matches a digit, so only `+` starts an international number there.
pub const EMPTY_METADATA_INTERNATIONAL_PREFIX: &str = "NA";

/// Character used when appropriate to separate a prefix, such as a long NDD
/// or a country calling code, from the national number.
pub const SEPARATOR_BEFORE_NATIONAL_NUMBER: char = ' ';

/// Placeholder of a digit in a formatting template.
pub const DIGIT_PLACEHOLDER: char = '\u{2008}';

/// Formatting templates are built by matching a format pattern against this
/// string; 15 digits is the longest number ITU-T E.164 allows.
pub const DIGIT_PATTERN_SAMPLE: &str = "999999999999999";

/// The minimum length of national number accrued that is required to trigger
/// the formatter. The first element of the leading digits pattern of each
/// number format describes this many digits.
pub const MIN_LEADING_DIGITS_LENGTH: usize = 3;

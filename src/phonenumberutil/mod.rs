mod helper_constants;
pub(crate) mod helper_functions;
pub mod errors;
pub mod enums;
pub mod phonenumberutil;
mod phone_number_regexps_and_mappings;

pub use enums::MatchResult;
pub use errors::{InvalidMetadataError, InvalidRegexError, PhoneContextError};
pub use phonenumberutil::PhoneNumberUtil;

pub(crate) use helper_constants::{
    DIGIT_PATTERN_SAMPLE, DIGIT_PLACEHOLDER, MIN_LEADING_DIGITS_LENGTH, NANPA_COUNTRY_CODE,
    PLUS_CHARS, PLUS_SIGN, REGION_CODE_FOR_NON_GEO_ENTITY, RFC3966_PHONE_CONTEXT,
    SEPARATOR_BEFORE_NATIONAL_NUMBER,
};

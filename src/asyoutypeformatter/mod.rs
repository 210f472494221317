mod as_you_type_formatter;
mod digit_normalizer;
mod format_selection;
mod formatting_template;
mod prefix_extraction;

pub use as_you_type_formatter::{AsYouTypeFormatter, FormatterState};
pub use digit_normalizer::{DigitOutcome, classify};

mod phone_context_parser;

pub use phone_context_parser::{PhoneContext, PhoneContextParser};

mod phone_metadata;

pub use phone_metadata::{NumberFormat, PhoneMetadata, PhoneMetadataCollection};

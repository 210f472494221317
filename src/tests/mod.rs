mod phonenumberutil_tests;

use crate::PhoneNumberUtil;

static ONCE: std::sync::Once = std::sync::Once::new();

// This setup function simulates getting the PhoneNumberUtil instance for each test.
fn get_phone_util() -> PhoneNumberUtil {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
    PhoneNumberUtil::new_for_metadata(test_metadata::test_metadata())
}

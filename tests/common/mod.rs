//! Common test utilities: stub transports and logging setup.

use applicant_core::lookup::{InMemoryTransport, LookupClient, StubResponse};
use applicant_core::value_objects::CityState;

/// Body returned by the ZIP service for Austin, TX.
pub const AUSTIN_BODY: &str =
    r#"{"places":[{"place name":"Austin","state abbreviation":"TX"}]}"#;

/// ZIP codes with a canned failure in [`stub_transport`].
pub mod failing {
    pub const MALFORMED_JSON: &str = "11111";
    pub const EMPTY_PLACES: &str = "22222";
    pub const SERVICE_UNAVAILABLE: &str = "33333";
    pub const CONNECTION_REFUSED: &str = "44444";
    /// No stub entry: the transport answers 404.
    pub const NOT_FOUND: &str = "00000";
}

/// Install `env_logger` for the test binary; repeated calls are ignored.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Transport with two known places and one entry per failure mode.
pub fn stub_transport() -> InMemoryTransport {
    InMemoryTransport::new()
        .with_body("78701", AUSTIN_BODY)
        .with_place("90210", "Beverly Hills", "CA")
        .with_place("10001", "New York City", "NY")
        .with_body(failing::MALFORMED_JSON, r#"{"places": [{"place name": "#)
        .with_body(failing::EMPTY_PLACES, r#"{"post code": "22222", "places": []}"#)
        .with_response(failing::SERVICE_UNAVAILABLE, StubResponse::Status(503))
        .with_response(
            failing::CONNECTION_REFUSED,
            StubResponse::NetworkError("connection refused".to_string()),
        )
}

pub fn stub_client() -> LookupClient<InMemoryTransport> {
    init_logging();
    LookupClient::with_transport(stub_transport())
}

pub fn cached_stub_client() -> LookupClient<InMemoryTransport> {
    init_logging();
    LookupClient::cached(stub_transport())
}

pub fn austin() -> CityState {
    CityState::of("Austin", "TX").expect("Austin, TX is a valid city/state")
}

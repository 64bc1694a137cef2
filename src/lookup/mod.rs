//! City/state resolution by ZIP code.
//!
//! [`LookupClient`] validates a ZIP code, fetches the service's JSON document
//! through a [`ZipCodeTransport`], and reduces it to a
//! [`CityState`](crate::value_objects::CityState). Every outcome comes back as
//! a [`LookupResult`]; nothing in this module panics or returns an error for a
//! bad ZIP code or an unreachable service.
//!
//! # Example
//!
//! ```rust
//! use applicant_core::lookup::{InMemoryTransport, LookupClient};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let transport = InMemoryTransport::new()
//!     .with_place("78701", "Austin", "TX")
//!     .with_place("90210", "Beverly Hills", "CA");
//! let client = LookupClient::cached(transport);
//!
//! let results = client.lookup_many(["78701", "00000", "90210"]).await;
//! assert!(results[0].is_success());
//! assert!(results[1].is_failure());
//! assert_eq!(results[2].value().map(|cs| cs.state()), Some("CA"));
//! # }
//! ```

mod client;
mod config;
mod response;
mod result;
mod transport;

pub use client::LookupClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, LookupConfig};
pub use response::{parse_all_city_states, parse_city_state};
pub use result::LookupResult;
pub use transport::{HttpTransport, InMemoryTransport, StubResponse, ZipCodeTransport};

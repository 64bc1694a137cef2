//! Reduction of the ZIP service's JSON body to a [`CityState`].
//!
//! Expected shape:
//!
//! ```json
//! { "places": [ { "place name": "Austin", "state abbreviation": "TX" } ] }
//! ```

use super::LookupResult;
use crate::value_objects::CityState;
use serde_json::Value;

pub(crate) const INVALID_RESPONSE_FORMAT: &str = "invalid response format";

const PLACES: &str = "places";
const PLACE_NAME: &str = "place name";
const STATE_ABBREVIATION: &str = "state abbreviation";

/// Extract the city/state of the first place in a response body.
///
/// Malformed JSON, a missing or empty `places` array, or a first place
/// without a non-empty `place name` and `state abbreviation` all produce a
/// failure.
pub fn parse_city_state(body: &str) -> LookupResult<CityState> {
    let document = match parse_document(body) {
        Ok(document) => document,
        Err(failure) => return failure,
    };

    document
        .get(PLACES)
        .and_then(Value::as_array)
        .and_then(|places| places.first())
        .and_then(city_state_from_place)
        .map_or_else(
            || LookupResult::failure(INVALID_RESPONSE_FORMAT),
            LookupResult::success,
        )
}

/// Extract every well-formed place in a response body, skipping the rest.
///
/// Returns an empty list when the body cannot be parsed or has no `places`.
pub fn parse_all_city_states(body: &str) -> Vec<CityState> {
    let Ok(document) = parse_document(body) else {
        return Vec::new();
    };

    document
        .get(PLACES)
        .and_then(Value::as_array)
        .map(|places| places.iter().filter_map(city_state_from_place).collect())
        .unwrap_or_default()
}

fn parse_document(body: &str) -> Result<Value, LookupResult<CityState>> {
    serde_json::from_str(body).map_err(|e| {
        LookupResult::failure(format!("{}: malformed JSON ({})", INVALID_RESPONSE_FORMAT, e))
    })
}

fn city_state_from_place(place: &Value) -> Option<CityState> {
    let city = place.get(PLACE_NAME).and_then(Value::as_str)?;
    let state = place.get(STATE_ABBREVIATION).and_then(Value::as_str)?;
    CityState::of(city, state).ok()
}

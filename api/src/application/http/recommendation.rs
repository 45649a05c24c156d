use axum::http::{HeaderMap, HeaderName, HeaderValue};
use ayurdiet_core::domain::recommendation::value_objects::Resolution;
use tracing::warn;

pub mod handlers;
pub mod router;
pub mod validators;

/// Response header carrying the provenance of a recommendation (`model` or `fallback`).
pub const SOURCE_HEADER: &str = "x-recommendation-source";

/// Response header listing suggested foods that are not in the catalog.
pub const UNLISTED_FOODS_HEADER: &str = "x-unlisted-foods";

pub fn provenance_headers<T>(resolution: &Resolution<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(SOURCE_HEADER),
        HeaderValue::from_static(resolution.provenance.as_str()),
    );

    if !resolution.unlisted_foods.is_empty() {
        let unlisted = resolution.unlisted_foods.join(", ");
        match HeaderValue::from_str(&unlisted) {
            Ok(value) => {
                headers.insert(HeaderName::from_static(UNLISTED_FOODS_HEADER), value);
            }
            Err(_) => warn!("unlisted foods cannot be sent as a header: {}", unlisted),
        }
    }

    headers
}

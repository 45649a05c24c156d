use serde::de::DeserializeOwned;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food::entities::FoodItem,
    recommendation::{
        entities::Recommendation,
        value_objects::{Resolution, ResolveFailure},
    },
};

/// Greedy span from the first `{` to the last `}`. Prose or a second object
/// around the answer is kept inside the span and makes parsing fail.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;

    if end < start {
        return None;
    }

    Some(&text[start..=end])
}

/// Turns a generation outcome into a complete value. Any failure yields
/// `fallback` unchanged; a partially valid object is never returned.
pub fn resolve<T, FB>(outcome: Result<String, CoreError>, fallback: FB) -> Resolution<T>
where
    T: DeserializeOwned,
    FB: FnOnce() -> T,
{
    let text = match outcome {
        Ok(text) => text,
        Err(_) => return Resolution::fallback(fallback(), ResolveFailure::UpstreamUnavailable),
    };

    extract_json_object(&text)
        .and_then(|json| serde_json::from_str::<T>(json).ok())
        .map(Resolution::from_model)
        .unwrap_or_else(|| Resolution::fallback(fallback(), ResolveFailure::UnparsableOutput))
}

/// Collects suggested foods that match no catalog entry and, when `filter`
/// is set, removes them from the recommendation.
pub fn check_catalog(
    resolution: &mut Resolution<Recommendation>,
    catalog: &[FoodItem],
    filter: bool,
) {
    if resolution.is_fallback() {
        return;
    }

    let is_listed = |name: &String| catalog.iter().any(|food| food.matches_name(name));
    let recommendation = &mut resolution.value;

    let unlisted: Vec<String> = recommendation
        .recommended_foods
        .iter()
        .chain(recommendation.foods_to_avoid.iter())
        .filter(|name| !is_listed(*name))
        .cloned()
        .collect();

    if filter {
        recommendation.recommended_foods.retain(is_listed);
        recommendation.foods_to_avoid.retain(is_listed);
    }

    resolution.unlisted_foods = unlisted;
}

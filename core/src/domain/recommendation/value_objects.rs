use std::fmt;

use serde::Serialize;

use crate::domain::patient::entities::PatientProfile;

/// Sampling parameters forwarded to the text-generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub return_full_text: bool,
}

impl GenerationParameters {
    pub fn general() -> Self {
        Self {
            max_new_tokens: 1000,
            temperature: 0.7,
            return_full_text: false,
        }
    }

    pub fn meal() -> Self {
        Self {
            max_new_tokens: 800,
            ..Self::general()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Model,
    Fallback,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Model => "model",
            Provenance::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a resolution fell back to the static default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveFailure {
    /// Network error, timeout, non-success status or empty generation.
    UpstreamUnavailable,
    /// Text came back but no valid object could be extracted from it.
    UnparsableOutput,
}

impl ResolveFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveFailure::UpstreamUnavailable => "upstream_unavailable",
            ResolveFailure::UnparsableOutput => "unparsable_output",
        }
    }
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of one pipeline run. `value` is always complete: either the
/// parsed model output or the untouched static default.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<T> {
    pub value: T,
    pub provenance: Provenance,
    pub failure: Option<ResolveFailure>,
    /// Suggested foods that are absent from the catalog.
    pub unlisted_foods: Vec<String>,
}

impl<T> Resolution<T> {
    pub fn from_model(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Model,
            failure: None,
            unlisted_foods: Vec::new(),
        }
    }

    pub fn fallback(value: T, failure: ResolveFailure) -> Self {
        Self {
            value,
            provenance: Provenance::Fallback,
            failure: Some(failure),
            unlisted_foods: Vec::new(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.provenance == Provenance::Fallback
    }
}

#[derive(Debug, Clone)]
pub struct MealRecommendationInput {
    pub profile: PatientProfile,
    pub meal_type: Option<String>,
    pub time_of_day: Option<String>,
}

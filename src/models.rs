//! Data models and structures
//!
//! Defines the judgment contract returned to callers, the lenient wire shape
//! parsed out of model responses, and environment-driven configuration.

use serde::{Deserialize, Serialize};

/// Sentinel left in place by setup templates; treated the same as no key.
pub const API_KEY_PLACEHOLDER: &str = "your_zhipu_api_key_here";

/// Default mentor advice used when the model response omits the field.
pub const DEFAULT_MENTOR_ADVICE: [&str; 4] = [
    "Fit first: choose tailored pieces that follow your frame without clinging to it.",
    "Build a base palette: pick one neutral foundation color and limit accents to one or two.",
    "Elevate with details: a watch, a belt, or a clean pair of shoes does more than another layer.",
    "Keep the style coherent: every piece should agree on formality and era.",
];

/// A complete outfit critique.
///
/// Every instance leaving [`crate::OutfitJudge`] has all four fields
/// populated and both advice lists non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Judgment {
    /// Letter-grade token such as "A+" or "C-". Free-form, not an enum.
    pub score: String,
    /// The sarcastic critique text.
    pub critique: String,
    /// Short, punchy tips.
    pub quick_advice: Vec<String>,
    /// Longer, mentor-style suggestions.
    pub mentor_advice: Vec<String>,
}

/// What a required field was missing or empty in a parsed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField(pub &'static str);

/// Lenient mirror of [`Judgment`] for deserializing model output.
///
/// All fields default so that a structurally incomplete response parses and
/// is then rejected by [`WireJudgment::validate`] rather than by serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireJudgment {
    #[serde(default)]
    pub score: String,
    #[serde(default)]
    pub critique: String,
    #[serde(default)]
    pub quick_advice: Vec<String>,
    #[serde(default)]
    pub mentor_advice: Vec<String>,
}

impl WireJudgment {
    /// Check required fields and normalize the optional one.
    ///
    /// `score`, `critique`, and `quick_advice` must be non-empty; a missing
    /// one discards the whole response (partial trust is not allowed). An
    /// absent or empty `mentor_advice` is backfilled with
    /// [`DEFAULT_MENTOR_ADVICE`].
    pub fn validate(self) -> Result<Judgment, MissingField> {
        if self.score.trim().is_empty() {
            return Err(MissingField("score"));
        }
        if self.critique.trim().is_empty() {
            return Err(MissingField("critique"));
        }
        if self.quick_advice.is_empty() {
            return Err(MissingField("quickAdvice"));
        }

        let mentor_advice = if self.mentor_advice.is_empty() {
            DEFAULT_MENTOR_ADVICE.iter().map(|s| s.to_string()).collect()
        } else {
            self.mentor_advice
        };

        Ok(Judgment {
            score: self.score,
            critique: self.critique,
            quick_advice: self.quick_advice,
            mentor_advice,
        })
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
}

impl Config {
    /// Read configuration from the environment (and `.env` when present).
    ///
    /// A missing key is not an error here; the credential gate in the
    /// service turns it into fallback behavior.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_key: std::env::var("AI_API_KEY").ok(),
        }
    }

    /// The API key, if one is configured and not the setup placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty() && *key != API_KEY_PLACEHOLDER)
    }
}

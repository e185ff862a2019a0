//! The judgment service: credential gate, remote call, validation, and the
//! fallback collapse that makes the public API infallible.

use crate::ai::{VisionChatService, ZhipuVisionClient};
use crate::data_url::strip_data_url_prefix;
use crate::models::{Config, Judgment, MissingField, WireJudgment};
use crate::{fallback, Error};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Why a call abandoned the remote result and substituted a fallback entry.
#[derive(Debug)]
pub(crate) enum FallbackReason {
    MissingCredential,
    Request(Error),
    Parse(serde_json::Error),
    Shape(MissingField),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredential => write!(f, "API key not set or still the placeholder"),
            Self::Request(e) => write!(f, "request failed: {}", e),
            Self::Parse(e) => write!(f, "completion text is not valid JSON: {}", e),
            Self::Shape(MissingField(field)) => {
                write!(f, "completion is missing required field '{}'", field)
            }
        }
    }
}

/// Outfit critique service.
///
/// [`OutfitJudge::get_judgment`] never fails: transport errors, unparseable
/// completions, and structurally incomplete responses all collapse into a
/// random entry from the fallback table. Callers cannot distinguish a live
/// critique from a fallback one through the return value.
pub struct OutfitJudge {
    chat: Box<dyn VisionChatService>,
    config: Config,
    loading: AtomicBool,
}

impl OutfitJudge {
    /// Build a judge from environment configuration.
    ///
    /// Constructed even without a usable key; the credential gate then
    /// routes every call to the fallback table.
    pub fn from_env() -> Self {
        let config = Config::from_env();
        let api_key = config.usable_api_key().unwrap_or_default().to_string();
        Self::with_client(Box::new(ZhipuVisionClient::new(api_key)), config)
    }

    /// Build a judge around an injected chat client.
    pub fn with_client(chat: Box<dyn VisionChatService>, config: Config) -> Self {
        Self {
            chat,
            config,
            loading: AtomicBool::new(false),
        }
    }

    /// Whether a call is currently in flight.
    ///
    /// Advisory only: updated with relaxed ordering and no locking, so
    /// concurrent calls may race on it. Intended for UI busy indicators.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    /// Judge the outfit in `image_data_url` (a data URL or bare base64).
    ///
    /// Always returns a fully-populated judgment; see the type docs for the
    /// fallback contract.
    pub async fn get_judgment(&self, image_data_url: &str) -> Judgment {
        self.loading.store(true, Ordering::Relaxed);
        let result = self.remote_judgment(image_data_url).await;
        self.loading.store(false, Ordering::Relaxed);

        match result {
            Ok(judgment) => judgment,
            Err(reason) => {
                warn!("Using fallback judgment: {}", reason);
                fallback::random_entry()
            }
        }
    }

    async fn remote_judgment(&self, image_data_url: &str) -> Result<Judgment, FallbackReason> {
        if self.config.usable_api_key().is_none() {
            return Err(FallbackReason::MissingCredential);
        }

        let base64_data = strip_data_url_prefix(image_data_url);
        let data_url = format!("data:image/jpeg;base64,{}", base64_data);

        let content = self
            .chat
            .critique_image(&data_url)
            .await
            .map_err(FallbackReason::Request)?;
        debug!("Raw completion content: {}", content);

        let parsed: WireJudgment =
            serde_json::from_str(&content).map_err(FallbackReason::Parse)?;

        parsed.validate().map_err(FallbackReason::Shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MockVisionClient;
    use crate::models::DEFAULT_MENTOR_ADVICE;
    use pretty_assertions::assert_eq;

    fn config_with_key() -> Config {
        Config {
            api_key: Some("test-key".to_string()),
        }
    }

    fn assert_is_fallback(judgment: &Judgment) {
        assert!(fallback::entries().contains(judgment));
    }

    #[tokio::test]
    async fn test_missing_credential_skips_network_and_falls_back() {
        let mock = MockVisionClient::new();
        let probe = mock.clone();
        let judge = OutfitJudge::with_client(Box::new(mock), Config { api_key: None });

        let judgment = judge.get_judgment("data:image/jpeg;base64,QUJD").await;
        assert_is_fallback(&judgment);
        assert_eq!(probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_placeholder_credential_skips_network_and_falls_back() {
        let mock = MockVisionClient::new();
        let probe = mock.clone();
        let judge = OutfitJudge::with_client(
            Box::new(mock),
            Config {
                api_key: Some(crate::models::API_KEY_PLACEHOLDER.to_string()),
            },
        );

        let judgment = judge.get_judgment("QUJD").await;
        assert_is_fallback(&judgment);
        assert_eq!(probe.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_falls_back() {
        let mock = MockVisionClient::new().with_error("connection refused".to_string());
        let judge = OutfitJudge::with_client(Box::new(mock), config_with_key());

        let judgment = judge.get_judgment("QUJD").await;
        assert_is_fallback(&judgment);
        assert!(!judge.is_loading());
    }

    #[tokio::test]
    async fn test_unparseable_completion_falls_back() {
        let mock = MockVisionClient::new().with_response("not json".to_string());
        let judge = OutfitJudge::with_client(Box::new(mock), config_with_key());

        let judgment = judge.get_judgment("QUJD").await;
        assert_is_fallback(&judgment);
    }

    #[tokio::test]
    async fn test_incomplete_completion_falls_back_entirely() {
        // Partial trust is not allowed: present fields of an incomplete
        // response are discarded along with the rest.
        let mock = MockVisionClient::new()
            .with_response(r#"{"score":"A+","quickAdvice":["keep it up"]}"#.to_string());
        let judge = OutfitJudge::with_client(Box::new(mock), config_with_key());

        let judgment = judge.get_judgment("QUJD").await;
        assert_is_fallback(&judgment);
        assert_ne!(judgment.score, "A+");
    }

    #[tokio::test]
    async fn test_missing_mentor_advice_is_backfilled() {
        let mock = MockVisionClient::new()
            .with_response(r#"{"score":"A","critique":"x","quickAdvice":["a"]}"#.to_string());
        let judge = OutfitJudge::with_client(Box::new(mock), config_with_key());

        let judgment = judge.get_judgment("QUJD").await;
        assert_eq!(judgment.score, "A");
        assert_eq!(judgment.critique, "x");
        assert_eq!(judgment.quick_advice, vec!["a".to_string()]);
        assert_eq!(judgment.mentor_advice.len(), DEFAULT_MENTOR_ADVICE.len());
        assert_eq!(judgment.mentor_advice[0], DEFAULT_MENTOR_ADVICE[0]);
    }

    #[tokio::test]
    async fn test_complete_completion_is_returned_verbatim() {
        let mock = MockVisionClient::new().with_response(
            r#"{"score":"A+","critique":"dazzling","quickAdvice":["keep"],"mentorAdvice":["go on"]}"#
                .to_string(),
        );
        let judge = OutfitJudge::with_client(Box::new(mock), config_with_key());

        let judgment = judge.get_judgment("QUJD").await;
        assert_eq!(
            judgment,
            Judgment {
                score: "A+".to_string(),
                critique: "dazzling".to_string(),
                quick_advice: vec!["keep".to_string()],
                mentor_advice: vec!["go on".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_every_path_yields_fully_populated_judgment() {
        let cases: Vec<(Option<String>, MockVisionClient)> = vec![
            (None, MockVisionClient::new()),
            (
                Some("key".to_string()),
                MockVisionClient::new().with_error("down".to_string()),
            ),
            (
                Some("key".to_string()),
                MockVisionClient::new().with_response("garbage".to_string()),
            ),
            (Some("key".to_string()), MockVisionClient::new()),
        ];

        for (api_key, mock) in cases {
            let judge = OutfitJudge::with_client(Box::new(mock), Config { api_key });
            let judgment = judge.get_judgment("QUJD").await;
            assert!(!judgment.score.is_empty());
            assert!(!judgment.critique.is_empty());
            assert!(!judgment.quick_advice.is_empty());
            assert!(!judgment.mentor_advice.is_empty());
            assert!(!judge.is_loading());
        }
    }
}

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatMessageContent, ImageUrl,
    MessagePart,
};
use super::VisionChatService;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn";
const CHAT_COMPLETIONS_PATH: &str = "/api/paas/v4/chat/completions";
const DEFAULT_MODEL: &str = "GLM-4.1V-Thinking-Flash";

pub struct ZhipuVisionClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl ZhipuVisionClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn build_request(&self, image_data_url: &str) -> ChatCompletionRequest {
        let system_message = ChatMessage {
            role: "system".to_string(),
            content: Some(ChatMessageContent::Text(prompts::JUDGE_SYSTEM.to_string())),
        };

        let user_message = ChatMessage {
            role: "user".to_string(),
            content: Some(ChatMessageContent::Parts(vec![
                MessagePart {
                    part_type: "image_url".to_string(),
                    text: None,
                    image_url: Some(ImageUrl {
                        url: image_data_url.to_string(),
                    }),
                },
                MessagePart {
                    part_type: "text".to_string(),
                    text: Some(prompts::JUDGE_USER.trim().to_string()),
                    image_url: None,
                },
            ])),
        };

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![system_message, user_message],
        }
    }
}

#[async_trait]
impl VisionChatService for ZhipuVisionClient {
    async fn critique_image(&self, image_data_url: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH);
        let request = self.build_request(image_data_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to Zhipu: {}", e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Zhipu API error (status {}): {}", status, error_text);
            return Err(Error::Provider(format!(
                "Zhipu API error (status {}): {}",
                status, error_text
            )));
        }

        let body: ChatCompletionResponse = response.json().await?;

        // A structurally absent completion becomes an empty object, which the
        // caller's shape validation then rejects.
        let content = body
            .choices
            .first()
            .and_then(|choice| match &choice.message.content {
                Some(ChatMessageContent::Text(text)) => Some(text.clone()),
                _ => None,
            })
            .unwrap_or_else(|| "{}".to_string());

        Ok(content)
    }
}

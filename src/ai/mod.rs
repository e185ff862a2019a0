//! AI service integration for outfit critiques
//!
//! Provides the vision chat seam the judge service talks through, the Zhipu
//! chat-completions client behind it, and a mock for tests.

pub mod client;
pub mod mock;
pub mod types;

pub use client::ZhipuVisionClient;
pub use mock::MockVisionClient;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VisionChatService: Send + Sync {
    /// Send one image (as a base64 data URL) to the model and return the raw
    /// completion text of the first choice.
    async fn critique_image(&self, image_data_url: &str) -> Result<String>;
}

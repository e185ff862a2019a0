use super::VisionChatService;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted [`VisionChatService`] for tests.
///
/// Queued responses are consumed in order and cycle when exhausted; an empty
/// queue yields a fixed valid critique. `with_error` makes every call fail,
/// which exercises the judge's fallback path without a network.
#[derive(Clone)]
pub struct MockVisionClient {
    responses: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockVisionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            fail_with: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_error(self, message: String) -> Self {
        *self.fail_with.lock().unwrap() = Some(message);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockVisionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisionChatService for MockVisionClient {
    async fn critique_image(&self, _image_data_url: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(Error::Provider(message));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(r#"{"score":"B","critique":"Watchable, with a pile of issues.","quickAdvice":["Tuck the shirt in."],"mentorAdvice":["Pick one base color."]}"#.to_string())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

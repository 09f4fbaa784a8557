use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Url;

use crate::http::{FetchError, HttpClient};

/// What a [`MockClient`] answers to every request.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// 200 with the given body.
    Body(String),
    /// A non-success status code.
    Status(u16),
}

/// A scripted HTTP client for tests. Answers every GET with the same
/// response and remembers the URLs it was asked for.
pub struct MockClient {
    response: MockResponse,
    requests: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn body(body: impl Into<String>) -> Self {
        Self::new(MockResponse::Body(body.into()))
    }

    pub fn status(status: u16) -> Self {
        Self::new(MockResponse::Status(status))
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get(&self, url: &Url) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match &self.response {
            MockResponse::Body(body) => Ok(body.clone()),
            MockResponse::Status(status) => Err(FetchError::Status(*status)),
        }
    }
}

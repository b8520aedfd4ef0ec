//! Scripted transport for tests.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::errors::SearchError;
use crate::request::RequestDescriptor;
use crate::transport::SearchTransport;

/// Canned outcome for one request.
#[derive(Debug)]
pub enum MockResponse {
    /// 2xx with this body
    Body(Vec<u8>),
    /// Non-2xx status
    Status(u16),
    /// No response at all
    Unreachable,
    /// Waits until the sender fires (or is dropped), then answers with the inner response
    Held {
        release: oneshot::Receiver<()>,
        response: Box<MockResponse>,
    },
}

impl MockResponse {
    /// 2xx response carrying `value` serialized as JSON.
    pub fn json(value: &serde_json::Value) -> Self {
        MockResponse::Body(value.to_string().into_bytes())
    }

    /// Wraps `response` so it is only delivered once the returned sender fires.
    pub fn held(response: MockResponse) -> (oneshot::Sender<()>, Self) {
        let (tx, rx) = oneshot::channel();
        (
            tx,
            MockResponse::Held {
                release: rx,
                response: Box::new(response),
            },
        )
    }
}

/// Transport that serves queued responses per path and records every request.
///
/// Each queued response is used once. A path with nothing queued answers 404.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, VecDeque<MockResponse>>>,
    requests: Mutex<Vec<RequestDescriptor>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response for the next request to `path`.
    pub fn push(&self, path: &str, response: MockResponse) {
        self.responses
            .lock()
            .entry(path.to_string())
            .or_default()
            .push_back(response);
    }

    /// Builder form of [`MockTransport::push`].
    pub fn with(self, path: &str, response: MockResponse) -> Self {
        self.push(path, response);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl SearchTransport for MockTransport {
    async fn fetch(&self, request: &RequestDescriptor) -> Result<Vec<u8>, SearchError> {
        self.requests.lock().push(request.clone());

        let next = self
            .responses
            .lock()
            .get_mut(request.path)
            .and_then(VecDeque::pop_front);

        let mut response = next.unwrap_or(MockResponse::Status(404));
        loop {
            match response {
                MockResponse::Body(body) => return Ok(body),
                MockResponse::Status(status) => {
                    return Err(SearchError::HttpStatus {
                        path: request.path.to_string(),
                        status,
                    });
                }
                MockResponse::Unreachable => {
                    return Err(SearchError::Transport {
                        path: request.path.to_string(),
                        reason: "connection refused".to_string(),
                    });
                }
                MockResponse::Held {
                    release,
                    response: inner,
                } => {
                    let _ = release.await;
                    response = *inner;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_queued_responses_are_consumed_in_order() {
        let transport = MockTransport::new()
            .with("/search/serper", MockResponse::json(&json!({"results": []})))
            .with("/search/serper", MockResponse::Status(500));
        let request = RequestDescriptor::new("/search/serper");

        assert_eq!(transport.fetch(&request).await.unwrap(), br#"{"results":[]}"#.to_vec());
        assert!(matches!(
            transport.fetch(&request).await,
            Err(SearchError::HttpStatus { status: 500, .. })
        ));
        assert!(matches!(
            transport.fetch(&request).await,
            Err(SearchError::HttpStatus { status: 404, .. })
        ));
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_held_response_waits_for_release() {
        let (release, held) = MockResponse::held(MockResponse::Unreachable);
        let transport = std::sync::Arc::new(MockTransport::new().with("/health", held));

        let task = {
            let transport = transport.clone();
            tokio::spawn(async move { transport.fetch(&RequestDescriptor::new("/health")).await })
        };

        tokio::task::yield_now().await;
        assert!(!task.is_finished());

        release.send(()).unwrap();
        let result = task.await.unwrap();
        assert!(matches!(result, Err(SearchError::Transport { .. })));
    }
}

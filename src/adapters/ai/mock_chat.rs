//! Mock chat provider for testing.
//!
//! Configurable queue of replies and errors, with call recording, so
//! orchestration tests run without a real LLM API.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ChatError, ChatProvider, CompletionReply, CompletionRequest};

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this content as a successful completion.
    Success(String),
    /// Return this error.
    Failure(ChatError),
}

/// Mock implementation of the `ChatProvider` port.
///
/// Replies are consumed in configuration order; when the queue is empty a
/// canned reply is returned. Every request is recorded for verification.
#[derive(Debug, Clone, Default)]
pub struct MockChatProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    delay: Duration,
}

impl MockChatProvider {
    /// Creates a mock with no configured replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, content: impl Into<String>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Success(content.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ChatError) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(error));
        self
    }

    /// Adds simulated latency to every completion.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the requests received so far.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of completions requested so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, ChatError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.calls.lock().unwrap().push(request);

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Success(content)) => Ok(CompletionReply {
                content,
                model: "mock-model".to_string(),
            }),
            Some(MockReply::Failure(error)) => Err(error),
            None => Ok(CompletionReply {
                content: "How about $20?".to_string(),
                model: "mock-model".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::negotiation::Turn;

    #[tokio::test]
    async fn replies_are_consumed_in_order() {
        let provider = MockChatProvider::new()
            .with_reply("first")
            .with_error(ChatError::RateLimited)
            .with_reply("third");

        let request = CompletionRequest::new("prompt");
        assert_eq!(
            provider.complete(request.clone()).await.unwrap().content,
            "first"
        );
        assert!(matches!(
            provider.complete(request.clone()).await,
            Err(ChatError::RateLimited)
        ));
        assert_eq!(
            provider.complete(request).await.unwrap().content,
            "third"
        );
    }

    #[tokio::test]
    async fn calls_are_recorded() {
        let provider = MockChatProvider::new().with_reply("ok");
        let request =
            CompletionRequest::new("prompt").with_turns([Turn::user("I have a guitar")]);

        provider.complete(request).await.unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.calls()[0].turns[0].content, "I have a guitar");
    }

    #[tokio::test]
    async fn empty_queue_falls_back_to_canned_reply() {
        let provider = MockChatProvider::new();
        let reply = provider.complete(CompletionRequest::new("prompt")).await;
        assert!(reply.unwrap().content.contains("$20"));
    }
}

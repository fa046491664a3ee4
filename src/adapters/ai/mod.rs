//! Chat provider adapters.

mod mock_chat;
mod openai_chat;

pub use mock_chat::{MockChatProvider, MockReply};
pub use openai_chat::{OpenAiChatConfig, OpenAiChatProvider};

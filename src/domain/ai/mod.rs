pub mod client;
pub mod dto;
pub mod handler;
pub mod prompt;
pub mod sanitize;
pub mod service;

pub use client::{AiBackend, GenerationOptions, OpenAiBackend, SharedAiBackend};
pub use service::AiService;

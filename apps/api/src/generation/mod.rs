// Content generation: request validation, sanitization, prompt building,
// model call and reply parsing, plus persistence and export of results.
// All model calls go through llm_client; nothing here talks to Gemini directly.

pub mod assembler;
pub mod export;
pub mod generator;
pub mod guidelines;
pub mod handlers;
pub mod history;
pub mod parser;
pub mod prompts;
pub mod request;
pub mod sanitize;
pub mod validation;

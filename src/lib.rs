pub mod ai;
pub mod catalog;
pub mod config;
pub mod render;
pub mod tool_call;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use ai::{AIError, LocalModelClient, ToolCallProvider};
pub use config::Config;
pub use render::render;
pub use tool_call::{ArgValue, Arguments, ToolCall};

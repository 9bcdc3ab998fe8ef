//! Rendering utilities for decision reports (Markdown, JSON Lines).

#![forbid(unsafe_code)]

mod jsonl;
mod markdown;

pub use jsonl::render_jsonl;
pub use markdown::render_markdown;

mod client;
mod error;
mod types;

pub use client::{HnClient, MAX_REPLY_DEPTH};
pub use error::ApiError;
pub use types::{Category, Comment, CommentNode, HnItem, Story};

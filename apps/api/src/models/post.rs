//! Wire types for the generation and export APIs.

use serde::{Deserialize, Serialize};

/// The kind of Instagram creative to produce.
///
/// `Mixed` is a request-only meta-value: the batch orchestrator resolves it to
/// one of the concrete variants per iteration, so a `GeneratedPost` never
/// carries it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    #[default]
    Post,
    Carousel,
    Reel,
    Mixed,
}

impl PostType {
    /// Label used in prompts, logs, and spreadsheet cells.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::Post => "Post",
            PostType::Carousel => "Carousel",
            PostType::Reel => "Reel",
            PostType::Mixed => "Mixed",
        }
    }
}

/// Request body for batch generation. Every field is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub topic: String,
    pub post_type: PostType,
    pub num_posts: u32,
    pub num_slides: u32,
    pub num_seconds: u32,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            post_type: PostType::Post,
            num_posts: 1,
            num_slides: 1,
            num_seconds: 15,
        }
    }
}

/// A single generated post, immutable once built.
///
/// Invariants upheld by the generation pipeline: `post_type` is concrete,
/// `hashtags` holds at most 15 space-separated `#`-prefixed tokens, and no
/// field is the empty string. Deserialization defaults missing fields so the
/// export endpoint accepts partial records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedPost {
    pub post_type: PostType,
    pub headline_copy: String,
    pub hashtags: String,
    pub caption: String,
}

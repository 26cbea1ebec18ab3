//! Batch orchestration — repeats the single-post pipeline N times.
//!
//! Flow per unit: resolve type → build_prompt → complete_or_fallback →
//! parse_response. Remote calls run sequentially, one per unit, so batch
//! latency scales linearly with the requested count. Every iteration produces
//! a result — failures are absorbed at the model-client and parser
//! boundaries, so there is no error path out of a batch.

use rand::Rng;
use tracing::debug;

use crate::config::Config;
use crate::generation::parser::{parse_response, SectionBound};
use crate::generation::prompts::build_prompt;
use crate::llm_client::{complete_or_fallback, CopyModel};
use crate::models::post::{GeneratedPost, GenerationRequest, PostType};

/// Generation knobs, extracted from `Config` so tests can set them directly.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSettings {
    /// Ceiling applied to a batch's requested post count.
    pub max_posts: usize,
    pub section_bound: SectionBound,
}

impl From<&Config> for GeneratorSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_posts: config.max_posts,
            section_bound: config.section_bound,
        }
    }
}

/// Resolves the requested type for one iteration. `Mixed` picks uniformly
/// among the concrete variants; anything else passes through unchanged.
fn resolve_post_type<R: Rng>(requested: PostType, rng: &mut R) -> PostType {
    const CONCRETE: [PostType; 3] = [PostType::Post, PostType::Carousel, PostType::Reel];
    match requested {
        PostType::Mixed => CONCRETE[rng.gen_range(0..CONCRETE.len())],
        concrete => concrete,
    }
}

/// Generates one post for an already-resolved post type.
pub async fn generate_single_post(
    model: &dyn CopyModel,
    settings: &GeneratorSettings,
    topic: &str,
    post_type: PostType,
    num_slides: u32,
    num_seconds: u32,
) -> GeneratedPost {
    let prompt = build_prompt(topic, post_type, num_slides, num_seconds);
    let raw = complete_or_fallback(model, &prompt).await;
    let parsed = parse_response(&raw, topic, settings.section_bound);

    GeneratedPost {
        post_type,
        headline_copy: parsed.headline_copy,
        hashtags: parsed.hashtags,
        caption: parsed.caption,
    }
}

/// Runs a full batch: clamps the requested count to the configured ceiling
/// and generates one post per iteration, returned in generation order.
///
/// The randomness source is injected so `Mixed` resolution is deterministic
/// under a seeded rng.
pub async fn generate_batch<R: Rng>(
    model: &dyn CopyModel,
    settings: &GeneratorSettings,
    request: &GenerationRequest,
    rng: &mut R,
) -> Vec<GeneratedPost> {
    let count = (request.num_posts as usize).min(settings.max_posts);
    let mut posts = Vec::with_capacity(count);

    for i in 0..count {
        let post_type = resolve_post_type(request.post_type, rng);
        debug!("generating post {}/{count} ({})", i + 1, post_type.as_str());
        posts.push(
            generate_single_post(
                model,
                settings,
                &request.topic,
                post_type,
                request.num_slides,
                request.num_seconds,
            )
            .await,
        );
    }

    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SETTINGS: GeneratorSettings = GeneratorSettings {
        max_posts: 30,
        section_bound: SectionBound::Line,
    };

    struct CannedModel;

    #[async_trait]
    impl CopyModel for CannedModel {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok("Headline: Canned copy\n\
                **Caption:** A canned caption\n\
                **Hashtags:** #canned #copy"
                .to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl CopyModel for FailingModel {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "model is loading".to_string(),
            })
        }
    }

    fn request(topic: &str, post_type: PostType, num_posts: u32) -> GenerationRequest {
        GenerationRequest {
            topic: topic.to_string(),
            post_type,
            num_posts,
            num_slides: 3,
            num_seconds: 15,
        }
    }

    #[tokio::test]
    async fn test_batch_returns_requested_count_with_fixed_type() {
        let mut rng = StdRng::seed_from_u64(1);
        let posts = generate_batch(
            &CannedModel,
            &SETTINGS,
            &request("coffee", PostType::Post, 3),
            &mut rng,
        )
        .await;

        assert_eq!(posts.len(), 3);
        for post in &posts {
            assert_eq!(post.post_type, PostType::Post);
            assert_eq!(post.caption, "A canned caption");
        }
    }

    #[tokio::test]
    async fn test_mixed_resolves_to_concrete_types_only() {
        let mut rng = StdRng::seed_from_u64(2);
        let posts = generate_batch(
            &CannedModel,
            &SETTINGS,
            &request("coffee", PostType::Mixed, 20),
            &mut rng,
        )
        .await;

        assert_eq!(posts.len(), 20);
        for post in &posts {
            assert_ne!(post.post_type, PostType::Mixed);
        }
    }

    #[tokio::test]
    async fn test_batch_count_is_clamped_to_ceiling() {
        let settings = GeneratorSettings {
            max_posts: 5,
            section_bound: SectionBound::Line,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let posts = generate_batch(
            &CannedModel,
            &settings,
            &request("coffee", PostType::Post, 100),
            &mut rng,
        )
        .await;

        assert_eq!(posts.len(), 5);
    }

    #[tokio::test]
    async fn test_remote_failure_degrades_instead_of_erroring() {
        let mut rng = StdRng::seed_from_u64(4);
        let posts = generate_batch(
            &FailingModel,
            &SETTINGS,
            &request("coffee beans", PostType::Post, 2),
            &mut rng,
        )
        .await;

        assert_eq!(posts.len(), 2);
        for post in &posts {
            assert!(!post.caption.is_empty());
            assert!(!post.hashtags.is_empty());
            assert!(!post.headline_copy.is_empty());
        }
    }

    #[tokio::test]
    async fn test_seeded_rng_gives_deterministic_mixed_sequence() {
        let run = |seed| async move {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_batch(
                &CannedModel,
                &SETTINGS,
                &request("coffee", PostType::Mixed, 10),
                &mut rng,
            )
            .await
            .into_iter()
            .map(|p| p.post_type)
            .collect::<Vec<_>>()
        };

        assert_eq!(run(42).await, run(42).await);
    }

    #[test]
    fn test_resolve_passes_concrete_types_through() {
        let mut rng = StdRng::seed_from_u64(5);
        for concrete in [PostType::Post, PostType::Carousel, PostType::Reel] {
            assert_eq!(resolve_post_type(concrete, &mut rng), concrete);
        }
    }
}

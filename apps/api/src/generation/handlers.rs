//! Axum route handlers for the generation API.

use axum::{extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::generation::generator::{generate_batch, GeneratorSettings};
use crate::models::post::{GeneratedPost, GenerationRequest};
use crate::state::AppState;

/// POST /api/generate
///
/// Runs the batch pipeline and always answers 200 with a same-shape list:
/// remote failures surface as degraded fallback posts, never as errors.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Json<Vec<GeneratedPost>> {
    let settings = GeneratorSettings::from(&state.config);

    info!(
        "Generating {} '{}' posts on '{}'",
        (request.num_posts as usize).min(settings.max_posts),
        request.post_type.as_str(),
        request.topic
    );

    let mut rng = StdRng::from_entropy();
    let posts = generate_batch(state.model.as_ref(), &settings, &request, &mut rng).await;

    Json(posts)
}

// All model prompt templates for the generation pipeline.
// Each template ends by requesting the literally-delimited sections the
// parser looks for: **Caption:** and **Hashtags:**.

use crate::models::post::PostType;

/// Single-post prompt. Replace `{topic}` before sending.
pub const POST_PROMPT_TEMPLATE: &str = r#"Create a SINGLE Instagram Post about "{topic}".
Include:
- Headline: 6-8 words
- Text: Short, catchy (10-20 words)

**Caption:** ...
**Hashtags:** ..."#;

/// Carousel prompt. Replace `{topic}` and `{num_slides}` before sending.
pub const CAROUSEL_PROMPT_TEMPLATE: &str = r#"Create an Instagram Carousel Post about "{topic}" with {num_slides} slides.
Each slide:
- Headline: 6-8 words
- Text: 10-20 words

Format:
**Slide 1:**
Headline: ...
Text: ...

**Caption:** ...
**Hashtags:** ..."#;

/// Reel prompt. Replace `{topic}` and `{num_seconds}` before sending.
pub const REEL_PROMPT_TEMPLATE: &str = r#"Create an Instagram Reel script about "{topic}" lasting {num_seconds} seconds.
Use timestamps every 5 seconds.

Format:
0s-5s: Hook
5s-10s: Main Point 1
10s-15s: Main Point 2

**Caption:** ...
**Hashtags:** ..."#;

/// Renders the instruction prompt for one post. Pure string construction.
///
/// `post_type` is expected to be concrete; anything that is not a Carousel or
/// Reel gets the single-post template.
pub fn build_prompt(topic: &str, post_type: PostType, num_slides: u32, num_seconds: u32) -> String {
    match post_type {
        PostType::Carousel => CAROUSEL_PROMPT_TEMPLATE
            .replace("{topic}", topic)
            .replace("{num_slides}", &num_slides.to_string()),
        PostType::Reel => REEL_PROMPT_TEMPLATE
            .replace("{topic}", topic)
            .replace("{num_seconds}", &num_seconds.to_string()),
        _ => POST_PROMPT_TEMPLATE.replace("{topic}", topic),
    }
}

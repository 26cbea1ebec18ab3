//! Response Parser — turns a model's free-text reply into structured fields.
//!
//! The model is not guaranteed to follow the requested structure, so every
//! extraction has a total, non-throwing fallback. The matching strategy is
//! literal-marker scanning kept behind this narrow interface (raw text in,
//! structured fields out) so it can be swapped for structured-output prompting
//! without touching callers.

use crate::generation::hashtags::{hashtag_fallback, MAX_HASHTAGS};

/// Literal delimiters the prompts ask the model to emit.
const CAPTION_MARKER: &str = "**Caption:**";
const HASHTAGS_MARKER: &str = "**Hashtags:**";

/// Caption used when the reply has no `**Caption:**` section.
const CAPTION_PLACEHOLDER: &str = "Here's a great caption! 🚀";
/// Headline used when stripping both sections leaves nothing behind.
const HEADLINE_PLACEHOLDER: &str = "Failed to generate.";

/// Where a marker's section ends. Configurable (SECTION_BOUND) rather than
/// canonical: models differ in whether they keep a section on one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SectionBound {
    /// Section runs to the next newline (or end of text).
    #[default]
    Line,
    /// Section runs to the end of the text.
    Text,
}

/// Structured fields extracted from one model reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCopy {
    pub headline_copy: String,
    pub caption: String,
    pub hashtags: String,
}

/// Extracts caption, hashtags, and headline/body from raw model output.
///
/// Total over every input: an absent marker yields a deterministic fallback
/// (fixed caption, topic-derived hashtags, fixed headline), never an error
/// and never an empty field. The hashtags field is capped at
/// [`MAX_HASHTAGS`] tokens regardless of where it came from.
pub fn parse_response(raw: &str, topic: &str, bound: SectionBound) -> ParsedCopy {
    let caption = section_after(raw, CAPTION_MARKER, bound)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| CAPTION_PLACEHOLDER.to_string());

    let hashtags = section_after(raw, HASHTAGS_MARKER, bound)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| hashtag_fallback(topic));
    let hashtags = truncate_tags(&hashtags);

    ParsedCopy {
        headline_copy: strip_sections(raw),
        caption,
        hashtags,
    }
}

/// Returns the text following the first `marker`, bounded per `bound`, or
/// `None` when the marker is absent.
fn section_after<'a>(raw: &'a str, marker: &str, bound: SectionBound) -> Option<&'a str> {
    let start = raw.find(marker)? + marker.len();
    let rest = &raw[start..];
    match bound {
        SectionBound::Line => rest.split('\n').next(),
        SectionBound::Text => Some(rest),
    }
}

/// Removes everything from the first occurrence of each marker onward.
///
/// The cut starts at the marker itself, not its captured section, so trailing
/// sections never leak into the headline field.
fn strip_sections(raw: &str) -> String {
    let cut = [CAPTION_MARKER, HASHTAGS_MARKER]
        .iter()
        .filter_map(|marker| raw.find(marker))
        .min()
        .unwrap_or(raw.len());

    let stripped = raw[..cut].trim();
    if stripped.is_empty() {
        HEADLINE_PLACEHOLDER.to_string()
    } else {
        stripped.to_string()
    }
}

/// Caps a hashtag string at [`MAX_HASHTAGS`] whitespace-separated tokens,
/// normalizing separators to single spaces.
fn truncate_tags(tags: &str) -> String {
    tags.split_whitespace()
        .take(MAX_HASHTAGS)
        .collect::<Vec<_>>()
        .join(" ")
}

//! Deterministic hashtag fallback, used when a model reply has no
//! `**Hashtags:**` section.

/// Generic high-engagement tags appended after the topic-derived ones.
const BOOSTER_TAGS: &[&str] = &["#InstaGood", "#ExplorePage", "#ContentCreator"];

/// Topic words at or below this length are skipped ("a", "of", "to").
const MIN_WORD_LEN: usize = 2;

/// Maximum number of tags in any hashtags field, fallback or parsed.
pub const MAX_HASHTAGS: usize = 15;

/// Derives a hashtag set from the topic plus the booster list.
///
/// Lowercased topic words become `#word` tags, boosters are appended,
/// duplicates are dropped keeping first occurrence, and the result is capped
/// at [`MAX_HASHTAGS`] space-separated tags. Pure function, total over every
/// input — an empty topic still yields the boosters.
pub fn hashtag_fallback(topic: &str) -> String {
    let lowered = topic.to_lowercase();

    let candidates = lowered
        .split_whitespace()
        .filter(|word| word.len() > MIN_WORD_LEN)
        .map(|word| format!("#{word}"))
        .chain(BOOSTER_TAGS.iter().map(|tag| tag.to_string()));

    let mut tags: Vec<String> = Vec::new();
    for tag in candidates {
        if tags.len() == MAX_HASHTAGS {
            break;
        }
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    tags.join(" ")
}

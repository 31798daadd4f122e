//! Weather condition to playlist search term mapping.

use crate::types::Condition;

/// Search term used for every condition without a mood of its own.
pub const DEFAULT_MOOD: &str = "mood booster";

/// Returns the catalog search term for a weather condition.
pub fn resolve_mood(condition: &Condition) -> &'static str {
    match condition {
        Condition::Clear => "sunny happy",
        Condition::Clouds => "chill cozy",
        Condition::Rain => "rainy calm",
        Condition::Snow => "winter cozy",
        Condition::Other(_) => DEFAULT_MOOD,
    }
}

/// Same as [`resolve_mood`] for a raw condition label.
pub fn resolve_mood_label(label: &str) -> &'static str {
    resolve_mood(&Condition::from(label))
}

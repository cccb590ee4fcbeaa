use crate::config::Difficulty;

/// The host reviewer's view of the card currently on screen.
#[derive(Debug, Clone)]
pub struct ReviewCard {
    pub card_id: u64,
    pub deck_id: u64,
    pub fields: Vec<String>, // ordered note fields, front first
}

/// Immutable snapshot built per button press. Never persisted.
#[derive(Clone)]
pub struct FetchRequest {
    pub word: String,
    pub language: String,
    pub difficulty: Difficulty,
    pub api_key: String,
}

impl std::fmt::Debug for FetchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchRequest")
            .field("word", &self.word)
            .field("language", &self.language)
            .field("difficulty", &self.difficulty)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let request = FetchRequest {
            word: "manger".to_string(),
            language: "French".to_string(),
            difficulty: Difficulty::B1,
            api_key: "sk-secret".to_string(),
        };

        let debug = format!("{:?}", request);
        assert!(debug.contains("manger"));
        assert!(!debug.contains("sk-secret"));
    }
}

use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::ReibunError,
    persistence,
};

pub const CONFIG_FILE: &str = "config.json";

/// CEFR levels offered by the settings collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    A1,
    A2,
    B1,
    B2,
    C1,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::A1 => "A1",
            Difficulty::A2 => "A2",
            Difficulty::B1 => "B1",
            Difficulty::B2 => "B2",
            Difficulty::C1 => "C1",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::B1
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the card carries the vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordSide {
    Front,
    Back,
}

impl WordSide {
    pub fn field_index(&self) -> usize {
        match self {
            WordSide::Front => 0,
            WordSide::Back => 1,
        }
    }
}

impl Default for WordSide {
    fn default() -> Self {
        WordSide::Front
    }
}

/// A per-deck row as stored in the config file. The settings dialog may save
/// placeholder rows, so every value is optional and falls back to the global
/// section when read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckPolicyEntry {
    #[serde(default)]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<WordSide>,
}

/// The effective per-deck policy the add-on core reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckPolicy {
    pub language: String,
    pub difficulty: Difficulty,
    pub mode: WordSide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

fn default_language() -> String {
    "French".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_language: default_language(),
            difficulty: Difficulty::default(),
        }
    }
}

/// The configuration record owned by the settings collaborator. The add-on
/// core only ever reads a snapshot of it; `per_deck` is keyed by deck id,
/// written as stringified keys in the JSON file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddonConfig {
    #[serde(default)]
    pub global: GlobalConfig,
    #[serde(default)]
    pub per_deck: HashMap<u64, DeckPolicyEntry>,
}

impl AddonConfig {
    pub fn policy_for(&self, deck_id: u64) -> Option<DeckPolicy> {
        let entry = self.per_deck.get(&deck_id)?;

        let language = if entry.language.trim().is_empty() {
            self.global.default_language.clone()
        } else {
            entry.language.clone()
        };

        Some(DeckPolicy {
            language,
            difficulty: entry.difficulty.unwrap_or(self.global.difficulty),
            mode: entry.mode.unwrap_or_default(),
        })
    }

    pub fn load() -> Self {
        persistence::load_json_or_default(CONFIG_FILE)
    }

    pub fn save(&self) -> Result<(), ReibunError> {
        persistence::save_json(self, CONFIG_FILE)
    }
}

pub mod data;
pub mod error;
pub mod language;

pub use error::CatalogError;
pub use language::Language;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Voice descriptor sent to the synthesis API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub language_code: &'static str,
    pub name: &'static str,
    pub ssml_gender: VoiceGender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceGender {
    Female,
}

/// Everything the service knows about one language
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub topics: &'static [&'static str],
    pub writers: &'static [&'static str],
    pub voice: VoiceConfig,
    pub prompt_prefix: &'static str,
}

/// Read-only language catalog, built once at startup and shared between requests
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<Language, CatalogEntry>,
}

/// A request that passed catalog validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPrayer {
    pub topic: String,
    pub writer: String,
    pub language: Language,
}

impl Catalog {
    pub fn new() -> Self {
        let entries = HashMap::from([
            (
                Language::English,
                CatalogEntry {
                    topics: data::ENGLISH_TOPICS,
                    writers: data::ENGLISH_WRITERS,
                    voice: VoiceConfig {
                        language_code: "en-US",
                        name: "en-US-Wavenet-D",
                        ssml_gender: VoiceGender::Female,
                    },
                    prompt_prefix: "Generate a prayer about ",
                },
            ),
            (
                Language::French,
                CatalogEntry {
                    topics: data::FRENCH_TOPICS,
                    writers: data::FRENCH_WRITERS,
                    voice: VoiceConfig {
                        language_code: "fr-FR",
                        name: "fr-FR-Wavenet-A",
                        ssml_gender: VoiceGender::Female,
                    },
                    prompt_prefix: "Génère une prière sur le thème : ",
                },
            ),
            (
                Language::Arabic,
                CatalogEntry {
                    topics: data::ARABIC_TOPICS,
                    writers: data::ARABIC_WRITERS,
                    voice: VoiceConfig {
                        language_code: "ar-XA",
                        name: "ar-XA-Wavenet-A",
                        ssml_gender: VoiceGender::Female,
                    },
                    prompt_prefix: "اكتب صلاة عن ",
                },
            ),
        ]);

        Self { entries }
    }

    fn entry(&self, language: Language) -> &CatalogEntry {
        // Every Language variant is inserted in `new`
        &self.entries[&language]
    }

    pub fn topics(&self, language: Language) -> &'static [&'static str] {
        self.entry(language).topics
    }

    pub fn writers(&self, language: Language) -> &'static [&'static str] {
        self.entry(language).writers
    }

    pub fn voice(&self, language: Language) -> &VoiceConfig {
        &self.entry(language).voice
    }

    /// Instruction sent to the generation API: language prefix followed by the topic
    pub fn prompt_for(&self, language: Language, topic: &str) -> String {
        format!("{}{}", self.entry(language).prompt_prefix, topic)
    }

    pub fn parse_language(&self, language: &str) -> Result<Language, CatalogError> {
        language.parse()
    }

    /// Check a (topic, writer, language) triple against the catalog.
    ///
    /// The language is resolved first because topics and writers are keyed by it.
    pub fn validate(
        &self,
        topic: &str,
        writer: &str,
        language: &str,
    ) -> Result<ValidatedPrayer, CatalogError> {
        let language = self.parse_language(language)?;
        let entry = self.entry(language);

        if !entry.topics.contains(&topic) {
            return Err(CatalogError::InvalidTopic(topic.to_string()));
        }

        if !entry.writers.contains(&writer) {
            return Err(CatalogError::InvalidWriter(writer.to_string()));
        }

        Ok(ValidatedPrayer {
            topic: topic.to_string(),
            writer: writer.to_string(),
            language,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

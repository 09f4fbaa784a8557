use serde::{Deserialize, Deserializer};

/// One entry of the dictionary API response.
///
/// Every field except `word` is optional on the wire, so missing keys fall
/// back to their defaults instead of failing the whole entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Word {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    pub meanings: Vec<WordMeaning>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordMeaning {
    #[serde(deserialize_with = "null_as_empty")]
    pub part_of_speech: String,
    pub definitions: Vec<WordDefinition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WordDefinition {
    #[serde(deserialize_with = "null_as_empty")]
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A part of speech together with its definitions, in API order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningGroup {
    pub part_of_speech: String,
    pub definitions: Vec<String>,
}

impl From<WordMeaning> for MeaningGroup {
    fn from(meaning: WordMeaning) -> Self {
        Self {
            part_of_speech: meaning.part_of_speech,
            definitions: meaning
                .definitions
                .into_iter()
                .map(|definition| definition.definition)
                .collect(),
        }
    }
}

impl Word {
    /// Whether the headword equals `query`, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        !self.word.is_empty() && self.word.to_lowercase() == query.to_lowercase()
    }
}

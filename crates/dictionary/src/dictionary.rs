use serde::{Deserialize, Deserializer};

/// Missing and `null` fields both decode to the field's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One record returned by the dictionary service. A lookup yields a list of
/// these, one per distinct source or sense group for the same spelling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<Meaning>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub license: License,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_urls: Vec<String>,
}

impl DictionaryEntry {
    /// Transcription of the first phonetic, or an empty string when the
    /// service returned none.
    pub fn first_phonetic_text(&self) -> &str {
        self.phonetics
            .first()
            .map(|phonetic| &phonetic.text[..])
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct License {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub audio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub license: License,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    #[serde(default, deserialize_with = "null_as_default")]
    pub part_of_speech: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: Vec<Definition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Definition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub definition: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub example: Option<String>,
}

impl Definition {
    /// The usage example, if the service sent a non-empty one.
    pub fn example(&self) -> Option<&str> {
        self.example.as_deref().filter(|example| !example.is_empty())
    }
}

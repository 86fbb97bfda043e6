use serde::{Deserialize, Serialize};

/// One headword with its meanings, as extracted from a dictionary page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub usages: Vec<String>,
}

/// A single meaning and the example sentences listed under it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "definition")]
    pub text: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Entry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definitions: Vec::new(),
            usages: Vec::new(),
        }
    }

    /// Append a definition, dropping it when its text is empty
    pub fn push_definition(&mut self, text: String, examples: Vec<String>) -> bool {
        if text.is_empty() {
            return false;
        }
        self.definitions.push(Definition { text, examples });
        true
    }
}

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A fixed, ordered, non-empty list of canonical field names.
///
/// Entry order matters: it is the tie-break order when several fields match a
/// hint equally well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary(Vec<String>);

impl Vocabulary {
    pub fn new<I, S>(fields: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(ModelError::EmptyVocabulary);
        }
        if let Some(bad) = fields.iter().find(|field| field.trim().is_empty()) {
            return Err(ModelError::InvalidFieldName(bad.clone()));
        }
        Ok(Self(fields))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|entry| entry == field)
    }

    /// First entry; always present.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = ModelError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(value: Vocabulary) -> Self {
        value.0
    }
}

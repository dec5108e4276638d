use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// Class name used for the negative side of the reputation index.
pub const NEGATIVE_LABEL: &str = "negative";
/// Class name used for the positive side of the reputation index.
pub const POSITIVE_LABEL: &str = "positive";
pub const NEUTRAL_LABEL: &str = "neutral";

/// How label cells are encoded in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelEncoding {
    /// Label cells carry class names, matched after trim + ASCII lowercase.
    Named,
    /// Label cells carry integer codes.
    Numeric,
}

/// Bidirectional mapping between class names and stable integer codes, plus
/// the set of codes a load will accept.
///
/// Each loader binds to exactly one vocabulary; the two built-in variants
/// are never conflated. A lookup of the other variant's names or codes
/// returns `None` and the row is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelVocabulary {
    id: String,
    encoding: LabelEncoding,
    code_by_name: BTreeMap<String, i64>,
    name_by_code: BTreeMap<i64, String>,
    acceptable: BTreeSet<i64>,
}

impl LabelVocabulary {
    /// Three named sentiment classes: negative=0, neutral=1, positive=2.
    pub fn sentiment3() -> Self {
        Self::from_pairs(
            "sentiment3",
            LabelEncoding::Named,
            &[(NEGATIVE_LABEL, 0), (NEUTRAL_LABEL, 1), (POSITIVE_LABEL, 2)],
        )
        .expect("built-in vocabulary is well formed")
    }

    /// Two numeric polarity codes: negative=0, positive=1.
    pub fn polarity2() -> Self {
        Self::from_pairs(
            "polarity2",
            LabelEncoding::Numeric,
            &[(NEGATIVE_LABEL, 0), (POSITIVE_LABEL, 1)],
        )
        .expect("built-in vocabulary is well formed")
    }

    /// Build a vocabulary from `(name, code)` pairs. The acceptable code set
    /// is exactly the set of mapped codes.
    pub fn from_pairs(
        id: impl Into<String>,
        encoding: LabelEncoding,
        pairs: &[(&str, i64)],
    ) -> Result<Self, VocabularyError> {
        if pairs.is_empty() {
            return Err(VocabularyError::Empty);
        }
        let mut code_by_name = BTreeMap::new();
        let mut name_by_code = BTreeMap::new();
        let mut acceptable = BTreeSet::new();
        for (name, code) in pairs {
            let key = name.trim().to_ascii_lowercase();
            if code_by_name.insert(key.clone(), *code).is_some() {
                return Err(VocabularyError::DuplicateName(key));
            }
            if name_by_code.insert(*code, key).is_some() {
                return Err(VocabularyError::DuplicateCode(*code));
            }
            acceptable.insert(*code);
        }
        Ok(Self {
            id: id.into(),
            encoding,
            code_by_name,
            name_by_code,
            acceptable,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn encoding(&self) -> LabelEncoding {
        self.encoding
    }

    /// Resolve a class name to its code. The name is trimmed and lowercased
    /// before lookup; unknown names return `None`.
    pub fn code_for(&self, name: &str) -> Option<i64> {
        self.code_by_name
            .get(&name.trim().to_ascii_lowercase())
            .copied()
    }

    /// Resolve a code to its class name.
    pub fn name_for(&self, code: i64) -> Option<&str> {
        self.name_by_code.get(&code).map(String::as_str)
    }

    pub fn is_acceptable(&self, code: i64) -> bool {
        self.acceptable.contains(&code)
    }

    pub fn acceptable_codes(&self) -> &BTreeSet<i64> {
        &self.acceptable
    }
}

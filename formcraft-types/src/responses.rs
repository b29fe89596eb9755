use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::QuestionId;

/// Answers entered in the form preview.
///
/// Keys are question ids rendered as decimal strings; values are the raw
/// strings the controls reported. Answers to deleted questions stay until
/// the collector is thrown away.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses {
    values: BTreeMap<String, String>,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` for `id`, replacing any earlier answer.
    pub fn insert(&mut self, id: QuestionId, value: impl Into<String>) {
        self.values.insert(id.key(), value.into());
    }

    pub fn get(&self, id: QuestionId) -> Option<&str> {
        self.values.get(&id.key()).map(String::as_str)
    }

    /// Whether `id` has an answer with content other than whitespace.
    pub fn has_value(&self, id: QuestionId) -> bool {
        self.get(id).is_some_and(|value| !value.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> IntoIterator for &'a Responses {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Accumulates answers and hands them to a validation callback on submit.
#[derive(Debug, Clone, Default)]
pub struct ResponseCollector {
    responses: Responses,
}

impl ResponseCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest value for a question (last write wins).
    pub fn set_answer(&mut self, id: QuestionId, value: impl Into<String>) {
        let value = value.into();
        debug!(%id, %value, "answer changed");
        self.responses.insert(id, value);
    }

    pub fn answer(&self, id: QuestionId) -> Option<&str> {
        self.responses.get(id)
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    /// Pass every collected answer to `validate`.
    ///
    /// Required questions are not checked here.
    pub fn submit(&self, validate: &mut dyn FnMut(&Responses)) {
        info!(answers = self.responses.len(), "submitting responses");
        validate(&self.responses);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{FormError, OrderedList};

/// Identifier of a question, unique within a list and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// The key under which answers to this question are stored.
    pub fn key(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuestionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// The kind of question, determining which control is rendered for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Single-line free text.
    #[default]
    Text,
    /// Numeric entry.
    Number,
    /// ISO calendar date.
    Date,
    /// Drop-down with one choice from the options.
    Select,
    /// Boolean toggle.
    Switch,
    /// Exclusive radio buttons, one per option.
    Radio,
    /// Multi-line free text.
    Paragraph,
}

impl QuestionKind {
    /// All kinds, in the order the editor offers them.
    pub const ALL: [QuestionKind; 7] = [
        Self::Text,
        Self::Number,
        Self::Date,
        Self::Select,
        Self::Switch,
        Self::Radio,
        Self::Paragraph,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Switch => "switch",
            Self::Radio => "radio",
            Self::Paragraph => "paragraph",
        }
    }

    /// Human-readable name for the editor's kind picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::Date => "Date",
            Self::Select => "Select",
            Self::Switch => "Switch",
            Self::Radio => "Radio button",
            Self::Paragraph => "Paragraph",
        }
    }

    /// Whether questions of this kind present a list of options.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FormError::UnknownKind(s.to_string()))
    }
}

/// A single form field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    id: QuestionId,

    /// The prompt shown above the control.
    text: String,

    #[serde(rename = "type")]
    kind: QuestionKind,

    #[serde(default)]
    required: bool,

    /// Choices for select and radio questions, in presentation order.
    #[serde(default)]
    options: OrderedList<String>,
}

/// Wire shape of a question before its kind string is checked.
#[derive(Debug, Deserialize)]
pub(crate) struct QuestionRecord {
    id: QuestionId,
    text: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    options: Vec<String>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = FormError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            text: record.text,
            kind: record.kind.parse()?,
            required: record.required,
            options: record.options.into(),
        })
    }
}

impl Question {
    /// Create an empty draft: no prompt, kind `text`, optional, no options.
    pub fn empty(id: QuestionId) -> Self {
        Self {
            id,
            text: String::new(),
            kind: QuestionKind::Text,
            required: false,
            options: OrderedList::new(),
        }
    }

    /// Create a question with the given prompt and kind.
    pub fn new(id: QuestionId, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
            ..Self::empty(id)
        }
    }

    /// Mark this question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the options, replacing any present.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn options(&self) -> &[String] {
        self.options.as_slice()
    }

    /// Whether the prompt has any non-whitespace content.
    pub fn is_ready(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_kind(&mut self, kind: QuestionKind) {
        self.kind = kind;
    }

    pub(crate) fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub(crate) fn options_mut(&mut self) -> &mut OrderedList<String> {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in QuestionKind::ALL {
            assert_eq!(kind.as_str().parse::<QuestionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "slider".parse::<QuestionKind>().unwrap_err();
        assert!(matches!(err, FormError::UnknownKind(s) if s == "slider"));
        assert!("Text".parse::<QuestionKind>().is_err());
    }

    #[test]
    fn only_choice_kinds_have_options() {
        let with_options: Vec<_> = QuestionKind::ALL
            .into_iter()
            .filter(|k| k.has_options())
            .collect();
        assert_eq!(with_options, vec![QuestionKind::Select, QuestionKind::Radio]);
    }

    #[test]
    fn empty_draft_defaults() {
        let q = Question::empty(QuestionId::new(1));
        assert_eq!(q.text(), "");
        assert_eq!(q.kind(), QuestionKind::Text);
        assert!(!q.is_required());
        assert!(q.options().is_empty());
        assert!(!q.is_ready());
    }

    #[test]
    fn whitespace_prompt_is_not_ready() {
        let q = Question::new(QuestionId::new(1), "   \t", QuestionKind::Text);
        assert!(!q.is_ready());
    }

    #[test]
    fn json_shape() {
        let q = Question::new(QuestionId::new(42), "Favourite colour", QuestionKind::Radio)
            .required()
            .with_options(["Red", "Blue"]);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 42,
                "text": "Favourite colour",
                "type": "radio",
                "required": true,
                "options": ["Red", "Blue"],
            })
        );
    }

    #[test]
    fn json_defaults_and_unknown_kind() {
        let q: Question =
            serde_json::from_str(r#"{"id": 3, "text": "Age", "type": "number"}"#).unwrap();
        assert_eq!(q.kind(), QuestionKind::Number);
        assert!(!q.is_required());
        assert!(q.options().is_empty());

        let err = serde_json::from_str::<Question>(r#"{"id": 3, "text": "x", "type": "slider"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Unknown question kind: \"slider\""));
    }
}

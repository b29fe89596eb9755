use crate::QuestionId;

/// Error type for form construction.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A question kind string outside the closed set of seven kinds.
    #[error("Unknown question kind: {0:?}")]
    UnknownKind(String),

    /// Two questions in one list share an id.
    #[error("Duplicate question id: {0}")]
    DuplicateId(QuestionId),

    /// A loaded id at the top of the id space, leaving no room for new drafts.
    #[error("Question id {0} leaves no room for new ids")]
    IdOutOfRange(QuestionId),

    /// An initial question list could not be parsed.
    #[error("Invalid question list: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormError {
    /// Check if this error comes from an unrecognized question kind.
    pub fn is_unknown_kind(&self) -> bool {
        matches!(self, Self::UnknownKind(_))
    }
}

//! Backend that drives a form builder from a recorded list of messages.
//!
//! `ScriptedBackend` stands in for a user: it feeds each message to
//! [`FormBuilder::update`] in order. This is useful for testing and for
//! building forms headlessly.
//!
//! # Example
//!
//! ```rust
//! use formcraft::{FormBackend, FormBuilder, Message, ScriptedBackend, QuestionId};
//!
//! let builder = ScriptedBackend::new()
//!     .with_answer(QuestionId::new(1), "Alice")
//!     .with_message(Message::SubmitResponses)
//!     .run(FormBuilder::new())
//!     .unwrap();
//!
//! assert_eq!(builder.answer(QuestionId::new(1)), Some("Alice"));
//! ```

use tracing::debug;

use crate::{
    Change, Direction, DraftField, EditorAction, FormBackend, FormBuilder, Message, QuestionId,
    QuestionKind,
};

/// A backend that replays pre-recorded messages.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    messages: Vec<Message>,
    strict: bool,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Step {step} had no effect: {message:?}")]
    Unchanged { step: usize, message: Message },
}

impl ScriptedBackend {
    /// Create an empty script.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            strict: false,
        }
    }

    /// Fail on the first message that leaves the builder unchanged.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Append a message to the script.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Append an editor action.
    pub fn with_editor(self, action: EditorAction) -> Self {
        self.with_message(Message::Editor(action))
    }

    /// Type a question into the editor and submit it.
    pub fn with_question(
        self,
        text: impl Into<String>,
        kind: QuestionKind,
        required: bool,
    ) -> Self {
        self.with_editor(EditorAction::SetField(DraftField::Text(text.into())))
            .with_editor(EditorAction::SetField(DraftField::Kind(kind)))
            .with_editor(EditorAction::SetField(DraftField::Required(required)))
            .with_editor(EditorAction::Submit)
    }

    /// Add options to the draft in the editor.
    pub fn with_options<I, S>(self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        options.into_iter().fold(self, |script, option| {
            script.with_editor(EditorAction::AddOption(option.into()))
        })
    }

    /// Answer a question in the preview.
    pub fn with_answer(self, id: QuestionId, value: impl Into<String>) -> Self {
        self.with_message(Message::Answer(id, value.into()))
    }

    /// Move the question at `index`.
    pub fn with_move(self, index: usize, direction: Direction) -> Self {
        self.with_message(Message::MoveQuestion(index, direction))
    }
}

impl FormBackend for ScriptedBackend {
    type Error = ScriptError;

    fn run(&self, mut builder: FormBuilder) -> Result<FormBuilder, Self::Error> {
        for (step, message) in self.messages.iter().enumerate() {
            let change = builder.update(message.clone());
            debug!(step, ?change, "scripted message applied");
            if self.strict && change == Change::Unchanged {
                return Err(ScriptError::Unchanged {
                    step,
                    message: message.clone(),
                });
            }
        }
        Ok(builder)
    }
}

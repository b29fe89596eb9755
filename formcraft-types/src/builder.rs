use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Direction, EditorAction, EditorEvent, EditorMode, FormView, MoveOutcome, Question,
    QuestionEditor, QuestionId, QuestionList, ResponseCollector, Responses, Upsert,
};

/// Callback receiving the answers when the preview form is submitted.
pub type Validator = Box<dyn FnMut(&Responses) + Send>;

/// Light or dark presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Events a frontend feeds into [`FormBuilder::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Anything happening inside the question editor.
    Editor(EditorAction),
    /// Start editing an existing question.
    EditQuestion(QuestionId),
    MoveQuestion(usize, Direction),
    DeleteQuestion(QuestionId),
    CancelEdit,
    /// The preview control for a question reported a new value.
    Answer(QuestionId, String),
    /// Submit the preview form to the validator.
    SubmitResponses,
    SetTheme(Theme),
}

/// What an update did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    QuestionAdded(QuestionId),
    QuestionUpdated(QuestionId),
    EditStarted(QuestionId),
    EditCancelled,
    QuestionMoved { from: usize, to: usize },
    QuestionDeleted(QuestionId),
    DraftChanged,
    Answered(QuestionId),
    ResponsesSubmitted,
    ThemeChanged(Theme),
    /// Nothing happened (empty prompt, boundary move, unknown id, ...).
    Unchanged,
}

/// Owns the question list, the editor and the collected answers.
pub struct FormBuilder {
    questions: QuestionList,
    editor: QuestionEditor,
    collector: ResponseCollector,
    theme: Theme,
    validator: Validator,
}

impl fmt::Debug for FormBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBuilder")
            .field("questions", &self.questions)
            .field("editor", &self.editor)
            .field("collector", &self.collector)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBuilder {
    /// An empty form whose validator only logs the submission.
    pub fn new() -> Self {
        Self {
            questions: QuestionList::new(),
            editor: QuestionEditor::new(),
            collector: ResponseCollector::new(),
            theme: Theme::default(),
            validator: Box::new(|responses| {
                info!(answers = responses.len(), "responses submitted");
            }),
        }
    }

    /// Start from an existing list; new drafts get ids above every id in it.
    pub fn with_questions(mut self, questions: QuestionList) -> Self {
        for question in questions.iter() {
            self.editor.observe_id(question.id());
        }
        self.editor.select(None);
        self.questions = questions;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the callback that receives submitted answers.
    pub fn with_validator(mut self, validator: impl FnMut(&Responses) + Send + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn questions(&self) -> &QuestionList {
        &self.questions
    }

    pub fn editor(&self) -> &QuestionEditor {
        &self.editor
    }

    pub fn responses(&self) -> &Responses {
        self.collector.responses()
    }

    pub fn answer(&self, id: QuestionId) -> Option<&str> {
        self.collector.answer(id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The preview form for the current list.
    pub fn view(&self) -> FormView {
        self.questions.render()
    }

    /// Give up the list, e.g. once a frontend has closed.
    pub fn into_questions(self) -> QuestionList {
        self.questions
    }

    /// Apply one message.
    pub fn update(&mut self, message: Message) -> Change {
        match message {
            Message::Editor(action) => self.update_editor(action),
            Message::EditQuestion(id) => self.edit_question(id),
            Message::MoveQuestion(index, direction) => {
                match self.questions.move_question(index, direction) {
                    MoveOutcome::Moved { from, to } => Change::QuestionMoved { from, to },
                    MoveOutcome::Unchanged => Change::Unchanged,
                }
            }
            Message::DeleteQuestion(id) => self.delete_question(id),
            Message::CancelEdit => {
                self.editor.cancel();
                Change::EditCancelled
            }
            Message::Answer(id, value) => {
                self.collector.set_answer(id, value);
                Change::Answered(id)
            }
            Message::SubmitResponses => {
                self.collector.submit(&mut *self.validator);
                Change::ResponsesSubmitted
            }
            Message::SetTheme(theme) if theme == self.theme => Change::Unchanged,
            Message::SetTheme(theme) => {
                debug!(?theme, "theme changed");
                self.theme = theme;
                Change::ThemeChanged(theme)
            }
        }
    }

    fn update_editor(&mut self, action: EditorAction) -> Change {
        match self.editor.update(action) {
            EditorEvent::Changed => Change::DraftChanged,
            EditorEvent::Unchanged => Change::Unchanged,
            EditorEvent::Cancelled => Change::EditCancelled,
            EditorEvent::Submitted(question) => self.commit(question),
        }
    }

    fn commit(&mut self, question: Question) -> Change {
        let id = question.id();
        let change = match self.questions.add_or_update(question) {
            Upsert::Added(_) => Change::QuestionAdded(id),
            Upsert::Updated(_) => Change::QuestionUpdated(id),
        };
        self.editor.select(None);
        change
    }

    fn edit_question(&mut self, id: QuestionId) -> Change {
        match self.questions.get(id) {
            Some(question) => {
                self.editor.select(Some(question.clone()));
                Change::EditStarted(id)
            }
            None => {
                debug!(%id, "cannot edit unknown question");
                Change::Unchanged
            }
        }
    }

    fn delete_question(&mut self, id: QuestionId) -> Change {
        if self.questions.delete(id).is_none() {
            return Change::Unchanged;
        }
        if self.editor.mode() == EditorMode::Editing(id) {
            self.editor.select(None);
        }
        Change::QuestionDeleted(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{DraftField, QuestionKind};

    fn type_question(builder: &mut FormBuilder, text: &str, kind: QuestionKind) -> Change {
        builder.update(Message::Editor(EditorAction::SetField(DraftField::Text(
            text.to_string(),
        ))));
        builder.update(Message::Editor(EditorAction::SetField(DraftField::Kind(kind))));
        builder.update(Message::Editor(EditorAction::Submit))
    }

    #[test]
    fn submit_appends_and_resets_editor() {
        let mut builder = FormBuilder::new();
        let change = type_question(&mut builder, "Age", QuestionKind::Number);

        let Change::QuestionAdded(id) = change else {
            panic!("expected an added question, got {change:?}");
        };
        assert_eq!(builder.questions().len(), 1);
        assert_eq!(builder.editor().mode(), EditorMode::Creating);
        assert_eq!(builder.editor().draft().text(), "");
        assert_ne!(builder.editor().draft().id(), id);
    }

    #[test]
    fn two_submissions_make_two_questions() {
        let mut builder = FormBuilder::new();
        type_question(&mut builder, "First", QuestionKind::Text);
        type_question(&mut builder, "Second", QuestionKind::Text);
        assert_eq!(builder.questions().len(), 2);
    }

    #[test]
    fn empty_prompt_changes_nothing() {
        let mut builder = FormBuilder::new();
        assert_eq!(
            builder.update(Message::Editor(EditorAction::Submit)),
            Change::Unchanged
        );
        assert!(builder.questions().is_empty());
    }

    #[test]
    fn edit_unknown_question_is_noop() {
        let mut builder = FormBuilder::new();
        assert_eq!(
            builder.update(Message::EditQuestion(QuestionId::new(3))),
            Change::Unchanged
        );
        assert_eq!(builder.editor().mode(), EditorMode::Creating);
    }

    #[test]
    fn deleting_edited_question_leaves_edit_mode() {
        let mut builder = FormBuilder::new();
        let Change::QuestionAdded(id) = type_question(&mut builder, "Name", QuestionKind::Text)
        else {
            panic!("expected an added question");
        };
        builder.update(Message::EditQuestion(id));
        assert_eq!(builder.editor().mode(), EditorMode::Editing(id));

        assert_eq!(
            builder.update(Message::DeleteQuestion(id)),
            Change::QuestionDeleted(id)
        );
        assert_eq!(builder.editor().mode(), EditorMode::Creating);
    }

    #[test]
    fn seeded_ids_are_not_reused() {
        let far = QuestionId::new(u64::MAX / 2);
        let questions =
            QuestionList::from_questions(vec![Question::new(far, "Seed", QuestionKind::Text)])
                .unwrap();
        let builder = FormBuilder::new().with_questions(questions);
        assert!(builder.editor().draft().id() > far);
    }

    #[test]
    fn loading_top_of_id_space() {
        let err = QuestionList::from_json(
            r#"[{"id": 18446744073709551615, "text": "A", "type": "text"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, crate::FormError::IdOutOfRange(_)));

        let questions = QuestionList::from_json(
            r#"[{"id": 18446744073709551614, "text": "A", "type": "text"}]"#,
        )
        .unwrap();
        let builder = FormBuilder::new().with_questions(questions);
        assert_eq!(builder.editor().draft().id(), QuestionId::new(u64::MAX));
    }

    #[test]
    fn validator_receives_answers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut builder =
            FormBuilder::new().with_validator(move |r| sink.lock().unwrap().push(r.clone()));

        builder.update(Message::Answer(QuestionId::new(1), "x".to_string()));
        assert_eq!(
            builder.update(Message::SubmitResponses),
            Change::ResponsesSubmitted
        );

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].get(QuestionId::new(1)), Some("x"));
    }

    #[test]
    fn theme_toggle() {
        let mut builder = FormBuilder::new();
        assert_eq!(builder.update(Message::SetTheme(Theme::Light)), Change::Unchanged);
        assert_eq!(
            builder.update(Message::SetTheme(Theme::Dark)),
            Change::ThemeChanged(Theme::Dark)
        );
        assert!(builder.theme().is_dark());
        assert_eq!(builder.theme().toggled(), Theme::Light);
    }
}

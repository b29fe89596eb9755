//! The question editor: one mutable draft plus the mode it is edited in.
//!
//! The editor never touches the question list. It reports a finished draft
//! through [`EditorEvent::Submitted`] and leaves committing it to the caller.
//! Switching between creating and editing is an explicit event
//! ([`QuestionEditor::select`]) rather than a side effect of rendering.

use tracing::debug;

use crate::{Direction, IdGenerator, MoveOutcome, Question, QuestionId, QuestionKind};

/// Whether the draft is a new question or a copy of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Creating,
    Editing(QuestionId),
}

/// A single draft attribute update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Text(String),
    Kind(QuestionKind),
    Required(bool),
}

/// Everything the editor can be asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    SetField(DraftField),
    /// Update the "new option" input.
    SetPendingOption(String),
    /// Append the "new option" input to the options and clear it.
    AddPendingOption,
    AddOption(String),
    RemoveOption(usize),
    MoveOption(usize, Direction),
    Submit,
    Cancel,
    /// Edit mode switched to another question, or left (`None`).
    Select(Option<Question>),
}

/// What the caller needs to know after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// The draft or pending option changed.
    Changed,
    /// The action had no effect.
    Unchanged,
    /// The draft is ready to be added to (or updated in) the list.
    Submitted(Question),
    /// The caller should leave edit mode.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct QuestionEditor {
    mode: EditorMode,
    draft: Question,
    pending_option: String,
    ids: IdGenerator,
}

impl Default for QuestionEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionEditor {
    /// Create an editor in creating mode with a fresh draft.
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::new())
    }

    /// Create an editor that draws draft ids from `ids`.
    pub fn with_ids(mut ids: IdGenerator) -> Self {
        let draft = Question::empty(ids.next_id());
        Self {
            mode: EditorMode::Creating,
            draft,
            pending_option: String::new(),
            ids,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn draft(&self) -> &Question {
        &self.draft
    }

    pub fn pending_option(&self) -> &str {
        &self.pending_option
    }

    /// Whether the options section applies to the draft's current kind.
    pub fn shows_options(&self) -> bool {
        self.draft.kind().has_options()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Creating => "Add question",
            EditorMode::Editing(_) => "Save changes",
        }
    }

    /// Make sure `id` is never handed out to a future draft.
    pub fn observe_id(&mut self, id: QuestionId) {
        self.ids.observe(id);
    }

    pub fn set_field(&mut self, field: DraftField) {
        debug!(?field, "draft field changed");
        match field {
            DraftField::Text(text) => self.draft.set_text(text),
            DraftField::Kind(kind) => self.draft.set_kind(kind),
            DraftField::Required(required) => self.draft.set_required(required),
        }
    }

    pub fn set_pending_option(&mut self, text: impl Into<String>) {
        self.pending_option = text.into();
    }

    /// Append `text` (trimmed) to the draft's options; whitespace-only input is ignored.
    pub fn add_option(&mut self, text: &str) -> bool {
        let option = text.trim();
        if option.is_empty() {
            return false;
        }
        self.draft.options_mut().push(option.to_string());
        true
    }

    /// Add the pending option input, clearing it when something was added.
    pub fn add_pending_option(&mut self) -> bool {
        let pending = std::mem::take(&mut self.pending_option);
        if self.add_option(&pending) {
            true
        } else {
            self.pending_option = pending;
            false
        }
    }

    pub fn remove_option(&mut self, index: usize) -> Option<String> {
        self.draft.options_mut().remove(index)
    }

    pub fn move_option(&mut self, index: usize, direction: Direction) -> MoveOutcome {
        self.draft.options_mut().swap_adjacent(index, direction)
    }

    /// The draft, if its prompt is non-empty after trimming.
    pub fn submit(&self) -> Option<Question> {
        if self.draft.is_ready() {
            Some(self.draft.clone())
        } else {
            debug!(id = %self.draft.id(), "draft without prompt not submitted");
            None
        }
    }

    /// Throw the draft away and start a fresh one.
    pub fn cancel(&mut self) {
        self.select(None);
    }

    /// Reset the draft to `question` (editing) or to a new empty draft (creating).
    pub fn select(&mut self, question: Option<Question>) {
        self.pending_option.clear();
        match question {
            Some(question) => {
                self.ids.observe(question.id());
                self.mode = EditorMode::Editing(question.id());
                self.draft = question;
            }
            None => {
                self.mode = EditorMode::Creating;
                self.draft = Question::empty(self.ids.next_id());
            }
        }
    }

    /// Apply one action to the editor state.
    pub fn update(&mut self, action: EditorAction) -> EditorEvent {
        match action {
            EditorAction::SetField(field) => {
                self.set_field(field);
                EditorEvent::Changed
            }
            EditorAction::SetPendingOption(text) => {
                self.set_pending_option(text);
                EditorEvent::Changed
            }
            EditorAction::AddPendingOption => changed_if(self.add_pending_option()),
            EditorAction::AddOption(text) => changed_if(self.add_option(&text)),
            EditorAction::RemoveOption(index) => changed_if(self.remove_option(index).is_some()),
            EditorAction::MoveOption(index, direction) => {
                changed_if(self.move_option(index, direction).is_moved())
            }
            EditorAction::Submit => self
                .submit()
                .map_or(EditorEvent::Unchanged, EditorEvent::Submitted),
            EditorAction::Cancel => {
                self.cancel();
                EditorEvent::Cancelled
            }
            EditorAction::Select(question) => {
                self.select(question);
                EditorEvent::Changed
            }
        }
    }
}

fn changed_if(changed: bool) -> EditorEvent {
    if changed {
        EditorEvent::Changed
    } else {
        EditorEvent::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with_options(options: &[&str]) -> QuestionEditor {
        let mut editor = QuestionEditor::new();
        editor.set_field(DraftField::Kind(QuestionKind::Select));
        for option in options {
            assert!(editor.add_option(option));
        }
        editor
    }

    #[test]
    fn starts_creating_with_empty_draft() {
        let editor = QuestionEditor::new();
        assert_eq!(editor.mode(), EditorMode::Creating);
        assert_eq!(editor.draft().text(), "");
        assert_eq!(editor.draft().kind(), QuestionKind::Text);
        assert_eq!(editor.submit_label(), "Add question");
        assert!(!editor.shows_options());
    }

    #[test]
    fn set_field_touches_one_attribute() {
        let mut editor = QuestionEditor::new();
        let before = editor.draft().clone();

        editor.set_field(DraftField::Required(true));
        assert!(editor.draft().is_required());
        assert_eq!(editor.draft().text(), before.text());
        assert_eq!(editor.draft().kind(), before.kind());
        assert_eq!(editor.draft().id(), before.id());
    }

    #[test]
    fn whitespace_option_is_ignored() {
        let mut editor = QuestionEditor::new();
        assert!(!editor.add_option("   "));
        assert!(editor.draft().options().is_empty());
    }

    #[test]
    fn options_keep_insertion_order_without_dedup() {
        let editor = editor_with_options(&["Red", " Blue ", "Red"]);
        assert_eq!(editor.draft().options(), &["Red", "Blue", "Red"]);
    }

    #[test]
    fn move_option_up() {
        let mut editor = editor_with_options(&["Red", "Blue"]);
        assert!(editor.move_option(1, Direction::Up).is_moved());
        assert_eq!(editor.draft().options(), &["Blue", "Red"]);
    }

    #[test]
    fn move_option_past_edges_is_noop() {
        let mut editor = editor_with_options(&["Red", "Blue"]);
        assert_eq!(editor.move_option(0, Direction::Up), MoveOutcome::Unchanged);
        assert_eq!(editor.move_option(1, Direction::Down), MoveOutcome::Unchanged);
        assert_eq!(editor.draft().options(), &["Red", "Blue"]);
    }

    #[test]
    fn remove_option_shifts_indices() {
        let mut editor = editor_with_options(&["Red", "Green", "Blue"]);
        assert_eq!(editor.remove_option(0).as_deref(), Some("Red"));
        assert_eq!(editor.draft().options(), &["Green", "Blue"]);
        assert_eq!(editor.remove_option(5), None);
    }

    #[test]
    fn pending_option_cleared_only_on_success() {
        let mut editor = QuestionEditor::new();
        editor.set_pending_option("  ");
        assert_eq!(editor.update(EditorAction::AddPendingOption), EditorEvent::Unchanged);
        assert_eq!(editor.pending_option(), "  ");

        editor.set_pending_option(" Green ");
        assert_eq!(editor.update(EditorAction::AddPendingOption), EditorEvent::Changed);
        assert_eq!(editor.pending_option(), "");
        assert_eq!(editor.draft().options(), &["Green"]);
    }

    #[test]
    fn empty_prompt_never_submits() {
        let mut editor = QuestionEditor::new();
        assert_eq!(editor.update(EditorAction::Submit), EditorEvent::Unchanged);

        editor.set_field(DraftField::Text("  ".to_string()));
        assert_eq!(editor.submit(), None);
    }

    #[test]
    fn submit_emits_draft_unchanged() {
        let mut editor = QuestionEditor::new();
        editor.set_field(DraftField::Text(" Age ".to_string()));
        editor.set_field(DraftField::Kind(QuestionKind::Number));

        let EditorEvent::Submitted(question) = editor.update(EditorAction::Submit) else {
            panic!("expected a submitted draft");
        };
        assert_eq!(question.text(), " Age ");
        assert_eq!(question.kind(), QuestionKind::Number);
        assert_eq!(&question, editor.draft());
    }

    #[test]
    fn select_switches_modes() {
        let mut editor = QuestionEditor::new();
        let existing = Question::new(QuestionId::new(5), "Name", QuestionKind::Text);

        editor.select(Some(existing.clone()));
        assert_eq!(editor.mode(), EditorMode::Editing(QuestionId::new(5)));
        assert_eq!(editor.draft(), &existing);
        assert_eq!(editor.submit_label(), "Save changes");

        editor.select(None);
        assert_eq!(editor.mode(), EditorMode::Creating);
        assert_eq!(editor.draft().text(), "");
        assert_ne!(editor.draft().id(), existing.id());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut editor = QuestionEditor::new();
        let first_id = editor.draft().id();
        editor.set_field(DraftField::Text("Half written".to_string()));
        editor.set_pending_option("Maybe");

        assert_eq!(editor.update(EditorAction::Cancel), EditorEvent::Cancelled);
        assert_eq!(editor.mode(), EditorMode::Creating);
        assert_eq!(editor.draft().text(), "");
        assert_eq!(editor.pending_option(), "");
        assert_ne!(editor.draft().id(), first_id);
    }

    #[test]
    fn kind_change_keeps_options() {
        let mut editor = editor_with_options(&["Red"]);
        editor.set_field(DraftField::Kind(QuestionKind::Text));
        assert!(!editor.shows_options());
        editor.set_field(DraftField::Kind(QuestionKind::Radio));
        assert_eq!(editor.draft().options(), &["Red"]);
    }
}

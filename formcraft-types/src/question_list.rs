use std::collections::HashSet;

use tracing::{debug, info};

use crate::question::QuestionRecord;
use crate::{Control, Direction, FormError, MoveOutcome, OrderedList, Question, QuestionId, Responses};

/// Label of the button that submits the filled-in form.
pub const SUBMIT_LABEL: &str = "View responses";

/// Whether `add_or_update` appended or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added(usize),
    Updated(usize),
}

/// The ordered list of questions making up the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionList {
    questions: OrderedList<Question>,
}

impl QuestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from existing questions, rejecting duplicate ids and the
    /// largest id (new drafts must get an id above every loaded one).
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, FormError> {
        let mut seen = HashSet::new();
        for question in &questions {
            if question.id().get() == u64::MAX {
                return Err(FormError::IdOutOfRange(question.id()));
            }
            if !seen.insert(question.id()) {
                return Err(FormError::DuplicateId(question.id()));
            }
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    /// Parse a JSON array of questions.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        let questions = records
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_questions(questions)
    }

    /// Replace the question with the same id in place, or append it.
    pub fn add_or_update(&mut self, question: Question) -> Upsert {
        let id = question.id();
        match self.position(id) {
            Some(index) => {
                self.questions.replace(index, question);
                info!(%id, index, "question updated");
                Upsert::Updated(index)
            }
            None => {
                let index = self.questions.push(question);
                info!(%id, index, "question added");
                Upsert::Added(index)
            }
        }
    }

    /// Swap the question at `index` with its neighbor; no-op at the ends.
    pub fn move_question(&mut self, index: usize, direction: Direction) -> MoveOutcome {
        let outcome = self.questions.swap_adjacent(index, direction);
        match outcome {
            MoveOutcome::Moved { from, to } => info!(from, to, "question moved"),
            MoveOutcome::Unchanged => debug!(index, ?direction, "question not moved"),
        }
        outcome
    }

    /// Remove the question with `id`, if present.
    pub fn delete(&mut self, id: QuestionId) -> Option<Question> {
        let removed = self
            .position(id)
            .and_then(|index| self.questions.remove(index));
        if removed.is_some() {
            info!(%id, "question deleted");
        } else {
            debug!(%id, "no question to delete");
        }
        removed
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.position(id).and_then(|index| self.questions.get(index))
    }

    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.position(|q| q.id() == id)
    }

    pub fn questions(&self) -> &[Question] {
        self.questions.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Describe the preview form: one row per question, in list order.
    pub fn render(&self) -> FormView {
        let total = self.questions.len();
        let rows = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionRow {
                index,
                number: index + 1,
                id: question.id(),
                prompt: question.text().to_string(),
                required: question.is_required(),
                can_move_up: index > 0,
                can_move_down: index + 1 < total,
                control: Control::for_question(question),
            })
            .collect();
        FormView {
            rows,
            submit_label: SUBMIT_LABEL,
        }
    }
}

/// A rendered question: header, prompt and control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    /// Position in the list (0-based), as passed to move operations.
    pub index: usize,
    /// Sequence number shown in the header (1-based).
    pub number: usize,
    pub id: QuestionId,
    pub prompt: String,
    pub required: bool,
    pub can_move_up: bool,
    pub can_move_down: bool,
    pub control: Control,
}

impl QuestionRow {
    pub fn header(&self) -> String {
        format!("Question {}", self.number)
    }
}

/// The whole preview form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub rows: Vec<QuestionRow>,
    pub submit_label: &'static str,
}

impl FormView {
    /// Required questions without a non-empty answer, in form order.
    pub fn missing_required(&self, responses: &Responses) -> Vec<QuestionId> {
        self.rows
            .iter()
            .filter(|row| row.required && !responses.has_value(row.id))
            .map(|row| row.id)
            .collect()
    }

    /// Answered questions whose value their control would not produce.
    pub fn rejected_values(&self, responses: &Responses) -> Vec<QuestionId> {
        self.rows
            .iter()
            .filter(|row| {
                responses
                    .get(row.id)
                    .is_some_and(|value| !row.control.accepts(value))
            })
            .map(|row| row.id)
            .collect()
    }

    /// Whether a browser-style submit would go through.
    pub fn can_submit(&self, responses: &Responses) -> bool {
        self.missing_required(responses).is_empty() && self.rejected_values(responses).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuestionKind;

    fn q(id: u64, text: &str) -> Question {
        Question::new(QuestionId::new(id), text, QuestionKind::Text)
    }

    fn list(ids: &[u64]) -> QuestionList {
        QuestionList::from_questions(ids.iter().map(|&id| q(id, "Q")).collect()).unwrap()
    }

    fn ids(list: &QuestionList) -> Vec<u64> {
        list.iter().map(|q| q.id().get()).collect()
    }

    #[test]
    fn add_appends_new_ids() {
        let mut questions = QuestionList::new();
        assert_eq!(questions.add_or_update(q(1, "A")), Upsert::Added(0));
        assert_eq!(questions.add_or_update(q(2, "B")), Upsert::Added(1));
        assert_eq!(ids(&questions), vec![1, 2]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut questions = list(&[1, 2, 3]);
        assert_eq!(questions.add_or_update(q(2, "Changed")), Upsert::Updated(1));
        assert_eq!(questions.len(), 3);
        assert_eq!(questions.questions()[1].text(), "Changed");
        assert_eq!(ids(&questions), vec![1, 2, 3]);
    }

    #[test]
    fn move_bounds() {
        let mut questions = list(&[1, 2, 3]);
        assert_eq!(questions.move_question(0, Direction::Up), MoveOutcome::Unchanged);
        assert_eq!(questions.move_question(2, Direction::Down), MoveOutcome::Unchanged);
        assert_eq!(ids(&questions), vec![1, 2, 3]);

        assert!(questions.move_question(1, Direction::Down).is_moved());
        assert_eq!(ids(&questions), vec![1, 3, 2]);
        assert!(questions.move_question(1, Direction::Up).is_moved());
        assert_eq!(ids(&questions), vec![3, 1, 2]);
    }

    #[test]
    fn delete_preserves_order() {
        let mut questions = list(&[1, 2, 3]);
        assert!(questions.delete(QuestionId::new(2)).is_some());
        assert_eq!(ids(&questions), vec![1, 3]);
        assert!(questions.delete(QuestionId::new(9)).is_none());
        assert_eq!(ids(&questions), vec![1, 3]);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = QuestionList::from_questions(vec![q(4, "A"), q(4, "B")]).unwrap_err();
        assert!(matches!(err, FormError::DuplicateId(id) if id.get() == 4));
    }

    #[test]
    fn from_json_rejects_unknown_kind() {
        let err = QuestionList::from_json(r#"[{"id": 1, "text": "A", "type": "slider"}]"#)
            .unwrap_err();
        assert!(err.is_unknown_kind());
        assert!(matches!(err, FormError::UnknownKind(kind) if kind == "slider"));

        let err = QuestionList::from_json(r#"[{"id": 1, "text": "A"}]"#).unwrap_err();
        assert!(matches!(err, FormError::Json(_)));

        let parsed = QuestionList::from_json(
            r#"[{"id": 1, "text": "A", "type": "select", "options": ["x", "y"]}]"#,
        )
        .unwrap();
        assert_eq!(parsed.questions()[0].options(), &["x", "y"]);
    }

    #[test]
    fn largest_id_rejected() {
        let err = QuestionList::from_json(
            r#"[{"id": 18446744073709551615, "text": "A", "type": "text"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, FormError::IdOutOfRange(id) if id.get() == u64::MAX));

        let almost = list(&[u64::MAX - 1]);
        assert_eq!(ids(&almost), vec![u64::MAX - 1]);
    }

    #[test]
    fn empty_list_renders_only_submit() {
        let view = QuestionList::new().render();
        assert!(view.rows.is_empty());
        assert_eq!(view.submit_label, "View responses");
    }

    #[test]
    fn render_headers_and_controls() {
        let questions = QuestionList::from_questions(vec![
            q(1, "Name").required(),
            Question::new(QuestionId::new(2), "Born", QuestionKind::Date),
        ])
        .unwrap();
        let view = questions.render();

        assert_eq!(view.rows.len(), 2);
        let first = &view.rows[0];
        assert_eq!(first.header(), "Question 1");
        assert!(first.required);
        assert!(!first.can_move_up);
        assert!(first.can_move_down);
        assert_eq!(first.control, Control::TextInput);

        let second = &view.rows[1];
        assert_eq!(second.number, 2);
        assert!(second.can_move_up);
        assert!(!second.can_move_down);
        assert_eq!(second.control, Control::DateInput);
    }

    #[test]
    fn required_and_constraint_checks() {
        let questions = QuestionList::from_questions(vec![
            q(1, "Name").required(),
            Question::new(QuestionId::new(2), "Age", QuestionKind::Number),
        ])
        .unwrap();
        let view = questions.render();

        let mut responses = Responses::new();
        assert_eq!(view.missing_required(&responses), vec![QuestionId::new(1)]);
        assert!(!view.can_submit(&responses));

        responses.insert(QuestionId::new(1), "Ada");
        responses.insert(QuestionId::new(2), "old");
        assert!(view.missing_required(&responses).is_empty());
        assert_eq!(view.rejected_values(&responses), vec![QuestionId::new(2)]);

        responses.insert(QuestionId::new(2), "36");
        assert!(view.can_submit(&responses));
    }
}

use crate::QuestionId;

/// Hands out question ids derived from the wall clock.
///
/// Ids are milliseconds since the Unix epoch, bumped past the last id handed
/// out or observed, so two drafts created in the same millisecond (or after
/// loading a list with ids from the future) never collide.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a fresh id strictly greater than every id seen so far.
    pub fn next_id(&mut self) -> QuestionId {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        QuestionId::new(self.last)
    }

    /// Record an id created elsewhere so it is never handed out again.
    pub fn observe(&mut self, id: QuestionId) {
        self.last = self.last.max(id.get());
    }
}

//! # formcraft
//!
//! Build forms from a list of questions and preview them. Frontend-agnostic.
//!
//! A [`FormBuilder`] owns the ordered question list, the question editor and
//! the answers entered in the preview. Frontends turn user input into
//! [`Message`]s and feed them to [`FormBuilder::update`].
//!
//! ## Usage
//!
//! ```rust
//! use formcraft::{
//!     DraftField, EditorAction, FormBackend, FormBuilder, Message, QuestionKind, ScriptedBackend,
//! };
//!
//! let builder = ScriptedBackend::new()
//!     .with_message(Message::Editor(EditorAction::SetField(DraftField::Text("Age".into()))))
//!     .with_message(Message::Editor(EditorAction::SetField(DraftField::Kind(QuestionKind::Number))))
//!     .with_message(Message::Editor(EditorAction::Submit))
//!     .run(FormBuilder::new())
//!     .unwrap();
//!
//! assert_eq!(builder.questions().len(), 1);
//! ```
//!
//! ## Frontends
//!
//! Frontends are separate crates that implement `FormBackend`:
//! - `formcraft-form-egui` - native GUI with editor panel and live preview
//!
//! `formcraft-doc-html` renders a question list as a static fillable HTML form.

pub use formcraft_types::*;

// Replays recorded messages without user interaction
mod scripted_backend;
pub use scripted_backend::{ScriptError, ScriptedBackend};

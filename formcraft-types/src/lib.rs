//! Core types for formcraft.
//!
//! This crate holds everything about a form builder that does not depend on
//! how it is drawn:
//! - `Question`, `QuestionKind` and `QuestionId` - the form field definitions
//! - `OrderedList` - bounds-checked reordering for questions and options
//! - `QuestionEditor` - the draft being created or edited
//! - `QuestionList` and `FormView` - the ordered form and its preview rows
//! - `Control` - the input control chosen for each kind
//! - `ResponseCollector` and `Responses` - answers entered in the preview
//! - `FormBuilder` and `FormBackend` - the state holder and the frontends driving it

mod ordered;
pub use ordered::{Direction, MoveOutcome, OrderedList};

mod question;
pub use question::{Question, QuestionId, QuestionKind};

mod id;
pub use id::IdGenerator;

mod editor;
pub use editor::{DraftField, EditorAction, EditorEvent, EditorMode, QuestionEditor};

mod control;
pub use control::{Control, DATE_FORMAT, NO_SELECTION, NO_SELECTION_LABEL, radio_group};

mod question_list;
pub use question_list::{FormView, QuestionList, QuestionRow, SUBMIT_LABEL, Upsert};

mod responses;
pub use responses::{ResponseCollector, Responses};

mod builder;
pub use builder::{Change, FormBuilder, Message, Theme, Validator};

mod error;
pub use error::FormError;

mod traits;
pub use traits::FormBackend;

//! # formcraft-doc-html
//!
//! Renders a formcraft question list as a fillable HTML form.
//!
//! The generated form relies on native browser constraints: required
//! questions carry the `required` attribute, numbers and dates use
//! `type="number"` and `type="date"`, and radio buttons share a group name
//! derived from the question id.
//!
//! ## Usage
//!
//! ```rust
//! use formcraft::{Question, QuestionId, QuestionKind, QuestionList};
//! use formcraft_doc_html::{HtmlOptions, to_html};
//!
//! let questions = QuestionList::from_questions(vec![
//!     Question::new(QuestionId::new(1), "Name", QuestionKind::Text).required(),
//! ])
//! .unwrap();
//!
//! let html = to_html(&questions, &HtmlOptions::new().with_title("Sign-up"));
//! assert!(html.contains("required"));
//! ```

mod generator;

pub use generator::{HtmlOptions, to_html};

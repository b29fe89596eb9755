//! # formcraft-form-egui
//!
//! An egui frontend for formcraft.
//!
//! The window shows the question editor on the left and a live preview of
//! the form on the right. Questions can be edited, reordered and deleted from
//! their preview cards, and the preview can be filled out and submitted to the
//! builder's validator.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formcraft::{FormBackend, FormBuilder, Theme};
//! use formcraft_form_egui::EguiBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = EguiBackend::new()
//!         .with_title("Form builder")
//!         .with_theme(Theme::Dark);
//!
//!     let builder = backend.run(FormBuilder::new())?;
//!     println!("{} questions", builder.questions().len());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{EguiBackend, EguiError};

//! Open the form builder with a few questions already in place.
//!
//! Run with: cargo run -p formcraft-form-egui --example builder

use formcraft::{FormBackend, FormBuilder, Question, QuestionId, QuestionKind, QuestionList};
use formcraft_form_egui::EguiBackend;

fn main() -> anyhow::Result<()> {
    let questions = QuestionList::from_questions(vec![
        Question::new(QuestionId::new(1), "What is your name?", QuestionKind::Text).required(),
        Question::new(QuestionId::new(2), "Favourite colour", QuestionKind::Radio)
            .with_options(["Red", "Green", "Blue"]),
    ])?;

    let builder = FormBuilder::new()
        .with_questions(questions)
        .with_validator(|responses| {
            println!("{}", serde_json::to_string_pretty(responses).unwrap_or_default());
        });

    let backend = EguiBackend::new()
        .with_title("Form builder")
        .with_window_size([900.0, 650.0]);
    let builder = backend.run(builder)?;
    println!("{:#?}", builder.questions().questions());
    Ok(())
}

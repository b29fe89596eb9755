//! Print a small form as a standalone HTML document.
//!
//! Run with: cargo run -p formcraft-doc-html --example html_preview > form.html

use formcraft::{Question, QuestionId, QuestionKind, QuestionList, Theme};
use formcraft_doc_html::{HtmlOptions, to_html};

fn main() -> anyhow::Result<()> {
    let questions = QuestionList::from_questions(vec![
        Question::new(QuestionId::new(1), "Full name", QuestionKind::Text).required(),
        Question::new(QuestionId::new(2), "Age", QuestionKind::Number),
        Question::new(QuestionId::new(3), "Start date", QuestionKind::Date).required(),
        Question::new(QuestionId::new(4), "T-shirt size", QuestionKind::Select)
            .with_options(["S", "M", "L", "XL"]),
        Question::new(QuestionId::new(5), "Subscribe to the newsletter", QuestionKind::Switch),
        Question::new(QuestionId::new(6), "Preferred contact", QuestionKind::Radio)
            .required()
            .with_options(["Email", "Phone"]),
        Question::new(QuestionId::new(7), "Anything else?", QuestionKind::Paragraph),
    ])?;

    let options = HtmlOptions::new()
        .with_title("Event registration")
        .with_theme(Theme::Dark);
    print!("{}", to_html(&questions, &options));
    Ok(())
}

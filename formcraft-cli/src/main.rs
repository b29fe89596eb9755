//! # formcraft
//!
//! - `formcraft` - open the builder window with an empty form
//! - `formcraft --questions form.json` - start from a saved question list
//! - `formcraft --questions form.json --html form.html` - export instead of opening a window

use anyhow::{Context, Result};
use clap::Parser;
use formcraft::{FormBackend, FormBuilder};
use formcraft_doc_html::{HtmlOptions, to_html};
use formcraft_form_egui::EguiBackend;
use tracing::info;

mod cli;

use cli::{Cli, load_questions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let questions = load_questions(cli.questions.as_deref())?;
    info!(count = questions.len(), "question list loaded");

    if let Some(path) = &cli.html {
        let options = HtmlOptions::new()
            .with_title(cli.title.as_str())
            .with_theme(cli.theme());
        std::fs::write(path, to_html(&questions, &options))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "form exported");
        return Ok(());
    }

    let builder = FormBuilder::new()
        .with_questions(questions)
        .with_theme(cli.theme())
        .with_validator(|responses| match serde_json::to_string_pretty(responses) {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::error!(%err, "could not serialize responses"),
        });

    let backend = EguiBackend::new()
        .with_title(cli.title.as_str())
        .with_theme(cli.theme());
    let builder = backend.run(builder)?;
    info!(count = builder.questions().len(), "builder closed");

    Ok(())
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use formcraft::{QuestionList, Theme};

/// formcraft - build a form question by question and try it out live
#[derive(Debug, Parser)]
#[command(name = "formcraft")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive form builder with a live preview")]
#[command(long_about = None)]
pub struct Cli {
    /// JSON file holding the initial question list
    #[arg(short, long, env = "FORMCRAFT_QUESTIONS")]
    pub questions: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Window or document title
    #[arg(long, default_value = "Form builder")]
    pub title: String,

    /// Write the form as an HTML document instead of opening the window
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn theme(&self) -> Theme {
        if self.dark { Theme::Dark } else { Theme::Light }
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Read the initial question list, or start empty when no file is given.
pub fn load_questions(path: Option<&Path>) -> Result<QuestionList> {
    let Some(path) = path else {
        return Ok(QuestionList::new());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read question file {}", path.display()))?;
    QuestionList::from_json(&json)
        .with_context(|| format!("Invalid question list in {}", path.display()))
}

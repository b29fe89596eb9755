//! HTML form generator implementation.

use formcraft::{Control, NO_SELECTION, NO_SELECTION_LABEL, QuestionList, QuestionRow, Theme};

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Title for the HTML document.
    pub title: Option<String>,
    /// Whether to include default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Color scheme of the default styles.
    pub theme: Theme,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "form".to_string(),
            theme: Theme::Light,
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the form fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Pick light or dark default styles.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Generate an HTML form for a question list.
pub fn to_html(questions: &QuestionList, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );

        if let Some(title) = &options.title {
            html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));
        }

        if options.include_styles {
            html.push_str(&generate_styles(prefix, options.theme));
        }

        html.push_str("</head>\n<body>\n");
    }

    let view = questions.render();

    html.push_str(&format!("<form class=\"{prefix}-form\">\n"));

    if let Some(title) = &options.title {
        html.push_str(&format!(
            "  <h1 class=\"{prefix}-title\">{}</h1>\n",
            escape_html(title)
        ));
    }

    html.push_str(&format!("  <div class=\"{prefix}-questions\">\n"));
    for row in &view.rows {
        html.push_str(&generate_row(row, prefix, 2));
    }
    html.push_str("  </div>\n");

    html.push_str(&format!(
        "  <button type=\"submit\" class=\"{prefix}-submit\">{}</button>\n",
        escape_html(view.submit_label)
    ));

    html.push_str("</form>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate the card for one question: header, label and control.
fn generate_row(row: &QuestionRow, prefix: &str, indent: usize) -> String {
    let ind = "  ".repeat(indent);
    let field_id = format!("question-{}", row.id);
    let name = row.id.key();
    let required = if row.required { " required" } else { "" };

    let mut html = String::new();
    html.push_str(&format!(
        "{ind}<div class=\"{prefix}-card\" data-question-id=\"{}\">\n",
        row.id
    ));
    html.push_str(&format!(
        "{ind}  <h3 class=\"{prefix}-header\">{}</h3>\n",
        escape_html(&row.header())
    ));

    let marker = if row.required {
        format!(" <span class=\"{prefix}-required\">*</span>")
    } else {
        String::new()
    };
    let label = format!("{}{marker}", escape_html(&row.prompt));

    match &row.control {
        Control::TextInput => {
            html.push_str(&format!("{ind}  <label for=\"{field_id}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"text\" id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-input\"{required}>\n"
            ));
        }

        Control::NumberInput => {
            html.push_str(&format!("{ind}  <label for=\"{field_id}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"number\" step=\"any\" id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-input\"{required}>\n"
            ));
        }

        Control::DateInput => {
            html.push_str(&format!("{ind}  <label for=\"{field_id}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <input type=\"date\" id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-input\"{required}>\n"
            ));
        }

        Control::Select { options } => {
            html.push_str(&format!("{ind}  <label for=\"{field_id}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <select id=\"{field_id}\" name=\"{name}\" class=\"{prefix}-input\"{required}>\n"
            ));
            html.push_str(&format!(
                "{ind}    <option value=\"{NO_SELECTION}\">{}</option>\n",
                escape_html(NO_SELECTION_LABEL)
            ));
            for option in options {
                let option = escape_html(option);
                html.push_str(&format!(
                    "{ind}    <option value=\"{option}\">{option}</option>\n"
                ));
            }
            html.push_str(&format!("{ind}  </select>\n"));
        }

        Control::Switch => {
            html.push_str(&format!("{ind}  <div class=\"{prefix}-switch\">\n"));
            html.push_str(&format!(
                "{ind}    <input type=\"checkbox\" role=\"switch\" id=\"{field_id}\" name=\"{name}\" value=\"true\"{required}>\n"
            ));
            html.push_str(&format!(
                "{ind}    <label for=\"{field_id}\">{label}</label>\n"
            ));
            html.push_str(&format!("{ind}  </div>\n"));
        }

        Control::Radio { group, options } => {
            html.push_str(&format!("{ind}  <fieldset class=\"{prefix}-fieldset\">\n"));
            html.push_str(&format!("{ind}    <legend>{label}</legend>\n"));
            for (idx, option) in options.iter().enumerate() {
                let option_id = format!("{group}-{idx}");
                let option = escape_html(option);
                html.push_str(&format!(
                    "{ind}    <div class=\"{prefix}-radio-option\">\n"
                ));
                html.push_str(&format!(
                    "{ind}      <input type=\"radio\" id=\"{option_id}\" name=\"{group}\" value=\"{option}\"{required}>\n"
                ));
                html.push_str(&format!(
                    "{ind}      <label for=\"{option_id}\">{option}</label>\n"
                ));
                html.push_str(&format!("{ind}    </div>\n"));
            }
            html.push_str(&format!("{ind}  </fieldset>\n"));
        }

        Control::Paragraph => {
            html.push_str(&format!("{ind}  <label for=\"{field_id}\">{label}</label>\n"));
            html.push_str(&format!(
                "{ind}  <textarea id=\"{field_id}\" name=\"{name}\" rows=\"4\" class=\"{prefix}-textarea\"{required}></textarea>\n"
            ));
        }
    }

    html.push_str(&format!("{ind}</div>\n"));
    html
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles.
fn generate_styles(prefix: &str, theme: Theme) -> String {
    let (background, card, header, text, border, input) = match theme {
        Theme::Light => ("#f3f4f6", "#ffffff", "#f9fafb", "#111827", "#e5e7eb", "#ffffff"),
        Theme::Dark => ("#1f2937", "#374151", "#4b5563", "#f9fafb", "#4b5563", "#4b5563"),
    };
    format!(
        r#"  <style>
    body {{
      background: {background};
      color: {text};
    }}
    .{prefix}-form {{
      max-width: 600px;
      margin: 2rem auto;
      padding: 1rem;
      font-family: sans-serif;
    }}
    .{prefix}-card {{
      margin: 1rem 0;
      background: {card};
      border: 1px solid {border};
      border-radius: 0.5rem;
      overflow: hidden;
    }}
    .{prefix}-header {{
      margin: 0;
      padding: 0.25rem 1rem;
      background: {header};
      border-bottom: 1px solid {border};
    }}
    .{prefix}-card > label, .{prefix}-card > .{prefix}-input,
    .{prefix}-card > .{prefix}-textarea, .{prefix}-switch, .{prefix}-fieldset {{
      display: block;
      margin: 0.5rem 1rem;
    }}
    .{prefix}-input, .{prefix}-textarea {{
      width: calc(100% - 2rem);
      padding: 0.5rem;
      box-sizing: border-box;
      background: {input};
      color: {text};
    }}
    .{prefix}-required {{
      color: #ef4444;
    }}
    .{prefix}-switch {{
      display: flex;
      align-items: center;
      gap: 0.5rem;
    }}
    .{prefix}-fieldset {{
      border: none;
      padding: 0;
    }}
    .{prefix}-radio-option {{
      margin: 0.25rem 0;
    }}
    .{prefix}-submit {{
      width: 100%;
      margin-top: 1rem;
      padding: 0.5rem 1rem;
      background: #22c55e;
      color: #ffffff;
      border: none;
      border-radius: 0.375rem;
    }}
  </style>
"#
    )
}

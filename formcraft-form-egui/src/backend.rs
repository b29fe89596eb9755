//! Egui backend implementation for FormBackend trait.

use eframe::egui;
use formcraft::{
    Control, Direction, DraftField, EditorAction, EditorMode, FormBackend, FormBuilder, Message,
    NO_SELECTION, NO_SELECTION_LABEL, QuestionEditor, QuestionId, QuestionKind, QuestionRow,
    Theme,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for the Egui backend.
#[derive(Debug, Error)]
pub enum EguiError {
    /// An error occurred in the egui/eframe backend.
    #[error("Egui error: {0}")]
    Eframe(String),

    /// The form state was left poisoned by a panic while rendering.
    #[error("Form state lock poisoned")]
    Poisoned,
}

/// Builder/configuration for the Egui backend.
#[derive(Debug, Clone)]
pub struct EguiBackend {
    /// Window title.
    title: String,
    /// Window size [width, height].
    window_size: [f32; 2],
    /// Theme override; the builder's own theme is used when unset.
    theme: Option<Theme>,
}

impl Default for EguiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiBackend {
    /// Create a new Egui backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Form builder".to_string(),
            window_size: [900.0, 650.0],
            theme: None,
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size.
    pub fn with_window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = size;
        self
    }

    /// Start in light or dark mode.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// The egui application: editor panel on the left, form preview in the center.
struct FormApp {
    state: Arc<Mutex<FormBuilder>>,
    /// Theme the visuals were last set for.
    applied_theme: Option<Theme>,
    /// Required questions left empty on the last submit attempt.
    missing: Vec<QuestionId>,
    /// Feedback shown under the submit button.
    notice: Option<String>,
    /// Pretty-printed answers of the last accepted submit.
    submitted: Option<String>,
}

impl FormApp {
    fn new(state: Arc<Mutex<FormBuilder>>) -> Self {
        Self {
            state,
            applied_theme: None,
            missing: Vec::new(),
            notice: None,
            submitted: None,
        }
    }

    fn render_editor(ui: &mut egui::Ui, editor: &QuestionEditor, messages: &mut Vec<Message>) {
        let draft = editor.draft();

        ui.heading(match editor.mode() {
            EditorMode::Creating => "New question",
            EditorMode::Editing(_) => "Edit question",
        });
        ui.add_space(8.0);

        ui.label("Question text");
        let mut text = draft.text().to_string();
        if ui
            .add(egui::TextEdit::singleline(&mut text).desired_width(f32::INFINITY))
            .changed()
        {
            messages.push(edit(EditorAction::SetField(DraftField::Text(text))));
        }

        ui.label("Answer type");
        let mut kind = draft.kind();
        egui::ComboBox::from_id_salt("question-kind")
            .selected_text(kind.label())
            .show_ui(ui, |ui| {
                for option in QuestionKind::ALL {
                    ui.selectable_value(&mut kind, option, option.label());
                }
            });
        if kind != draft.kind() {
            messages.push(edit(EditorAction::SetField(DraftField::Kind(kind))));
        }

        let mut required = draft.is_required();
        if ui.checkbox(&mut required, "Required field").changed() {
            messages.push(edit(EditorAction::SetField(DraftField::Required(required))));
        }

        if editor.shows_options() {
            ui.add_space(8.0);
            Self::render_options(ui, editor, messages);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(draft.is_ready(), egui::Button::new(editor.submit_label()))
                .clicked()
            {
                messages.push(edit(EditorAction::Submit));
            }
            if ui.button("Cancel").clicked() {
                messages.push(Message::CancelEdit);
            }
        });
    }

    fn render_options(ui: &mut egui::Ui, editor: &QuestionEditor, messages: &mut Vec<Message>) {
        ui.label("Options");

        ui.horizontal(|ui| {
            let mut pending = editor.pending_option().to_string();
            let response = ui.add(egui::TextEdit::singleline(&mut pending).hint_text("New option"));
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if response.changed() {
                messages.push(edit(EditorAction::SetPendingOption(pending)));
            }
            if ui.button("➕ Add").clicked() || entered {
                messages.push(edit(EditorAction::AddPendingOption));
            }
        });

        let options = editor.draft().options();
        let last = options.len().saturating_sub(1);
        egui::ScrollArea::vertical()
            .id_salt("draft-options")
            .max_height(160.0)
            .show(ui, |ui| {
                for (index, option) in options.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(option.as_str());
                        if ui.add_enabled(index > 0, egui::Button::new("⬆")).clicked() {
                            messages.push(edit(EditorAction::MoveOption(index, Direction::Up)));
                        }
                        if ui.add_enabled(index < last, egui::Button::new("⬇")).clicked() {
                            messages.push(edit(EditorAction::MoveOption(index, Direction::Down)));
                        }
                        if ui.button("✖").clicked() {
                            messages.push(edit(EditorAction::RemoveOption(index)));
                        }
                    });
                }
            });
    }

    fn render_preview(
        ui: &mut egui::Ui,
        builder: &FormBuilder,
        missing: &[QuestionId],
        messages: &mut Vec<Message>,
    ) {
        let view = builder.view();

        if view.rows.is_empty() {
            ui.weak("No questions yet. Use the editor to add one.");
        }

        for row in &view.rows {
            let current = builder.answer(row.id).unwrap_or_default();
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.push_id(row.id.get(), |ui| {
                    Self::render_row_header(ui, row, messages);
                    ui.horizontal(|ui| {
                        ui.label(row.prompt.as_str());
                        if row.required {
                            ui.colored_label(egui::Color32::RED, "*");
                        }
                    });
                    if let Some(value) = render_control(ui, &row.control, current) {
                        messages.push(Message::Answer(row.id, value));
                    }
                    if !row.control.accepts(current) {
                        if let Some(hint) = row.control.constraint_hint() {
                            ui.colored_label(egui::Color32::RED, hint);
                        }
                    }
                    if missing.contains(&row.id) {
                        ui.colored_label(egui::Color32::RED, "This field is required");
                    }
                });
            });
            ui.add_space(8.0);
        }

        if ui
            .add_sized([ui.available_width(), 32.0], egui::Button::new(view.submit_label))
            .clicked()
        {
            messages.push(Message::SubmitResponses);
        }
    }

    fn render_row_header(ui: &mut egui::Ui, row: &QuestionRow, messages: &mut Vec<Message>) {
        ui.horizontal(|ui| {
            ui.strong(row.header());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑").on_hover_text("Delete").clicked() {
                    messages.push(Message::DeleteQuestion(row.id));
                }
                if ui.button("✏").on_hover_text("Edit").clicked() {
                    messages.push(Message::EditQuestion(row.id));
                }
                if ui
                    .add_enabled(row.can_move_down, egui::Button::new("⬇"))
                    .clicked()
                {
                    messages.push(Message::MoveQuestion(row.index, Direction::Down));
                }
                if ui
                    .add_enabled(row.can_move_up, egui::Button::new("⬆"))
                    .clicked()
                {
                    messages.push(Message::MoveQuestion(row.index, Direction::Up));
                }
            });
        });
    }

    /// Apply a submit the way a browser would: only when every constraint holds.
    fn try_submit(&mut self, builder: &mut FormBuilder) {
        let view = builder.view();
        self.missing = view.missing_required(builder.responses());
        let rejected = view.rejected_values(builder.responses());

        if !self.missing.is_empty() || !rejected.is_empty() {
            self.notice = Some(format!(
                "{} required question(s) unanswered, {} invalid answer(s)",
                self.missing.len(),
                rejected.len()
            ));
            return;
        }

        self.submitted = serde_json::to_string_pretty(builder.responses()).ok();
        self.notice = None;
        builder.update(Message::SubmitResponses);
    }
}

impl eframe::App for FormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = Arc::clone(&self.state);
        let Ok(mut builder) = state.lock() else {
            warn!("form state poisoned, closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        };

        let theme = builder.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_visuals(if theme.is_dark() {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            self.applied_theme = Some(theme);
        }

        let mut messages = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} question(s)", builder.questions().len()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if theme.is_dark() { "☀ Light" } else { "🌙 Dark" };
                    if ui.button(label).clicked() {
                        messages.push(Message::SetTheme(theme.toggled()));
                    }
                });
            });
        });

        egui::SidePanel::left("editor")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                Self::render_editor(ui, builder.editor(), &mut messages);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                Self::render_preview(ui, &builder, &self.missing, &mut messages);
                if let Some(notice) = &self.notice {
                    ui.colored_label(egui::Color32::RED, notice.as_str());
                }
            });
        });

        if let Some(submitted) = &self.submitted {
            let mut open = true;
            egui::Window::new("Responses")
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.monospace(submitted.as_str());
                });
            if !open {
                self.submitted = None;
            }
        }

        for message in messages {
            if message == Message::SubmitResponses {
                self.try_submit(&mut builder);
                continue;
            }
            let change = builder.update(message);
            debug!(?change, "ui message applied");
        }

        self.missing
            .retain(|id| !builder.responses().has_value(*id));
    }
}

fn edit(action: EditorAction) -> Message {
    Message::Editor(action)
}

/// Draw the control for one question; returns the new value when it changed.
fn render_control(ui: &mut egui::Ui, control: &Control, current: &str) -> Option<String> {
    let mut value = current.to_string();
    let changed = match control {
        Control::TextInput => ui
            .add(egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY))
            .changed(),
        Control::NumberInput => ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text("0")
                    .desired_width(f32::INFINITY),
            )
            .changed(),
        Control::DateInput => ui
            .add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text("YYYY-MM-DD")
                    .desired_width(f32::INFINITY),
            )
            .changed(),
        Control::Select { options } => {
            let selected_text = if value.is_empty() {
                NO_SELECTION_LABEL.to_string()
            } else {
                value.clone()
            };
            let mut changed = false;
            egui::ComboBox::from_id_salt("select")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    changed |= ui
                        .selectable_value(&mut value, NO_SELECTION.to_string(), NO_SELECTION_LABEL)
                        .changed();
                    for option in options {
                        changed |= ui
                            .selectable_value(&mut value, option.clone(), option.as_str())
                            .changed();
                    }
                });
            changed
        }
        Control::Switch => {
            let mut on = value == "true";
            let label = if on { "On" } else { "Off" };
            let changed = ui.checkbox(&mut on, label).changed();
            if changed {
                value = on.to_string();
            }
            changed
        }
        Control::Radio { group, options } => {
            let mut changed = false;
            ui.push_id(group, |ui| {
                for option in options {
                    changed |= ui
                        .radio_value(&mut value, option.clone(), option.as_str())
                        .changed();
                }
            });
            changed
        }
        Control::Paragraph => ui
            .add(
                egui::TextEdit::multiline(&mut value)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            )
            .changed(),
    };
    changed.then_some(value)
}

impl FormBackend for EguiBackend {
    type Error = EguiError;

    fn run(&self, builder: FormBuilder) -> Result<FormBuilder, Self::Error> {
        let builder = match self.theme {
            Some(theme) => builder.with_theme(theme),
            None => builder,
        };
        let state = Arc::new(Mutex::new(builder));

        // Create native options
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size),
            ..Default::default()
        };

        let app_state = Arc::clone(&state);
        debug!(title = %self.title, "opening form builder window");

        // eframe::run_native blocks until the window is closed
        eframe::run_native(
            &self.title,
            options,
            Box::new(move |_cc| Ok(Box::new(FormApp::new(app_state)) as Box<dyn eframe::App>)),
        )
        .map_err(|e| EguiError::Eframe(e.to_string()))?;

        debug!("form builder window closed");
        let mut state = state.lock().map_err(|_| EguiError::Poisoned)?;
        Ok(std::mem::take(&mut *state))
    }
}

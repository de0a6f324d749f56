//! Text input prompt with a companion single-choice selector.

use egui::{Context, Window};

use crate::prompt::{Outcome, focus_with_caret_at_end, next_window_id};

/// Handler invoked with the text field's contents and the selected
/// choice index.
pub type ChoiceHandler = Box<dyn FnMut(&str, usize)>;

/// Hook invoked whenever the prompt closes.
pub type DismissHandler = Box<dyn FnMut()>;

/// Modal text prompt with an additional single-choice selector.
///
/// Same contract as [`crate::TextPrompt`], with every outcome handler
/// also receiving the index of the selected choice. The selection
/// defaults to the first entry when the user makes no explicit choice.
pub struct ChoicePrompt {
    window_id: egui::Id,
    title: String,
    input: String,
    choices: Vec<String>,
    selected: usize,
    positive_label: String,
    neutral_label: String,
    negative_label: String,
    on_positive: Option<ChoiceHandler>,
    on_neutral: Option<ChoiceHandler>,
    on_negative: Option<ChoiceHandler>,
    on_dismiss: Option<DismissHandler>,
    open: bool,
    request_focus: bool,
}

impl ChoicePrompt {
    /// Create a prompt with the given window title and ordered choice
    /// list.
    pub fn new(title: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            window_id: next_window_id("choice_prompt"),
            title: title.into(),
            input: String::new(),
            choices,
            selected: 0,
            positive_label: "OK".to_string(),
            neutral_label: String::new(),
            negative_label: "Cancel".to_string(),
            on_positive: None,
            on_neutral: None,
            on_negative: None,
            on_dismiss: None,
            open: true,
            request_focus: true,
        }
    }

    /// Pre-fill the text field; the caret starts at the end.
    pub fn initial_text(mut self, text: impl Into<String>) -> Self {
        self.input = text.into();
        self
    }

    /// Label and handler for the confirming button. Enter in the text
    /// field triggers the same handler.
    pub fn on_positive(
        mut self,
        label: impl Into<String>,
        handler: impl FnMut(&str, usize) + 'static,
    ) -> Self {
        self.positive_label = label.into();
        self.on_positive = Some(Box::new(handler));
        self
    }

    /// Label and handler for the neutral button. Without one, no
    /// neutral button is shown.
    pub fn on_neutral(
        mut self,
        label: impl Into<String>,
        handler: impl FnMut(&str, usize) + 'static,
    ) -> Self {
        self.neutral_label = label.into();
        self.on_neutral = Some(Box::new(handler));
        self
    }

    /// Label and handler for the dismissing button. Without one, a
    /// plain "Cancel" button closes the prompt with no handler
    /// invoked.
    pub fn on_negative(
        mut self,
        label: impl Into<String>,
        handler: impl FnMut(&str, usize) + 'static,
    ) -> Self {
        self.negative_label = label.into();
        self.on_negative = Some(Box::new(handler));
        self
    }

    /// Hook invoked whenever the prompt closes, after any outcome
    /// handler.
    pub fn on_dismiss(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(handler));
        self
    }

    /// Whether the prompt is still on screen.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the currently selected choice.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Draw the prompt. Returns false once it has closed.
    pub fn show(&mut self, ctx: &Context) -> bool {
        if !self.open {
            return false;
        }
        let mut outcome = None;

        Window::new(self.title.clone())
            .id(self.window_id)
            .collapsible(false)
            .resizable(false)
            .default_width(400.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let response = ui.text_edit_singleline(&mut self.input);
                if self.request_focus {
                    focus_with_caret_at_end(ui, &response, self.input.chars().count());
                    self.request_focus = false;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    outcome = Some(Outcome::Positive);
                }

                ui.add_space(8.0);
                let selected_text = self
                    .choices
                    .get(self.selected)
                    .cloned()
                    .unwrap_or_default();
                egui::ComboBox::from_id_salt("choice_prompt_select")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for (i, choice) in self.choices.iter().enumerate() {
                            ui.selectable_value(&mut self.selected, i, choice);
                        }
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button(&self.positive_label).clicked() {
                        outcome = Some(Outcome::Positive);
                    }
                    if self.on_neutral.is_some() && ui.button(&self.neutral_label).clicked() {
                        outcome = Some(Outcome::Neutral);
                    }
                    let negative_outcome = if self.on_negative.is_some() {
                        Outcome::Negative
                    } else {
                        Outcome::Cancel
                    };
                    if ui.button(&self.negative_label).clicked() {
                        outcome = Some(negative_outcome);
                    }
                });
            });

        if let Some(outcome) = outcome {
            self.dispatch(outcome);
        }
        self.open
    }

    /// Invoke the handler for `outcome` (if any), then the dismiss
    /// hook, and close the prompt.
    fn dispatch(&mut self, outcome: Outcome) {
        let handler = match outcome {
            Outcome::Positive => self.on_positive.as_mut(),
            Outcome::Neutral => self.on_neutral.as_mut(),
            Outcome::Negative => self.on_negative.as_mut(),
            Outcome::Cancel => None,
        };
        if let Some(handler) = handler {
            handler(&self.input, self.selected);
        }
        if let Some(on_dismiss) = self.on_dismiss.as_mut() {
            on_dismiss();
        }
        self.open = false;
        log::debug!("choice prompt '{}' closed: {outcome:?}", self.title);
    }
}

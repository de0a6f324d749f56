//! Single-line text input prompt.

use std::sync::atomic::{AtomicUsize, Ordering};

use egui::{Context, Window};

static NEXT_PROMPT_ID: AtomicUsize = AtomicUsize::new(0);

/// A window id unique to one prompt instance, so prompts with equal
/// titles never collide.
pub(crate) fn next_window_id(kind: &'static str) -> egui::Id {
    egui::Id::new((kind, NEXT_PROMPT_ID.fetch_add(1, Ordering::Relaxed)))
}

/// Which affordance closed a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Positive,
    Neutral,
    Negative,
    /// The built-in cancel button shown when no negative handler was
    /// supplied; invokes no outcome handler.
    Cancel,
}

/// Handler invoked with the text field's contents.
pub type TextHandler = Box<dyn FnMut(&str)>;

/// Hook invoked whenever a prompt closes.
pub type DismissHandler = Box<dyn FnMut()>;

/// Focus a text edit and place the caret after the last character.
pub(crate) fn focus_with_caret_at_end(ui: &egui::Ui, response: &egui::Response, chars: usize) {
    let mut state = egui::TextEdit::load_state(ui.ctx(), response.id).unwrap_or_default();
    state
        .cursor
        .set_char_range(Some(egui::text::CCursorRange::one(egui::text::CCursor::new(
            chars,
        ))));
    state.store(ui.ctx(), response.id);
    response.request_focus();
}

/// Modal single-line text input prompt.
///
/// Built once, then shown every frame with [`TextPrompt::show`] until
/// it closes. Exactly one outcome handler fires per interaction and
/// the dismiss hook fires on every close, after the outcome handler
/// when one fired. Enter in the text field is equivalent to the
/// positive button.
///
/// # Example
///
/// ```no_run
/// # fn demo(ctx: &egui::Context) {
/// let mut prompt = palm_term_dialogs::TextPrompt::new("Session name")
///     .initial_text("bash")
///     .on_positive("Rename", |text| println!("renamed to {text}"));
/// prompt.show(ctx);
/// # }
/// ```
pub struct TextPrompt {
    window_id: egui::Id,
    title: String,
    input: String,
    positive_label: String,
    neutral_label: String,
    negative_label: String,
    on_positive: Option<TextHandler>,
    on_neutral: Option<TextHandler>,
    on_negative: Option<TextHandler>,
    on_dismiss: Option<DismissHandler>,
    open: bool,
    request_focus: bool,
}

impl TextPrompt {
    /// Create a prompt with the given window title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            window_id: next_window_id("text_prompt"),
            title: title.into(),
            input: String::new(),
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
        handler: impl FnMut(&str) + 'static,
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
        handler: impl FnMut(&str) + 'static,
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
        handler: impl FnMut(&str) + 'static,
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
            handler(&self.input);
        }
        if let Some(on_dismiss) = self.on_dismiss.as_mut() {
            on_dismiss();
        }
        self.open = false;
        log::debug!("text prompt '{}' closed: {outcome:?}", self.title);
    }
}

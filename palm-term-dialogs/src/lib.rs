//! Prompt dialog helpers for the palm-term terminal emulator.
//!
//! Small egui building blocks for asking the user for a line of text,
//! optionally together with a choice from a fixed list. The prompts
//! are modal, dispatch exactly one outcome handler per interaction,
//! and report every close through an optional dismiss hook.

mod choice_prompt;
mod prompt;

pub use choice_prompt::ChoicePrompt;
pub use prompt::TextPrompt;

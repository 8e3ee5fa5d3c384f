// src/cli/menu.rs
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;
use inquire::error::InquireResult;
use inquire::{InquireError, Select, Text};

use crate::core::config::Config;
use crate::error::Result;
use crate::generators::{CharacterClass, CharacterClasses, PasswordGenerator, RandomSource};
use crate::validation::LengthBounds;

/// Fields of the password form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub length: String,
    pub classes: CharacterClasses,
    pub password: Option<String>,
    /// Set once the length has been edited or submitted.
    pub length_touched: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            length: String::new(),
            classes: CharacterClasses::only(CharacterClass::Lower),
            password: None,
            length_touched: false,
        }
    }
}

impl FormState {
    pub fn set_length(&mut self, raw: String) {
        self.length = raw;
        self.length_touched = true;
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.classes.toggle(class);
    }

    /// Clear the length, every toggle and the displayed password.
    pub fn reset(&mut self) {
        self.length.clear();
        self.classes = CharacterClasses::none();
        self.password = None;
        self.length_touched = false;
    }

    /// Validate the length field and generate. A failed submit clears the
    /// displayed password.
    pub fn submit<S: RandomSource>(
        &mut self,
        bounds: &LengthBounds,
        generator: &mut PasswordGenerator<S>,
    ) -> Result<&str> {
        self.length_touched = true;
        let generated: Result<String> = bounds
            .validate(&self.length)
            .map_err(Into::into)
            .and_then(|length| generator.generate(length, &self.classes).map_err(Into::into));

        match generated {
            Ok(password) => Ok(self.password.insert(password).as_str()),
            Err(e) => {
                self.password = None;
                Err(e)
            }
        }
    }

    /// Validation message for the length field, hidden until it is touched.
    pub fn length_error(&self, bounds: &LengthBounds) -> Option<String> {
        if !self.length_touched {
            return None;
        }
        bounds.validate(&self.length).err().map(|e| e.message())
    }

    pub fn actions(&self, bounds: &LengthBounds) -> Vec<MenuAction> {
        let mut actions = vec![MenuAction::EditLength {
            value: self.length.clone(),
            error: self.length_error(bounds),
        }];
        actions.extend(
            CharacterClass::ALL
                .into_iter()
                .map(|class| MenuAction::Toggle(class, self.classes.contains(class))),
        );
        actions.extend([MenuAction::Generate, MenuAction::Reset, MenuAction::Exit]);
        actions
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    EditLength { value: String, error: Option<String> },
    Toggle(CharacterClass, bool),
    Generate,
    Reset,
    Exit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::EditLength { value, error } => {
                let shown = if value.is_empty() { "Ex. 8" } else { value.as_str() };
                write!(f, "✏️  Password Length: {}", shown)?;
                if let Some(error) = error {
                    write!(f, "  ({})", error)?;
                }
                Ok(())
            }
            MenuAction::Toggle(class, enabled) => {
                let mark = if *enabled { "x" } else { " " };
                write!(f, "[{}] {}", mark, class.label())
            }
            MenuAction::Generate => write!(f, "🔐  Generate Password"),
            MenuAction::Reset => write!(f, "🧹  Reset"),
            MenuAction::Exit => write!(f, "❌  Exit"),
        }
    }
}

/// How a prompt ended.
#[derive(Debug, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    Answered(T),
    /// Esc: back out of the current prompt.
    Canceled,
    /// Ctrl+C: leave the form.
    Interrupted,
}

/// Sort a prompt result into an answer, a cancel or an interrupt. Any other
/// inquire failure (broken terminal, IO) is passed through.
pub fn prompt_outcome<T>(result: InquireResult<T>) -> InquireResult<PromptOutcome<T>> {
    match result {
        Ok(value) => Ok(PromptOutcome::Answered(value)),
        Err(InquireError::OperationCanceled) => Ok(PromptOutcome::Canceled),
        Err(InquireError::OperationInterrupted) => Ok(PromptOutcome::Interrupted),
        Err(e) => Err(e),
    }
}

pub fn run_form(config: &Config, should_exit: Arc<AtomicBool>) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    let bounds = config.bounds()?;
    let mut generator = PasswordGenerator::new();
    let mut form = FormState::default();

    while !should_exit.load(Ordering::SeqCst) {
        let selected = Select::new("Password Generator", form.actions(&bounds))
            .with_page_size(8)
            .prompt();
        let action = match prompt_outcome(selected)? {
            PromptOutcome::Answered(action) => action,
            PromptOutcome::Canceled | PromptOutcome::Interrupted => break,
        };

        match action {
            MenuAction::EditLength { .. } => {
                let mut prompt = Text::new("Password length:").with_placeholder("Ex. 8");
                if !form.length.is_empty() {
                    prompt = prompt.with_default(&form.length);
                }
                let raw = match prompt_outcome(prompt.prompt())? {
                    PromptOutcome::Answered(raw) => raw,
                    PromptOutcome::Canceled => continue,
                    PromptOutcome::Interrupted => break,
                };
                form.set_length(raw);

                if let Err(e) = bounds.validate(&form.length) {
                    println!("{}", style(e.message()).red());
                }
            }
            MenuAction::Toggle(class, _) => form.toggle(class),
            MenuAction::Generate => match form.submit(&bounds, &mut generator) {
                Ok(password) => {
                    println!();
                    println!("{}", style("Select to copy").bold());
                    println!("{}", style(password).white().on_red().bold());
                    println!();
                }
                Err(e) => println!("❌ {}", style(e).red()),
            },
            MenuAction::Reset => {
                form.reset();
                println!("🧹 Form reset");
            }
            MenuAction::Exit => break,
        }
    }

    log::info!("Password form closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::generators::{GenerationError, SequenceSource};
    use crate::validation::ValidationError;

    #[test]
    fn starts_with_lowercase_only() {
        let form = FormState::default();
        assert_eq!(form.classes, CharacterClasses::only(CharacterClass::Lower));
        assert!(form.length.is_empty());
        assert!(form.password.is_none());
    }

    #[test]
    fn submit_stores_password() {
        let mut form = FormState {
            length: "4".to_string(),
            ..FormState::default()
        };
        let mut generator = PasswordGenerator::with_source(SequenceSource::new(vec![1, 2, 3, 4]));
        let password = form.submit(&LengthBounds::default(), &mut generator).unwrap().to_string();
        assert_eq!(password, "bcde");
        assert_eq!(form.password.as_deref(), Some("bcde"));
    }

    #[test]
    fn invalid_length_clears_password() {
        let mut form = FormState {
            length: "2".to_string(),
            password: Some("stale".to_string()),
            ..FormState::default()
        };
        let mut generator = PasswordGenerator::new();
        let err = form.submit(&LengthBounds::default(), &mut generator).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::TooShort { min: 4 })
        ));
        assert!(form.password.is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = FormState {
            length: "12".to_string(),
            classes: CharacterClasses::all(),
            password: Some("abc".to_string()),
            length_touched: true,
        };
        form.reset();
        assert!(!form.length_touched);
        assert!(form.length.is_empty());
        assert!(form.classes.is_empty());
        assert!(form.password.is_none());
    }

    #[test]
    fn submit_after_reset_reports_empty_alphabet() {
        let mut form = FormState::default();
        form.reset();
        form.length = "8".to_string();
        let mut generator = PasswordGenerator::new();
        let err = form.submit(&LengthBounds::default(), &mut generator).unwrap_err();
        assert!(matches!(err, Error::Generation(GenerationError::EmptyAlphabet)));
    }

    #[test]
    fn actions_reflect_form() {
        let mut form = FormState::default();
        form.toggle(CharacterClass::Symbols);
        let actions = form.actions(&LengthBounds::default());
        assert_eq!(actions.len(), 8);
        assert_eq!(
            actions[0],
            MenuAction::EditLength {
                value: String::new(),
                error: None,
            }
        );
        assert_eq!(actions[1], MenuAction::Toggle(CharacterClass::Lower, true));
        assert_eq!(actions[4], MenuAction::Toggle(CharacterClass::Symbols, true));
        assert_eq!(actions[1].to_string(), "[x] Include Lowercase letters");
        assert_eq!(actions[2].to_string(), "[ ] Include Uppercase letters");
    }

    #[test]
    fn length_error_waits_for_first_edit() {
        let bounds = LengthBounds::default();
        let mut form = FormState::default();
        assert_eq!(form.length_error(&bounds), None);

        form.set_length("2".to_string());
        assert_eq!(
            form.length_error(&bounds),
            Some("should be min of 4 character".to_string())
        );

        form.set_length("8".to_string());
        assert_eq!(form.length_error(&bounds), None);
    }

    #[test]
    fn empty_submit_marks_length_touched() {
        let bounds = LengthBounds::default();
        let mut form = FormState::default();
        let mut generator = PasswordGenerator::new();
        assert!(form.submit(&bounds, &mut generator).is_err());
        assert_eq!(
            form.actions(&bounds)[0],
            MenuAction::EditLength {
                value: String::new(),
                error: Some("length is required".to_string()),
            }
        );
    }

    #[test]
    fn ctrl_c_and_esc_are_not_errors() {
        assert_eq!(
            prompt_outcome::<String>(Err(InquireError::OperationInterrupted)).unwrap(),
            PromptOutcome::Interrupted
        );
        assert_eq!(
            prompt_outcome::<String>(Err(InquireError::OperationCanceled)).unwrap(),
            PromptOutcome::Canceled
        );
        assert_eq!(
            prompt_outcome(Ok("12".to_string())).unwrap(),
            PromptOutcome::Answered("12".to_string())
        );
    }

    #[test]
    fn other_prompt_failures_pass_through() {
        let result = prompt_outcome::<String>(Err(InquireError::NotTTY));
        assert!(matches!(result, Err(InquireError::NotTTY)));
    }
}

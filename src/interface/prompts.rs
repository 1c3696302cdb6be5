use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::interface::coerce::coerce_numeric;
use crate::interface::currency::CurrencyFormat;
use crate::interface::matching::{find_field, FieldMatch};
use crate::models::{FieldUnit, InputField};
use crate::state::PricingSession;

/// What to do next in the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EditField,
    ShowInputs,
    ReenterAll,
    Reset,
    Quit,
}

impl Action {
    const MENU: [Action; 5] = [
        Action::EditField,
        Action::ShowInputs,
        Action::ReenterAll,
        Action::Reset,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::EditField => "Edit a field",
            Action::ShowInputs => "Show current inputs",
            Action::ReenterAll => "Fill in the whole form again",
            Action::Reset => "Reset the form",
            Action::Quit => "Quit",
        }
    }
}

fn unit_hint(field: InputField, currency: CurrencyFormat) -> String {
    match field.unit() {
        FieldUnit::Currency => format!(" ({})", currency.symbol()),
        FieldUnit::Grams => " (g)".to_string(),
        FieldUnit::Percent => " (%)".to_string(),
        FieldUnit::Count => String::new(),
    }
}

/// Prompt for one field's value, offering the current value as default.
///
/// Anything that isn't a number is read as 0.
pub fn prompt_field(field: InputField, current: f64, currency: CurrencyFormat) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{}{}", field.label(), unit_hint(field, currency)))
        .default(current.to_string())
        .allow_empty(true)
        .interact_text()?;

    Ok(coerce_numeric(&input))
}

/// Walk the whole form, updating the session after each answer.
pub fn collect_inputs(session: &mut PricingSession, currency: CurrencyFormat) -> Result<()> {
    for field in InputField::ALL {
        let value = prompt_field(field, session.value(field), currency)?;
        session.set(field, value);
    }
    Ok(())
}

/// Ask which field to edit by name, with fuzzy matching.
///
/// Returns `None` when the user submits an empty name.
pub fn prompt_field_choice() -> Result<Option<InputField>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Field to edit (or press Enter to go back)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let candidates = match find_field(input) {
            FieldMatch::Exact(field) => return Ok(Some(field)),
            FieldMatch::Candidates(candidates) => candidates,
            FieldMatch::NoMatch => {
                println!("No matching field found for '{}'", input);
                let keys: Vec<&str> = InputField::ALL.iter().map(|f| f.key()).collect();
                println!("Fields: {}", keys.join(", "));
                continue;
            }
        };

        if let [field] = candidates[..] {
            if prompt_yes_no(&format!("Did you mean '{}'?", field.key()), true)? {
                return Ok(Some(field));
            }
            continue;
        }

        let mut options: Vec<String> = candidates
            .iter()
            .map(|f| format!("{} - {}", f.key(), f.label()))
            .collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if let Some(field) = candidates.get(selection) {
            return Ok(Some(*field));
        }
    }
}

/// Main menu of the interactive loop.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::MENU.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Action::MENU.get(selection).copied().unwrap_or(Action::Quit))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

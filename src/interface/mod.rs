pub mod coerce;
pub mod currency;
pub mod matching;
pub mod prompts;
pub mod render;

pub use coerce::coerce_numeric;
pub use currency::{format_currency, CurrencyFormat};
pub use matching::{find_field, FieldMatch};
pub use prompts::{
    collect_inputs, prompt_action, prompt_field, prompt_field_choice, prompt_yes_no, Action,
};
pub use render::{display_inputs, display_results, display_sweep, format_field_value};

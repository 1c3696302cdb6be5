mod field;
mod inputs;
mod results;

pub use field::{to_batch_size, FieldUnit, InputField};
pub use inputs::{CostInputs, PricingInputs};
pub use results::DerivedResults;

pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod logging;
pub mod models;
pub mod pricing;
pub mod state;

pub use error::{PricingError, Result};
pub use models::{CostInputs, DerivedResults, InputField, PricingInputs};
pub use pricing::compute;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CostInputs, PricingInputs};

/// A pre-filled form read from disk.
///
/// Either section may be omitted; missing numbers take their form defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub costs: CostInputs,
    pub pricing: PricingInputs,
}

/// Load a scenario from a JSON file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario> {
    let content = fs::read_to_string(path)?;
    let scenario = serde_json::from_str(&content)?;
    Ok(scenario)
}

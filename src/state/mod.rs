mod scenario;
mod session;

pub use scenario::{load_scenario, Scenario};
pub use session::PricingSession;

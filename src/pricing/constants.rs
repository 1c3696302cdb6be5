/// Margin the form starts with (sale price is twice the unit cost).
pub const DEFAULT_MARGIN_PERCENT: f64 = 100.0;

/// Divisor turning a percentage into a fraction.
pub const PERCENT_SCALE: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Margin sweep
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound on rows produced by a single sweep.
pub const MAX_SWEEP_STEPS: usize = 10_000;

pub const DEFAULT_SWEEP_START: f64 = 0.0;
pub const DEFAULT_SWEEP_END: f64 = 200.0;
pub const DEFAULT_SWEEP_STEP: f64 = 10.0;

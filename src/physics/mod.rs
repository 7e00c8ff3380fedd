pub mod rapier;
pub mod spring;
pub mod wrap;

/// Nominal physics step rate (Hz) the per-step tuning constants
/// (air friction, spring constants) are expressed against.
pub const STEP_RATE: f32 = 60.0;

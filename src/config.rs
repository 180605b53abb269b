use serde::{Serialize, Deserialize};

// Constants for spin animation pacing
pub const MIN_SPINS: f64 = 3.0;          // Minimum number of full rotations
pub const MAX_SPINS: f64 = 8.0;          // Maximum number of full rotations (exclusive)
pub const SPIN_DURATION_MS: u32 = 3000;  // Duration of spin animation in milliseconds

/// Which way the wheel face turns under the fixed pointer.
///
/// Sector layout and winner resolution must agree on this, so it lives in the
/// config rather than being an argument to individual calls.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Presentation-driven knobs for a wheel instance.
///
/// `pointer_offset_degrees` moves the fixed pointer around the rim (the two
/// conventions seen in practice are 0 for a top pointer and 90 for a side
/// pointer). None of these fields affect fairness, only where a given
/// rotation visually lands.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WheelConfig {
    pub pointer_offset_degrees: f64,
    pub direction: RotationDirection,
    pub min_spins: f64,
    pub max_spins: f64,
    pub spin_duration_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            pointer_offset_degrees: 0.0,
            direction: RotationDirection::Clockwise,
            min_spins: MIN_SPINS,
            max_spins: MAX_SPINS,
            spin_duration_ms: SPIN_DURATION_MS,
        }
    }
}

impl WheelConfig {
    /// Config for the plain n-way roulette variant: equal slices, side pointer.
    pub fn side_pointer() -> Self {
        Self {
            pointer_offset_degrees: 90.0,
            ..Self::default()
        }
    }
}

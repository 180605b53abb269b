//! Weighted wheel-of-fortune selector.
//!
//! A wheel holds an ordered list of weighted entries. A spin draws a large
//! random rotation, and once the animation delay has passed the winner is
//! resolved purely from the final rotation angle: each entry owns a
//! contiguous angular sector proportional to its weight, so the long-run win
//! frequency of an entry equals `weight / total_weight`, independent of how
//! much rotation has accumulated across earlier spins.
//!
//! The crate is UI-agnostic: rendering, animation easing, and input widgets
//! are the caller's concern. The caller feeds entries in (optionally through
//! the `"Label*Weight"` text convention), spins with any [`rand::Rng`], and
//! gets back `{winner_id, final_rotation_degrees}`.

pub mod config;
pub mod entry;
pub mod error;
pub mod sector;
pub mod spinner;
pub mod validation;
pub mod wheel;

pub use config::{RotationDirection, WheelConfig};
pub use entry::Entry;
pub use error::WheelError;
pub use wheel::{SpinOutcome, SpinTicket, Wheel};

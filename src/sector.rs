//! Pure winner-resolution math.
//!
//! Sectors are laid out in entry order starting at angle 0, each covering an
//! arc proportional to its weight. Resolution maps an unbounded rotation to
//! the pointer's angle on the wheel face and scans the half-open sector
//! intervals. Everything here is a pure function of its arguments, so a
//! displayed animation and the reported result can never disagree.

use crate::config::{RotationDirection, WheelConfig};
use crate::entry::Entry;

const FULL_TURN: f64 = 360.0;

/// Angle on the wheel face that sits under the fixed pointer once the wheel
/// has stopped at `final_rotation` degrees.
///
/// Full rotations cancel under `mod 360`, so accumulated spin history never
/// influences the result. A clockwise-turning wheel moves the pointer
/// backwards relative to the sector layout, hence the inversion.
pub fn pointer_angle(final_rotation: f64, config: &WheelConfig) -> f64 {
    let wheel_angle = final_rotation.rem_euclid(FULL_TURN);
    let base = match config.direction {
        RotationDirection::Clockwise => (FULL_TURN - wheel_angle).rem_euclid(FULL_TURN),
        RotationDirection::CounterClockwise => wheel_angle,
    };
    (base + config.pointer_offset_degrees).rem_euclid(FULL_TURN)
}

/// Index of the sector containing `angle`, with `angle` in `[0, 360)`.
///
/// Entry `i` owns the half-open interval
/// `[sum(w_0..w_i) * 360 / W, sum(w_0..=w_i) * 360 / W)`. The intervals are
/// contiguous and exactly cover the circle, so every in-range angle matches
/// exactly one sector; if float error leaves `angle` at or past the last
/// upper bound, it lands on the last sector rather than nowhere.
///
/// Returns `None` only for an empty list or a non-positive weight total.
pub fn index_at_angle(entries: &[Entry], angle: f64) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }
    let total: f64 = entries.iter().map(|e| e.weight).sum();
    if total <= 0.0 {
        return None;
    }

    let mut cumulative = 0.0;
    for (i, entry) in entries.iter().enumerate() {
        cumulative += entry.weight;
        let upper = cumulative * FULL_TURN / total;
        if angle < upper {
            return Some(i);
        }
    }
    Some(entries.len() - 1)
}

/// Deterministically resolves the winning entry for a finished spin.
pub fn resolve_winner<'a>(
    entries: &'a [Entry],
    final_rotation: f64,
    config: &WheelConfig,
) -> Option<&'a Entry> {
    let angle = pointer_angle(final_rotation, config);
    index_at_angle(entries, angle).map(|i| &entries[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(weights: &[f64]) -> Vec<Entry> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Entry::new(format!("e{}", i), format!("Entry {}", i), w).unwrap())
            .collect()
    }

    #[test]
    fn clockwise_pointer_angle_inverts_rotation() {
        let config = WheelConfig::default();
        assert_eq!(pointer_angle(0.0, &config), 0.0);
        assert_eq!(pointer_angle(90.0, &config), 270.0);
        assert_eq!(pointer_angle(360.0, &config), 0.0);
        assert_eq!(pointer_angle(360.0 * 5.0 + 90.0, &config), 270.0);
    }

    #[test]
    fn counter_clockwise_pointer_angle_passes_through() {
        let config = WheelConfig {
            direction: RotationDirection::CounterClockwise,
            ..WheelConfig::default()
        };
        assert_eq!(pointer_angle(90.0, &config), 90.0);
        assert_eq!(pointer_angle(360.0 * 3.0 + 45.0, &config), 45.0);
    }

    #[test]
    fn pointer_offset_shifts_the_reference() {
        let config = WheelConfig::side_pointer();
        assert_eq!(pointer_angle(0.0, &config), 90.0);
        assert_eq!(pointer_angle(90.0, &config), 0.0);
    }

    #[test]
    fn half_open_boundaries_at_equal_thirds() {
        let entries = entries(&[1.0, 1.0, 1.0]);
        assert_eq!(index_at_angle(&entries, 0.0), Some(0));
        assert_eq!(index_at_angle(&entries, 119.999), Some(0));
        assert_eq!(index_at_angle(&entries, 120.0), Some(1));
        assert_eq!(index_at_angle(&entries, 239.999), Some(1));
        assert_eq!(index_at_angle(&entries, 240.0), Some(2));
        assert_eq!(index_at_angle(&entries, 359.999), Some(2));
    }

    #[test]
    fn weighted_sectors_match_cumulative_layout() {
        // weights 1 and 3 split the circle at 90 degrees
        let entries = entries(&[1.0, 3.0]);
        assert_eq!(index_at_angle(&entries, 89.999), Some(0));
        assert_eq!(index_at_angle(&entries, 90.0), Some(1));
        assert_eq!(index_at_angle(&entries, 359.0), Some(1));
    }

    #[test]
    fn dense_sweep_always_finds_exactly_one_sector() {
        let entries = entries(&[2.0, 0.25, 5.0, 1.0, 3.5]);
        for step in 0..360_000 {
            let angle = step as f64 * 0.001;
            assert!(
                index_at_angle(&entries, angle).is_some(),
                "no sector at angle {}",
                angle
            );
        }
    }

    #[test]
    fn float_spill_clamps_to_last_sector() {
        let entries = entries(&[1.0, 1.0, 1.0]);
        assert_eq!(index_at_angle(&entries, 360.0), Some(2));
    }

    #[test]
    fn empty_or_weightless_lists_resolve_to_nothing() {
        assert_eq!(index_at_angle(&[], 10.0), None);

        // weight 0 cannot pass Entry::new, but a caller can still build the
        // struct directly; resolution must refuse rather than divide by zero
        let weightless = vec![Entry {
            id: "e0".to_string(),
            label: "Entry 0".to_string(),
            weight: 0.0,
            color: None,
        }];
        assert_eq!(index_at_angle(&weightless, 10.0), None);
    }

    #[test]
    fn resolution_is_deterministic() {
        let entries = entries(&[1.0, 2.0, 4.0]);
        let config = WheelConfig::default();
        for rotation in [0.0, 123.456, 2875.2, 99_999.9] {
            let first = resolve_winner(&entries, rotation, &config).map(|e| e.id.clone());
            let second = resolve_winner(&entries, rotation, &config).map(|e| e.id.clone());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn full_rotations_do_not_change_the_winner() {
        let entries = entries(&[1.0, 2.0, 4.0]);
        let config = WheelConfig::default();
        let base = 37.25;
        let expected = resolve_winner(&entries, base, &config).unwrap().id.clone();
        for k in 1..50 {
            let rotation = base + 360.0 * k as f64;
            let winner = resolve_winner(&entries, rotation, &config).unwrap();
            assert_eq!(winner.id, expected, "winner changed after {} extra turns", k);
        }
    }

    #[test]
    fn single_entry_always_wins() {
        let entries = entries(&[4.0]);
        let config = WheelConfig::default();
        for rotation in [0.0, 1.0, 359.999, 1234.5, 360.0 * 77.0 + 12.0] {
            let winner = resolve_winner(&entries, rotation, &config).unwrap();
            assert_eq!(winner.id, "e0");
        }
    }
}

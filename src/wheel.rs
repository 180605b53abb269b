use std::collections::HashSet;
use std::time::Duration;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::WheelConfig;
use crate::entry::Entry;
use crate::error::WheelError;
use crate::sector;

/// Mutable state of one wheel instance.
///
/// `current_rotation` accumulates across spins and is never normalized back
/// into `[0, 360)` — the animation layer needs the monotonically growing
/// value, and full rotations cancel during resolution anyway. At most one
/// spin is in flight at a time, guarded by `is_spinning`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Wheel {
    entries: Vec<Entry>,
    retired_ids: HashSet<String>,
    current_rotation: f64,
    is_spinning: bool,
    config: WheelConfig,
}

/// Snapshot of everything a pending spin needs to resolve.
///
/// Taken at spin start so that edits to the entry list while the wheel is
/// turning cannot move sector boundaries under the animation: the entry the
/// user watches the wheel stop on is the entry that gets reported.
#[derive(Debug, Clone)]
pub struct SpinTicket {
    snapshot: Vec<Entry>,
    final_rotation: f64,
    config: WheelConfig,
}

/// What a finished spin reports to the caller.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner_id: String,
    pub winner_label: String,
    pub final_rotation_degrees: f64,
}

impl SpinTicket {
    pub fn final_rotation(&self) -> f64 {
        self.final_rotation
    }

    pub fn entries(&self) -> &[Entry] {
        &self.snapshot
    }

    /// How long the caller should wait before resolving, so that resolution
    /// never lands before the animation matching `final_rotation` has played
    /// out.
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.config.spin_duration_ms))
    }

    /// The entry under the pointer at `final_rotation`. Pure, so calling it
    /// repeatedly always names the same winner.
    pub fn winner(&self) -> &Entry {
        sector::resolve_winner(&self.snapshot, self.final_rotation, &self.config)
            .expect("spin tickets are only issued for non-empty, positively weighted wheels")
    }
}

impl Wheel {
    pub fn new(config: WheelConfig) -> Self {
        Self {
            entries: Vec::new(),
            retired_ids: HashSet::new(),
            current_rotation: 0.0,
            is_spinning: false,
            config,
        }
    }

    pub fn with_entries(config: WheelConfig, entries: Vec<Entry>) -> Result<Self, WheelError> {
        let mut wheel = Self::new(config);
        for entry in entries {
            wheel.add_entry(entry)?;
        }
        Ok(wheel)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn current_rotation(&self) -> f64 {
        self.current_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Adds an entry. Ids must be unique, and an id that was removed earlier
    /// stays retired for the life of this wheel so downstream maps and
    /// animation keys never see a collision.
    pub fn add_entry(&mut self, entry: Entry) -> Result<(), WheelError> {
        if self.entries.iter().any(|e| e.id == entry.id) {
            return Err(WheelError::DuplicateId(entry.id));
        }
        if self.retired_ids.contains(&entry.id) {
            return Err(WheelError::RetiredId(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Adds an entry from the `"Label*Weight"` text convention.
    pub fn add_entry_from_text(
        &mut self,
        id: impl Into<String>,
        text: &str,
    ) -> Result<(), WheelError> {
        let entry = Entry::from_text(id, text)?;
        self.add_entry(entry)
    }

    pub fn remove_entry(&mut self, id: &str) -> Result<Entry, WheelError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| WheelError::UnknownEntry(id.to_string()))?;
        let entry = self.entries.remove(index);
        self.retired_ids.insert(entry.id.clone());
        Ok(entry)
    }

    /// Zeroes the accumulated rotation. Not allowed mid-spin, since the
    /// in-flight animation is keyed off the committed rotation value.
    pub fn reset(&mut self) -> Result<(), WheelError> {
        if self.is_spinning {
            return Err(WheelError::SpinInFlight);
        }
        self.current_rotation = 0.0;
        Ok(())
    }

    /// Starts a spin: draws a random number of whole rotations plus a random
    /// extra angle, commits the new rotation, and hands back a ticket that
    /// resolves the winner after the animation delay.
    ///
    /// Rejected without any state change when a spin is already in flight,
    /// when the wheel is empty, or when the weights do not sum to a positive
    /// total.
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> Result<SpinTicket, WheelError> {
        if self.is_spinning {
            return Err(WheelError::SpinInFlight);
        }
        if self.entries.is_empty() {
            return Err(WheelError::EmptyWheel);
        }
        if self.total_weight() <= 0.0 {
            return Err(WheelError::ZeroTotalWeight);
        }

        let spins = rng.gen_range(self.config.min_spins..self.config.max_spins).floor();
        let extra = rng.gen_range(0.0..360.0);
        self.current_rotation += spins * 360.0 + extra;
        self.is_spinning = true;

        log::debug!(
            "wheel spinning: {} full turns + {:.2}°, target rotation {:.2}°",
            spins,
            extra,
            self.current_rotation
        );

        Ok(SpinTicket {
            snapshot: self.entries.clone(),
            final_rotation: self.current_rotation,
            config: self.config,
        })
    }

    /// Completes a spin: computes the winner from the ticket's snapshot and
    /// releases the single-flight guard.
    pub fn resolve(&mut self, ticket: SpinTicket) -> SpinOutcome {
        let winner = ticket.winner().clone();
        self.is_spinning = false;

        log::info!(
            "🎡 wheel landed on '{}' at {:.2}°",
            winner.label,
            ticket.final_rotation
        );

        SpinOutcome {
            winner_id: winner.id,
            winner_label: winner.label,
            final_rotation_degrees: ticket.final_rotation,
        }
    }

    /// Abandons a pending spin without reporting a winner. The committed
    /// rotation stays — only the in-flight guard is released.
    pub fn cancel(&mut self, ticket: SpinTicket) {
        log::debug!("spin to {:.2}° cancelled", ticket.final_rotation);
        self.is_spinning = false;
    }
}

//! Timed spin resolution on the tokio timer.
//!
//! The wheel itself is synchronous; this module supplies the fixed delay
//! between spin start and winner resolution, and guarantees that a spin
//! abandoned mid-flight (component torn down, future dropped) releases the
//! wheel's single-flight guard instead of leaving it stuck spinning.

use rand::Rng;

use crate::error::WheelError;
use crate::wheel::{SpinOutcome, SpinTicket, Wheel};

/// A spin that has been started but not yet resolved.
///
/// Holds the wheel mutably for the duration of the spin, which also enforces
/// the single-spin-in-flight rule at compile time for callers going through
/// this module. Dropping an `ActiveSpin` before [`ActiveSpin::resolve`]
/// completes cancels the pending resolution.
#[derive(Debug)]
pub struct ActiveSpin<'a> {
    wheel: &'a mut Wheel,
    ticket: Option<SpinTicket>,
}

/// Starts a spin on `wheel` and returns the in-flight handle.
pub fn begin<'a, R: Rng>(wheel: &'a mut Wheel, rng: &mut R) -> Result<ActiveSpin<'a>, WheelError> {
    let ticket = wheel.spin(rng)?;
    Ok(ActiveSpin {
        wheel,
        ticket: Some(ticket),
    })
}

impl ActiveSpin<'_> {
    /// Rotation the animation layer should ease towards.
    pub fn target_rotation(&self) -> f64 {
        self.wheel.current_rotation()
    }

    /// Waits out the animation delay, then resolves the winner against the
    /// snapshot taken at spin start.
    ///
    /// Cancel-safe: the ticket is not consumed until the timer has elapsed,
    /// so dropping this future mid-sleep runs the cancellation path.
    pub async fn resolve(mut self) -> SpinOutcome {
        let delay = self
            .ticket
            .as_ref()
            .map(SpinTicket::resolve_delay)
            .unwrap_or_default();
        tokio::time::sleep(delay).await;

        // the ticket is present until this point, nothing else takes it
        let ticket = self.ticket.take().unwrap();
        self.wheel.resolve(ticket)
    }
}

impl Drop for ActiveSpin<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.wheel.cancel(ticket);
        }
    }
}

//! Coalescing debounce channels.
//!
//! The UI fires edit and slider events far faster than a recompute is
//! worth running. Each channel holds at most one pending deadline;
//! scheduling again cancels and replaces it (last write wins, nothing
//! queues). Time is supplied by the host as monotonic milliseconds, so
//! the wasm build needs no clock shim and tests can drive it directly.

use serde::{Deserialize, Serialize};

/// Debounce window for coalesced dimension-edit recomputes.
pub const RECOMPUTE_DEBOUNCE_MS: u64 = 360;

/// Debounce window for shape-slider commits. Separate from the edit
/// channel so a body edit never cancels a slider commit or vice versa.
pub const MORPH_DEBOUNCE_MS: u64 = 200;

/// The two independent debounce channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Recompute,
    Morph,
}

impl Channel {
    pub fn window_ms(&self) -> u64 {
        match self {
            Channel::Recompute => RECOMPUTE_DEBOUNCE_MS,
            Channel::Morph => MORPH_DEBOUNCE_MS,
        }
    }
}

/// One pending deadline per channel, cancel-and-replace on schedule.
#[derive(Debug, Clone, Default)]
pub struct Coalescer {
    recompute_due: Option<u64>,
    morph_due: Option<u64>,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a channel. Any pending deadline on the same channel is
    /// dropped. Returns the new deadline.
    pub fn schedule(&mut self, channel: Channel, now_ms: u64) -> u64 {
        let due = now_ms + channel.window_ms();
        *self.slot(channel) = Some(due);
        due
    }

    /// Disarm a channel without firing it.
    pub fn cancel(&mut self, channel: Channel) {
        *self.slot(channel) = None;
    }

    /// The pending deadline for a channel, if armed.
    pub fn due(&self, channel: Channel) -> Option<u64> {
        match channel {
            Channel::Recompute => self.recompute_due,
            Channel::Morph => self.morph_due,
        }
    }

    /// Earliest pending deadline across both channels. Hosts use this
    /// to decide when to call back.
    pub fn next_due(&self) -> Option<u64> {
        match (self.recompute_due, self.morph_due) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Disarm and return every channel whose deadline has passed, in
    /// deadline order.
    pub fn fire_due(&mut self, now_ms: u64) -> Vec<Channel> {
        let mut fired: Vec<(u64, Channel)> = Vec::new();
        if let Some(due) = self.recompute_due {
            if due <= now_ms {
                self.recompute_due = None;
                fired.push((due, Channel::Recompute));
            }
        }
        if let Some(due) = self.morph_due {
            if due <= now_ms {
                self.morph_due = None;
                fired.push((due, Channel::Morph));
            }
        }
        fired.sort_by_key(|(due, _)| *due);
        fired.into_iter().map(|(_, c)| c).collect()
    }

    fn slot(&mut self, channel: Channel) -> &mut Option<u64> {
        match channel {
            Channel::Recompute => &mut self.recompute_due,
            Channel::Morph => &mut self.morph_due,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_replaces_pending_deadline() {
        let mut c = Coalescer::new();
        c.schedule(Channel::Recompute, 0);
        assert_eq!(c.due(Channel::Recompute), Some(RECOMPUTE_DEBOUNCE_MS));

        // rescheduling pushes the deadline out, nothing queues
        c.schedule(Channel::Recompute, 300);
        assert_eq!(c.due(Channel::Recompute), Some(300 + RECOMPUTE_DEBOUNCE_MS));
        assert!(c.fire_due(RECOMPUTE_DEBOUNCE_MS).is_empty());
        assert_eq!(c.fire_due(660), vec![Channel::Recompute]);
        assert_eq!(c.due(Channel::Recompute), None);
    }

    #[test]
    fn channels_are_independent() {
        let mut c = Coalescer::new();
        c.schedule(Channel::Recompute, 0);
        c.schedule(Channel::Morph, 0);
        assert_eq!(c.fire_due(200), vec![Channel::Morph]);
        assert_eq!(c.due(Channel::Recompute), Some(360));
        assert_eq!(c.fire_due(360), vec![Channel::Recompute]);
    }

    #[test]
    fn fire_order_follows_deadlines() {
        let mut c = Coalescer::new();
        c.schedule(Channel::Recompute, 0); // due 360
        c.schedule(Channel::Morph, 300); // due 500
        assert_eq!(c.fire_due(1000), vec![Channel::Recompute, Channel::Morph]);
    }

    #[test]
    fn cancel_and_next_due() {
        let mut c = Coalescer::new();
        assert_eq!(c.next_due(), None);
        c.schedule(Channel::Recompute, 0);
        c.schedule(Channel::Morph, 0);
        assert_eq!(c.next_due(), Some(MORPH_DEBOUNCE_MS));
        c.cancel(Channel::Morph);
        assert_eq!(c.next_due(), Some(RECOMPUTE_DEBOUNCE_MS));
        assert!(c.fire_due(250).is_empty());
    }
}

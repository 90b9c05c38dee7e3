//! Button and reshuffle notifications
//!
//! Subscriber lists are append-only in normal use. Every subscription hands
//! back a [`SubscriptionId`] so a collaborator can detach later.

use std::fmt;

use crate::player::Player;
use crate::slot::SlotName;

/// Handle returned by every subscription, accepted by `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub(crate) u64);

/// When a reshuffle notification is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReshufflePhase {
    /// A resolution pass is about to clear assignments
    Before,
    /// A resolution pass has finished assigning players
    After,
    /// The keyboard player's preset was switched
    KeyboardPreset,
}

/// Global button callback: `(player_index, slot)`.
pub type ButtonCallback = dyn FnMut(usize, SlotName);

/// Per-player, per-slot button callback.
pub type SlotCallback = dyn FnMut();

/// Roster change callback, handed the full player array.
pub type ReshuffleCallback = dyn FnMut(ReshufflePhase, &[Player]);

/// Direction of a button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Down,
    Up,
}

/// One button transition detected by a sample tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub player: usize,
    pub slot: SlotName,
    pub edge: Edge,
}

/// Ordered subscriber list.
pub(crate) struct Observers<F: ?Sized> {
    entries: Vec<(SubscriptionId, Box<F>)>,
}

impl<F: ?Sized> Default for Observers<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: ?Sized> Observers<F> {
    pub(crate) fn push(&mut self, id: SubscriptionId, callback: Box<F>) {
        self.entries.push((id, callback));
    }

    /// Removes the subscriber; returns whether it was present
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<F>> {
        self.entries.iter_mut().map(|(_, callback)| callback)
    }
}

impl<F: ?Sized> fmt::Debug for Observers<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observers_remove() {
        let mut observers: Observers<dyn FnMut() -> u32> = Observers::default();
        observers.push(SubscriptionId(1), Box::new(|| 1));
        observers.push(SubscriptionId(2), Box::new(|| 2));
        assert!(observers.remove(SubscriptionId(1)));
        assert!(!observers.remove(SubscriptionId(1)));
        let results: Vec<u32> = observers.iter_mut().map(|cb| cb()).collect();
        assert_eq!(results, vec![2]);
    }
}

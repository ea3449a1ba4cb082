//! The warp list most recently shown to each player.
//!
//! Picking a row refers back to the exact record that was on screen, not to
//! whatever sits at that index after other players changed the registry.

use dashmap::DashMap;
use warps_domain::{PlayerId, Warp};
use warps_shared::ListMode;

#[derive(Debug, Clone, PartialEq)]
pub struct PresentedList {
    pub mode: ListMode,
    pub warps: Vec<Warp>,
}

#[derive(Default)]
pub struct PresentedListStore {
    lists: DashMap<PlayerId, PresentedList>,
}

impl PresentedListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, player_id: PlayerId, list: PresentedList) {
        self.lists.insert(player_id, list);
    }

    /// Take the row the player picked, closing the list.
    ///
    /// Returns `None` if no list of that mode is open or the index is out of range.
    pub fn take(&self, player_id: PlayerId, mode: ListMode, index: usize) -> Option<Warp> {
        let (_, list) = self.lists.remove(&player_id)?;
        if list.mode != mode {
            return None;
        }
        list.warps.into_iter().nth(index)
    }

    pub fn remove(&self, player_id: PlayerId) {
        self.lists.remove(&player_id);
    }
}

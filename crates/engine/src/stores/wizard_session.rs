//! Creation wizard sessions, keyed by player.

use dashmap::DashMap;
use warps_domain::{CreationWizard, PlayerId};

#[derive(Default)]
pub struct WizardSessionStore {
    sessions: DashMap<PlayerId, CreationWizard>,
}

impl WizardSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start or replace the player's wizard.
    pub fn insert(&self, player_id: PlayerId, wizard: CreationWizard) {
        self.sessions.insert(player_id, wizard);
    }

    pub fn get(&self, player_id: PlayerId) -> Option<CreationWizard> {
        self.sessions.get(&player_id).map(|entry| entry.clone())
    }

    pub fn remove(&self, player_id: PlayerId) -> Option<CreationWizard> {
        self.sessions.remove(&player_id).map(|(_, wizard)| wizard)
    }
}

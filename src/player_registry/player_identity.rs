use crate::event_source::game_event::PlayerTotals;

use std::collections::BTreeMap;

/// A match participant as known after the identity pass.
///
/// # Fields
///
/// * `user_id` - The player's session identifier.
/// * `name` - The display name, assumed stable for the whole match.
/// * `totals` - The cumulative counters the recording reported at the first connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub user_id: u64,
    pub name: String,
    pub totals: PlayerTotals,
}

/// Every participant of one match, keyed by session identifier.
#[derive(Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: BTreeMap<u64, PlayerIdentity>,
}

impl PlayerRegistry {
    /// Inserts `identity`, or refreshes the name of an already known player.
    ///
    /// The totals of a reconnecting player are not replaced: the accumulation
    /// pass replays the player's events from the start of the recording, so
    /// only the totals from before the first connect may seed the row.
    ///
    /// # Returns
    ///
    /// The name the player had before, if they had already connected.
    pub(crate) fn register(&mut self, identity: PlayerIdentity) -> Option<String> {
        match self.players.get_mut(&identity.user_id) {
            Some(known) => Some(std::mem::replace(&mut known.name, identity.name)),
            None => {
                self.players.insert(identity.user_id, identity);
                None
            }
        }
    }

    pub fn get(&self, user_id: u64) -> Option<&PlayerIdentity> {
        self.players.get(&user_id)
    }

    pub fn contains(&self, user_id: u64) -> bool {
        self.players.contains_key(&user_id)
    }

    /// Iterates players in ascending `user_id` order.
    pub fn iter(&self) -> impl Iterator<Item = &PlayerIdentity> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

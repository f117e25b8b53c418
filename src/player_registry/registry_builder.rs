use crate::event_source::game_event::GameEvent;
use crate::event_source::source_error::SourceError;
use crate::player_registry::player_identity::{PlayerIdentity, PlayerRegistry};

use tracing::{debug, info};

/// Builds the set of match participants from one full pass over the recording.
///
/// Every `PlayerConnect` event registers its player under the session
/// identifier; a reconnect only refreshes the display name. All other events are
/// ignored. The registry is only returned once the pass is exhausted.
///
/// # Arguments
///
/// * `events` - A complete pass over the recording.
///
/// # Returns
///
/// * `Ok(PlayerRegistry)` - The participants, possibly none.
/// * `Err(SourceError)` - If the recording fails mid-pass. No registry is produced.
pub fn build_registry<I>(events: I) -> Result<PlayerRegistry, SourceError>
where
    I: IntoIterator<Item = Result<GameEvent, SourceError>>,
{
    let mut registry = PlayerRegistry::default();
    let mut connects = 0usize;

    for event in events {
        if let GameEvent::PlayerConnect { player, totals } = event? {
            connects += 1;
            let identity = PlayerIdentity {
                user_id: player.user_id,
                name: player.name,
                totals,
            };
            match registry.register(identity) {
                Some(previous_name) => debug!(
                    user_id = player.user_id,
                    %previous_name,
                    "player reconnected"
                ),
                None => debug!(user_id = player.user_id, "player connected"),
            }
        }
    }

    info!(
        players = registry.len(),
        connects, "identity pass complete"
    );
    Ok(registry)
}

//! Player normalization: position-code-to-role mapping and name fallbacks.

use crate::constants::positions;
use crate::data_fetcher::models::{Player, UpstreamPlayer};

/// Maps the provider's numeric position code to a coarse role label.
/// Unknown codes map to no role rather than a guess.
pub fn role_from_position(position_id: Option<i64>) -> Option<&'static str> {
    match position_id? {
        id if id == positions::BATSMAN => Some("batsman"),
        id if id == positions::BOWLER => Some("bowler"),
        id if id == positions::ALLROUNDER => Some("allrounder"),
        id if id == positions::WICKETKEEPER => Some("wicketkeeper"),
        _ => None,
    }
}

/// Normalizes one upstream player row into the canonical shape. Never fails:
/// a player without any usable name gets a synthesized `Player {id}` label.
pub fn normalize_player(player: &UpstreamPlayer) -> Player {
    let fullname = player
        .fullname
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| match (&player.firstname, &player.lastname) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        })
        .unwrap_or_else(|| format!("Player {}", player.id));

    Player {
        id: player.id,
        fullname,
        firstname: player.firstname.clone(),
        lastname: player.lastname.clone(),
        image_path: player.image_path.clone(),
        country_name: player.country.as_ref().and_then(|c| c.name.clone()),
        role: role_from_position(player.position.as_ref().and_then(|p| p.id))
            .map(str::to_string),
    }
}

/// Normalizes a batch of player rows, preserving input order.
pub fn normalize_players(players: &[UpstreamPlayer]) -> Vec<Player> {
    players.iter().map(normalize_player).collect()
}

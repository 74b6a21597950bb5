use crate::models::Player;

/// Text of the detail popup shown when a player's image is clicked.
#[must_use]
pub fn player_stats_message(player: &Player) -> String {
    let team = player
        .team_id
        .map_or_else(|| "null".to_string(), |team| team.to_string());
    format!(
        "Breed: {}\nStatus: {}\nTeam ID: {team}",
        player.breed, player.status
    )
}

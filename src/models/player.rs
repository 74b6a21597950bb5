use serde::{Deserialize, Serialize};

/// Server-assigned player identifier.
pub type PlayerId = i64;

/// A roster entry as returned by the Puppy Bowl API.
///
/// Fields the client does not use (`cohortId`, `createdAt`, ...) are ignored on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: String,
    #[serde(default)]
    pub team_id: Option<i64>,
}

/// Payload of a create-player call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayerRequest {
    pub name: String,
    pub breed: String,
    pub stats: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_player_ignores_unknown_fields() -> serde_json::Result<()> {
        let player: Player = serde_json::from_value(json!({
            "id": 7,
            "name": "Crumpet",
            "breed": "American Staffordshire terrier",
            "status": "bench",
            "imageUrl": "http://r.ddmcdn.com/crumpet.jpg",
            "createdAt": "2023-10-01T00:00:00.000Z",
            "teamId": null,
            "cohortId": 42
        }))?;

        assert_eq!(player.id, 7);
        assert_eq!(player.image_url.as_deref(), Some("http://r.ddmcdn.com/crumpet.jpg"));
        assert_eq!(player.team_id, None);
        Ok(())
    }

    #[test]
    fn test_player_without_image_or_team() -> serde_json::Result<()> {
        let player: Player = serde_json::from_value(json!({
            "id": 8,
            "name": "Rex",
            "breed": "Lab",
            "status": "field"
        }))?;

        assert_eq!(player.image_url, None);
        assert_eq!(player.team_id, None);
        Ok(())
    }

    #[test]
    fn test_new_player_request_wire_shape() -> serde_json::Result<()> {
        let request = NewPlayerRequest {
            name: "Rex".to_string(),
            breed: "Lab".to_string(),
            stats: "fast".to_string(),
        };
        let value = serde_json::to_value(&request)?;
        assert_eq!(value, json!({ "name": "Rex", "breed": "Lab", "stats": "fast" }));
        Ok(())
    }
}

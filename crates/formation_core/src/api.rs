//! JSON API for embedding the layout in other front ends

use serde::{Deserialize, Serialize};

use crate::formation::parse_formation;
use crate::layout::generate_positions;
use crate::roster::{reconcile_player_count, PlayerCount, DEFAULT_PLAYER_COUNT};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutRequest {
    pub schema_version: u8,
    pub formation: String,
    #[serde(default = "default_players")]
    pub players: i64,
}

fn default_players() -> i64 {
    DEFAULT_PLAYER_COUNT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub schema_version: u8,
    pub formation: Vec<u32>,
    pub players: PlayerCount,
    /// `[x, y, z]` per player, goalkeeper first
    pub positions: Vec<[f32; 3]>,
}

/// Main entry point for JSON API - lays out a formation from a JSON request
pub fn layout_formation_json(request_json: &str) -> Result<String, String> {
    let request: LayoutRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != SCHEMA_VERSION {
        return Err(format!(
            "Unsupported schema version: {}",
            request.schema_version
        ));
    }

    let formation = parse_formation(&request.formation);
    let players = reconcile_player_count(request.players, &formation);
    let positions = generate_positions(&formation)
        .iter()
        .map(|p| [p.x, p.y, p.z])
        .collect();

    let response = LayoutResponse {
        schema_version: SCHEMA_VERSION,
        formation: formation.into_lines(),
        players,
        positions,
    };

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layout_433() {
        let request = json!({
            "schema_version": 1,
            "formation": "4-3-3",
            "players": 11
        });
        let result = layout_formation_json(&request.to_string()).unwrap();
        let parsed: LayoutResponse = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed.formation, vec![4, 3, 3]);
        assert_eq!(parsed.positions.len(), 11);
        assert_eq!(parsed.positions[0], [34.0, 5.0, 0.0]);
        assert!(!parsed.players.adjusted);
    }

    #[test]
    fn test_players_default_and_adjustment() {
        let request = json!({ "schema_version": 1, "formation": "3-4-3-1" });
        let result = layout_formation_json(&request.to_string()).unwrap();
        let parsed: LayoutResponse = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed.players.requested, 11);
        assert_eq!(parsed.players.effective, 12);
        assert!(parsed.players.adjusted);
    }

    #[test]
    fn test_bad_formation_falls_back_to_goalkeeper() {
        let request = json!({ "schema_version": 1, "formation": "abc" });
        let result = layout_formation_json(&request.to_string()).unwrap();
        let parsed: LayoutResponse = serde_json::from_str(&result).unwrap();
        assert!(parsed.formation.is_empty());
        assert_eq!(parsed.positions, vec![[34.0, 5.0, 0.0]]);
    }

    #[test]
    fn test_oversized_formation_is_answered_not_panicked() {
        let request = json!({
            "schema_version": 1,
            "formation": "4294967295-4294967295",
            "players": -1
        });
        let result = layout_formation_json(&request.to_string()).unwrap();
        let parsed: LayoutResponse = serde_json::from_str(&result).unwrap();
        assert!(parsed.formation.is_empty());
        assert_eq!(parsed.positions.len(), 1);
        assert_eq!(parsed.players.requested, -1);
        assert_eq!(parsed.players.effective, 1);
    }

    #[test]
    fn test_rejects_bad_requests() {
        let err = layout_formation_json("not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON request"));

        let request = json!({ "schema_version": 2, "formation": "4-4-2" });
        let err = layout_formation_json(&request.to_string()).unwrap_err();
        assert_eq!(err, "Unsupported schema version: 2");
    }

    #[test]
    fn test_determinism() {
        let request = json!({ "schema_version": 1, "formation": "4-2-3-1" }).to_string();
        assert_eq!(
            layout_formation_json(&request).unwrap(),
            layout_formation_json(&request).unwrap()
        );
    }
}

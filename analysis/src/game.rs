//! Wire types for the game server's duel match-detail endpoint.

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub game_id: String,
    #[serde(default)]
    pub rounds: Vec<GameRound>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRound {
    pub start_time: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub panorama: Option<Panorama>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panorama {
    #[serde(default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    #[serde(default)]
    pub players: Vec<TeamPlayer>,
    #[serde(default)]
    pub round_results: Vec<RoundResult>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlayer {
    pub player_id: String,
    #[serde(default)]
    pub guesses: Vec<Guess>,
    /// Present (non-null) only on ranked duels
    #[serde(default)]
    pub competitive_progress: Option<serde_json::Value>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    /// 1-based index into the match's round list
    pub round_number: u32,
    pub distance: f64,
    #[serde(default)]
    pub score: Option<i64>,
    pub created: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round_number: u32,
    #[serde(default)]
    pub health_before: Option<i64>,
    #[serde(default)]
    pub health_after: Option<i64>,
}

//! Output shape for one aggregated duel, serialized with the same camelCase
//! keys the downstream processing scripts already consume.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub game_id: String,
    pub team_id: String,
    pub team_stats: TeamStats,
    /// Keyed by player id
    pub player_stats: std::collections::BTreeMap<String, PlayerStats>,
    /// Ordered by round number
    pub round_stats: Vec<RoundStats>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub total_distance: f64,
    pub total_score: i64,
    pub total_rounds: usize,
    pub total_health_change: i64,
    /// Own total score minus the opposing team's total score
    pub score_diff: i64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerStats {
    pub distance: f64,
    pub score: i64,
    pub rounds: Vec<PlayerRound>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRound {
    pub round_number: u32,
    pub distance: f64,
    pub score: i64,
    /// Seconds between round start and the guess
    pub time: f64,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStats {
    pub round_number: u32,
    pub total_distance: f64,
    pub total_score: i64,
    pub total_health_change: i64,
    pub countries: Vec<String>,
    /// Best single guess score of the opposing team in this round
    pub enemy_best_score: i64,
}

//! Reduction of one fetched duel into per-team, per-player and per-round
//! statistics for the team containing the requesting player.

use common::summary::{MatchSummary, PlayerRound, PlayerStats, RoundStats, TeamStats};

use crate::game::{Guess, MatchRecord, Team};

/// World-map diagonal in meters, the scale factor of the score formula.
const MAP_DIAGONAL_METERS: f64 = 14_916_862.0;

/// Score the platform awards for a guess at the given distance, used when a
/// guess record carries no score of its own.
pub fn score_for_distance(distance: f64) -> i64 {
    let distance = distance.max(0.0);
    (5000.0 * (-10.0 * distance / MAP_DIAGONAL_METERS).exp()).round() as i64
}

/// Why a fetched duel produced no summary. All of these are non-fatal, the
/// caller moves on to the next identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skip {
    /// Competitive duels were requested and no player carries a competitive
    /// progress marker
    NotCompetitive,
    /// No team contains the requesting player
    TeamNotFound,
    /// The requested teammate is not on the requesting player's team
    TeammateNotFound { teammate_id: String },
}

#[derive(Debug, Default)]
struct RoundAccum {
    total_distance: f64,
    total_score: i64,
    total_health_change: i64,
    countries: std::collections::BTreeSet<String>,
}

pub fn summarize(
    game: &MatchRecord,
    my_id: &str,
    teammate_id: Option<&str>,
    competitive_only: bool,
) -> Result<MatchSummary, Skip> {
    if competitive_only && !is_competitive(game) {
        return Err(Skip::NotCompetitive);
    }

    let my_team = game
        .teams
        .iter()
        .find(|team| team.players.iter().any(|p| p.player_id == my_id))
        .ok_or(Skip::TeamNotFound)?;

    if let Some(teammate_id) = teammate_id {
        if !my_team.players.iter().any(|p| p.player_id == teammate_id) {
            return Err(Skip::TeammateNotFound {
                teammate_id: teammate_id.to_owned(),
            });
        }
    }

    let enemy_team = game.teams.iter().find(|team| team.id != my_team.id);
    let enemy_best = enemy_team.map(enemy_best_scores).unwrap_or_default();
    let enemy_total: i64 = enemy_team
        .map(|team| {
            team.players
                .iter()
                .flat_map(|p| p.guesses.iter())
                .map(guess_score)
                .sum()
        })
        .unwrap_or(0);

    let mut team_stats = TeamStats::default();
    let mut player_stats = std::collections::BTreeMap::new();
    let mut rounds_map = std::collections::BTreeMap::<u32, RoundAccum>::new();

    for player in my_team.players.iter() {
        let mut stats = PlayerStats::default();

        for guess in player.guesses.iter() {
            let round = match guess
                .round_number
                .checked_sub(1)
                .and_then(|idx| game.rounds.get(idx as usize))
            {
                Some(r) => r,
                None => {
                    tracing::warn!(
                        "Guess of player {} references unknown round {}",
                        player.player_id,
                        guess.round_number
                    );
                    continue;
                }
            };

            let score = guess_score(guess);
            let round_time = (guess.created - round.start_time).num_milliseconds() as f64 / 1000.0;
            let country = round.panorama.as_ref().and_then(|p| p.country_code.clone());

            stats.distance += guess.distance;
            stats.score += score;
            stats.rounds.push(PlayerRound {
                round_number: guess.round_number,
                distance: guess.distance,
                score,
                time: round_time,
                country: country.clone(),
                lat: guess.lat,
                lng: guess.lng,
            });

            let accum = rounds_map.entry(guess.round_number).or_default();
            accum.total_distance += guess.distance;
            accum.total_score += score;
            if let Some(country) = country {
                accum.countries.insert(country);
            }
        }

        team_stats.total_distance += stats.distance;
        team_stats.total_score += stats.score;
        team_stats.total_rounds += player.guesses.len();

        player_stats.insert(player.player_id.clone(), stats);
    }

    for result in my_team.round_results.iter() {
        let (before, after) = match (result.health_before, result.health_after) {
            (Some(b), Some(a)) => (b, a),
            _ => continue,
        };

        let delta = after - before;
        team_stats.total_health_change += delta;

        // The round result is authoritative for that round's health change,
        // it overwrites instead of accumulating
        rounds_map
            .entry(result.round_number)
            .or_default()
            .total_health_change = delta;
    }

    team_stats.score_diff = team_stats.total_score - enemy_total;

    let round_stats = rounds_map
        .into_iter()
        .map(|(round_number, accum)| RoundStats {
            round_number,
            total_distance: accum.total_distance,
            total_score: accum.total_score,
            total_health_change: accum.total_health_change,
            countries: accum.countries.into_iter().collect(),
            enemy_best_score: enemy_best.get(&round_number).copied().unwrap_or(0),
        })
        .collect();

    Ok(MatchSummary {
        game_id: game.game_id.clone(),
        team_id: my_team.id.clone(),
        team_stats,
        player_stats,
        round_stats,
    })
}

fn is_competitive(game: &MatchRecord) -> bool {
    game.teams
        .iter()
        .flat_map(|team| team.players.iter())
        .any(|player| player.competitive_progress.is_some())
}

fn guess_score(guess: &Guess) -> i64 {
    guess
        .score
        .unwrap_or_else(|| score_for_distance(guess.distance))
}

fn enemy_best_scores(team: &Team) -> std::collections::HashMap<u32, i64> {
    let mut best = std::collections::HashMap::new();
    for player in team.players.iter() {
        for guess in player.guesses.iter() {
            let score = guess_score(guess);
            let entry = best.entry(guess.round_number).or_insert(0);
            if score > *entry {
                *entry = score;
            }
        }
    }
    best
}

use analysis::feed::{extract_game_ids, FeedFilter};
use common::{GameType, ModeFilter};

use pretty_assertions::assert_eq;

fn filter(game_type: GameType, mode: ModeFilter) -> FeedFilter {
    FeedFilter { game_type, mode }
}

#[test]
fn single_activity_top_level_fields() {
    let raw = r#"{"gameMode":"TeamDuels","gameId":"abc123"}"#;

    let result = extract_game_ids(raw, &filter(GameType::Team, ModeFilter::All));

    assert_eq!(vec!["abc123".to_owned()], result);
}

#[test]
fn nested_payload_fallback() {
    let raw = r#"{"payload":{"gameMode":"TeamDuels","gameId":"nested-1"}}"#;

    let result = extract_game_ids(raw, &filter(GameType::Team, ModeFilter::All));

    assert_eq!(vec!["nested-1".to_owned()], result);
}

#[test]
fn top_level_takes_precedence_over_nested() {
    let raw = r#"{"gameMode":"TeamDuels","gameId":"outer","payload":{"gameMode":"Duels","gameId":"inner"}}"#;

    let result = extract_game_ids(raw, &filter(GameType::Team, ModeFilter::All));

    assert_eq!(vec!["outer".to_owned()], result);
}

#[test]
fn batched_activities() {
    let raw = r#"[
        {"gameMode":"TeamDuels","gameId":"first"},
        {"gameMode":"Duels","gameId":"solo"},
        {"gameMode":"TeamDuels","gameId":"second"}
    ]"#;

    let result = extract_game_ids(raw, &filter(GameType::Team, ModeFilter::All));

    assert_eq!(vec!["first".to_owned(), "second".to_owned()], result);
}

#[test]
fn duels_filter_excludes_team_duels() {
    let raw = r#"[
        {"gameMode":"TeamDuels","gameId":"team-1"},
        {"gameMode":"Duels","gameId":"solo-1"}
    ]"#;

    let result = extract_game_ids(raw, &filter(GameType::Duels, ModeFilter::All));

    assert_eq!(vec!["solo-1".to_owned()], result);
}

#[test]
fn competitive_filter_requires_nested_marker() {
    let raw = r#"[
        {"gameMode":"TeamDuels","gameId":"ranked","payload":{"competitiveGameMode":"NoMoveDuels"}},
        {"gameMode":"TeamDuels","gameId":"unranked","payload":{"competitiveGameMode":"None"}},
        {"gameMode":"TeamDuels","gameId":"unmarked"}
    ]"#;

    let result = extract_game_ids(raw, &filter(GameType::Team, ModeFilter::Competitive));

    assert_eq!(vec!["ranked".to_owned()], result);
}

#[test]
fn casual_filter_drops_competitive() {
    let raw = r#"[
        {"gameMode":"TeamDuels","gameId":"ranked","payload":{"competitiveGameMode":"NoMoveDuels"}},
        {"gameMode":"TeamDuels","gameId":"unranked","payload":{"competitiveGameMode":"None"}},
        {"gameMode":"TeamDuels","gameId":"unmarked"}
    ]"#;

    let result = extract_game_ids(raw, &filter(GameType::Team, ModeFilter::Casual));

    assert_eq!(vec!["unranked".to_owned(), "unmarked".to_owned()], result);
}

#[test]
fn malformed_payload_yields_nothing() {
    let result = extract_game_ids("not json {{{", &filter(GameType::Team, ModeFilter::All));

    assert_eq!(Vec::<String>::new(), result);
}

#[test]
fn activity_without_id_or_mode_is_skipped() {
    let raw = r#"[
        {"gameMode":"TeamDuels"},
        {"gameId":"no-mode"}
    ]"#;

    let result = extract_game_ids(raw, &filter(GameType::Team, ModeFilter::All));

    assert_eq!(Vec::<String>::new(), result);
}

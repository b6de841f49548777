//! Sequential fetch-and-reduce loop over a list of duel identifiers.

use common::summary::MatchSummary;

use crate::api::DuelsApi;

#[derive(Debug, Clone)]
pub struct AggregateOptions {
    pub my_id: String,
    pub teammate_id: Option<String>,
    pub competitive_only: bool,
    /// Spacing between match-detail requests
    pub request_delay: std::time::Duration,
}

impl AggregateOptions {
    pub fn new<IS>(my_id: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            my_id: my_id.into(),
            teammate_id: None,
            competitive_only: false,
            request_delay: std::time::Duration::from_millis(100),
        }
    }
}

/// Fetches and summarizes every identifier in order. Fetch errors and skip
/// conditions are isolated per identifier, the batch always runs to the end.
pub async fn aggregate(
    api: &dyn DuelsApi,
    game_ids: &[String],
    options: &AggregateOptions,
) -> Vec<MatchSummary> {
    let mut results = Vec::new();

    for (i, game_id) in game_ids.iter().enumerate() {
        tracing::info!("Processing duel {}/{} ({})", i + 1, game_ids.len(), game_id);

        match api.duel(game_id.clone()).await {
            Ok(game) => {
                let summary = analysis::duels::summarize(
                    &game,
                    &options.my_id,
                    options.teammate_id.as_deref(),
                    options.competitive_only,
                );

                match summary {
                    Ok(summary) => results.push(summary),
                    Err(skip) => {
                        tracing::info!("Skipping duel {}: {:?}", game_id, skip);
                    }
                };
            }
            Err(e) => {
                tracing::error!("Fetching duel {}: {:?}", game_id, e);
            }
        };

        tokio::time::sleep(options.request_delay).await;
    }

    results
}

//! Paginated walk over the activity feed.

use analysis::feed::FeedFilter;

use crate::api::{ApiError, DuelsApi};

#[derive(Debug, Clone)]
pub struct WalkConfig {
    pub filter: FeedFilter,
    /// Spacing between feed page requests
    pub page_delay: std::time::Duration,
}

impl WalkConfig {
    pub fn new(filter: FeedFilter) -> Self {
        Self {
            filter,
            page_delay: std::time::Duration::from_millis(300),
        }
    }
}

enum WalkMode {
    CollectAll,
    FirstMatch,
}

/// Walks the feed until exhaustion and returns every matching game id exactly
/// once, in discovery order.
pub async fn collect_game_ids(
    api: &dyn DuelsApi,
    config: &WalkConfig,
) -> Result<Vec<String>, ApiError> {
    walk(api, config, WalkMode::CollectAll).await
}

/// Walks the feed only as far as the first matching game id.
pub async fn most_recent_game_id(
    api: &dyn DuelsApi,
    config: &WalkConfig,
) -> Result<Option<String>, ApiError> {
    let ids = walk(api, config, WalkMode::FirstMatch).await?;
    Ok(ids.into_iter().next())
}

async fn walk(
    api: &dyn DuelsApi,
    config: &WalkConfig,
    mode: WalkMode,
) -> Result<Vec<String>, ApiError> {
    let mut token: Option<String> = None;
    let mut seen = std::collections::HashSet::new();
    let mut results = Vec::new();
    let mut page = 1_usize;

    loop {
        tracing::debug!("Fetching feed page {}", page);

        let feed_page = api.feed_page(token.take()).await?;
        if feed_page.entries.is_empty() {
            tracing::debug!("No more entries, stopping");
            break;
        }

        for entry in feed_page.entries.iter() {
            let raw = match entry.raw_payload() {
                Some(r) => r,
                None => continue,
            };

            for id in analysis::feed::extract_game_ids(raw, &config.filter) {
                if !seen.insert(id.clone()) {
                    continue;
                }
                results.push(id);

                if matches!(mode, WalkMode::FirstMatch) {
                    return Ok(results);
                }
            }
        }

        token = match feed_page.pagination_token {
            Some(t) => Some(t),
            None => {
                tracing::debug!("No pagination token, stopping");
                break;
            }
        };

        page += 1;
        tokio::time::sleep(config.page_delay).await;
    }

    Ok(results)
}

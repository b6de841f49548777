use serde::Deserialize;

static FEED_URL: &str = "https://www.geoguessr.com/api/v4/feed/private";
static DUEL_URL: &str = "https://game-server.geoguessr.com/api/duels";

#[derive(Debug)]
pub enum ApiError {
    Request(reqwest::Error),
    Status(reqwest::StatusCode),
    Decode(reqwest::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedPage {
    pub entries: Vec<FeedEntry>,
    pub pagination_token: Option<String>,
}

/// One opaque feed record. Only entries whose payload is a JSON string are
/// usable, everything else gets skipped by the walker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedEntry {
    pub payload: Option<serde_json::Value>,
}

impl FeedEntry {
    pub fn raw_payload(&self) -> Option<&str> {
        self.payload.as_ref().and_then(|p| p.as_str())
    }
}

/// Seam over the two platform endpoints, so the walk and aggregation loops
/// can run against an in-memory fake in tests.
pub trait DuelsApi: Send + Sync {
    fn feed_page<'f, 'own>(
        &'own self,
        pagination_token: Option<String>,
    ) -> futures::future::BoxFuture<'f, Result<FeedPage, ApiError>>
    where
        'own: 'f;

    fn duel<'f, 'own>(
        &'own self,
        game_id: String,
    ) -> futures::future::BoxFuture<'f, Result<analysis::game::MatchRecord, ApiError>>
    where
        'own: 'f;
}

/// Authenticated client for the platform, identified by the `_ncfa` session
/// cookie shared by both hosts.
pub struct Client {
    http: reqwest::Client,
    ncfa: String,
}

impl Client {
    pub fn new<IS>(ncfa: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            http: reqwest::Client::new(),
            ncfa: ncfa.into(),
        }
    }

    async fn get<T>(&self, url: &str, args: &[(&str, &str)]) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(url)
            .query(args)
            .header("Cookie", format!("_ncfa={}", self.ncfa))
            .send()
            .await
            .map_err(ApiError::Request)?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response.json::<T>().await.map_err(ApiError::Decode)
    }
}

impl DuelsApi for Client {
    fn feed_page<'f, 'own>(
        &'own self,
        pagination_token: Option<String>,
    ) -> futures::future::BoxFuture<'f, Result<FeedPage, ApiError>>
    where
        'own: 'f,
    {
        use futures::FutureExt;

        async move {
            match pagination_token {
                Some(token) => {
                    self.get(FEED_URL, &[("paginationToken", token.as_str())])
                        .await
                }
                None => self.get(FEED_URL, &[]).await,
            }
        }
        .boxed()
    }

    fn duel<'f, 'own>(
        &'own self,
        game_id: String,
    ) -> futures::future::BoxFuture<'f, Result<analysis::game::MatchRecord, ApiError>>
    where
        'own: 'f,
    {
        use futures::FutureExt;

        async move {
            let url = format!("{}/{}", DUEL_URL, game_id);
            self.get(&url, &[]).await
        }
        .boxed()
    }
}
